use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::scroll::{active_section, is_scrolled, SectionBounds, SectionId};

use super::use_theme;

#[component]
pub fn Navigation(scroll_y: Signal<f64>) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let active = RwSignal::new(SectionId::Home);

    Effect::new(move |_| {
        let y = scroll_y.get();
        // keep the previous section while between sections
        if let Some(section) = active_section(y, &section_bounds()) {
            if active.get_untracked() != section {
                active.set(section);
            }
        }
    });

    let header_class = move || {
        if is_scrolled(scroll_y.get()) {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md shadow-md"
        } else {
            "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    let link_class = move |section: SectionId| {
        if active.get() == section {
            "font-medium text-primary-600 dark:text-primary-400"
        } else {
            "font-medium text-gray-700 hover:text-primary-600 dark:text-gray-300 dark:hover:text-primary-400"
        }
    };

    view! {
        <header class=header_class>
            <nav class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href=SectionId::Home.href() class="text-2xl font-bold text-primary-600">
                    {initials(&PORTFOLIO.profile.name)}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(move |section| {
                            view! {
                                <a href=section.href() class=move || link_class(section)>
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </div>
                <div class="flex md:hidden items-center gap-4">
                    <ThemeToggle />
                    <button
                        aria-label="Toggle menu"
                        class="p-2"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <i
                            class=move || if menu_open.get() { "icon-x" } else { "icon-menu" }
                            aria-hidden="true"
                        ></i>
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white dark:bg-gray-900 shadow-lg">
                    {SectionId::ALL
                        .into_iter()
                        .map(move |section| {
                            view! {
                                <a
                                    href=section.href()
                                    class=move || format!("block px-4 py-3 {}", link_class(section))
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            aria-label="Toggle theme"
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700"
            on:click=move |_| theme.toggle()
        >
            <i class=move || format!("icon-{}", theme.get().toggle_icon()) aria-hidden="true"></i>
        </button>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(feature = "hydrate")]
fn section_bounds() -> Vec<SectionBounds> {
    use leptos::web_sys::HtmlElement;
    use wasm_bindgen::JsCast;

    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document()
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                section,
                offset_top: f64::from(el.offset_top()),
                offset_height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn section_bounds() -> Vec<SectionBounds> {
    Vec::new()
}
