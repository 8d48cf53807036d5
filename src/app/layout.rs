use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{copyright_year, PORTFOLIO};
use crate::scroll::{shows_scroll_to_top, ScrollMetrics, SectionId};

use super::atoms::Icon;
use super::navigation::Navigation;
use super::use_theme;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();

    let progress = move || page_metrics(scroll_y.get()).progress_percent();

    view! {
        <div class=move || {
            format!(
                "{} min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-gray-100 transition-colors duration-300",
                theme.get().class(),
            )
        }>
            <div
                class="fixed top-0 left-0 h-1 z-[60] bg-gradient-to-r from-primary-500 to-secondary-500"
                style=move || format!("width: {}%", progress())
            ></div>
            <Navigation scroll_y=scroll_y />
            <main>{children()}</main>
            <Footer />
            <ScrollToTop scroll_y=scroll_y />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = copyright_year();
    view! {
        <footer class="py-8 border-t border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("© {year} {}. All rights reserved.", PORTFOLIO.profile.name)}
                </p>
                <div class="flex gap-4">
                    {PORTFOLIO
                        .social_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="text-gray-500 hover:text-primary-600 dark:hover:text-primary-400"
                                >
                                    <Icon name=link.icon.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ScrollToTop(scroll_y: Signal<f64>) -> impl IntoView {
    view! {
        <Show when=move || shows_scroll_to_top(scroll_y.get())>
            <a
                href=SectionId::Home.href()
                aria-label="Scroll to top"
                class="fixed bottom-8 right-8 z-50 p-3 rounded-full shadow-lg bg-primary-600 text-white hover:bg-primary-700 animate-fade-in"
            >
                <Icon name="arrow-up" />
            </a>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn page_metrics(scroll_y: f64) -> ScrollMetrics {
    let scroll_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    ScrollMetrics {
        scroll_y,
        scroll_height,
        viewport_height,
    }
}

#[cfg(not(feature = "hydrate"))]
fn page_metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        ..Default::default()
    }
}
