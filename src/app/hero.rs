use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::content::PORTFOLIO;
use crate::reveal::RevealOptions;
use crate::scroll::SectionId;
use crate::typewriter::{Typewriter, TYPE_INTERVAL_MS};

use super::atoms::Icon;
use super::reveal::use_scroll_reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let reveal = use_scroll_reveal(RevealOptions::default().delay_ms(200));
    let typewriter = RwSignal::new(Typewriter::new(profile.title.clone()));

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            typewriter.update(|t| {
                t.advance();
            })
        },
        TYPE_INTERVAL_MS,
    );
    Effect::new(move |_| {
        if typewriter.with(Typewriter::is_complete) {
            pause();
        }
    });

    view! {
        <section
            id=SectionId::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-primary-50 via-white to-secondary-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-800 -z-10"></div>
            <div
                node_ref=reveal.node_ref
                style=move || reveal.style()
                class="container mx-auto px-4 text-center"
            >
                <p class="text-lg text-primary-600 dark:text-primary-400 font-medium mb-4">
                    {profile.greeting.clone()}
                </p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-primary-600 to-secondary-600 bg-clip-text text-transparent">
                        {profile.name.clone()}
                    </span>
                </h1>
                <h2 class="text-2xl md:text-3xl text-gray-600 dark:text-gray-300 mb-8 h-10">
                    {move || typewriter.with(|t| t.typed().to_string())}
                    <span class="animate-pulse">"|"</span>
                </h2>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto mb-12">
                    {profile.summary.clone()}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <a
                        href=SectionId::Projects.href()
                        class="px-8 py-3 rounded-lg bg-primary-600 text-white font-medium hover:bg-primary-700 transition-colors"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=SectionId::Contact.href()
                        class="px-8 py-3 rounded-lg border-2 border-primary-600 text-primary-600 font-medium hover:bg-primary-600 hover:text-white transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class="flex justify-center gap-6 mb-16">
                    {PORTFOLIO
                        .hero_links()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="text-2xl text-gray-600 hover:text-primary-600 dark:text-gray-400 dark:hover:text-primary-400 transition-colors"
                                >
                                    <Icon name=link.icon.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=SectionId::Skills.href()
                    aria-label="Scroll to skills"
                    class="inline-block animate-bounce text-gray-400"
                >
                    <Icon name="chevron-down" class="text-3xl" />
                </a>
            </div>
        </section>
    }
}
