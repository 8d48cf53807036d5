use leptos::prelude::*;

use crate::content::{Project, ALL_CATEGORIES, PORTFOLIO};
use crate::reveal::RevealOptions;
use crate::scroll::SectionId;

use super::atoms::{Card, Icon, Padding, SectionHeader, TechTag};
use super::reveal::use_scroll_reveal;

#[component]
pub fn Projects() -> impl IntoView {
    let reveal = use_scroll_reveal(RevealOptions::default().threshold(0.1));
    let category = RwSignal::new(ALL_CATEGORIES.to_string());

    let visible_projects = move || category.with(|c| PORTFOLIO.projects_in(c));

    view! {
        <section id=SectionId::Projects.id() class="py-20 bg-white dark:bg-gray-800/50">
            <div class="container mx-auto px-4">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="A selection of projects that showcase my skills and experience"
                />
                <div node_ref=reveal.node_ref style=move || reveal.style()>
                    <div class="flex flex-wrap justify-center gap-3 mb-12">
                        {PORTFOLIO
                            .filter_options()
                            .into_iter()
                            .map(|option| {
                                let is_selected = move || category.with(|c| c == option);
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "px-6 py-2 rounded-full font-medium bg-primary-600 text-white shadow-lg"
                                            } else {
                                                "px-6 py-2 rounded-full font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 dark:bg-gray-700 dark:text-gray-300 dark:hover:bg-gray-600"
                                            }
                                        }
                                        on:click=move |_| category.set(option.to_string())
                                    >
                                        {option}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            visible_projects()
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let animation_delay = format!("animation-delay: {:.1}s", index as f64 * 0.1);
    view! {
        <div class="animate-fade-in-up" style=animation_delay>
            <Card padding=Padding::Sm class="h-full flex flex-col overflow-hidden group">
                <div class="relative h-48 -mx-4 -mt-4 mb-4 overflow-hidden bg-gradient-to-br from-primary-100 to-secondary-100 dark:from-gray-700 dark:to-gray-800">
                    {project
                        .image
                        .clone()
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=project.title.clone()
                                    loading="lazy"
                                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-110"
                                />
                            }
                        })}
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <span class="absolute top-4 right-4 px-3 py-1 text-xs font-semibold rounded-full bg-secondary-500 text-white">
                                    "Featured"
                                </span>
                            }
                        })}
                </div>
                <h3 class="text-xl font-semibold mb-2">{project.title.clone()}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4 flex-grow">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <TechTag name=tech.clone() /> })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project
                        .live_url
                        .clone()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-primary-600 hover:text-primary-700 dark:text-primary-400"
                                >
                                    <Icon name="external-link" />
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {project
                        .repo_url
                        .clone()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-gray-600 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                                >
                                    <Icon name="github" />
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </Card>
        </div>
    }
}
