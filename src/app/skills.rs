use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::{skill_bar_delay_ms, skill_bar_width, Skill, SkillCategory, PORTFOLIO};
use crate::reveal::{Offset, RevealOptions, REVEAL_DISTANCE_PX};
use crate::scroll::SectionId;

use super::atoms::{Card, Icon, SectionHeader};
use super::reveal::use_scroll_reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let reveal = use_scroll_reveal(RevealOptions::default().threshold(0.2));

    view! {
        <section id=SectionId::Skills.id() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I work with to bring ideas to life"
                />
                <div node_ref=reveal.node_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PORTFOLIO
                        .skill_categories
                        .iter()
                        .enumerate()
                        .map(|(ci, category)| {
                            let delay = skill_bar_delay_ms(ci, 0);
                            view! {
                                <div style=move || {
                                    reveal.style_from(delay, Offset::Y(REVEAL_DISTANCE_PX))
                                }>
                                    <CategoryCard
                                        category=category
                                        index=ci
                                        revealed=reveal.is_intersecting
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(
    category: &'static SkillCategory,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center gap-3 mb-6">
                <div class="p-3 rounded-lg bg-primary-100 dark:bg-primary-900/30 text-primary-600">
                    <Icon name=category.icon.clone() />
                </div>
                <h3 class="text-xl font-semibold">{category.name.clone()}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(si, skill)| {
                        view! {
                            <SkillBar skill=skill delay_ms=skill_bar_delay_ms(index, si) revealed=revealed />
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, delay_ms: u32, revealed: Signal<bool>) -> impl IntoView {
    let filled = RwSignal::new(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| filled.set(true), f64::from(delay_ms));

    // bars fill once their card has been revealed
    Effect::new(move |_| {
        if revealed.get() {
            start(());
        }
    });

    let level = skill.level;
    view! {
        <div>
            <div class="flex justify-between mb-1">
                <span class="font-medium">{skill.name.clone()}</span>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {format!("{}%", level.min(100))}
                </span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-primary-500 to-secondary-500 transition-all duration-1000 ease-out"
                    style=move || format!("width: {}", skill_bar_width(level, filled.get()))
                ></div>
            </div>
        </div>
    }
}
