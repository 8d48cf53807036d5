use leptos::prelude::*;

use crate::content::{Experience as Entry, PORTFOLIO};
use crate::reveal::{Offset, RevealOptions};
use crate::scroll::SectionId;

use super::atoms::{Card, Icon, Padding, SectionHeader, TechTag};
use super::reveal::{use_scroll_reveal, Reveal};

const TIMELINE_SLIDE_PX: i32 = 50;

#[component]
pub fn Experience() -> impl IntoView {
    let timeline = use_scroll_reveal(RevealOptions::default().threshold(0.1));
    let stats = use_scroll_reveal(RevealOptions::default().threshold(0.3));

    view! {
        <section id=SectionId::Experience.id() class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeader
                    title="Work Experience"
                    subtitle="My professional journey and the impact I've made along the way"
                />
                <div node_ref=timeline.node_ref class="relative max-w-4xl mx-auto">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-primary-200 dark:bg-primary-900"></div>
                    {PORTFOLIO
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <TimelineItem entry=entry index=index reveal=timeline /> }
                        })
                        .collect_view()}
                </div>
                <div
                    node_ref=stats.node_ref
                    style=move || stats.style()
                    class="max-w-4xl mx-auto mt-16"
                >
                    <Card padding=Padding::Lg hover=false>
                        <div class="grid md:grid-cols-3 gap-8 text-center">
                            {PORTFOLIO
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="text-4xl font-bold text-primary-600 mb-2">
                                                {stat.value.clone()}
                                            </div>
                                            <div class="text-gray-600 dark:text-gray-400">
                                                {stat.label.clone()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: &'static Entry, index: usize, reveal: Reveal) -> impl IntoView {
    let from_left = index % 2 == 0;
    let from = if from_left {
        Offset::X(-TIMELINE_SLIDE_PX)
    } else {
        Offset::X(TIMELINE_SLIDE_PX)
    };
    let delay = (index as u32) * 200;
    let side = if from_left {
        "md:pr-12 md:text-right md:mr-auto"
    } else {
        "md:pl-12 md:ml-auto"
    };

    view! {
        <div
            class="relative mb-12 pl-12 md:pl-0"
            style=move || reveal.style_from(delay, from)
        >
            <div class="absolute left-2.5 md:left-1/2 md:-translate-x-1/2 top-6 w-4 h-4 rounded-full bg-primary-600 ring-4 ring-white dark:ring-gray-900"></div>
            <div class=format!("md:w-1/2 {side}")>
                <Card>
                    <div class="flex flex-wrap items-center gap-2 text-sm text-primary-600 dark:text-primary-400 mb-2">
                        <Icon name="calendar" />
                        <span>{entry.period.clone()}</span>
                    </div>
                    <h3 class="text-xl font-semibold">{entry.position.clone()}</h3>
                    <div class="flex flex-wrap items-center gap-2 text-gray-600 dark:text-gray-400 mb-4">
                        <Icon name="briefcase" />
                        <span class="font-medium">{entry.company.clone()}</span>
                        <Icon name="map-pin" />
                        <span>{entry.location.clone()}</span>
                    </div>
                    <p class="text-gray-600 dark:text-gray-400 mb-4">{entry.description.clone()}</p>
                    <ul class="space-y-2 mb-4 text-left">
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="flex gap-2 text-sm">
                                        <span class="text-primary-600">"▹"</span>
                                        <span>{achievement.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-2">
                        {entry
                            .technologies
                            .iter()
                            .map(|tech| view! { <TechTag name=tech.clone() /> })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
