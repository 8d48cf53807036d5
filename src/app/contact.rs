use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    deliver, ContactField, ContactForm, ContactMessage, SubmitStatus, SUBMIT_DELAY_MS,
};
use crate::content::PORTFOLIO;
use crate::reveal::{Offset, RevealOptions};
use crate::scroll::SectionId;

use super::atoms::{Card, Icon, Padding, SectionHeader};
use super::reveal::use_scroll_reveal;

const COLUMN_SLIDE_PX: i32 = 50;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 bg-white dark:border-gray-600 dark:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-primary-500 disabled:opacity-50";

#[component]
pub fn Contact() -> impl IntoView {
    let reveal = use_scroll_reveal(RevealOptions::default().threshold(0.2));

    view! {
        <section id=SectionId::Contact.id() class="py-20 bg-white dark:bg-gray-800/50">
            <div class="container mx-auto px-4">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to chat? I'd love to hear from you."
                />
                <div node_ref=reveal.node_ref class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div style=move || reveal.style_from(200, Offset::X(-COLUMN_SLIDE_PX))>
                        <ContactInfo />
                    </div>
                    <div style=move || reveal.style_from(400, Offset::X(COLUMN_SLIDE_PX))>
                        <ContactFormCard />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-2xl font-semibold mb-4">"Let's work together"</h3>
                <p class="text-gray-600 dark:text-gray-400">
                    "I'm always open to new opportunities and interesting projects. Whether you have a question or just want to say hi, my inbox is open."
                </p>
            </div>
            <div class="space-y-4">
                {PORTFOLIO
                    .contact_details
                    .iter()
                    .map(|detail| {
                        let value = match detail.href.clone() {
                            Some(href) => {
                                view! {
                                    <a href=href class="hover:text-primary-600">
                                        {detail.value.clone()}
                                    </a>
                                }
                                    .into_any()
                            }
                            None => view! { <span>{detail.value.clone()}</span> }.into_any(),
                        };
                        view! {
                            <div class="flex items-center gap-4">
                                <div class="p-3 rounded-lg bg-primary-100 text-primary-600 dark:bg-primary-900/30">
                                    <Icon name=detail.icon.clone() />
                                </div>
                                <div>
                                    <div class="text-sm text-gray-500 dark:text-gray-400">
                                        {detail.title.clone()}
                                    </div>
                                    <div class="font-medium">{value}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
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
                                class="p-3 rounded-lg bg-gray-100 hover:bg-primary-100 hover:text-primary-600 dark:bg-gray-700 dark:hover:bg-primary-900/30"
                            >
                                <Icon name=link.icon.clone() />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <Card padding=Padding::Sm hover=false class="border-l-4 border-green-500">
                <div class="flex items-center gap-3">
                    <span class="w-3 h-3 rounded-full bg-green-500 animate-pulse"></span>
                    <span class="font-medium">{PORTFOLIO.profile.availability.clone()}</span>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let is_sending = move || form.with(ContactForm::is_sending);

    // cancelled by leptos-use if the section is disposed before it fires
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |message: ContactMessage| form.update(|f| f.finish_submit(deliver(&message))),
        SUBMIT_DELAY_MS as f64,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut message = None;
        form.update(|f| message = f.begin_submit());
        if let Some(message) = message {
            start(message);
        }
    };

    view! {
        <Card padding=Padding::Lg hover=false>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid sm:grid-cols-2 gap-6">
                    <FormField form=form field=ContactField::Name />
                    <FormField form=form field=ContactField::Email />
                </div>
                <FormField form=form field=ContactField::Subject />
                <FormField form=form field=ContactField::Message />
                <button
                    type="submit"
                    disabled=is_sending
                    class="w-full flex items-center justify-center gap-2 px-8 py-3 rounded-lg bg-primary-600 text-white font-medium hover:bg-primary-700 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if is_sending() { "Sending..." } else { "Send Message" }}
                    <Icon name="send" />
                </button>
                {move || match form.with(ContactForm::status) {
                    SubmitStatus::Sent => {
                        Some(
                            view! {
                                <p class="p-4 rounded-lg bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300">
                                    "Message sent successfully! I'll get back to you soon."
                                </p>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Failed => {
                        Some(
                            view! {
                                <p class="p-4 rounded-lg bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300">
                                    "Something went wrong. Please try again later."
                                </p>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Idle | SubmitStatus::Sending => None,
                }}
            </form>
        </Card>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: ContactField) -> impl IntoView {
    let value = move || form.with(|f| f.message().get(field).to_string());
    let disabled = move || form.with(ContactForm::is_sending);
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_field(field, event_target_value(&ev)));
    };

    let input = match field {
        ContactField::Message => {
            view! {
                <textarea
                    id=field.id()
                    name=field.id()
                    rows="6"
                    required=true
                    class=INPUT_CLASS
                    prop:value=value
                    disabled=disabled
                    on:input=on_input
                ></textarea>
            }
                .into_any()
        }
        _ => {
            view! {
                <input
                    id=field.id()
                    name=field.id()
                    type=field.input_type()
                    required=true
                    class=INPUT_CLASS
                    prop:value=value
                    disabled=disabled
                    on:input=on_input
                />
            }
                .into_any()
        }
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            {input}
        </div>
    }
}
