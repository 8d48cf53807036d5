use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Padding {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

#[component]
pub fn Card(
    children: Children,
    #[prop(optional)] padding: Padding,
    #[prop(default = true)] hover: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let hover = if hover {
        "hover:shadow-xl hover:-translate-y-1"
    } else {
        ""
    };
    view! {
        <div class=format!(
            "bg-white dark:bg-gray-800 rounded-xl shadow-lg transition-all duration-300 {} {hover} {class}",
            padding.class(),
        )>{children()}</div>
    }
}

#[component]
pub fn Icon(#[prop(into)] name: String, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=format!("icon-{name} {class}") aria-hidden="true"></i> }
}

#[component]
pub fn TechTag(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <span class="px-3 py-1 text-sm rounded-full bg-primary-100 text-primary-700 dark:bg-primary-900/30 dark:text-primary-300">
            {name}
        </span>
    }
}

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                {title}
            </h2>
            <div class="w-20 h-1 bg-primary-600 mx-auto mb-6 rounded-full"></div>
            <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
