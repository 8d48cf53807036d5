mod atoms;
mod contact;
mod experience;
mod hero;
mod layout;
mod navigation;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PORTFOLIO;
use crate::theme::Theme;

use contact::Contact;
use experience::Experience;
use hero::Hero;
use layout::Layout;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Page-wide theme, provided once at the root.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    fn new(theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
        log::debug!("theme switched to {}", self.theme.get_untracked());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ThemeContext::new(Theme::default()));

    let name = PORTFOLIO.profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=PORTFOLIO.profile.summary.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text=PORTFOLIO.profile.title.clone() />
        <Layout>
            <Hero />
            <Skills />
            <Projects />
            <Experience />
            <Contact />
        </Layout>
    }
}
