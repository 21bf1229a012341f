mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::PROFILE;
use crate::scroll::{PageScroller, ScrollTracker};
use crate::theme::ThemeStore;

use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-white text-gray-900 dark:bg-gray-900 dark:text-white transition-colors duration-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Stores live at the root; views subscribe through context instead of
    // reaching into globals.
    provide_context(ThemeStore::new());
    provide_context(ScrollTracker::mount());
    provide_context(PageScroller::new());

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} | {title}", PROFILE.name) />

        <Meta name="description" content=PROFILE.tagline />
        <Meta name="keywords" content=PROFILE.keywords />
        <Meta property="og:title" content=format!("{} | {}", PROFILE.name, PROFILE.role) />
        <Meta property="og:description" content=PROFILE.tagline />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=PROFILE.site_url />
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=format!("{} | {}", PROFILE.name, PROFILE.role) />
        <Meta property="twitter:description" content=PROFILE.tagline />
        <Link rel="canonical" href=PROFILE.site_url />

        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
