mod background;
mod contact;
mod cursor;
mod curtain;
mod globe;
mod hooks;
mod homepage;
mod loading;
mod parallax;
mod region;
mod scroll;
mod work;

use cursor::CustomCursor;
use curtain::TransitionCurtain;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use loading::LoadingScreen;
use scroll::{Navbar, ScrollProgress};
use work::CaseStudyPage;

use crate::config::MotionConfig;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#030303] text-neutral-200 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(MotionConfig::default());
    region::provide_region_context();

    view! {
        <Title formatter=|title| format!("Prastut Dahal - {title}") />

        <Router>
            <LoadingScreen />
            <TransitionCurtain />
            <CustomCursor />
            <ScrollProgress />
            <Navbar />
            <main class="flex flex-col w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/work/:slug") view=CaseStudyPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built: &'static str = env!("BUILD_TIME");
    let year = built.get(..4).unwrap_or_default();
    let date = built.get(..10).unwrap_or(built);
    view! {
        <footer class="border-t border-white/10 py-10 px-6 md:px-12">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row gap-4 justify-between text-xs tracking-widest uppercase text-neutral-500">
                <span>{format!("© {year} Prastut Dahal")}</span>
                <span>"Built with Rust + Leptos"</span>
                <span title=built>"Last deployed " {date}</span>
            </div>
        </footer>
    }
}
