use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::{homepage::Reveal, parallax::ParallaxDivider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
    /// Accent used for the card and case study hero.
    pub color: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        slug: "atlas",
        title: "Atlas",
        category: "Product Design / Engineering",
        year: "2024",
        summary: "A logistics dashboard that turns live fleet telemetry into decisions dispatchers can act on in seconds.",
        role: "Lead engineer",
        stack: &["TypeScript", "React", "WebGL", "PostgreSQL"],
        color: "#C9A87C",
    },
    Project {
        slug: "himal",
        title: "Himal",
        category: "Mobile / Travel",
        year: "2023",
        summary: "Offline-first trekking companion for the Annapurna circuit, with route elevation and teahouse availability.",
        role: "Designer and developer",
        stack: &["Kotlin", "SQLite", "Mapbox"],
        color: "#DC143C",
    },
    Project {
        slug: "signal",
        title: "Signal Studio",
        category: "Creative Development",
        year: "2022",
        summary: "Generative brand system that renders motion identities from a handful of typographic rules.",
        role: "Creative developer",
        stack: &["Rust", "WASM", "Canvas"],
        color: "#60A5FA",
    },
];

pub fn find_project(slug: &str) -> Option<(usize, &'static Project)> {
    PROJECTS.iter().enumerate().find(|(_, p)| p.slug == slug)
}

/// The project after `index`, wrapping to the first.
pub fn next_project(index: usize) -> &'static Project {
    &PROJECTS[(index + 1) % PROJECTS.len()]
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let delay = index as u32 * 120;
    view! {
        <Reveal delay_ms=delay>
            <A
                href=format!("/work/{}", project.slug)
                attr:class="group block"
                attr:data-cursor="action"
                attr:data-cursor-label="View"
            >
                <div
                    class="aspect-[4/3] rounded-2xl overflow-hidden transition-transform duration-700 group-hover:scale-[0.98]"
                    style=format!(
                        "background: radial-gradient(circle at 30% 30%, {} 0%, #0a0a0a 70%);",
                        project.color,
                    )
                ></div>
                <div class="mt-6 flex items-baseline justify-between">
                    <h3 class="text-2xl font-light">{project.title}</h3>
                    <span class="text-xs text-neutral-500">{project.year}</span>
                </div>
                <p class="mt-2 text-xs tracking-widest uppercase text-neutral-500">
                    {project.category}
                </p>
            </A>
        </Reveal>
    }
}

#[component]
pub fn WorkSection() -> impl IntoView {
    view! {
        <section id="work" class="px-6 md:px-12 py-32">
            <div class="max-w-7xl mx-auto">
                <Reveal>
                    <p class="text-xs tracking-[0.3em] uppercase text-[var(--color-accent)]">
                        "Selected work"
                    </p>
                </Reveal>
                <div class="mt-16 grid md:grid-cols-2 gap-16">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").map(|s| s.to_string()).unwrap_or_default());

    move || match find_project(&slug()) {
        Some((index, project)) => {
            let next = next_project(index);
            view! {
                <Title text=project.title />
                <article class="pt-40">
                    <header class="px-6 md:px-12 max-w-7xl mx-auto">
                        <Reveal>
                            <p class="text-xs tracking-[0.3em] uppercase text-neutral-500">
                                {project.category} " / " {project.year}
                            </p>
                        </Reveal>
                        <Reveal delay_ms=100>
                            <h1 class="mt-6 text-6xl md:text-9xl font-light tracking-tight">
                                {project.title}
                            </h1>
                        </Reveal>
                        <Reveal delay_ms=200>
                            <p class="mt-10 max-w-2xl text-xl text-neutral-400 leading-relaxed">
                                {project.summary}
                            </p>
                        </Reveal>
                    </header>
                    <div class="mt-24">
                        <ParallaxDivider color=project.color caption=project.role />
                    </div>
                    <section class="px-6 md:px-12 py-24 max-w-7xl mx-auto grid md:grid-cols-3 gap-12">
                        <Reveal>
                            <h2 class="text-xs tracking-widest uppercase text-neutral-500">"Role"</h2>
                            <p class="mt-4 text-lg">{project.role}</p>
                        </Reveal>
                        <Reveal delay_ms=100>
                            <h2 class="text-xs tracking-widest uppercase text-neutral-500">"Stack"</h2>
                            <ul class="mt-4 text-lg">
                                {project
                                    .stack
                                    .iter()
                                    .map(|tech| view! { <li>{*tech}</li> })
                                    .collect_view()}
                            </ul>
                        </Reveal>
                        <Reveal delay_ms=200>
                            <h2 class="text-xs tracking-widest uppercase text-neutral-500">"Year"</h2>
                            <p class="mt-4 text-lg">{project.year}</p>
                        </Reveal>
                    </section>
                    <A
                        href=format!("/work/{}", next.slug)
                        attr:class="block border-t border-white/10 px-6 md:px-12 py-24 group"
                        attr:data-cursor="action"
                        attr:data-cursor-label="Next"
                    >
                        <div class="max-w-7xl mx-auto">
                            <p class="text-xs tracking-[0.3em] uppercase text-neutral-500">
                                "Next project"
                            </p>
                            <p class="mt-4 text-5xl md:text-7xl font-light transition-colors group-hover:text-[var(--color-accent)]">
                                {next.title}
                            </p>
                        </div>
                    </A>
                </article>
            }
                .into_any()
        }
        None => {
            view! {
                <Title text="Not found" />
                <div class="pt-40 px-6 md:px-12 max-w-7xl mx-auto">
                    <h1 class="text-4xl font-light">"No project by that name."</h1>
                    <A href="/" attr:class="mt-8 inline-block underline">
                        "Back home"
                    </A>
                </div>
            }
                .into_any()
        }
    }
}
