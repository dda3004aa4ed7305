use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{
    background::HeroBackground,
    contact::ContactSection,
    globe::{GlobeScene, RegionToggle},
    hooks::use_in_view,
    parallax::ParallaxDivider,
    region::use_region,
    work::WorkSection,
};
use crate::motion::{region::Region, viewport::InViewOptions};

/// Fades and lifts its children into place the first time they scroll into
/// view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, InViewOptions::default());

    view! {
        <div
            node_ref=node
            class=move || {
                format!(
                    "{class} transition-all duration-1000 ease-[cubic-bezier(0.16,1,0.3,1)] {}",
                    if in_view.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" },
                )
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
struct Role {
    period: &'static str,
    title: &'static str,
    place: &'static str,
    region: Region,
}

const EXPERIENCE: [Role; 4] = [
    Role {
        period: "2023 - Now",
        title: "Software Engineer",
        place: "Columbus, Ohio",
        region: Region::Us,
    },
    Role {
        period: "2021 - 2023",
        title: "Graduate Research Assistant",
        place: "Ohio",
        region: Region::Us,
    },
    Role {
        period: "2019 - 2021",
        title: "Frontend Developer",
        place: "Kathmandu",
        region: Region::Nepal,
    },
    Role {
        period: "2017 - 2019",
        title: "Design Intern",
        place: "Lalitpur",
        region: Region::Nepal,
    },
];

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex flex-col justify-end px-6 md:px-12 pb-24">
            <HeroBackground />
            <div class="relative max-w-7xl w-full mx-auto">
                <Reveal>
                    <p class="text-xs tracking-[0.3em] uppercase text-neutral-500">
                        "Designer & engineer"
                    </p>
                </Reveal>
                <Reveal delay_ms=120>
                    <h1 class="mt-8 text-[14vw] md:text-[9vw] leading-[0.9] font-light tracking-tighter">
                        "Prastut" <br /> "Dahal"
                        <span class="text-[var(--color-accent)]">"."</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms=240 class="mt-12 flex flex-col md:flex-row md:items-end justify-between gap-8">
                    <p class="max-w-md text-lg text-neutral-400 leading-relaxed">
                        "Building interfaces that feel considered, from Kathmandu to Columbus."
                    </p>
                    <a
                        href="#work"
                        class="text-xs tracking-[0.3em] uppercase"
                        data-cursor="pointer"
                    >
                        "Scroll to explore"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="px-6 md:px-12 py-32">
            <div class="max-w-7xl mx-auto grid md:grid-cols-12 gap-12">
                <Reveal class="md:col-span-4">
                    <p class="text-xs tracking-[0.3em] uppercase text-[var(--color-accent)]">
                        "About"
                    </p>
                </Reveal>
                <div class="md:col-span-8 flex flex-col gap-8 text-2xl md:text-3xl font-light leading-snug">
                    <Reveal>
                        <p>
                            "I grew up in the hills of Nepal and now build software in Ohio. "
                            "Both places shaped how I work: patient with the details, impatient with friction."
                        </p>
                    </Reveal>
                    <Reveal delay_ms=120>
                        <p class="text-neutral-400">
                            "Most days that means design systems, motion, and the plumbing that keeps interfaces fast."
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    let region = use_region();

    view! {
        <section class="px-6 md:px-12 py-32">
            <div class="max-w-7xl mx-auto">
                <Reveal>
                    <p class="text-xs tracking-[0.3em] uppercase text-[var(--color-accent)]">
                        "Experience"
                    </p>
                </Reveal>
                <ol class="mt-16 border-t border-white/10">
                    {EXPERIENCE
                        .into_iter()
                        .enumerate()
                        .map(|(index, role)| {
                            let delay = index as u32 * 80;
                            view! {
                                <li
                                    class="border-b border-white/10 transition-opacity duration-500"
                                    class:opacity-40=move || region.get() != role.region
                                >
                                    <Reveal
                                        delay_ms=delay
                                        class="grid md:grid-cols-12 gap-4 py-8"
                                    >
                                        <span class="md:col-span-3 text-sm text-neutral-500">
                                            {role.period}
                                        </span>
                                        <span class="md:col-span-6 text-2xl font-light">
                                            {role.title}
                                        </span>
                                        <span class="md:col-span-3 text-sm text-neutral-500 md:text-right">
                                            {role.place}
                                        </span>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn Journey() -> impl IntoView {
    let region = use_region();

    view! {
        <section id="journey" class="px-6 md:px-12 py-32">
            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <Reveal>
                        <p class="text-xs tracking-[0.3em] uppercase text-[var(--color-accent)]">
                            "Journey"
                        </p>
                    </Reveal>
                    <Reveal delay_ms=120>
                        <h2 class="mt-6 text-4xl md:text-6xl font-light tracking-tight">
                            "Two homes, one thread."
                        </h2>
                    </Reveal>
                    <Reveal delay_ms=240 class="mt-10">
                        <RegionToggle />
                    </Reveal>
                    <p class="mt-8 text-neutral-400 max-w-md min-h-[3rem]">
                        {move || match region.get() {
                            Region::Nepal => "Where it started: school, first sketches, and the first websites shipped to friends.",
                            Region::Us => "Where it continues: graduate research, then product engineering in Columbus.",
                        }}
                    </p>
                </div>
                <div class="aspect-square">
                    <GlobeScene />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ParallaxDivider />
        <WorkSection />
        <Experience />
        <Journey />
        <ParallaxDivider speed=0.2 caption="Say hello" />
        <ContactSection />
    }
}
