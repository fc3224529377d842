use leptos::{html, prelude::*};

use crate::content::PROJECTS;

use super::reveal::FadeReveal;
use super::section_header::SectionHeader;

#[component]
pub fn Projects(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="py-28 px-[5%] bg-gradient-to-b from-[#080a14] to-[#0a0e1c]"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeader label="Portfolio" title="Technical Projects" />
                <div class="grid md:grid-cols-2 gap-7">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay = i as f64 * 0.15;
                            view! {
                                <FadeReveal delay=delay>
                                    <div class="h-full rounded-xl border border-white/[0.06] bg-white/[0.02] px-8 py-9 transition-all duration-[400ms] hover:-translate-y-1.5 hover:border-white/20 hover:bg-white/[0.04]">
                                        <div class="text-4xl mb-5">{project.icon}</div>
                                        <h3 class="font-serif text-[22px] font-bold text-slate-100 mb-3.5">
                                            {project.title}
                                        </h3>
                                        <p class="font-serif text-[15px] leading-relaxed text-slate-500 mb-6">
                                            {project.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span
                                                            class="font-mono text-[11px] tracking-wide rounded border px-2.5 py-1"
                                                            style=format!(
                                                                "color: {0}; background-color: {0}15; border-color: {0}30;",
                                                                project.accent,
                                                            )
                                                        >
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </FadeReveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
