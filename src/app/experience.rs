use leptos::{html, prelude::*};

use crate::content::EXPERIENCE;

use super::reveal::FadeReveal;
use super::section_header::SectionHeader;

#[component]
pub fn Experience(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="experience" node_ref=section_ref class="py-28 px-[5%] bg-[#080a14]">
            <div class="max-w-6xl mx-auto">
                <SectionHeader label="Career" title="Work Experience" />
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <FadeReveal delay=0.1>
                                <div class="relative overflow-hidden rounded-xl border border-amber-500/15 bg-gradient-to-br from-amber-500/5 to-transparent px-11 py-10">
                                    <div
                                        class="absolute top-0 left-0 w-1 h-full rounded-l"
                                        style=format!("background: {};", job.accent)
                                    ></div>
                                    <div class="flex justify-between items-start flex-wrap gap-3 mb-7">
                                        <div>
                                            <h3 class="font-serif text-[26px] font-bold text-slate-100 mb-1.5">
                                                {job.role}
                                            </h3>
                                            <div
                                                class="font-mono text-sm tracking-wide"
                                                style=format!("color: {};", job.accent)
                                            >
                                                {job.company}
                                            </div>
                                            <div class="font-mono text-xs text-slate-500 mt-1">
                                                {job.location}
                                            </div>
                                        </div>
                                        <div class="font-mono text-xs tracking-wide text-slate-600 bg-amber-500/[0.08] border border-amber-500/15 rounded px-3.5 py-1.5">
                                            {job.period}
                                        </div>
                                    </div>
                                    <ul class="flex flex-col gap-3.5">
                                        {job.highlights
                                            .iter()
                                            .map(|highlight| {
                                                view! {
                                                    <li class="flex items-start gap-3.5">
                                                        <span
                                                            class="w-1.5 h-1.5 rounded-full shrink-0 mt-[7px]"
                                                            style=format!("background: {};", job.accent)
                                                        ></span>
                                                        <span class="font-serif text-[15px] leading-relaxed text-slate-400">
                                                            {*highlight}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </FadeReveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
