use leptos::{html, prelude::*};

use crate::content::{CERTIFICATIONS, EDUCATION, SKILLS};

use super::reveal::FadeReveal;
use super::section_header::SectionHeader;

#[component]
pub fn Skills(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="skills" node_ref=section_ref class="py-28 px-[5%] bg-[#080a14]">
            <div class="max-w-6xl mx-auto">
                <SectionHeader label="Expertise" title="Skills & Technologies" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, (category, items))| {
                            let delay = i as f64 * 0.07;
                            view! {
                                <FadeReveal delay=delay>
                                    <div class="h-full rounded-[10px] border border-white/[0.06] bg-white/[0.015] p-7 hover:border-amber-500/30 transition-colors">
                                        <h4 class="font-mono text-[11px] tracking-[2.5px] uppercase text-amber-500 mb-4">
                                            {*category}
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <span class="font-mono text-xs text-slate-400 rounded border border-slate-400/[0.12] bg-slate-400/[0.07] px-2.5 py-1 hover:text-slate-100 hover:border-amber-500/40 transition-all">
                                                            {*item}
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

                <FadeReveal delay=0.2 class="mt-14">
                    <div class="grid md:grid-cols-2 gap-6">
                        <div class="rounded-[10px] border border-amber-500/20 bg-amber-500/[0.03] p-7">
                            <div class="font-mono text-[11px] tracking-[2.5px] uppercase text-amber-500 mb-4">
                                "Education"
                            </div>
                            <div class="font-serif text-lg font-semibold text-slate-100 mb-1.5">
                                {EDUCATION.degree}
                            </div>
                            <div class="font-serif text-sm text-slate-500 mb-1">
                                {EDUCATION.school}
                            </div>
                            <div class="font-mono text-xs text-amber-500">{EDUCATION.note}</div>
                        </div>
                        <div class="rounded-[10px] border border-indigo-500/20 bg-indigo-500/[0.03] p-7">
                            <div class="font-mono text-[11px] tracking-[2.5px] uppercase text-indigo-500 mb-4">
                                "Certifications"
                            </div>
                            <div class="flex flex-col gap-3.5">
                                {CERTIFICATIONS
                                    .iter()
                                    .map(|certification| {
                                        view! {
                                            <div>
                                                <div class="font-serif text-[15px] font-medium text-slate-100">
                                                    {certification.title}
                                                </div>
                                                <div class="font-mono text-xs text-slate-500 mt-1">
                                                    {certification.detail}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </FadeReveal>
            </div>
        </section>
    }
}
