use leptos::{html, prelude::*};

use crate::content::{ContactChannel, CONTACT_CHANNELS, CONTACT_INTRO, FOOTER_LOCATION};

use super::reveal::FadeReveal;
use super::section_header::SectionHeader;

const FIELD: &str =
    "w-full rounded-lg border border-white/10 bg-white/[0.03] px-4 py-3 font-serif \
     text-[15px] text-slate-200 placeholder:text-slate-600 focus:outline-none \
     focus:border-amber-500/50 transition-colors";

#[component]
pub fn Contact(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="pt-28 pb-20 px-[5%] bg-gradient-to-b from-[#080a14] to-[#060810]"
        >
            <div class="max-w-4xl mx-auto">
                <SectionHeader label="Get In Touch" title="Let's Work Together" />
                <div class="grid md:grid-cols-[1fr_1.4fr] gap-14">
                    <FadeReveal delay=0.1>
                        <p class="font-serif text-[16px] leading-[1.8] text-slate-500 mb-10">
                            {CONTACT_INTRO}
                        </p>
                        <div class="flex flex-col gap-1.5">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    let ContactChannel { icon, label, value, href } = *channel;
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noreferrer"
                                            class="flex items-center gap-3.5 rounded-lg border border-transparent px-4 py-3 hover:border-amber-500/25 hover:bg-amber-500/5 transition-all"
                                        >
                                            <span class="text-lg">{icon}</span>
                                            <div>
                                                <div class="font-mono text-[10px] tracking-[2px] uppercase text-amber-500">
                                                    {label}
                                                </div>
                                                <div class="font-serif text-sm text-slate-400 mt-0.5">
                                                    {value}
                                                </div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </FadeReveal>

                    <FadeReveal delay=0.2>
                        // TODO: integrate a mail backend (FastAPI or a form relay);
                        // until then the form swallows the submit event.
                        <form class="flex flex-col gap-5" on:submit=move |ev| ev.prevent_default()>
                            <input type="text" name="name" placeholder="Your name" class=FIELD />
                            <input type="email" name="email" placeholder="Your email" class=FIELD />
                            <textarea
                                name="message"
                                rows=5
                                placeholder="Your message"
                                class=FIELD
                            ></textarea>
                            <button
                                type="submit"
                                class="self-start font-mono text-[13px] font-bold tracking-[2px] uppercase px-8 py-3.5 rounded bg-amber-500 text-[#080a14] hover:bg-amber-400 transition-colors"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </FadeReveal>
                </div>
            </div>

            <div class="max-w-6xl mx-auto mt-20 pt-8 border-t border-white/[0.06] flex flex-wrap items-center justify-between gap-3">
                <span class="font-mono text-xs text-slate-700">
                    "© " {&env!("BUILD_TIME")[..4]} " Prem Tatkari. Built with Rust + Leptos."
                </span>
                <span class="font-mono text-xs text-slate-700">{FOOTER_LOCATION}</span>
            </div>
        </section>
    }
}
