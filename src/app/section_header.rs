use leptos::prelude::*;

use super::reveal::FadeReveal;

/// Eyebrow label plus serif title, fading in at the top of each section.
#[component]
pub fn SectionHeader(label: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <FadeReveal class="mb-14">
            <div class="flex items-center gap-2.5 mb-3">
                <div class="w-6 h-px bg-amber-500"></div>
                <span class="font-mono text-[11px] tracking-[3px] uppercase text-amber-500">
                    {label}
                </span>
            </div>
            <h2 class="font-serif text-4xl lg:text-5xl font-bold text-slate-100 leading-tight">
                {title}
            </h2>
        </FadeReveal>
    }
}
