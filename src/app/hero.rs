use std::time::Duration;

use leptos::{
    html,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
};

use crate::content::{HERO_EYEBROW, HERO_INTRO, HERO_ROLES, HERO_STATS};
use crate::motion::Typewriter;

use super::navbar::scroll_to_section;

/// Arms the next typewriter tick. Each timeout advances the machine once,
/// publishes the new prefix, and schedules its successor at whatever delay
/// the machine asked for. When the component is gone the stored machine is
/// disposed, `try_update_value` returns `None`, and the chain ends there.
fn schedule_tick(
    machine: StoredValue<Typewriter>,
    set_typed: WriteSignal<&'static str>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        move || {
            let Some((text, next_ms)) = machine.try_update_value(|machine| {
                let next_ms = machine.tick();
                (machine.text(), next_ms)
            }) else {
                return;
            };
            set_typed.set(text);
            schedule_tick(machine, set_typed, pending, Duration::from_millis(next_ms));
        },
        delay,
    )
    .ok();
    pending.set_value(handle);
}

/// Landing section: name, the cycling role line, intro copy, and the
/// headline stats. Doubles as the "about" anchor.
#[component]
pub fn Hero(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let machine = StoredValue::new(Typewriter::new(&HERO_ROLES));
    let (typed, set_typed) = signal("");
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // Timers only exist in the browser; effects never run during server
    // rendering, so the first tick is armed after hydration.
    Effect::new(move |_| {
        if pending.get_value().is_none() {
            schedule_tick(
                machine,
                set_typed,
                pending,
                Duration::from_millis(Typewriter::TYPE_MS),
            );
        }
    });
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="relative min-h-screen flex items-center overflow-hidden px-[5%] bg-gradient-to-br from-[#080a14] via-[#0d1528] to-[#080a14]"
        >
            <div class="pointer-events-none absolute top-[10%] right-[5%] w-[400px] h-[400px] rounded-full bg-[radial-gradient(circle,rgba(245,158,11,0.08)_0%,transparent_70%)]"></div>
            <div class="pointer-events-none absolute bottom-[15%] left-[2%] w-[280px] h-[280px] rounded-full bg-[radial-gradient(circle,rgba(99,102,241,0.07)_0%,transparent_70%)]"></div>
            <div class="pointer-events-none absolute inset-0 bg-[linear-gradient(rgba(245,158,11,0.03)_1px,transparent_1px),linear-gradient(90deg,rgba(245,158,11,0.03)_1px,transparent_1px)] bg-[length:60px_60px]"></div>

            <div class="max-w-6xl mx-auto w-full pt-[100px]">
                <div class="flex items-center gap-2 mb-6">
                    <span class="w-8 h-px bg-amber-500"></span>
                    <span class="font-mono text-xs tracking-[3px] uppercase text-amber-500">
                        {HERO_EYEBROW}
                    </span>
                </div>

                <h1 class="font-serif text-[clamp(42px,7vw,84px)] font-bold leading-[1.05] text-slate-100 mb-2">
                    "Prem"
                </h1>
                <h1 class="font-serif text-[clamp(42px,7vw,84px)] font-bold leading-[1.05] text-amber-500 mb-7">
                    "Tatkari"
                </h1>

                <div class="h-10 mb-7">
                    <span class="font-mono text-[clamp(16px,2.5vw,22px)] tracking-wide text-slate-400">
                        {typed} <span class="text-amber-500 animate-caret">"|"</span>
                    </span>
                </div>

                <p class="font-serif text-[clamp(15px,1.8vw,17px)] leading-[1.8] text-slate-500 max-w-[580px] mb-12">
                    {HERO_INTRO}
                </p>

                <div class="flex flex-wrap gap-4">
                    <button
                        class="font-mono text-[13px] font-bold tracking-[2px] uppercase px-8 py-3.5 rounded bg-amber-500 text-[#080a14] hover:bg-amber-400 hover:-translate-y-0.5 transition-all"
                        on:click=move |_| scroll_to_section("experience")
                    >
                        "View Work"
                    </button>
                    <a
                        href="mailto:tatkariprem6801@gmail.com"
                        class="inline-block font-mono text-[13px] font-bold tracking-[2px] uppercase px-8 py-3.5 rounded border border-amber-500/50 text-amber-500 hover:border-amber-500 hover:bg-amber-500/10 transition-all"
                    >
                        "Contact Me"
                    </a>
                </div>

                <div class="flex flex-wrap gap-8 mt-[72px] pt-8 border-t border-white/[0.06]">
                    {HERO_STATS
                        .iter()
                        .map(|(figure, caption)| {
                            view! {
                                <div>
                                    <div class="font-serif text-4xl font-bold text-amber-500">
                                        {*figure}
                                    </div>
                                    <div class="font-mono text-[11px] tracking-[1.5px] uppercase text-slate-500 mt-1">
                                        {*caption}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
