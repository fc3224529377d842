use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{Section, SECTIONS};

/// Scroll depth in px past which the navbar gains its solid backdrop.
const SCROLLED_AT: f64 = 40.0;

/// Smooth-scrolls the page to the element with the given anchor id. Nothing
/// happens if no such element is mounted.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Fixed top navigation. Transparent over the hero, solid and blurred once
/// the page is scrolled; highlights whichever section currently owns the
/// viewport and collapses into a hamburger menu on small screens.
#[component]
pub fn Navbar(active: ReadSignal<&'static str>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let bar_class = move || {
        if scroll_y.get() > SCROLLED_AT {
            "fixed top-0 inset-x-0 z-50 px-[5%] transition-all duration-[400ms] \
             bg-[#080a14]/95 backdrop-blur-md border-b border-amber-500/15"
        } else {
            "fixed top-0 inset-x-0 z-50 px-[5%] transition-all duration-[400ms] \
             border-b border-transparent"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-6xl mx-auto flex items-center justify-between h-[68px]">
                <div class="font-serif text-[22px] font-bold text-amber-500 tracking-wide">
                    "PT" <span class="font-mono text-[13px] text-slate-200 ml-1.5">"/ dev"</span>
                </div>

                <div class="hidden md:flex items-center gap-9">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let Section { id, label } = *section;
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == id {
                                            "font-mono text-[13px] tracking-[1.5px] uppercase text-amber-500 transition-colors"
                                        } else {
                                            "font-mono text-[13px] tracking-[1.5px] uppercase text-slate-400 hover:text-amber-500 transition-colors"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        scroll_to_section(id);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-amber-500 text-2xl px-2"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden flex flex-col pt-4 pb-6 bg-[#080a14]/[0.98] border-t border-amber-500/20">
                                {SECTIONS
                                    .iter()
                                    .map(|section| {
                                        let Section { id, label } = *section;
                                        view! {
                                            <button
                                                class="text-left py-3 font-mono text-sm tracking-[2px] uppercase text-slate-400 border-b border-white/5"
                                                on:click=move |_| {
                                                    set_menu_open.set(false);
                                                    scroll_to_section(id);
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
