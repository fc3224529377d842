use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{fade_style, RevealLatch};

/// Fraction of an element that must be on-screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;

/// One-shot viewport watcher. The returned signal starts false and flips to
/// true the first time `target` intersects the viewport at
/// [`REVEAL_THRESHOLD`]; it never flips back. The underlying observer is torn
/// down with the owning scope, and until `target` is mounted no entries
/// arrive, so the signal just stays false.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::default());
    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let fired = latch
                    .try_update_value(|latch| latch.observe(entry.is_intersecting()))
                    .unwrap_or(false);
                if fired {
                    set_revealed.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    revealed
}

/// Block that fades in and rises into place the first time it scrolls into
/// view. Before that it sits transparent, shifted down. `delay` staggers
/// siblings revealing together.
#[component]
pub fn FadeReveal(
    #[prop(optional)] delay: f64,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target);

    view! {
        <div node_ref=target class=class style=move || fade_style(revealed.get(), delay)>
            {children()}
        </div>
    }
}
