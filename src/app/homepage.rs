use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::content::SECTIONS;
use crate::motion::SectionTracker;

use super::contact::Contact;
use super::experience::Experience;
use super::hero::Hero;
use super::navbar::Navbar;
use super::projects::Projects;
use super::skills::Skills;

/// Fraction of a section that must be on-screen before it can claim the
/// navbar highlight.
const SECTION_THRESHOLD: f64 = 0.4;

/// Watches every section with one shared observer and reports which anchor id
/// owns the navbar highlight. Entries are folded into a [`SectionTracker`] in
/// delivery order; the signal starts at the first registered section and only
/// moves when the tracker reports a change.
fn use_active_section(targets: Vec<NodeRef<html::Section>>) -> ReadSignal<&'static str> {
    let tracker = StoredValue::new(SectionTracker::new(
        SECTIONS.iter().map(|section| section.id).collect(),
    ));
    let (active, set_active) = signal(tracker.with_value(|tracker| tracker.active()));
    use_intersection_observer_with_options(
        targets,
        move |entries, _| {
            for entry in entries {
                let id = entry.target().id();
                let changed = tracker
                    .try_update_value(|tracker| tracker.observe(&id, entry.is_intersecting()))
                    .unwrap_or(false);
                if changed {
                    set_active.set(tracker.with_value(|tracker| tracker.active()));
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![SECTION_THRESHOLD]),
    );
    active
}

#[component]
pub fn HomePage() -> impl IntoView {
    let about_ref = NodeRef::<html::Section>::new();
    let experience_ref = NodeRef::<html::Section>::new();
    let projects_ref = NodeRef::<html::Section>::new();
    let skills_ref = NodeRef::<html::Section>::new();
    let contact_ref = NodeRef::<html::Section>::new();

    let active = use_active_section(vec![
        about_ref,
        experience_ref,
        projects_ref,
        skills_ref,
        contact_ref,
    ]);

    view! {
        <Title text="Full-Stack Developer" />
        <Navbar active=active />
        <Hero section_ref=about_ref />
        <Experience section_ref=experience_ref />
        <Projects section_ref=projects_ref />
        <Skills section_ref=skills_ref />
        <Contact section_ref=contact_ref />
    }
}
