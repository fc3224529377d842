//! Pure state machines behind the page motion: the hero typewriter, the
//! navbar's active-section tracking, and the scroll-in fade reveals.
//!
//! Nothing in this module touches the DOM or schedules timers. Each type
//! advances by explicit calls from its driver in `app`, which keeps the
//! sequencing rules testable without a browser.

/// Phase of the typewriter loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Appending one character per tick.
    Typing,
    /// Full phrase on display, waiting out the hold before deleting.
    Holding,
    /// Removing one character per tick.
    Deleting,
}

/// Types out each phrase in turn, holds it, deletes it, and moves on to the
/// next, wrapping around forever. [`tick`](Typewriter::tick) advances one step
/// and returns how long the driver should wait before the next one.
///
/// Characters are Unicode scalars, so a multi-byte phrase grows and shrinks
/// one visible character at a time instead of panicking mid-codepoint.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Delay after appending a character.
    pub const TYPE_MS: u64 = 80;
    /// Delay after removing a character.
    pub const DELETE_MS: u64 = 50;
    /// Hold with the full phrase on display.
    pub const HOLD_MS: u64 = 1800;

    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// The prefix currently on display. Always a whole-character prefix of the
    /// current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((boundary, _)) => &phrase[..boundary],
            None => phrase,
        }
    }

    /// Advances one step and returns the delay in milliseconds until the next
    /// tick. With no phrases there is nothing to animate; the state never
    /// changes and the driver just idles.
    pub fn tick(&mut self) -> u64 {
        if self.phrases.is_empty() {
            return Self::HOLD_MS;
        }
        match self.phase {
            TypewriterPhase::Typing => {
                self.shown += 1;
                if self.shown >= self.phrase_chars() {
                    self.shown = self.phrase_chars();
                    self.phase = TypewriterPhase::Holding;
                    Self::HOLD_MS
                } else {
                    Self::TYPE_MS
                }
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
                Self::DELETE_MS
            }
            TypewriterPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypewriterPhase::Typing;
                    Self::TYPE_MS
                } else {
                    Self::DELETE_MS
                }
            }
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    fn phrase_chars(&self) -> usize {
        self.phrase().chars().count()
    }
}

/// Decides which section owns the navbar highlight. Sections report viewport
/// entry and exit as the shared observer delivers them; the most recent
/// section to report itself intersecting is the active one.
///
/// Reports for ids outside the registry are ignored, and a section leaving
/// the viewport never clears the highlight, so exactly one section is active
/// at all times. When several sections cross the threshold in the same
/// observer batch, entries are applied in delivery order and the last one
/// wins.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<&'static str>,
    active: usize,
}

impl SectionTracker {
    /// Starts with the first registered section active.
    pub fn new(sections: Vec<&'static str>) -> Self {
        Self {
            sections,
            active: 0,
        }
    }

    pub fn active(&self) -> &'static str {
        self.sections.get(self.active).copied().unwrap_or("")
    }

    /// Records one observer entry. Returns whether the active section
    /// changed.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(position) = self.sections.iter().position(|section| *section == id) else {
            return false;
        };
        let changed = position != self.active;
        self.active = position;
        changed
    }
}

/// One-shot visibility latch for a fade-in element. Latches on the first
/// intersection and stays set; later entries and exits are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Records one observer entry. Returns true only on the transition that
    /// sets the latch, so the driver writes its signal at most once.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// How far a hidden element sits below its resting position, in px.
pub const REVEAL_SHIFT_PX: u32 = 32;
/// Fade and rise duration, in seconds.
pub const REVEAL_SECS: f64 = 0.7;

/// Inline style for a fade-in element. Hidden elements are transparent and
/// shifted down; revealed ones sit at full opacity in place. The transition
/// declaration rides along in both states so the browser animates the flip,
/// with `delay_secs` staggering siblings that reveal together.
pub fn fade_style(revealed: bool, delay_secs: f64) -> String {
    let (opacity, transform) = if revealed {
        ("1", "translateY(0)".to_string())
    } else {
        ("0", format!("translateY({REVEAL_SHIFT_PX}px)"))
    };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {REVEAL_SECS}s ease {delay_secs}s, \
         transform {REVEAL_SECS}s ease {delay_secs}s;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(machine: &mut Typewriter, ticks: usize) {
        for _ in 0..ticks {
            machine.tick();
        }
    }

    #[test]
    fn test_typewriter_types_one_char_per_tick() {
        let mut tw = Typewriter::new(&["Rust"]);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "R");
        tw.tick();
        assert_eq!(tw.text(), "Ru");
        tw.tick();
        assert_eq!(tw.text(), "Rus");
    }

    #[test]
    fn test_typewriter_full_phrase_enters_hold() {
        let mut tw = Typewriter::new(&["AB", "C"]);
        assert_eq!(tw.tick(), Typewriter::TYPE_MS);
        let delay = tw.tick();
        assert_eq!(tw.text(), "AB");
        assert_eq!(tw.phase(), TypewriterPhase::Holding);
        assert_eq!(delay, Typewriter::HOLD_MS);
    }

    #[test]
    fn test_typewriter_deletes_then_advances_phrase() {
        let mut tw = Typewriter::new(&["AB", "C"]);
        drain(&mut tw, 2); // "AB" held
        assert_eq!(tw.tick(), Typewriter::DELETE_MS); // hold expires
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);

        tw.tick();
        assert_eq!(tw.text(), "A");
        let delay = tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(delay, Typewriter::TYPE_MS);
    }

    #[test]
    fn test_typewriter_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(&["AB", "C"]);
        // AB: 2 types + hold + 2 deletes; C: 1 type + hold + 1 delete.
        drain(&mut tw, 5);
        assert_eq!(tw.phrase_index(), 1);
        drain(&mut tw, 3);
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_typewriter_delays_match_phase() {
        let mut tw = Typewriter::new(&["AB"]);
        let mut delays = Vec::new();
        for _ in 0..6 {
            delays.push(tw.tick());
        }
        assert_eq!(
            delays,
            vec![
                Typewriter::TYPE_MS,   // "A"
                Typewriter::HOLD_MS,   // "AB", full
                Typewriter::DELETE_MS, // hold expired
                Typewriter::DELETE_MS, // "A"
                Typewriter::TYPE_MS,   // "", wrapped
                Typewriter::TYPE_MS,   // "A" again
            ]
        );
    }

    #[test]
    fn test_typewriter_text_is_always_a_prefix() {
        let mut tw = Typewriter::new(&["Full-Stack Developer", "né", "日本語のフレーズ"]);
        let mut previous = 0usize;
        for _ in 0..200 {
            tw.tick();
            let text = tw.text();
            let phrase = ["Full-Stack Developer", "né", "日本語のフレーズ"][tw.phrase_index()];
            assert!(phrase.starts_with(text));
            let chars = text.chars().count();
            assert!(chars.abs_diff(previous) <= 1);
            previous = chars;
        }
    }

    #[test]
    fn test_typewriter_single_phrase_loops_forever() {
        let mut tw = Typewriter::new(&["Go"]);
        for _ in 0..50 {
            tw.tick();
            assert_eq!(tw.phrase_index(), 0);
        }
    }

    #[test]
    fn test_typewriter_empty_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        for _ in 0..10 {
            assert_eq!(tw.tick(), Typewriter::HOLD_MS);
            assert_eq!(tw.text(), "");
            assert_eq!(tw.phase(), TypewriterPhase::Typing);
        }
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(vec!["about", "experience", "projects"])
    }

    #[test]
    fn test_tracker_starts_at_first_section() {
        assert_eq!(tracker().active(), "about");
    }

    #[test]
    fn test_tracker_follows_intersecting_section() {
        let mut t = tracker();
        assert!(t.observe("experience", true));
        assert_eq!(t.active(), "experience");
    }

    #[test]
    fn test_tracker_reports_no_change_for_active_section() {
        let mut t = tracker();
        t.observe("experience", true);
        assert!(!t.observe("experience", true));
        assert_eq!(t.active(), "experience");
    }

    #[test]
    fn test_tracker_ignores_departures() {
        let mut t = SectionTracker::new(vec!["about", "experience"]);
        t.observe("experience", true);
        assert!(!t.observe("experience", false));
        assert_eq!(t.active(), "experience");
        // only another section intersecting moves the highlight
        assert!(t.observe("about", true));
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn test_tracker_skips_unknown_ids() {
        let mut t = tracker();
        assert!(!t.observe("footer", true));
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn test_tracker_last_entry_in_batch_wins() {
        // Two sections crossing in the same observer batch: delivery order
        // decides, no tie-breaking on position or coverage.
        let mut t = tracker();
        t.observe("experience", true);
        t.observe("about", true);
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn test_tracker_empty_registry_degrades_quietly() {
        let mut t = SectionTracker::new(Vec::new());
        assert_eq!(t.active(), "");
        assert!(!t.observe("about", true));
    }

    #[test]
    fn test_reveal_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_reveal_latch_never_unreveals() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_fade_style_hidden_sits_low_and_transparent() {
        let style = fade_style(false, 0.0);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(32px)"));
        assert!(style.contains("0.7s ease 0s"));
    }

    #[test]
    fn test_fade_style_revealed_rests_in_place() {
        let style = fade_style(true, 0.15);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
        assert!(style.contains("0.7s ease 0.15s"));
    }
}
