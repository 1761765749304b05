/// Scroll-synchronized section tracking
///
/// The page is a fixed stack of named sections. As the user scrolls, the
/// tracker decides which section counts as "in view" so the navigation bar
/// can highlight the matching entry.

/// The sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Tech,
    Contact,
}

impl Section {
    /// All sections, top to bottom. The tracker and the layout both iterate
    /// this order, so it is the single source of document order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Tech,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Tech => "Tech",
            Section::Contact => "Contact",
        }
    }
}

/// How far below the viewport top a section may start and still be treated
/// as active. The highlight flips a little before a section actually reaches
/// the top edge, which reads better while scrolling.
pub const SCROLL_LOOKAHEAD: f32 = 200.0;

/// Tracks the active section from scroll positions.
///
/// Holds the single active-section value. Mutated only by `track`; the
/// navigation view reads it to style the matching entry.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    /// Start at the top of the page.
    pub fn new() -> Self {
        SectionTracker {
            active: Section::Home,
        }
    }

    /// The section currently treated as in view.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// `tops` holds each section's top offset in document order, resolved by
    /// the caller at evaluation time since layout changes with window size.
    /// The last section whose top is at or above `offset + SCROLL_LOOKAHEAD`
    /// wins. Exact equality selects the section.
    ///
    /// Offsets above the first section leave the previous selection in
    /// place: the loop only overwrites on match.
    pub fn track(&mut self, offset: f32, tops: &[(Section, f32)]) {
        let probe = offset + SCROLL_LOOKAHEAD;

        for (section, top) in tops {
            if probe >= *top {
                self.active = *section;
            }
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops() -> [(Section, f32); 4] {
        [
            (Section::Home, 0.0),
            (Section::Projects, 800.0),
            (Section::Tech, 1600.0),
            (Section::Contact, 2400.0),
        ]
    }

    #[test]
    fn test_starts_at_home() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_top_of_page_is_home() {
        let mut tracker = SectionTracker::new();
        tracker.track(0.0, &tops());
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_lookahead_flips_before_section_top() {
        let mut tracker = SectionTracker::new();

        // 500 + 200 = 700, still short of the projects top at 800
        tracker.track(500.0, &tops());
        assert_eq!(tracker.active(), Section::Home);

        // 650 + 200 = 850, past the projects top
        tracker.track(650.0, &tops());
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_exact_equality_selects_section() {
        let mut tracker = SectionTracker::new();
        // 600 + 200 lands exactly on the projects top
        tracker.track(600.0, &tops());
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_last_matching_section_wins() {
        let mut tracker = SectionTracker::new();
        tracker.track(2300.0, &tops());
        assert_eq!(tracker.active(), Section::Contact);
    }

    #[test]
    fn test_above_all_sections_keeps_previous_selection() {
        let mut tracker = SectionTracker::new();
        tracker.track(2300.0, &tops());
        assert_eq!(tracker.active(), Section::Contact);

        // Every top sits below the probe position, so nothing matches and
        // the selection stays put instead of resetting to a default.
        let floating = [
            (Section::Home, 500.0),
            (Section::Projects, 1300.0),
            (Section::Tech, 2100.0),
            (Section::Contact, 2900.0),
        ];
        tracker.track(0.0, &floating);
        assert_eq!(tracker.active(), Section::Contact);
    }

    #[test]
    fn test_active_is_always_a_known_section() {
        let mut tracker = SectionTracker::new();
        for step in 0..300 {
            tracker.track(step as f32 * 17.0, &tops());
            assert!(Section::ALL.contains(&tracker.active()));
        }
    }
}
