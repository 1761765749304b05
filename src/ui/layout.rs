/// Page layout arithmetic
///
/// The section tracker needs every section's top offset, and the view needs
/// every section's height. Both come from here, computed with the same
/// constants, so the highlight can never disagree with what is on screen.
///
/// Heights are deterministic: the hero fills the scroll viewport (with a
/// floor), projects and tech derive from content counts and a responsive
/// column breakpoint, contact is fixed.

use iced::Size;

use crate::content::Content;
use crate::state::section::Section;

/// Height of the navigation bar, which sits above the scroll viewport.
pub const NAV_HEIGHT: f32 = 64.0;

/// Vertical padding inside each section.
pub const SECTION_PADDING: f32 = 48.0;

/// Title + subtitle block at the top of a section.
pub const SECTION_HEADER: f32 = 150.0;

pub const HERO_MIN_HEIGHT: f32 = 620.0;

pub const CARD_HEIGHT: f32 = 640.0;
pub const CARD_GAP: f32 = 28.0;

pub const CATEGORY_HEIGHT: f32 = 220.0;
pub const CATEGORY_GAP: f32 = 24.0;

pub const CONTACT_HEIGHT: f32 = 560.0;

/// Below this viewport width, project cards stack in one column.
pub const CARD_BREAKPOINT: f32 = 1040.0;

/// Tech category columns by viewport width.
pub const TECH_WIDE_BREAKPOINT: f32 = 1180.0;
pub const TECH_NARROW_BREAKPOINT: f32 = 700.0;

pub fn cards_per_row(viewport_width: f32) -> usize {
    if viewport_width >= CARD_BREAKPOINT {
        2
    } else {
        1
    }
}

pub fn tech_columns(viewport_width: f32) -> usize {
    if viewport_width >= TECH_WIDE_BREAKPOINT {
        4
    } else if viewport_width >= TECH_NARROW_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Resolved heights for every section, in document order.
#[derive(Debug, Clone)]
pub struct PageLayout {
    sections: [(Section, f32); 4],
}

/// Compute the layout for the current content and scroll-viewport size.
pub fn resolve(content: &Content, viewport: Size) -> PageLayout {
    let hero = viewport.height.max(HERO_MIN_HEIGHT);

    let project_rows = rows_for(content.projects.len(), cards_per_row(viewport.width));
    let projects = section_height(stacked(project_rows, CARD_HEIGHT, CARD_GAP));

    let tech_rows = rows_for(content.tech.len(), tech_columns(viewport.width));
    let tech = section_height(stacked(tech_rows, CATEGORY_HEIGHT, CATEGORY_GAP));

    PageLayout {
        sections: [
            (Section::Home, hero),
            (Section::Projects, projects),
            (Section::Tech, tech),
            (Section::Contact, CONTACT_HEIGHT),
        ],
    }
}

fn rows_for(items: usize, per_row: usize) -> usize {
    items.div_ceil(per_row.max(1))
}

/// Height of `rows` stacked blocks with gaps between them.
fn stacked(rows: usize, row_height: f32, gap: f32) -> f32 {
    let rows = rows as f32;
    rows * row_height + (rows - 1.0).max(0.0) * gap
}

fn section_height(body: f32) -> f32 {
    SECTION_PADDING * 2.0 + SECTION_HEADER + body
}

impl PageLayout {
    pub fn height_of(&self, section: Section) -> f32 {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, height)| *height)
            .unwrap_or(0.0)
    }

    /// Top offset of a section, as the prefix sum of the heights above it.
    /// A section missing from the layout resolves to None, which callers
    /// treat as a benign no-op.
    pub fn top_of(&self, section: Section) -> Option<f32> {
        let mut top = 0.0;

        for (s, height) in &self.sections {
            if *s == section {
                return Some(top);
            }
            top += height;
        }

        None
    }

    /// Every section's top offset in document order, for the tracker.
    pub fn section_tops(&self) -> [(Section, f32); 4] {
        let mut tops = [(Section::Home, 0.0); 4];
        let mut top = 0.0;

        for (i, (section, height)) in self.sections.iter().enumerate() {
            tops[i] = (*section, top);
            top += height;
        }

        tops
    }

    pub fn total_height(&self) -> f32 {
        self.sections.iter().map(|(_, height)| height).sum()
    }

    /// Largest scroll offset the page supports in the given viewport;
    /// programmatic scroll targets clamp to this.
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height() - viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn layout(width: f32, height: f32) -> PageLayout {
        let content = Content::load().unwrap();
        resolve(&content, Size::new(width, height))
    }

    #[test]
    fn test_home_starts_at_zero() {
        let layout = layout(1280.0, 800.0);
        assert_eq!(layout.top_of(Section::Home), Some(0.0));
    }

    #[test]
    fn test_tops_are_increasing_and_finite() {
        for (width, height) in [(420.0, 700.0), (900.0, 800.0), (1280.0, 900.0), (1920.0, 1080.0)] {
            let layout = layout(width, height);
            let tops = layout.section_tops();

            let mut previous = -1.0;
            for (section, top) in tops {
                assert!(top.is_finite(), "{:?} top is not finite", section);
                assert!(top >= 0.0);
                assert!(top > previous, "{:?} top does not increase", section);
                previous = top;
            }
        }
    }

    #[test]
    fn test_tops_match_prefix_sums() {
        let layout = layout(1280.0, 800.0);

        let expected = layout.height_of(Section::Home);
        assert_eq!(layout.top_of(Section::Projects), Some(expected));

        let expected = expected + layout.height_of(Section::Projects);
        assert_eq!(layout.top_of(Section::Tech), Some(expected));
    }

    #[test]
    fn test_hero_fills_tall_viewports() {
        let layout = layout(1280.0, 1000.0);
        assert_eq!(layout.height_of(Section::Home), 1000.0);

        let layout = self::layout(1280.0, 400.0);
        assert_eq!(layout.height_of(Section::Home), HERO_MIN_HEIGHT);
    }

    #[test]
    fn test_narrow_viewport_stacks_cards() {
        let wide = layout(1280.0, 800.0);
        let narrow = layout(800.0, 800.0);

        // One card per row doubles the rows, so the section grows.
        assert!(narrow.height_of(Section::Projects) > wide.height_of(Section::Projects));
    }

    #[test]
    fn test_max_scroll_never_negative() {
        let layout = layout(1280.0, 800.0);
        assert!(layout.max_scroll(100_000.0) == 0.0);
        assert!(layout.max_scroll(800.0) > 0.0);
    }
}
