//! Page-level scroll bookkeeping: progress bar, nav state and the section anchors.

pub const SCROLLED_OFFSET_PX: f64 = 20.0;
pub const SCROLL_TO_TOP_OFFSET_PX: f64 = 300.0;
/// How far below the top edge a section has to reach to count as active.
pub const SECTION_PROBE_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::Skills => "#skills",
            Self::Projects => "#projects",
            Self::Experience => "#experience",
            Self::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable distance already covered, clamped to `0..=100`.
    pub fn progress_percent(&self) -> f64 {
        let total = self.scroll_height - self.viewport_height;
        if total <= 0.0 || !total.is_finite() || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / total * 100.0).clamp(0.0, 100.0)
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

pub fn shows_scroll_to_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TO_TOP_OFFSET_PX
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

/// First section whose box contains the probe line, in document order.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let probe = scroll_y + SECTION_PROBE_PX;
    bounds
        .iter()
        .find(|b| probe >= b.offset_top && probe < b.offset_top + b.offset_height)
        .map(|b| b.section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        let heights = [800.0, 600.0, 1200.0, 900.0, 700.0];
        let mut top = 0.0;
        SectionId::ALL
            .iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = SectionBounds {
                    section: *section,
                    offset_top: top,
                    offset_height: height,
                };
                top += height;
                bounds
            })
            .collect()
    }

    #[test]
    fn test_anchors() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
        assert_eq!(SectionId::default(), SectionId::Home);
        assert_eq!(SectionId::Experience.label(), "Experience");
    }

    #[test]
    fn test_progress_percent() {
        let metrics = ScrollMetrics {
            scroll_y: 500.0,
            scroll_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(metrics.progress_percent(), 25.0);

        let overscrolled = ScrollMetrics {
            scroll_y: 2500.0,
            ..metrics
        };
        assert_eq!(overscrolled.progress_percent(), 100.0);

        let bounced = ScrollMetrics {
            scroll_y: -40.0,
            ..metrics
        };
        assert_eq!(bounced.progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_on_page_that_cannot_scroll() {
        let metrics = ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 900.0,
            viewport_height: 900.0,
        };
        assert_eq!(metrics.progress_percent(), 0.0);
        assert_eq!(ScrollMetrics::default().progress_percent(), 0.0);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(!shows_scroll_to_top(300.0));
        assert!(shows_scroll_to_top(301.0));
    }

    #[test]
    fn test_active_section() {
        let bounds = layout();
        assert_eq!(active_section(0.0, &bounds), Some(SectionId::Home));
        // probe sits 100px below the top edge
        assert_eq!(active_section(699.0, &bounds), Some(SectionId::Home));
        assert_eq!(active_section(700.0, &bounds), Some(SectionId::Skills));
        assert_eq!(active_section(1400.0, &bounds), Some(SectionId::Projects));
        assert_eq!(active_section(3500.0, &bounds), Some(SectionId::Contact));
        assert_eq!(active_section(10_000.0, &bounds), None);
        assert_eq!(active_section(0.0, &[]), None);
    }
}
