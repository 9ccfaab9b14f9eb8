use crate::config::NAVBAR_SCROLL_THRESHOLD_PX;

/// Section ids and nav labels, in page order.
pub const LANDING_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("programs", "Programs"),
    ("services", "Services"),
    ("contact", "Contact"),
];

/// Layout of one section, measured fresh on every tracking pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn viewport_midpoint(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// Index of the first section holding `midpoint`.
pub fn section_at(midpoint: f64, bounds: &[SectionBounds]) -> Option<usize> {
    bounds.iter().position(|section| section.contains(midpoint))
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f64]) -> Vec<SectionBounds> {
        let mut top = 0.0;
        heights
            .iter()
            .map(|h| {
                let b = SectionBounds::new(top, *h);
                top += h;
                b
            })
            .collect()
    }

    #[test]
    fn midpoint_picks_containing_section() {
        let bounds = stacked(&[800.0, 800.0, 800.0]);
        assert_eq!(section_at(viewport_midpoint(0.0, 800.0), &bounds), Some(0));
        assert_eq!(section_at(viewport_midpoint(500.0, 800.0), &bounds), Some(1));
        assert_eq!(section_at(viewport_midpoint(2000.0, 800.0), &bounds), None);
    }

    #[test]
    fn section_bottom_edge_is_exclusive() {
        let bounds = stacked(&[100.0, 100.0]);
        assert_eq!(section_at(100.0, &bounds), Some(1));
        assert_eq!(section_at(99.999, &bounds), Some(0));
    }

    #[test]
    fn zero_height_sections_never_match() {
        let bounds = vec![SectionBounds::default(), SectionBounds::new(0.0, 50.0)];
        assert_eq!(section_at(0.0, &bounds), Some(1));
    }

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!navbar_scrolled(100.0));
        assert!(navbar_scrolled(100.5));
        assert!(!navbar_scrolled(0.0));
    }
}
