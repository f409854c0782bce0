//! Scroll and hover state for the portfolio page.

pub const PROJECT_STEP_RATIO: f64 = 0.8;
pub const REVIEW_STEP_RATIO: f64 = 0.9;

/// Element geometry as reported by the host at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_width: f64,
    pub offset_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.offset_width).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    position: f64,
    step_ratio: f64,
}

impl Carousel {
    pub fn new(step_ratio: f64) -> Self {
        Self {
            position: 0.0,
            step_ratio,
        }
    }

    pub fn projects() -> Self {
        Self::new(PROJECT_STEP_RATIO)
    }

    pub fn reviews() -> Self {
        Self::new(REVIEW_STEP_RATIO)
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn next(&mut self, metrics: ScrollMetrics) -> f64 {
        let step = metrics.offset_width * self.step_ratio;
        self.position = (self.position + step).min(metrics.max_scroll());
        self.position
    }

    pub fn prev(&mut self, metrics: ScrollMetrics) -> f64 {
        let step = metrics.offset_width * self.step_ratio;
        self.position = (self.position - step).max(0.0);
        self.position
    }

    /// The user scrolled directly; resync the tracked position.
    pub fn on_scroll(&mut self, scroll_left: f64) {
        self.position = scroll_left;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_trigger_enter(&mut self) {
        self.open = true;
    }

    pub fn on_container_leave(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: ScrollMetrics = ScrollMetrics {
        scroll_width: 1000.0,
        offset_width: 400.0,
    };

    #[test]
    fn test_next_steps_by_ratio() {
        let mut carousel = Carousel::projects();
        assert_eq!(carousel.next(METRICS), 320.0);
    }

    #[test]
    fn test_next_clamps_to_scrollable_width() {
        let mut carousel = Carousel::projects();
        carousel.next(METRICS);
        assert_eq!(carousel.next(METRICS), 600.0);
        assert_eq!(carousel.next(METRICS), 600.0);
    }

    #[test]
    fn test_prev_clamps_to_zero() {
        let mut carousel = Carousel::reviews();
        assert_eq!(carousel.prev(METRICS), 0.0);
        carousel.on_scroll(500.0);
        assert_eq!(carousel.prev(METRICS), 140.0);
        assert_eq!(carousel.prev(METRICS), 0.0);
    }

    #[test]
    fn test_content_narrower_than_viewport() {
        let mut carousel = Carousel::projects();
        let metrics = ScrollMetrics {
            scroll_width: 300.0,
            offset_width: 400.0,
        };
        assert_eq!(carousel.next(metrics), 0.0);
    }

    #[test]
    fn test_dropdown_hover() {
        let mut dropdown = Dropdown::default();
        assert!(!dropdown.is_open());
        dropdown.on_trigger_enter();
        assert!(dropdown.is_open());
        dropdown.on_container_leave();
        assert!(!dropdown.is_open());
    }
}
