// ui/carousel.rs - Hero carousel index with pause-aware autoplay

use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    pub current: usize,
    pub paused: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// New slide list; keeps the index when it is still valid
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Autoplay timer fired; returns whether the slide changed
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut carousel = CarouselState::new(3);
        carousel.previous();
        assert_eq!(carousel.current, 2);
        carousel.next();
        assert_eq!(carousel.current, 0);
        carousel.go_to(1);
        assert_eq!(carousel.current, 1);
        carousel.go_to(9);
        assert_eq!(carousel.current, 1);
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut carousel = CarouselState::new(2);
        assert!(carousel.tick());
        assert_eq!(carousel.current, 1);

        carousel.paused = true;
        assert!(!carousel.tick());
        assert_eq!(carousel.current, 1);
    }

    #[test]
    fn test_single_slide_does_not_autoplay() {
        let mut carousel = CarouselState::new(1);
        assert!(!carousel.tick());
    }

    #[test]
    fn test_shrinking_resets_index() {
        let mut carousel = CarouselState::new(5);
        carousel.go_to(4);
        carousel.set_len(2);
        assert_eq!(carousel.current, 0);
        assert!(!carousel.is_empty());
    }
}
