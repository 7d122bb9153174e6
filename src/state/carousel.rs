//! Index state for the values and news carousels

/// Circular index over the company values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesCarousel {
    index: usize,
    len: usize,
}

impl ValuesCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// News cards with at most one active (expanded) card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFeed {
    active: Option<usize>,
    len: usize,
}

impl NewsFeed {
    pub fn new(len: usize) -> Self {
        Self { active: None, len }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Activate the next card; with none active, the first one
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = Some(match self.active {
            None => 0,
            Some(i) => (i + 1) % self.len,
        });
    }

    /// Activate the previous card; with none active, the last one
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = Some(match self.active {
            None => self.len - 1,
            Some(i) => (i + self.len - 1) % self.len,
        });
    }

    /// Activate `index`, or clear it when it is already active
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn blur(&mut self) {
        self.active = None;
    }
}

/// Direction decided by a finished swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

/// Horizontal drag gesture recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<u16>,
    end: Option<u16>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
            end: None,
        }
    }

    pub fn begin(&mut self, column: u16) {
        self.start = Some(column);
        self.end = Some(column);
    }

    pub fn track(&mut self, column: u16) {
        if self.start.is_some() {
            self.end = Some(column);
        }
    }

    /// Finish the gesture; dragging left past the threshold means "next"
    pub fn release(&mut self) -> Option<Swipe> {
        let (start, end) = (self.start.take()?, self.end.take()?);
        let displacement = i32::from(start) - i32::from(end);
        let threshold = i32::from(self.threshold);
        if displacement > threshold {
            Some(Swipe::Next)
        } else if displacement < -threshold {
            Some(Swipe::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod values_carousel {
        use super::*;

        #[test]
        fn test_next_wraps() {
            let mut carousel = ValuesCarousel::new(5);
            for _ in 0..5 {
                carousel.next();
            }
            assert_eq!(carousel.index(), 0);
        }

        #[test]
        fn test_prev_wraps_to_last() {
            let mut carousel = ValuesCarousel::new(5);
            carousel.prev();
            assert_eq!(carousel.index(), 4);
        }

        #[test]
        fn test_empty_carousel_stays_put() {
            let mut carousel = ValuesCarousel::new(0);
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), 0);
        }
    }

    mod news_feed {
        use super::*;

        #[test]
        fn test_next_from_none_is_first() {
            let mut feed = NewsFeed::new(4);
            feed.next();
            assert_eq!(feed.active(), Some(0));
        }

        #[test]
        fn test_prev_from_none_is_last() {
            let mut feed = NewsFeed::new(4);
            feed.prev();
            assert_eq!(feed.active(), Some(3));
        }

        #[test]
        fn test_wrapping() {
            let mut feed = NewsFeed::new(4);
            feed.toggle(3);
            feed.next();
            assert_eq!(feed.active(), Some(0));
            feed.prev();
            assert_eq!(feed.active(), Some(3));
        }

        #[test]
        fn test_toggle_clears_active() {
            let mut feed = NewsFeed::new(4);
            feed.toggle(1);
            assert!(feed.is_active(1));
            feed.toggle(1);
            assert_eq!(feed.active(), None);
        }

        #[test]
        fn test_toggle_out_of_range_is_ignored() {
            let mut feed = NewsFeed::new(4);
            feed.toggle(9);
            assert_eq!(feed.active(), None);
        }

        #[test]
        fn test_blur() {
            let mut feed = NewsFeed::new(4);
            feed.next();
            feed.blur();
            assert_eq!(feed.active(), None);
        }
    }

    mod swipe_tracker {
        use super::*;

        #[test]
        fn test_left_drag_is_next() {
            let mut swipe = SwipeTracker::new(6);
            swipe.begin(40);
            swipe.track(30);
            assert_eq!(swipe.release(), Some(Swipe::Next));
        }

        #[test]
        fn test_right_drag_is_prev() {
            let mut swipe = SwipeTracker::new(6);
            swipe.begin(10);
            swipe.track(20);
            assert_eq!(swipe.release(), Some(Swipe::Prev));
        }

        #[test]
        fn test_threshold_is_exclusive() {
            let mut swipe = SwipeTracker::new(6);
            swipe.begin(20);
            swipe.track(14);
            assert_eq!(swipe.release(), None);
        }

        #[test]
        fn test_release_without_begin() {
            let mut swipe = SwipeTracker::new(6);
            swipe.track(3);
            assert_eq!(swipe.release(), None);
        }

        #[test]
        fn test_release_resets() {
            let mut swipe = SwipeTracker::new(6);
            swipe.begin(40);
            swipe.track(0);
            swipe.release();
            assert_eq!(swipe.release(), None);
        }
    }
}
