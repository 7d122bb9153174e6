//! Application state definitions

use super::carousel::{NewsFeed, SwipeTracker, ValuesCarousel};
use super::forms::RequestForm;
use super::notifications::{Notices, Notification, NotificationSurface};
use crate::content::{NEWS, VALUES};
use tracing::debug;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Intro banner animation
    Splash,
    #[default]
    Hero,
    Values,
    News,
    InterviewForm,
}

impl View {
    /// Views listed in the navigation sidebar, in key order `1`-`4`
    pub const NAV: [View; 4] = [Self::Hero, Self::Values, Self::News, Self::InterviewForm];

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::InterviewForm)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Hero => "Home",
            Self::Values => "Values",
            Self::News => "News",
            Self::InterviewForm => "Interview",
        }
    }

    /// Sidebar shortcut: `'1'` is Home
    pub fn from_shortcut(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::NAV.get(index).copied()
    }
}

/// Buttons on the hero screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroButton {
    #[default]
    WhyUs,
    BookInterview,
}

impl HeroButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::WhyUs => Self::BookInterview,
            Self::BookInterview => Self::WhyUs,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhyUs => "Why us",
            Self::BookInterview => "Book an interview",
        }
    }

    /// View the button leads to
    pub fn target(&self) -> View {
        match self {
            Self::WhyUs => View::Values,
            Self::BookInterview => View::InterviewForm,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Presentational state
    pub hero_button: HeroButton,
    pub values: ValuesCarousel,
    pub news: NewsFeed,
    pub swipe: SwipeTracker,

    // Interview request
    pub form: RequestForm,

    // Notifications
    pub notices: Notices,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(6)
    }
}

impl AppState {
    pub fn new(swipe_threshold: u16) -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            hero_button: HeroButton::default(),
            values: ValuesCarousel::new(VALUES.len()),
            news: NewsFeed::new(NEWS.len()),
            swipe: SwipeTracker::new(swipe_threshold),
            form: RequestForm::new(),
            notices: Notices::default(),
        }
    }

    /// Switch views, remembering the current one
    pub fn navigate(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        debug!("Navigate {:?} -> {:?}", self.current_view, view);
        self.view_history.push(self.current_view);
        if self.current_view == View::News {
            self.news.blur();
        }
        self.current_view = view;
    }

    /// Return to the previous view, never back into the intro
    pub fn go_back(&mut self) {
        if self.current_view == View::News {
            self.news.blur();
        }
        while let Some(view) = self.view_history.pop() {
            if view == View::Splash || view == self.current_view {
                continue;
            }
            self.current_view = view;
            return;
        }
        self.current_view = View::Hero;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notices.notify(Notification::error(message));
    }

    pub fn has_errors(&self) -> bool {
        self.notices.has_errors()
    }

    pub fn current_error(&self) -> Option<&Notification> {
        self.notices.current_error()
    }

    pub fn dismiss_error(&mut self) {
        self.notices.dismiss_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation {
        use super::*;

        #[test]
        fn test_navigate_and_back() {
            let mut state = AppState::default();
            state.navigate(View::Values);
            state.navigate(View::InterviewForm);
            state.go_back();
            assert_eq!(state.current_view, View::Values);
            state.go_back();
            assert_eq!(state.current_view, View::Hero);
        }

        #[test]
        fn test_go_back_skips_splash() {
            let mut state = AppState {
                current_view: View::Splash,
                ..AppState::default()
            };
            state.navigate(View::Hero);
            state.navigate(View::News);
            state.go_back();
            state.go_back();
            assert_eq!(state.current_view, View::Hero);
        }

        #[test]
        fn test_navigate_to_same_view_is_noop() {
            let mut state = AppState::default();
            state.navigate(View::Hero);
            assert!(state.view_history.is_empty());
        }

        #[test]
        fn test_leaving_news_blurs_card() {
            let mut state = AppState::default();
            state.navigate(View::News);
            state.news.next();
            state.navigate(View::Values);
            assert_eq!(state.news.active(), None);
        }

        #[test]
        fn test_shortcuts() {
            assert_eq!(View::from_shortcut('1'), Some(View::Hero));
            assert_eq!(View::from_shortcut('4'), Some(View::InterviewForm));
            assert_eq!(View::from_shortcut('0'), None);
            assert_eq!(View::from_shortcut('5'), None);
        }

        #[test]
        fn test_hero_buttons() {
            let mut button = HeroButton::default();
            assert_eq!(button.target(), View::Values);
            button.toggle();
            assert_eq!(button.target(), View::InterviewForm);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_push_error_queues_in_order() {
            let mut state = AppState::default();
            state.push_error("first");
            state.push_error("second");
            assert!(state.has_errors());
            assert_eq!(state.current_error().map(|n| n.title.as_str()), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error().map(|n| n.title.as_str()), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
