//! Application state and core logic

use crate::config::{SinkKind, TuiConfig};
use crate::state::{
    dropped_path, AppState, AttachmentCandidate, AttachmentError, Form, FormSlot, Notification,
    NotificationSurface, SplashState, Swipe, View,
};
use crate::submission::{LogSink, OutboxSink, SubmissionSink, SubmitError, Submitter};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Runs submissions of the interview form
    pub submitter: Submitter,
    /// Whether the app should quit
    quit: bool,
    /// Intro animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App with the sink chosen in `config`
    pub fn new(config: &TuiConfig) -> Self {
        let sink: Arc<dyn SubmissionSink> = match config.sink() {
            SinkKind::Log => Arc::new(LogSink::new(config.simulated_latency())),
            SinkKind::Outbox => Arc::new(OutboxSink::new(config.outbox_dir())),
        };
        Self::with_sink(sink, config)
    }

    pub fn with_sink(sink: Arc<dyn SubmissionSink>, config: &TuiConfig) -> Self {
        let mut state = AppState::new(config.swipe_threshold());
        let splash_state = if config.skip_intro() {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        let submitter = Submitter::new(sink, config.submission_timeout());
        info!("Submissions go to {}", submitter.sink_description());

        Self {
            state,
            submitter,
            quit: false,
            splash_state,
            terminal_size: None,
        }
    }

    /// Update intro animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Hero;
                return true;
            }
        }
        false
    }

    /// Check if in intro
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    /// Per-frame housekeeping: expire the toast, apply finished submissions
    pub fn tick(&mut self) {
        self.state.notices.expire_toast();
        self.poll_submission();
    }

    /// Apply the outcome of a finished submission, if there is one
    pub fn poll_submission(&mut self) {
        let _ = self
            .submitter
            .poll(&mut self.state.form, &mut self.state.notices);
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Wait for a submission still in flight so quitting never drops it
    pub async fn settle_pending(&mut self) {
        if self.submitter.is_busy() {
            info!("Waiting for the in-flight submission before exit");
            let _ = self
                .submitter
                .settle_next(&mut self.state.form, &mut self.state.notices)
                .await;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::InterviewForm => self.handle_form_key(key)?,
            view => {
                if !self.handle_global_key(key) {
                    match view {
                        View::Hero => self.handle_hero_key(key),
                        View::Values => self.handle_values_key(key),
                        View::News => self.handle_news_key(key),
                        View::Splash | View::InterviewForm => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Keys shared by the landing views; returns whether the key was used
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('i') => self.state.navigate(View::InterviewForm),
            KeyCode::Char(c) => match View::from_shortcut(c) {
                Some(view) => self.state.navigate(view),
                None => return false,
            },
            _ => return false,
        }
        true
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_hero_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.hero_button.toggle()
            }
            KeyCode::Char('h') | KeyCode::Char('l') => self.state.hero_button.toggle(),
            KeyCode::Enter => self.state.navigate(self.state.hero_button.target()),
            _ => {}
        }
    }

    fn handle_values_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.values.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.state.values.next(),
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    fn handle_news_key(&mut self, key: KeyEvent) {
        let news = &mut self.state.news;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => news.prev(),
            KeyCode::Right | KeyCode::Char('l') => news.next(),
            KeyCode::Enter => match news.active() {
                Some(i) => news.toggle(i),
                None => news.next(),
            },
            KeyCode::Esc if news.active().is_some() => news.blur(),
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        let slot = form.active_slot();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Down if !slot.is_multiline() => form.next_field(),
            KeyCode::Up if !slot.is_multiline() => form.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('v')
                if ctrl || key.modifiers.contains(crate::platform::PASTE_MODIFIER) =>
            {
                self.paste_clipboard()
            }
            KeyCode::Left if slot == FormSlot::EmploymentType => form.cycle_employment_type(false),
            KeyCode::Right if slot == FormSlot::EmploymentType => form.cycle_employment_type(true),
            KeyCode::Delete if slot == FormSlot::Attachment => {
                if let Some(removed) = form.remove_attachment() {
                    debug!("Removed attachment {}", removed.name);
                    self.state
                        .notices
                        .notify(Notification::info("Résumé removed").with_detail(removed.name));
                }
            }
            KeyCode::Enter => match slot {
                FormSlot::Submit => self.submit(),
                FormSlot::Questions => form.newline(),
                FormSlot::Attachment if !form.path_input().trim().is_empty() => {
                    self.attach_path_input()
                }
                _ => form.next_field(),
            },
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Submit the interview form through the orchestrator
    pub fn submit(&mut self) {
        match self.submitter.submit(&mut self.state.form) {
            Ok(id) => debug!(submission_id = %id, "Submission started"),
            Err(SubmitError::NotSubmittable(errors)) => {
                for error in errors.iter() {
                    debug!(field = %error.field, rule = ?error.rule, "Submit refused: {}", error.message);
                }
                self.state.notices.notify(
                    Notification::info("Check the form")
                        .with_detail(format!(
                            "{} field(s) need attention: {}",
                            errors.len(),
                            errors.fields().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
                        )),
                );
            }
            Err(SubmitError::InProgress) => {
                self.state
                    .notices
                    .notify(Notification::info("Already sending"));
            }
            Err(e) => {
                warn!("Submit failed to start: {e}");
                self.push_error(e.to_string());
            }
        }
    }

    /// Attach the path typed into the attachment slot (the picker path)
    fn attach_path_input(&mut self) {
        let input = self.state.form.take_path_input();
        let path = dropped_path(&input).unwrap_or_else(|| PathBuf::from(input.trim()));
        self.attach_file(&path);
    }

    /// Single entry point for picked and dropped files
    pub fn attach_file(&mut self, path: &Path) {
        let result = AttachmentCandidate::from_path(path)
            .and_then(|candidate| self.state.form.attach(candidate).map(|a| a.name.clone()));

        match result {
            Ok(name) => {
                info!("Attached {}", path.display());
                self.state
                    .notices
                    .notify(Notification::success("Résumé attached").with_detail(name));
            }
            Err(e) => {
                warn!("Rejected attachment {}: {e}", path.display());
                let notification = match &e {
                    AttachmentError::FileTooLarge { .. }
                    | AttachmentError::UnsupportedFileType { .. } => Notification::error(e.to_string()),
                    AttachmentError::Unreadable { .. } | AttachmentError::NotAFile(_) => {
                        Notification::error("Cannot attach file").with_detail(e.to_string())
                    }
                };
                self.state.notices.notify(notification);
            }
        }
    }

    /// Handle pasted text; a pasted file path in the form counts as a drop
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() || !self.state.current_view.is_form_view() {
            return;
        }
        match dropped_path(text) {
            Some(path) => self.attach_file(&path),
            None => self.state.form.insert_text(text),
        }
    }

    fn paste_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.handle_paste(&text),
            Err(e) => {
                warn!("Clipboard read failed: {e}");
                self.push_error(format!("Clipboard unavailable: {e}"));
            }
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || self.in_splash() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
                if matches!(self.state.current_view, View::Values | View::News) {
                    self.state.swipe.begin(mouse.column);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.state.swipe.track(mouse.column),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(swipe) = self.state.swipe.release() {
                    self.apply_swipe(swipe);
                }
            }
            MouseEventKind::ScrollDown => self.apply_swipe(Swipe::Next),
            MouseEventKind::ScrollUp => self.apply_swipe(Swipe::Prev),
            _ => {}
        }
        Ok(())
    }

    fn apply_swipe(&mut self, swipe: Swipe) {
        match (self.state.current_view, swipe) {
            (View::Values, Swipe::Next) => self.state.values.next(),
            (View::Values, Swipe::Prev) => self.state.values.prev(),
            (View::News, Swipe::Next) => self.state.news.next(),
            (View::News, Swipe::Prev) => self.state.news.prev(),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        let (sidebar, main) = ui::create_layout(self.screen());

        if sidebar.contains(position) {
            let buttons = ui::sidebar_button_areas(sidebar);
            if let Some(idx) = buttons.iter().position(|b| b.contains(position)) {
                match View::NAV.get(idx) {
                    Some(view) => self.state.navigate(*view),
                    None if !self.state.current_view.is_form_view() => {
                        self.state.navigate(View::InterviewForm)
                    }
                    None => {}
                }
            }
            return;
        }

        match self.state.current_view {
            View::Hero => {
                let buttons = ui::hero::button_areas(main);
                if buttons[0].contains(position) {
                    self.state.navigate(View::Values);
                } else if buttons[1].contains(position) {
                    self.state.navigate(View::InterviewForm);
                }
            }
            View::News => {
                let cards = ui::news::card_areas(main);
                match cards.iter().position(|c| c.contains(position)) {
                    Some(i) => self.state.news.toggle(i),
                    None => self.state.news.blur(),
                }
            }
            View::InterviewForm => {
                let slots = ui::forms::request_form_slot_areas(main);
                if let Some(i) = slots.iter().position(|s| s.contains(position)) {
                    let slot = FormSlot::from_index(i);
                    self.state.form.focus(slot);
                    if slot == FormSlot::Submit {
                        self.submit();
                    }
                }
            }
            View::Splash | View::Values => {}
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
