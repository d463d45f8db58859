use std::time::{Duration, Instant};

use crate::ui::theme::Theme;

const LOADING_FRAME: Duration = Duration::from_millis(300);

/// Presentation state that survives screen changes.
pub struct UiState {
    pub theme: Theme,
    pub exit_requested: bool,
    /// Lines scrolled back from the newest message; 0 follows the conversation.
    pub scroll_from_bottom: u16,
    pub pulse_start: Instant,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            exit_requested: false,
            scroll_from_bottom: 0,
            pulse_start: Instant::now(),
        }
    }

    pub fn is_following(&self) -> bool {
        self.scroll_from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_from_bottom = u16::MAX;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    pub fn restart_pulse(&mut self) {
        self.pulse_start = Instant::now();
    }

    /// Index of the highlighted dot in the loading bubble.
    pub fn loading_frame(&self) -> usize {
        (self.pulse_start.elapsed().as_millis() / LOADING_FRAME.as_millis()) as usize % 3
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
