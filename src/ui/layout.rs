//! Line building for the chat transcript.
//!
//! Messages are pre-wrapped here and rendered without ratatui's own wrapping,
//! so the line count used for scrolling always matches what is drawn.

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::message::Message;
use crate::ui::theme::Theme;

const COACH_GUTTER: &str = "│ ";
const USER_GUTTER: &str = " │";

/// Word-wrap `text` to `width` columns. Explicit newlines are kept, runs of
/// spaces collapse, and words longer than the width are broken.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if line_width > 0 && line_width + ch_width > width {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        out.push(line);
    }

    out
}

/// Widest a bubble may grow inside a transcript of `width` columns.
pub fn bubble_width(width: u16) -> usize {
    let width = width as usize;
    let gutter = UnicodeWidthStr::width(COACH_GUTTER);
    (width * 3 / 4).max(12).min(width).saturating_sub(gutter).max(1)
}

fn caption(message: &Message) -> String {
    let who = if message.is_user() { "You" } else { "Coach" };
    format!("{who} · {}", message.timestamp.format("%H:%M"))
}

fn loading_dots(frame: usize) -> String {
    (0..3)
        .map(|i| if i == frame % 3 { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the display lines for the transcript, including the animated
/// loading bubble while a reply is outstanding.
pub fn build_chat_lines(
    messages: &[Message],
    busy: bool,
    loading_frame: usize,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let wrap_width = bubble_width(width);
    let mut lines = Vec::new();

    for message in messages {
        let (alignment, text_style) = if message.is_user() {
            (Alignment::Right, theme.user_text_style)
        } else {
            (Alignment::Left, theme.coach_text_style)
        };

        lines.push(Line::from(Span::styled(caption(message), theme.hint_style)).alignment(alignment));
        for chunk in wrap_text(&message.text, wrap_width) {
            let line = if message.is_user() {
                Line::from(vec![
                    Span::styled(format!(" {chunk} "), text_style),
                    Span::styled(USER_GUTTER, theme.border_style),
                ])
            } else {
                Line::from(vec![
                    Span::styled(COACH_GUTTER, theme.border_style),
                    Span::styled(chunk, text_style),
                ])
            };
            lines.push(line.alignment(alignment));
        }
        lines.push(Line::from(""));
    }

    if busy {
        lines.push(Line::from(vec![
            Span::styled(COACH_GUTTER, theme.border_style),
            Span::styled(loading_dots(loading_frame), theme.loading_style),
        ]));
    }

    lines
}

/// Scroll offset from the top, given how many lines the user has scrolled
/// back from the newest one. Returns the offset and the clamped distance.
pub fn scroll_window(total_lines: usize, visible: u16, from_bottom: u16) -> (u16, u16) {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_offset = total.saturating_sub(visible);
    let from_bottom = from_bottom.min(max_offset);
    (max_offset - from_bottom, from_bottom)
}
