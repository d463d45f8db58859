use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::core::app::{App, Screen};
use crate::core::session::ChatSession;
use crate::core::setup::SetupWizard;
use crate::ui::layout::{build_chat_lines, scroll_window};
use crate::ui::theme::Theme;

const HEADER_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 5;
const FOOTER_HEIGHT: u16 = 1;

/// Rows left for the transcript in a terminal `term_height` rows tall.
pub fn transcript_height(term_height: u16) -> u16 {
    term_height.saturating_sub(HEADER_HEIGHT + INPUT_HEIGHT + FOOTER_HEIGHT)
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let background = Block::default().style(Style::default().bg(app.ui.theme.background_color));
    f.render_widget(background, f.area());

    let loading_frame = app.ui.loading_frame();
    let App { screen, ui, .. } = app;
    match screen {
        Screen::Setup(wizard) => draw_setup(f, wizard, &ui.theme),
        Screen::Chat(session) => {
            let from_bottom = draw_chat(
                f,
                session,
                &ui.theme,
                loading_frame,
                ui.scroll_from_bottom,
            );
            ui.scroll_from_bottom = from_bottom;
        }
    }
}

fn draw_setup(f: &mut Frame, wizard: &SetupWizard, theme: &Theme) {
    let area = centered(f.area(), 64, 16);

    let mut lines = vec![
        Line::from(Span::styled("🦃 HotMessCoach", theme.title_style)),
        Line::from(""),
        Line::from(Span::styled(wizard.title(), theme.subtitle_style)),
    ];
    if let Some(subtitle) = wizard.subtitle() {
        lines.push(Line::from(Span::styled(subtitle, theme.hint_style)));
    }
    lines.push(Line::from(""));

    for (index, label) in wizard.option_labels().into_iter().enumerate() {
        let (marker, style) = if index == wizard.highlighted() {
            ("▶ ", theme.option_highlight_style)
        } else {
            ("  ", theme.option_style)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}. {label}", index + 1),
            style,
        )));
    }

    lines.push(Line::from(""));
    let hint = if wizard.recorded_bucket().is_some() {
        "↑/↓ move • Enter select • Esc back • Ctrl+C quit"
    } else {
        "↑/↓ move • Enter select • Ctrl+C quit"
    };
    lines.push(Line::from(Span::styled(hint, theme.hint_style)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .padding(Padding::horizontal(2));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left),
        area,
    );
}

/// Draw the chat screen. Returns the scroll distance after clamping it to
/// the transcript that was actually drawn.
fn draw_chat(
    f: &mut Frame,
    session: &mut ChatSession,
    theme: &Theme,
    loading_frame: usize,
    scroll_from_bottom: u16,
) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    draw_header(f, chunks[0], session, theme);

    let transcript = chunks[1];
    let inner_width = transcript.width.saturating_sub(2);
    let lines = build_chat_lines(
        session.messages(),
        session.is_busy(),
        loading_frame,
        inner_width,
        theme,
    );
    let (offset, from_bottom) = scroll_window(lines.len(), transcript.height, scroll_from_bottom);
    let messages = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((offset, 0));
    f.render_widget(messages, transcript);

    draw_input(f, chunks[2], session, theme);

    let hint = if session.is_busy() {
        "🦃 The coach is thinking… • PgUp/PgDn scroll • Ctrl+C quit"
    } else {
        "🦃 Type your question and let the chaos commence! • Enter send • Alt+Enter newline"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, theme.hint_style)),
        chunks[3],
    );

    from_bottom
}

fn draw_header(f: &mut Frame, area: Rect, session: &ChatSession, theme: &Theme) {
    let config = session.config();
    let title = " 🦃 HotMessCoach / Your Thanksgiving Survival Buddy";
    let details = format!(
        "{} family members • {} {} • Ctrl+R reset ",
        config.family_count,
        config.chaos_level.emoji(),
        config.chaos_level
    );
    let header = Line::from(vec![
        Span::raw(title),
        Span::raw("  "),
        Span::raw(details),
    ]);
    f.render_widget(Paragraph::new(header).style(theme.header_style), area);
}

fn draw_input(f: &mut Frame, area: Rect, session: &mut ChatSession, theme: &Theme) {
    let busy = session.is_busy();
    let textarea = session.textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style),
    );
    textarea.set_style(theme.input_text_style);
    textarea.set_placeholder_style(theme.input_placeholder_style);
    if busy {
        textarea.set_cursor_style(Style::default());
    } else {
        textarea.set_cursor_style(theme.input_cursor_style);
    }
    f.render_widget(&*textarea, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_actions, AppAction, AppInitConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::new(AppInitConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            theme: Theme::monochrome(),
        })
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| ui(f, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn setup_screen_shows_question_and_options() {
        let mut app = test_app();
        let screen = render(&mut app, 80, 24);
        assert!(screen.contains("How many family members"));
        assert!(screen.contains("Small but mighty"));
        assert!(screen.contains("God help you"));
    }

    #[test]
    fn chaos_step_shows_recorded_bucket() {
        let mut app = test_app();
        apply_actions(&mut app, [AppAction::WizardSelect { index: 3 }]);
        let screen = render(&mut app, 80, 24);
        assert!(screen.contains("Choose your chaos level"));
        assert!(screen.contains("(30+ people incoming!)"));
    }

    #[test]
    fn chat_screen_shows_header_greeting_and_placeholder() {
        let mut app = test_app();
        apply_actions(
            &mut app,
            [
                AppAction::WizardSelect { index: 1 },
                AppAction::WizardSelect { index: 1 },
            ],
        );
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("Your Thanksgiving Survival Buddy"));
        assert!(screen.contains("let the chaos commence"));
        assert!(screen.contains("chaos coordinator"));
        assert!(screen.contains("Tell the coach"));
    }

    #[test]
    fn transcript_height_leaves_room_for_chrome() {
        assert_eq!(transcript_height(24), 17);
        assert_eq!(transcript_height(4), 0);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = test_app();
        render(&mut app, 10, 3);
        apply_actions(
            &mut app,
            [
                AppAction::WizardSelect { index: 0 },
                AppAction::WizardSelect { index: 0 },
            ],
        );
        render(&mut app, 10, 3);
    }
}
