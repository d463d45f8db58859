use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chrome
    pub title_style: Style,
    pub subtitle_style: Style,
    pub header_style: Style,
    pub border_style: Style,
    pub hint_style: Style,

    // Wizard options
    pub option_style: Style,
    pub option_highlight_style: Style,

    // Chat bubbles
    pub user_text_style: Style,
    pub coach_text_style: Style,
    pub loading_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
    pub input_cursor_style: Style,
}

const ORANGE: Color = Color::Rgb(0xd4, 0x60, 0x1d);
const RUST: Color = Color::Rgb(0xa0, 0x47, 0x1f);
const BROWN: Color = Color::Rgb(0x8b, 0x3a, 0x1a);
const CREAM: Color = Color::Rgb(0xff, 0xf5, 0xe6);
const PEACH: Color = Color::Rgb(0xff, 0xd9, 0xa8);
const TAN: Color = Color::Rgb(0xc9, 0xa8, 0x8a);

impl Theme {
    pub const NAMES: [&'static str; 2] = ["harvest", "monochrome"];

    /// Warm orange palette on a cream background.
    pub fn harvest() -> Self {
        Theme {
            background_color: CREAM,

            title_style: Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(RUST).add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::White)
                .bg(RUST)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(ORANGE),
            hint_style: Style::default().fg(BROWN).add_modifier(Modifier::ITALIC),

            option_style: Style::default().fg(BROWN),
            option_highlight_style: Style::default()
                .fg(BROWN)
                .bg(PEACH)
                .add_modifier(Modifier::BOLD),

            user_text_style: Style::default().fg(Color::White).bg(ORANGE),
            coach_text_style: Style::default().fg(BROWN),
            loading_style: Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),

            input_text_style: Style::default().fg(BROWN),
            input_placeholder_style: Style::default().fg(TAN),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Terminal default colors only; relies on modifiers for emphasis.
    pub fn monochrome() -> Self {
        Theme {
            background_color: Color::Reset,

            title_style: Style::default().add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().add_modifier(Modifier::BOLD),
            header_style: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            border_style: Style::default(),
            hint_style: Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),

            option_style: Style::default(),
            option_highlight_style: Style::default().add_modifier(Modifier::REVERSED),

            user_text_style: Style::default().add_modifier(Modifier::BOLD),
            coach_text_style: Style::default(),
            loading_style: Style::default().add_modifier(Modifier::BOLD),

            input_text_style: Style::default(),
            input_placeholder_style: Style::default().add_modifier(Modifier::DIM),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "harvest" => Some(Self::harvest()),
            "monochrome" | "mono" => Some(Self::monochrome()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::harvest()
    }
}
