use crate::config::Config;
use crate::wallet::NotificationKind;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub cursor: Color,
    pub card_border: Color,
    pub positive: Color,
    pub negative: Color,
    pub info: Color,
    pub warning: Color,
    pub success: Color,
    pub code: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            cursor: Color::Cyan,
            card_border: Color::DarkGray,
            positive: Color::Green,
            negative: Color::Red,
            info: Color::Blue,
            warning: Color::Yellow,
            success: Color::Green,
            code: Color::LightYellow,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            muted: Color::DarkGray,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            cursor: Color::Blue,
            card_border: Color::Gray,
            code: Color::Magenta,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    pub fn trend(&self, is_positive: bool) -> Color {
        if is_positive { self.positive } else { self.negative }
    }

    pub fn notification(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Info => self.info,
            NotificationKind::Warning => self.warning,
            NotificationKind::Success => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
