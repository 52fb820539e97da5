use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Wallet,
    Coins,
    Activity,
    Bell,
    Chart,
}

impl StatIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Wallet => "▤",
            Self::Coins => "◎",
            Self::Activity => "∿",
            Self::Bell => "♪",
            Self::Chart => "▁▃▅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub value: String,
    pub is_positive: bool,
}

impl Trend {
    pub fn arrow(&self) -> char {
        if self.is_positive { '▲' } else { '▼' }
    }
}

/// One statistic card: title, headline value, and optional subtitle/trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub icon: StatIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, icon: StatIcon) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            icon,
            trend: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_trend(mut self, value: impl Into<String>, is_positive: bool) -> Self {
        self.trend = Some(Trend {
            value: value.into(),
            is_positive,
        });
        self
    }
}
