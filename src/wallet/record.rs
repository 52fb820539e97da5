use super::event::WalletEvent;
use super::notification::WalletNotification;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletKind {
    Hardware,
    Software,
    Exchange,
}

impl WalletKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Exchange => "Exchange",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Hardware => "▣",
            Self::Software => "◈",
            Self::Exchange => "⇋",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A wallet as delivered by the data file. Balances and events are
/// rendered as supplied; nothing here derives or recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: WalletKind,
    pub description: String,
    pub lan_amount: f64,
    pub eur_amount: f64,
    #[serde(default)]
    pub events: Vec<WalletEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<WalletNotification>,
}

impl Wallet {
    pub fn new(
        id: impl Into<String>,
        number: u32,
        kind: WalletKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            kind,
            description: description.into(),
            lan_amount: 0.0,
            eur_amount: 0.0,
            events: Vec::new(),
            notification: None,
        }
    }

    pub fn has_pending_notification(&self) -> bool {
        self.notification.is_some()
    }

    pub fn display_name(&self) -> String {
        format!("Wallet #{}", self.number)
    }
}
