use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletEventKind {
    UnregisteredBalance, // "unregistered-balance"
    Transaction,
    Alert,
}

impl WalletEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnregisteredBalance => "Unregistered balance",
            Self::Transaction => "Transaction",
            Self::Alert => "Alert",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::UnregisteredBalance => "◌",
            Self::Transaction => "⇄",
            Self::Alert => "⚠",
        }
    }
}

impl fmt::Display for WalletEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: WalletEventKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl WalletEvent {
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: WalletEventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            kind,
            description: description.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&WalletEventKind::UnregisteredBalance).unwrap(),
            "\"unregistered-balance\""
        );
        assert_eq!(
            serde_json::to_string(&WalletEventKind::Transaction).unwrap(),
            "\"transaction\""
        );
        assert_eq!(serde_json::to_string(&WalletEventKind::Alert).unwrap(), "\"alert\"");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<WalletEventKind, _> = serde_json::from_str("\"withdrawal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_amount_is_none() {
        let json = r#"{
            "id": "e1",
            "timestamp": "2025-03-01T12:00:00Z",
            "type": "alert",
            "description": "Firmware update available"
        }"#;

        let event: WalletEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, WalletEventKind::Alert);
        assert_eq!(event.amount, None);
        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_none_amount_not_serialized() {
        let event = WalletEvent::new(
            "e2",
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            WalletEventKind::Transaction,
            "Transfer",
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("amount"));

        let json = serde_json::to_string(&event.with_amount(12.5)).unwrap();
        assert!(json.contains("\"amount\":12.5"));
    }
}
