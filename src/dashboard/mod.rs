pub mod snippet;
pub mod stat;

pub use snippet::CodeSnippet;
pub use stat::{StatCard, StatIcon, Trend};

use crate::wallet::Wallet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the dashboard renders, as loaded from the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    #[serde(default = "default_snippets")]
    pub snippets: Vec<CodeSnippet>,
}

fn default_snippets() -> Vec<CodeSnippet> {
    vec![CodeSnippet::api_request()]
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            stats: Vec::new(),
            wallets: Vec::new(),
            snippets: default_snippets(),
        }
    }
}

impl Dashboard {
    pub fn find_wallet(&self, id: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    pub fn snippet(&self, index: usize) -> Option<&CodeSnippet> {
        self.snippets.get(index)
    }

    /// Wallet ids that appear more than once, in first-seen order.
    pub fn duplicate_wallet_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for wallet in &self.wallets {
            if !seen.insert(wallet.id.as_str()) && reported.insert(wallet.id.as_str()) {
                duplicates.push(wallet.id.clone());
            }
        }
        duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.wallets.is_empty()
    }
}
