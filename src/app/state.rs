use crate::clipboard::ClipboardSink;
use crate::copy::CopyStatus;
use crate::dashboard::{CodeSnippet, Dashboard};
use crate::keybindings::KeybindingCache;
use crate::storage::load_dashboard;
use crate::ui::theme::Theme;
use crate::wallet::Wallet;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

pub struct AppState {
    pub dashboard: Dashboard,
    pub data_path: PathBuf,
    pub cursor_position: usize,
    pub snippet_index: usize,
    pub snippet_copy: CopyStatus,
    pub wallet_id_copy: CopyStatus,
    pub clipboard: Box<dyn ClipboardSink>,
    pub theme: Theme,
    pub keybindings: KeybindingCache,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(
        dashboard: Dashboard,
        data_path: PathBuf,
        theme: Theme,
        keybindings: KeybindingCache,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            dashboard,
            data_path,
            cursor_position: 0,
            snippet_index: 0,
            snippet_copy: CopyStatus::new(),
            wallet_id_copy: CopyStatus::new(),
            clipboard,
            theme,
            keybindings,
            should_quit: false,
            show_help: false,
            status_message: None,
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.wallet_id_copy.cancel();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_position + 1 < self.dashboard.wallets.len() {
            self.cursor_position += 1;
            self.wallet_id_copy.cancel();
        }
    }

    pub fn clamp_cursor(&mut self) {
        if !self.dashboard.wallets.is_empty() {
            self.cursor_position = self.cursor_position.min(self.dashboard.wallets.len() - 1);
        } else {
            self.cursor_position = 0;
        }

        if !self.dashboard.snippets.is_empty() {
            self.snippet_index = self.snippet_index.min(self.dashboard.snippets.len() - 1);
        } else {
            self.snippet_index = 0;
        }
    }

    pub fn selected_wallet(&self) -> Option<&Wallet> {
        self.dashboard.wallets.get(self.cursor_position)
    }

    pub fn current_snippet(&self) -> Option<&CodeSnippet> {
        self.dashboard.snippet(self.snippet_index)
    }

    pub fn next_snippet(&mut self) {
        let count = self.dashboard.snippets.len();
        if count > 1 {
            self.snippet_index = (self.snippet_index + 1) % count;
            self.snippet_copy.cancel();
        }
    }

    pub fn prev_snippet(&mut self) {
        let count = self.dashboard.snippets.len();
        if count > 1 {
            self.snippet_index = (self.snippet_index + count - 1) % count;
            self.snippet_copy.cancel();
        }
    }

    pub fn copy_snippet(&mut self, now: Instant) {
        let Some(code) = self.current_snippet().map(|s| s.code.clone()) else {
            self.set_status_message("No snippet to copy", now);
            return;
        };
        self.snippet_copy.trigger_copy(&code, &*self.clipboard, now);
    }

    pub fn copy_wallet_id(&mut self, now: Instant) {
        let Some(id) = self.selected_wallet().map(|w| w.id.clone()) else {
            self.set_status_message("No wallet selected", now);
            return;
        };
        self.wallet_id_copy.trigger_copy(&id, &*self.clipboard, now);
    }

    /// Advance timers and pick up clipboard failures. Called once per loop.
    pub fn tick(&mut self, now: Instant) {
        self.snippet_copy.tick(now);
        self.wallet_id_copy.tick(now);

        while let Some(failure) = self.clipboard.poll_failure() {
            warn!(message = %failure.message, "Copy did not reach the clipboard");
            self.set_status_message(format!("Clipboard error: {}", failure.message), now);
        }

        self.clear_expired_status_message(now);
    }

    pub fn set_status_message(&mut self, message: impl Into<String>, now: Instant) {
        self.status_message = Some((message.into(), now));
    }

    pub fn clear_expired_status_message(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.status_message {
            if now.duration_since(*shown_at) >= STATUS_MESSAGE_TTL {
                self.status_message = None;
            }
        }
    }

    /// Reload the dashboard from its data file.
    /// Used when the file changes on disk while the app is running.
    ///
    /// The selection stays on the same wallet id when it still exists. A copy
    /// confirmation is dropped once its payload is no longer what is shown.
    pub fn reload_from_file(&mut self) -> Result<()> {
        let dashboard = load_dashboard(&self.data_path)?;
        info!(path = %self.data_path.display(), "Reloaded dashboard");

        let previous_wallet = self.selected_wallet().map(|w| w.id.clone());
        let previous_snippet = self.current_snippet().map(|s| s.code.clone());

        self.dashboard = dashboard;
        if let Some(id) = &previous_wallet {
            if let Some(pos) = self.dashboard.wallets.iter().position(|w| &w.id == id) {
                self.cursor_position = pos;
            }
        }
        self.clamp_cursor();

        if self.selected_wallet().map(|w| &w.id) != previous_wallet.as_ref() {
            self.wallet_id_copy.cancel();
        }
        if self.current_snippet().map(|s| &s.code) != previous_snippet.as_ref() {
            self.snippet_copy.cancel();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::CopyFailure;
    use crate::wallet::WalletKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct FakeClipboard {
        payloads: Rc<RefCell<Vec<String>>>,
        failures: Rc<RefCell<Vec<CopyFailure>>>,
    }

    impl ClipboardSink for FakeClipboard {
        fn submit(&self, payload: String) {
            self.payloads.borrow_mut().push(payload);
        }

        fn poll_failure(&self) -> Option<CopyFailure> {
            self.failures.borrow_mut().pop()
        }
    }

    fn state_with(dashboard: Dashboard, clipboard: FakeClipboard) -> AppState {
        AppState::new(
            dashboard,
            PathBuf::from("unused.json"),
            Theme::default(),
            KeybindingCache::default(),
            Box::new(clipboard),
        )
    }

    fn two_wallets() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.wallets.push(Wallet::new("w-1", 1, WalletKind::Hardware, "cold"));
        dashboard.wallets.push(Wallet::new("w-2", 2, WalletKind::Software, "hot"));
        dashboard
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = state_with(two_wallets(), FakeClipboard::default());
        state.move_cursor_up();
        assert_eq!(state.cursor_position, 0);
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor_position, 1);
        assert_eq!(state.selected_wallet().map(|w| w.id.as_str()), Some("w-2"));
    }

    #[test]
    fn test_copy_snippet_sends_code() {
        let clipboard = FakeClipboard::default();
        let mut state = state_with(Dashboard::default(), clipboard.clone());
        let now = Instant::now();

        state.copy_snippet(now);
        assert!(state.snippet_copy.is_copied());
        assert!(!state.wallet_id_copy.is_copied());
        assert_eq!(
            *clipboard.payloads.borrow(),
            vec!["curl https://api.example.com/v1/wallets".to_string()]
        );

        state.tick(now + Duration::from_millis(2000));
        assert!(!state.snippet_copy.is_copied());
    }

    #[test]
    fn test_copy_wallet_id_and_selection_change() {
        let clipboard = FakeClipboard::default();
        let mut state = state_with(two_wallets(), clipboard.clone());
        let now = Instant::now();

        state.copy_wallet_id(now);
        assert!(state.wallet_id_copy.is_copied());
        assert_eq!(*clipboard.payloads.borrow(), vec!["w-1".to_string()]);

        state.move_cursor_down();
        assert!(!state.wallet_id_copy.is_copied());
    }

    #[test]
    fn test_copy_wallet_id_without_wallets() {
        let clipboard = FakeClipboard::default();
        let mut state = state_with(Dashboard::default(), clipboard.clone());
        let now = Instant::now();

        state.copy_wallet_id(now);
        assert!(!state.wallet_id_copy.is_copied());
        assert!(clipboard.payloads.borrow().is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_failure_keeps_confirmation_and_sets_message() {
        let clipboard = FakeClipboard::default();
        let mut state = state_with(Dashboard::default(), clipboard.clone());
        let now = Instant::now();

        state.copy_snippet(now);
        clipboard.failures.borrow_mut().push(CopyFailure {
            message: "permission denied".to_string(),
        });
        state.tick(now + Duration::from_millis(100));

        assert!(state.snippet_copy.is_copied());
        let (message, _) = state.status_message.clone().unwrap();
        assert!(message.contains("permission denied"));

        state.tick(now + Duration::from_millis(100) + STATUS_MESSAGE_TTL);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_snippet_cycling_resets_copy_state() {
        let mut dashboard = Dashboard::default();
        dashboard.snippets.push(CodeSnippet::new("second", "echo hi"));
        let mut state = state_with(dashboard, FakeClipboard::default());
        let now = Instant::now();

        state.copy_snippet(now);
        state.next_snippet();
        assert_eq!(state.snippet_index, 1);
        assert!(!state.snippet_copy.is_copied());

        state.next_snippet();
        assert_eq!(state.snippet_index, 0);
        state.prev_snippet();
        assert_eq!(state.snippet_index, 1);
    }

    #[test]
    fn test_single_snippet_cycling_keeps_confirmation() {
        let mut state = state_with(Dashboard::default(), FakeClipboard::default());
        state.copy_snippet(Instant::now());
        state.next_snippet();
        assert!(state.snippet_copy.is_copied());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = state_with(two_wallets(), FakeClipboard::default());
        state.move_cursor_down();
        state.dashboard.wallets.pop();
        state.dashboard.wallets.pop();
        state.clamp_cursor();
        assert_eq!(state.cursor_position, 0);
        assert!(state.selected_wallet().is_none());
    }

    #[test]
    fn test_reload_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");
        crate::storage::save_dashboard(&path, &two_wallets()).unwrap();

        let mut state = state_with(Dashboard::default(), FakeClipboard::default());
        state.data_path = path;
        state.reload_from_file().unwrap();
        assert_eq!(state.dashboard.wallets.len(), 2);
    }

    fn two_wallets_two_snippets() -> Dashboard {
        let mut dashboard = two_wallets();
        dashboard.snippets.push(CodeSnippet::new("second", "echo hi"));
        dashboard
    }

    #[test]
    fn test_reload_shrink_drops_stale_confirmations() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");
        let clipboard = FakeClipboard::default();
        let mut state = state_with(two_wallets_two_snippets(), clipboard);
        state.data_path = path.clone();
        let now = Instant::now();

        state.move_cursor_down();
        state.next_snippet();
        state.copy_wallet_id(now);
        state.copy_snippet(now);

        let mut shrunk = Dashboard::default();
        shrunk.wallets.push(Wallet::new("w-1", 1, WalletKind::Hardware, "cold"));
        crate::storage::save_dashboard(&path, &shrunk).unwrap();
        state.reload_from_file().unwrap();

        assert_eq!(state.selected_wallet().map(|w| w.id.as_str()), Some("w-1"));
        assert!(!state.wallet_id_copy.is_copied());
        assert_eq!(state.snippet_index, 0);
        assert!(!state.snippet_copy.is_copied());
    }

    #[test]
    fn test_reload_keeps_confirmation_for_same_payload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");
        let mut state = state_with(two_wallets_two_snippets(), FakeClipboard::default());
        state.data_path = path.clone();
        let now = Instant::now();

        state.move_cursor_down();
        state.copy_wallet_id(now);
        state.copy_snippet(now);

        // w-2 moves to the front; the selection follows it.
        let mut reordered = two_wallets_two_snippets();
        reordered.wallets.reverse();
        crate::storage::save_dashboard(&path, &reordered).unwrap();
        state.reload_from_file().unwrap();

        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.selected_wallet().map(|w| w.id.as_str()), Some("w-2"));
        assert!(state.wallet_id_copy.is_copied());
        assert!(state.snippet_copy.is_copied());
    }

    #[test]
    fn test_reload_invalid_file_keeps_dashboard() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");
        std::fs::write(&path, "{ \"wallets\": [ oops").unwrap();

        let mut state = state_with(two_wallets(), FakeClipboard::default());
        state.data_path = path;
        state.move_cursor_down();
        let before = state.dashboard.clone();

        assert!(state.reload_from_file().is_err());
        assert_eq!(state.dashboard, before);
        assert_eq!(state.cursor_position, 1);
    }
}
