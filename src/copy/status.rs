use super::timer::ResetTimer;
use crate::clipboard::ClipboardSink;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a copy stays confirmed before the control reverts to idle.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_millis(2000);

/// Copy button state: idle until triggered, confirmed for
/// [`CONFIRMATION_WINDOW`] after the most recent trigger.
///
/// Confirmation is optimistic. The clipboard write runs elsewhere and its
/// outcome never touches the flag.
#[derive(Debug, Clone, Default)]
pub struct CopyStatus {
    copied: bool,
    reset: ResetTimer,
}

impl CopyStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_copy<S>(&mut self, payload: &str, sink: &S, now: Instant)
    where
        S: ClipboardSink + ?Sized,
    {
        sink.submit(payload.to_string());
        self.copied = true;
        self.reset.schedule(now, CONFIRMATION_WINDOW);
        debug!(bytes = payload.len(), "Copy confirmed");
    }

    /// Apply the pending reset if it is due. Returns true when the control
    /// went back to idle on this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.fire_if_due(now) {
            self.copied = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.reset.cancel();
        self.copied = false;
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.reset.remaining(now)
    }

    pub fn label(&self) -> &'static str {
        if self.copied { "Copied" } else { "Copy" }
    }

    pub fn icon(&self) -> &'static str {
        if self.copied { "✓" } else { "⧉" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        payloads: RefCell<Vec<String>>,
    }

    impl ClipboardSink for RecordingSink {
        fn submit(&self, payload: String) {
            self.payloads.borrow_mut().push(payload);
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initially_idle() {
        let status = CopyStatus::new();
        assert!(!status.is_copied());
        assert_eq!(status.label(), "Copy");
    }

    #[test]
    fn test_trigger_confirms_immediately() {
        let sink = RecordingSink::default();
        let start = Instant::now();

        for payload in ["", "x", "multi\nline", "curl https://api.example.com/v1/wallets"] {
            let mut status = CopyStatus::new();
            status.trigger_copy(payload, &sink, start);
            assert!(status.is_copied());
            assert_eq!(status.label(), "Copied");
            assert_eq!(status.icon(), "✓");
        }

        assert_eq!(sink.payloads.borrow().len(), 4);
        assert_eq!(sink.payloads.borrow()[0], "");
    }

    #[test]
    fn test_reverts_after_window() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let mut status = CopyStatus::new();

        status.trigger_copy("curl https://api.example.com/v1/wallets", &sink, start);
        assert!(!status.tick(start));
        assert!(status.is_copied());
        assert!(!status.tick(start + ms(1999)));
        assert!(status.is_copied());
        assert!(status.tick(start + ms(2000)));
        assert!(!status.is_copied());
        assert_eq!(status.label(), "Copy");
    }

    #[test]
    fn test_retrigger_extends_window() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let mut status = CopyStatus::new();

        status.trigger_copy("a", &sink, start);
        status.tick(start + ms(700));
        status.trigger_copy("a", &sink, start + ms(700));

        status.tick(start + ms(2000));
        assert!(status.is_copied());
        status.tick(start + ms(2699));
        assert!(status.is_copied());
        status.tick(start + ms(2700));
        assert!(!status.is_copied());
    }

    #[test]
    fn test_double_trigger_never_drops_confirmation() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let mut status = CopyStatus::new();

        status.trigger_copy("same", &sink, start);
        status.trigger_copy("same", &sink, start);

        let mut reverted_at = None;
        for step in 0..=25 {
            let now = start + ms(step * 100);
            if status.tick(now) {
                assert!(reverted_at.is_none(), "reset fired more than once");
                reverted_at = Some(step * 100);
            }
            if step * 100 < 2000 {
                assert!(status.is_copied());
            }
        }
        assert_eq!(reverted_at, Some(2000));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let mut status = CopyStatus::new();

        status.trigger_copy("a", &sink, start);
        status.cancel();
        assert!(!status.is_copied());
        assert_eq!(status.remaining(start), None);
        assert!(!status.tick(start + ms(2000)));
    }

    #[test]
    fn test_remaining() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let mut status = CopyStatus::new();

        status.trigger_copy("a", &sink, start);
        assert_eq!(status.remaining(start + ms(500)), Some(ms(1500)));
    }
}
