use anyhow::{Context, Result, anyhow};
use arboard::Clipboard;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Copy text to the system clipboard, blocking until the write completes.
///
/// On Linux, clipboard contents persist only while the owning process runs
/// unless a clipboard manager takes them over.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut backend = ArboardBackend::new()?;
    backend.set_text(text)
}

/// Something that accepts clipboard payloads without blocking the caller.
pub trait ClipboardSink {
    fn submit(&self, payload: String);

    /// Next write failure reported since the last poll, if any.
    fn poll_failure(&self) -> Option<CopyFailure> {
        None
    }
}

pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub struct ArboardBackend {
    clipboard: Clipboard,
}

impl ArboardBackend {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to access system clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardBackend for ArboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub message: String,
}

/// Fire-and-forget clipboard writer.
///
/// Payloads go to a dedicated worker thread that owns the backend for the
/// writer's whole lifetime. Failures come back on a second channel and are
/// drained with [`ClipboardSink::poll_failure`].
pub struct ClipboardWriter {
    tx: Sender<String>,
    failures: Receiver<CopyFailure>,
    _worker: JoinHandle<()>,
}

impl ClipboardWriter {
    pub fn system() -> Result<Self> {
        Self::spawn(ArboardBackend::new)
    }

    /// Start the worker. The backend is built on the worker thread and
    /// rebuilt on the next payload if construction fails.
    pub fn spawn<F, B>(make_backend: F) -> Result<Self>
    where
        F: Fn() -> Result<B> + Send + 'static,
        B: ClipboardBackend,
    {
        let (tx, rx) = mpsc::channel::<String>();
        let (failure_tx, failures) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut backend: Option<B> = None;
                for payload in rx {
                    let mut init_error = None;
                    if backend.is_none() {
                        match make_backend() {
                            Ok(b) => backend = Some(b),
                            Err(e) => {
                                warn!(error = %e, "Clipboard unavailable");
                                init_error = Some(e);
                            }
                        }
                    }

                    let result = match (backend.as_mut(), init_error) {
                        (Some(b), _) => b.set_text(&payload),
                        (None, Some(e)) => Err(e.context("System clipboard is unavailable")),
                        (None, None) => Err(anyhow!("System clipboard is unavailable")),
                    };

                    match result {
                        Ok(()) => debug!(bytes = payload.len(), "Clipboard updated"),
                        Err(e) => {
                            warn!(error = %e, "Clipboard write failed");
                            let _ = failure_tx.send(CopyFailure {
                                message: format!("{e:#}"),
                            });
                        }
                    }
                }
                debug!("Clipboard worker stopped");
            })
            .context("Failed to start clipboard worker")?;

        Ok(Self {
            tx,
            failures,
            _worker: worker,
        })
    }
}

impl ClipboardSink for ClipboardWriter {
    fn submit(&self, payload: String) {
        if self.tx.send(payload).is_err() {
            warn!("Clipboard worker has stopped, payload dropped");
        }
    }

    fn poll_failure(&self) -> Option<CopyFailure> {
        self.failures.try_recv().ok()
    }
}
