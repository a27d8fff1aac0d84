//! Cooperative cancellation via an atomic token

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token polled between documents.
///
/// The signal handler only flips the flag; the batch loop checks it at
/// iteration boundaries, so cancellation granularity is one whole document.
/// Clones share the same underlying flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (idempotent).
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Register SIGINT/SIGTERM handlers that set this token.
    ///
    /// First signal: request cooperative shutdown.
    /// Second signal: force exit with status 130.
    /// SAFETY: AtomicBool::swap and process::exit are async-signal-safe.
    pub fn install_signal_handlers(&self) -> std::io::Result<()> {
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            let flag = Arc::clone(&self.flag);
            unsafe {
                signal_hook::low_level::register(signal, move || {
                    if flag.swap(true, Ordering::Relaxed) {
                        std::process::exit(130);
                    }
                })?;
            }
        }
        Ok(())
    }
}
