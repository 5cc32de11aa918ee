//! Trailing-edge debouncing.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Runs an action once a burst of calls goes quiet.
///
/// Each [`call`](Debouncer::call) restarts the wait; the action fires on a
/// dedicated timer thread once no call has arrived for the configured
/// duration. Dropping the debouncer cancels any pending fire and stops the
/// thread.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use fileslice::Debouncer;
///
/// let fired = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&fired);
/// let debouncer = Debouncer::new(Duration::from_millis(20), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// debouncer.call();
/// debouncer.call();
/// debouncer.call();
/// std::thread::sleep(Duration::from_millis(100));
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
pub struct Debouncer {
    tx: Sender<()>,
}

impl Debouncer {
    /// Creates a debouncer that runs `action` after calls stay quiet for
    /// `wait`.
    pub fn new<F>(wait: Duration, mut action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        thread::spawn(move || {
            while rx.recv().is_ok() {
                loop {
                    match rx.recv_timeout(wait) {
                        // Another call arrived, restart the wait.
                        Ok(()) => continue,
                        Err(RecvTimeoutError::Timeout) => {
                            action();
                            break;
                        }
                        // Debouncer dropped with a call pending: cancel.
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
            }
        });
        Self { tx }
    }

    /// Registers a call, restarting the wait.
    pub fn call(&self) {
        let _ = self.tx.send(());
    }
}
