//! Interrupt flag shared between the signal handler and the walk.

use crate::errors::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tells a running [`tidy_tree`](crate::tidy_tree) to stop.
///
/// Clones share one flag. The walk polls it before each directory entry, never
/// in the middle of a file, so a file is either left as it was or fully
/// rewritten.
///
/// # Examples
///
/// ```
/// use txtidy::CancellationToken;
///
/// let token = CancellationToken::default();
/// assert!(token.check().is_ok());
///
/// // What the Ctrl+C handler does with its clone:
/// token.clone().cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    interrupted: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that has not been cancelled yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag for this token and every clone of it. Idempotent.
    pub fn cancel(&self) {
        self.interrupted.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.interrupted.load(Ordering::Acquire)
    }

    /// `Err(Error::Interrupted)` once the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_token_passes_check() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_handler_clone_interrupts_original() {
        let token = CancellationToken::new();
        let handler = token.clone();

        thread::spawn(move || {
            handler.cancel();
            handler.cancel();
        })
        .join()
        .unwrap();

        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(Error::Interrupted)));
    }

    #[test]
    fn test_independent_tokens_do_not_share_state() {
        let first = CancellationToken::new();
        let second = CancellationToken::new();
        first.cancel();
        assert!(second.check().is_ok());
    }
}
