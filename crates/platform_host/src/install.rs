//! Install-prompt capability contract.
//!
//! Browsers that support installing the page as an app hand the shell a deferred prompt. The
//! shell only needs to know whether a prompt is available and to trigger it once.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`InstallPromptService`].
pub type InstallPromptFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The user's answer to an install prompt.
pub enum InstallOutcome {
    /// The user accepted installation.
    Accepted,
    /// The user dismissed the prompt.
    Dismissed,
}

/// Host capability for installing the shell as a standalone app.
pub trait InstallPromptService {
    /// Returns whether a deferred install prompt is currently held.
    fn is_available(&self) -> bool;

    /// Shows the deferred prompt and resolves with the user's choice.
    ///
    /// The deferred prompt is consumed whatever the outcome.
    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Install capability for hosts that never offer installation.
pub struct NoopInstallPromptService;

impl InstallPromptService for NoopInstallPromptService {
    fn is_available(&self) -> bool {
        false
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async { Err("install prompt unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted install capability: holds at most one prompt answering with a fixed outcome.
pub struct MemoryInstallPromptService {
    pending: Rc<Cell<Option<InstallOutcome>>>,
}

impl MemoryInstallPromptService {
    /// Stashes a prompt that will resolve with `outcome`.
    pub fn offer(&self, outcome: InstallOutcome) {
        self.pending.set(Some(outcome));
    }
}

impl InstallPromptService for MemoryInstallPromptService {
    fn is_available(&self) -> bool {
        self.pending.get().is_some()
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            self.pending
                .take()
                .ok_or_else(|| "install prompt unavailable".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn offered_prompt_is_consumed_once() {
        let install = MemoryInstallPromptService::default();
        assert!(!install.is_available());

        install.offer(InstallOutcome::Dismissed);
        assert!(install.is_available());
        assert_eq!(block_on(install.prompt()), Ok(InstallOutcome::Dismissed));
        assert!(!install.is_available());
        assert!(block_on(install.prompt()).is_err());
    }

    #[test]
    fn noop_install_is_never_available() {
        let install = NoopInstallPromptService;
        assert!(!install.is_available());
        assert!(block_on(install.prompt()).is_err());
    }
}
