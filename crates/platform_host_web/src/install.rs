//! Install-prompt adapter backed by the browser `beforeinstallprompt` event.

use platform_host::{InstallOutcome, InstallPromptFuture, InstallPromptService};

#[derive(Debug, Clone, Copy)]
/// Browser install capability. Creating one starts listening for deferred install prompts.
pub struct WebInstallPromptService;

impl WebInstallPromptService {
    /// Attaches the `beforeinstallprompt` listener (once per page) and returns the service.
    pub fn attach() -> Self {
        crate::bridge::install_prompt_listener();
        Self
    }
}

impl InstallPromptService for WebInstallPromptService {
    fn is_available(&self) -> bool {
        crate::bridge::install_prompt_pending()
    }

    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>> {
        Box::pin(async move {
            let accepted = crate::bridge::install_prompt_show().await?;
            Ok(if accepted {
                InstallOutcome::Accepted
            } else {
                InstallOutcome::Dismissed
            })
        })
    }
}
