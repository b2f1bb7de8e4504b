use crate::error::Result;

/// Outbound channel for password reset links.
pub trait ResetNotifier: Send + Sync {
    fn send_reset(&self, email: &str, token: &str) -> Result<()>;
}

/// Default channel: records the reset in the log instead of sending mail.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl ResetNotifier for LogNotifier {
    fn send_reset(&self, email: &str, token: &str) -> Result<()> {
        tracing::info!(
            email = %email,
            token_len = token.len(),
            "password reset link issued"
        );
        Ok(())
    }
}
