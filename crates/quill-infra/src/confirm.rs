//! Non-interactive confirmation.

use async_trait::async_trait;

use quill_core::ports::Confirm;

/// Answers every prompt the same way. Backs `--yes` and scripted runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

#[async_trait]
impl Confirm for FixedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "Auto-answered confirmation");
        self.0
    }
}
