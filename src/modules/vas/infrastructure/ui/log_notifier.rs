use async_trait::async_trait;

use crate::modules::vas::application::messages::{Alert, ConfirmPrompt, Notice};
use crate::modules::vas::traits::Notifier;

/// Notifier for headless runs: messages go to the log, prompts get a fixed answer
pub struct LogNotifier {
    auto_confirm: bool,
}

impl LogNotifier {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn show_toast(&self, notice: Notice) {
        if notice.is_failure() {
            log::error!("[notice] {}", notice.message_key());
        } else {
            log::info!("[notice] {}", notice.message_key());
        }
    }

    fn alert(&self, alert: Alert) {
        log::warn!("[alert] {}: {}", alert.title_key(), alert.text_key());
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        log::info!(
            "[confirm] {}: {} -> {}",
            prompt.title_key,
            prompt.text_key,
            if self.auto_confirm {
                prompt.confirm_key
            } else {
                prompt.cancel_key
            }
        );
        self.auto_confirm
    }
}
