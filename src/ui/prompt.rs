/// Browser-backed `window.alert` / `window.confirm`

use crate::commands::Prompter;
use log::error;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                error!("Failed to show alert: {:?}", e);
            }
        }
    }

    // A confirm that cannot be shown counts as declined.
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
