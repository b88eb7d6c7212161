//! Small data types shared by the shell and the UI

use std::time::Instant;

/// Seconds a flash message stays visible
pub const FLASH_SECONDS: u64 = 3;

/// A temporary UI message shown to the user (e.g. redirect notices)
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

impl FlashMessage {
    pub fn new(text: String, is_error: bool) -> Self {
        Self {
            text,
            is_error,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, seconds: u64) -> bool {
        self.created.elapsed().as_secs() >= seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_message_expiry() {
        let msg = FlashMessage::new("test".into(), false);
        assert!(!msg.is_expired(FLASH_SECONDS));
        assert!(msg.is_expired(0));
        assert_eq!(msg.text, "test");
        assert!(!msg.is_error);
    }
}
