use std::sync::Mutex;

use crate::domain::{AppError, OutboundEmail};
use crate::ports::Mailer;

/// Mailer fake that records every message, or fails on demand.
#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl FakeMailer {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for FakeMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(AppError::Mail("scripted failure".into()));
        }
        Ok(())
    }
}
