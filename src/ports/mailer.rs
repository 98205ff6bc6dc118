use crate::domain::{AppError, OutboundEmail};

/// Mail-delivery service that dispatches one composed message.
pub trait Mailer {
    /// Hand `email` to the relay for delivery.
    fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
}
