use crate::ports::{Mailer, Renderer};

/// Application context holding the external services for pipeline execution.
pub struct AppContext<R: Renderer, M: Mailer> {
    renderer: R,
    mailer: M,
}

impl<R: Renderer, M: Mailer> AppContext<R, M> {
    /// Create a new application context.
    pub fn new(renderer: R, mailer: M) -> Self {
        Self { renderer, mailer }
    }

    /// Get a reference to the rendering service.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the mail-delivery service.
    pub fn mailer(&self) -> &M {
        &self.mailer
    }
}
