mod mailer;
mod renderer;
mod source_control;

pub use mailer::Mailer;
pub use renderer::Renderer;
pub use source_control::SourceControl;
