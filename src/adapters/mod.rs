pub mod git_source_control;
pub mod pandoc_renderer;
pub mod smtp_mailer;
