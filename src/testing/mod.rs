pub mod fake_mailer;
pub mod fake_renderer;
pub mod fake_source_control;

#[allow(unused_imports)]
pub use fake_mailer::FakeMailer;
#[allow(unused_imports)]
pub use fake_renderer::{FakeRenderer, RenderCall};
#[allow(unused_imports)]
pub use fake_source_control::FakeSourceControl;
