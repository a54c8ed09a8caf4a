pub mod recording_renderer;
pub mod scripted_driver;

pub use recording_renderer::RecordingRenderer;
pub use scripted_driver::{Answer, ScriptedDriver};
