pub mod canvas;
pub mod color;
pub mod camera_canvas;
pub mod recording;
pub mod web_canvas;
pub mod pipeline;

pub use canvas::Canvas;
pub use color::Color;
pub use camera_canvas::CameraCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
pub use web_canvas::WebCanvas;
pub use pipeline::FrameRenderer;
