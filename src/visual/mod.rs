//! Frame inspection
//!
//! Summarises recorded draw commands so frames can be checked
//! programmatically, without pixels or a browser.

pub mod criteria;
pub mod metrics;

pub use criteria::{FrameCriteria, check_frame, generate_frame_report};
pub use metrics::{FrameMetrics, analyze_commands};
