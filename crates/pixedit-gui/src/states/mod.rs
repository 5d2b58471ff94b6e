mod prompt;
mod status;
mod viewport;

pub use prompt::Prompt;
pub use status::StatusState;
pub use viewport::{centered_offset, ViewportState};
