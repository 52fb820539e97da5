pub mod status;
pub mod timer;

pub use status::{CONFIRMATION_WINDOW, CopyStatus};
pub use timer::ResetTimer;
