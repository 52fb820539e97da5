pub mod file;

pub use file::{load_dashboard, save_dashboard};
