pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod dashboard;
pub mod keybindings;
pub mod logging;
pub mod storage;
pub mod ui;
pub mod utils;
pub mod wallet;
