pub mod app;
pub mod components;
pub mod logging;
pub mod models;

pub use models::{QmtGui, init_gui_logging};
