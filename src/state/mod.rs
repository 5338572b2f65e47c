//! Application state module

mod app_state;
mod document;
mod forms;

pub use app_state::*;
pub use document::Document;
pub use forms::*;
