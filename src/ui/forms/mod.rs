//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `page_form`: Layout of a page form

mod field_renderer;
mod page_form;

pub use page_form::{draw_form, max_form_scroll};
