//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `request_form`: The interview request form

mod field_renderer;
mod request_form;

pub use request_form::{draw as draw_request_form, slot_areas as request_form_slot_areas};
