//! Form rendering module
//!
//! - `field_renderer`: a single draft field with its error
//! - `step_form`: the fields and buttons of the current step
//! - `review`: the summary shown on the last step

mod field_renderer;
mod review;
mod step_form;

pub use step_form::draw_step;
