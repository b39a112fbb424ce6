//! Application state module

mod app_state;
mod context;
mod forms;

pub use app_state::*;
pub use context::SessionContext;
pub use forms::*;
