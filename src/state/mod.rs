//! Application state module

mod app_state;
mod field;
mod form;
mod notifications;

pub use app_state::*;
pub use field::*;
pub use form::*;
pub use notifications::*;
