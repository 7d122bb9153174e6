//! Application state module

mod app_state;
mod carousel;
mod forms;
mod notifications;
mod splash_state;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use notifications::*;
pub use splash_state::*;
