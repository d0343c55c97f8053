#![deny(unsafe_code)]

//! State store for the assignment planner: the pure transition function,
//! the bounded undo/redo history manager, and the [`Session`] owner that
//! threads the current state through both.

pub mod apply;
pub mod history;
pub mod session;

pub use apply::apply;
pub use history::{clear_history, record_checkpoint, redo, undo};
pub use session::Session;
