//! Small shared helpers.

mod listeners;

pub use listeners::{ListenerKey, Listeners};
