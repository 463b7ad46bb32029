//! Application layer for SmartCrop.
//!
//! Views own their data slots and a cancellation scope; [`AdvisoryApp`] resolves
//! routes to views and keeps at most one of them mounted.

pub mod app;
pub mod scope;
pub mod screen;
pub mod shell;
pub mod slot;
pub mod views;

pub use app::{AdvisoryApp, ViewContext};
pub use scope::ViewScope;
pub use screen::{Line, Screen};
pub use shell::Shell;
pub use slot::{Slot, SlotCell};
pub use views::{ActiveView, LoginOutcome, View};
