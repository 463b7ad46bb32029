//! Authenticated farmer session.

pub mod model;
pub mod store;

pub use model::Session;
pub use store::SessionStore;
