//! Router module.
//!
//! Owns the current view and mediates every transition; see
//! [`Router`](traits::Router) and the `named_routes!` macro.

pub mod traits;

pub use traits::{Flow, Router, ViewFactory};
