pub mod application;
pub mod button;
pub mod error;
pub mod router;
pub mod state;
pub mod task;
pub mod view;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppContext, Application, ViewContext};
pub use button::{Button, ButtonAction, ButtonConfig, ScrollDirection};
pub use router::{Flow, Router, ViewFactory};
pub use state::{Entity, WeakEntity};
pub use task::{TaskHandle, TaskTracker};
pub use view::View;

// Used by the `named_routes!` macro expansion.
#[doc(hidden)]
pub use paste;
