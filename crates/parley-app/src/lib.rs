//! parley-app - Application state and orchestration for Parley
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the root-view state controller that decides what the shell
//! renders (menu, loading indicator, offline banner, routed page content)
//! and which palette is active.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod monitor;
pub mod registry;
pub mod routes;
pub mod state;
pub mod theme;
pub mod view;

// Re-export primary types
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use monitor::ConnectivityMonitor;
pub use registry::{DocumentRegistry, RefreshTicket};
pub use routes::{Admission, Route, RouteGate};
pub use state::AppState;
pub use theme::ThemeController;
pub use view::{plan, PageView, ViewPlan};
