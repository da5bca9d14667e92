//! parley-core - Core domain types for Parley
//!
//! Shared building blocks used by every other crate: the error type,
//! logging bootstrap, and the data model (theme mode, connectivity,
//! documents, session snapshot, error pages).

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{
    AppPhase, Connectivity, Document, ErrorPage, Session, ThemeMode, UserInfo, NOT_FOUND_MESSAGE,
    OFFLINE_MESSAGE,
};
