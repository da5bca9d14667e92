//! Terminal frontend: rendering, event polling, and the shell runner.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;

pub use runner::run;
