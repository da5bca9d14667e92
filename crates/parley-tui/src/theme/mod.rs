//! Theme tokens and semantic styles.

pub mod palette;
pub mod styles;

pub use palette::{design_tokens, Palette};
