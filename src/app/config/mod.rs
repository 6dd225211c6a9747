//! Working-directory configuration loaders.
//!
//! Pure document parsing lives in `domain::raw_config`; this layer decides
//! how a missing or broken document degrades.

mod load_setup_config;

pub use load_setup_config::load_setup_config;
