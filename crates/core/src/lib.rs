//! Pagecraft domain core.
//!
//! Pure section model: kinds, typed configuration variants, template
//! registry, rendering dispatcher, and the brand kit view. No I/O lives
//! here; persistence and HTTP wrap this crate.

pub mod brand;
pub mod error;
pub mod kind;
pub mod render;
pub mod section;
pub mod templates;
pub mod types;
