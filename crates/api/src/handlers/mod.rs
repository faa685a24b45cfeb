//! HTTP handlers, one module per resource.

pub mod ai;
pub mod project;
pub mod section;
