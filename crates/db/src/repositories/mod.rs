//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod project_repo;
pub mod section_repo;

pub use project_repo::ProjectRepo;
pub use section_repo::SectionRepo;
