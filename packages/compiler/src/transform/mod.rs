//! Text transforms applied to documents before they are compiled.
//!
//! Each transform is a pure `&str -> String` rewrite. The compiler chains
//! them in a fixed order: resource paths, host-neutral wording, call
//! rewriting, then turbo annotations.

mod paths;
mod platform;
mod turbo;

pub use paths::rewrite_resource_paths;
pub use platform::make_platform_agnostic;
pub use turbo::add_turbo_annotations;
