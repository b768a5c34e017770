//! Collaborator-facing types for the srcgen source emitter.
//!
//! Generators receive facts from the host (declared symbols, build options)
//! and hand them to the emitter. This crate holds the detached forms of
//! those facts so emission never touches a live compiler object.

mod accessibility;
mod config;
mod constant;
mod types;

pub use accessibility::{Accessibility, ParseAccessibilityError};
pub use config::{BUILD_PROPERTY_PREFIX, ConfigError, ConfigOptions};
pub use constant::Constant;
pub use types::{SpecialType, TypeName, TypeRef};
