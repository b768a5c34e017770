//! Pooled text buffers and a fluent, indentation-aware source builder.
//!
//! # Module Organization
//!
//! - [`pool`] - thread-safe pool of reusable string storage
//! - [`buffer`] - [`GrowableBuffer`], append-only storage that grows through the pool
//! - [`SourceBuilder`] - indentation-tracking builder over a buffer
//! - [`Scope`] - guard that closes a `{ ... }` block on every exit path
//! - [`dsl`] - structural emitters: control flow, declarations, lists, directives
//!
//! A builder is owned by a single unit of work and is not shared across
//! threads; only the pool is.

mod builder;
pub mod buffer;
pub mod dsl;
mod error;
mod indent;
pub mod pool;
mod scope;

pub use buffer::{GrowableBuffer, INLINE_CAPACITY};
pub use builder::SourceBuilder;
pub use error::EmitError;
pub use indent::Indent;
pub use pool::BufferPool;
pub use scope::Scope;
pub use srcgen_core::{Accessibility, Constant, TypeName, TypeRef};
