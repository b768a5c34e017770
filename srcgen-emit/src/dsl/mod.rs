//! Structural emitters layered on the builder primitives.
//!
//! Each submodule adds methods to [`SourceBuilder`](crate::SourceBuilder)
//! that compose `indent`, `append`, `new_line` and the scope helpers. None
//! of them touch the buffer directly, and all return the builder so calls
//! chain.
//!
//! - [`conditional`] - emit only when a predicate holds
//! - [`control`] - `if`/`else`, loops, `return`
//! - [`declarations`] - fields, properties, locals, argument and generic lists
//! - [`preamble`] - file headers, directives, namespaces, comments

pub mod conditional;
pub mod control;
pub mod declarations;
pub mod preamble;
