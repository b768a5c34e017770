use srcgen_core::Accessibility;
use thiserror::Error;

/// Structural misuse of the source builder.
///
/// These are programming errors in the generator, not problems with the
/// input being generated from. The chaining API panics with these messages;
/// the `try_*` variants return them instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("scope closed at indent level 0 without a matching open")]
    UnbalancedScope,

    #[error("{depth} scope(s) still open when the source was built")]
    UnclosedScopes { depth: usize },

    #[error("accessibility '{0:?}' has no keyword")]
    UnmappedAccessibility(Accessibility),

    #[error("a Display implementation returned an error unexpectedly")]
    Format,

    #[error("cannot set length to {requested}; builder holds {len} bytes")]
    InvalidLength { requested: usize, len: usize },
}
