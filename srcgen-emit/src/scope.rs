//! Brace-delimited scopes and the guard that keeps them balanced.

use std::ops::{Deref, DerefMut};

use crate::{EmitError, SourceBuilder};

/// An open `{ ... }` scope on a [`SourceBuilder`].
///
/// Created by [`SourceBuilder::scope`], which has already written `{` and
/// increased the depth. Dropping the guard decreases the depth and writes
/// the closing `}`, on every exit path: normal fall-through, early return
/// via `?`, or unwinding. The guard derefs to the builder, so the body of
/// the scope is written through it.
///
/// ```
/// use srcgen_emit::SourceBuilder;
///
/// let mut builder = SourceBuilder::new();
/// builder.line("class Point");
/// {
///     let mut class = builder.scope();
///     class.field("int", "x", None);
/// }
/// assert_eq!(builder.as_str(), "class Point\n{\n    private int x;\n}\n");
/// ```
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct Scope<'a> {
    builder: &'a mut SourceBuilder,
}

impl Deref for Scope<'_> {
    type Target = SourceBuilder;

    fn deref(&self) -> &SourceBuilder {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut SourceBuilder {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if self.builder.try_end_scope().is_err() {
            // Depth was lowered by hand inside the scope. Still close the
            // brace so the text stays balanced.
            tracing::warn!("scope guard closed at indent level 0");
            self.builder.indent().append_char('}').new_line();
        }
    }
}

impl SourceBuilder {
    /// Write an indented `{` line and increase the depth.
    pub fn begin_scope(&mut self) -> &mut Self {
        self.indent().append_char('{').new_line().push_indent()
    }

    /// Decrease the depth and write an indented `}` line.
    ///
    /// # Panics
    ///
    /// Panics when no scope is open; see [`try_end_scope`](Self::try_end_scope).
    pub fn end_scope(&mut self) -> &mut Self {
        match self.try_end_scope() {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Close the innermost scope, failing if none is open.
    pub fn try_end_scope(&mut self) -> Result<&mut Self, EmitError> {
        self.try_push_dedent()?;
        Ok(self.indent().append_char('}').new_line())
    }

    /// Open a scope that closes when the returned guard drops.
    pub fn scope(&mut self) -> Scope<'_> {
        self.begin_scope();
        Scope { builder: self }
    }

    /// Write `header` as a line, then a scope around whatever `f` emits.
    ///
    /// ```
    /// use srcgen_emit::SourceBuilder;
    ///
    /// let mut builder = SourceBuilder::new();
    /// builder.block("void Run()", |b| {
    ///     b.return_("0");
    /// });
    /// assert_eq!(builder.as_str(), "void Run()\n{\n    return 0;\n}\n");
    /// ```
    pub fn block<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut SourceBuilder),
    {
        self.line(header);
        {
            let mut scope = self.scope();
            f(&mut *scope);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    #[test]
    fn test_begin_and_end_scope() {
        let mut builder = SourceBuilder::new();
        builder.begin_scope().line("body();").end_scope();
        assert_eq!(builder.as_str(), "{\n    body();\n}\n");
        assert_eq!(builder.indent_level(), 0);
    }

    #[test]
    fn test_nested_scopes() {
        let mut builder = SourceBuilder::new();
        builder
            .begin_scope()
            .begin_scope()
            .line("inner();")
            .end_scope()
            .end_scope();
        assert_eq!(builder.as_str(), "{\n    {\n        inner();\n    }\n}\n");
    }

    #[test]
    fn test_guard_closes_on_drop() {
        let mut builder = SourceBuilder::new();
        {
            let mut scope = builder.scope();
            assert_eq!(scope.indent_level(), 1);
            scope.line("x();");
        }
        assert_eq!(builder.indent_level(), 0);
        assert_eq!(builder.as_str(), "{\n    x();\n}\n");
    }

    #[test]
    fn test_guard_closes_on_early_return() {
        fn emit(builder: &mut SourceBuilder, fail: bool) -> Result<(), EmitError> {
            let mut scope = builder.scope();
            scope.line("first();");
            if fail {
                return Err(EmitError::UnbalancedScope);
            }
            scope.line("second();");
            Ok(())
        }

        let mut builder = SourceBuilder::new();
        assert!(emit(&mut builder, true).is_err());
        assert_eq!(builder.as_str(), "{\n    first();\n}\n");
        assert_eq!(builder.indent_level(), 0);
    }

    #[test]
    fn test_guard_closes_on_panic() {
        let mut builder = SourceBuilder::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut scope = builder.scope();
            scope.line("before();");
            panic!("generator bug");
        }));
        assert!(result.is_err());
        assert_eq!(builder.indent_level(), 0);
        assert_eq!(builder.as_str(), "{\n    before();\n}\n");
    }

    #[test]
    fn test_guard_still_closes_brace_after_manual_dedent() {
        let mut builder = SourceBuilder::new();
        {
            let mut scope = builder.scope();
            scope.push_dedent();
        }
        assert_eq!(builder.as_str(), "{\n}\n");
        assert_eq!(builder.indent_level(), 0);
    }

    #[test]
    fn test_block() {
        let mut builder = SourceBuilder::new();
        builder.block("class A", |b| {
            b.block("void M()", |b| {
                b.line("M();");
            });
        });
        assert_eq!(
            builder.build().unwrap(),
            "class A\n{\n    void M()\n    {\n        M();\n    }\n}\n"
        );
    }

    #[test]
    fn test_try_end_scope_without_open() {
        let mut builder = SourceBuilder::new();
        assert_eq!(
            builder.try_end_scope().unwrap_err(),
            EmitError::UnbalancedScope
        );
        assert!(builder.is_empty());
    }

    #[test]
    #[should_panic(expected = "without a matching open")]
    fn test_end_scope_without_open_panics() {
        SourceBuilder::new().end_scope();
    }
}
