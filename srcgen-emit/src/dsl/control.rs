//! Control-flow emitters.
//!
//! Every opener (`if_`, `for_`, `for_each`, `while_`) writes its header line
//! and opens a scope; the matching `end_*` closes it. `else_if` and `else_`
//! close the previous branch and open the next one, so a chain
//! `if_ .. else_if* .. else_? .. end_if` nets out to the depth it started at.

use crate::SourceBuilder;

impl SourceBuilder {
    /// `if (condition)` followed by an open scope.
    pub fn if_(&mut self, condition: &str) -> &mut Self {
        self.indent()
            .append("if (")
            .append(condition)
            .append_char(')')
            .new_line()
            .begin_scope()
    }

    /// Close the current branch and open `else if (condition)`.
    pub fn else_if(&mut self, condition: &str) -> &mut Self {
        self.end_scope()
            .indent()
            .append("else if (")
            .append(condition)
            .append_char(')')
            .new_line()
            .begin_scope()
    }

    /// Close the current branch and open `else`.
    pub fn else_(&mut self) -> &mut Self {
        self.end_scope().indent().append("else").new_line().begin_scope()
    }

    /// Close an `if` chain.
    pub fn end_if(&mut self) -> &mut Self {
        self.end_scope()
    }

    /// `for (var initializer; condition; iterator)` followed by an open scope.
    pub fn for_(&mut self, initializer: &str, condition: &str, iterator: &str) -> &mut Self {
        self.indent()
            .append("for (var ")
            .append(initializer)
            .append("; ")
            .append(condition)
            .append("; ")
            .append(iterator)
            .append_char(')')
            .new_line()
            .begin_scope()
    }

    /// Close a `for` loop.
    pub fn end_for(&mut self) -> &mut Self {
        self.end_scope()
    }

    /// `foreach (var name in source)` followed by an open scope.
    pub fn for_each(&mut self, name: &str, source: &str) -> &mut Self {
        self.indent()
            .append("foreach (var ")
            .append(name)
            .append(" in ")
            .append(source)
            .append_char(')')
            .new_line()
            .begin_scope()
    }

    /// Close a `foreach` loop.
    pub fn end_for_each(&mut self) -> &mut Self {
        self.end_scope()
    }

    /// `while (condition)` followed by an open scope.
    pub fn while_(&mut self, condition: &str) -> &mut Self {
        self.indent()
            .append("while (")
            .append(condition)
            .append_char(')')
            .new_line()
            .begin_scope()
    }

    /// Close a `while` loop.
    pub fn end_while(&mut self) -> &mut Self {
        self.end_scope()
    }

    /// `return expr;`
    pub fn return_(&mut self, expr: &str) -> &mut Self {
        self.indent()
            .append("return ")
            .append(expr)
            .append_char(';')
            .new_line()
    }

    /// `yield return expr;`
    pub fn yield_return(&mut self, expr: &str) -> &mut Self {
        self.indent()
            .append("yield return ")
            .append(expr)
            .append_char(';')
            .new_line()
    }
}

#[cfg(test)]
mod tests {
    use crate::SourceBuilder;

    #[test]
    fn test_if_else_if_else() {
        let mut builder = SourceBuilder::new();
        builder
            .if_("value == 0")
            .return_("\"a\"")
            .else_if("value == 1")
            .return_("\"b\"")
            .else_()
            .return_("\"c\"")
            .end_if();

        assert_eq!(
            builder.build().unwrap(),
            concat!(
                "if (value == 0)\n",
                "{\n",
                "    return \"a\";\n",
                "}\n",
                "else if (value == 1)\n",
                "{\n",
                "    return \"b\";\n",
                "}\n",
                "else\n",
                "{\n",
                "    return \"c\";\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_chains_restore_depth() {
        let mut builder = SourceBuilder::new();
        builder.push_indent();
        builder
            .if_("a")
            .else_if("b")
            .else_if("c")
            .end_if()
            .for_("i = 0", "i < n", "i++")
            .end_for()
            .while_("x")
            .end_while()
            .for_each("item", "items")
            .end_for_each();
        assert_eq!(builder.indent_level(), 1);

        let text = builder.as_str();
        assert_eq!(text.matches('{').count(), 6);
        assert_eq!(text.matches('}').count(), 6);
    }

    #[test]
    fn test_loops() {
        let mut builder = SourceBuilder::new();
        builder
            .var("ret", Some("0"))
            .for_("i = x", "i < 10", "i++")
            .line("ret += i;")
            .end_for()
            .while_("y < 5")
            .line("ret++;")
            .end_while()
            .for_each("value", "source")
            .yield_return("value")
            .end_for_each();

        assert_eq!(
            builder.as_str(),
            concat!(
                "var ret = 0;\n",
                "for (var i = x; i < 10; i++)\n",
                "{\n",
                "    ret += i;\n",
                "}\n",
                "while (y < 5)\n",
                "{\n",
                "    ret++;\n",
                "}\n",
                "foreach (var value in source)\n",
                "{\n",
                "    yield return value;\n",
                "}\n",
            )
        );
    }

    #[test]
    #[should_panic(expected = "without a matching open")]
    fn test_end_if_without_if_panics() {
        SourceBuilder::new().end_if();
    }
}
