//! File headers, directives and single-line statements.

use crate::SourceBuilder;

impl SourceBuilder {
    /// `// <auto-generated />`
    pub fn auto_generated(&mut self) -> &mut Self {
        self.line("// <auto-generated />")
    }

    /// `#nullable enable`
    pub fn enable_nullable(&mut self) -> &mut Self {
        self.line("#nullable enable")
    }

    /// `#pragma warning disable <id>`
    pub fn disable(&mut self, id: &str) -> &mut Self {
        self.indent()
            .append("#pragma warning disable ")
            .append(id)
            .new_line()
    }

    /// File-scoped `namespace ns;`
    pub fn namespace(&mut self, ns: &str) -> &mut Self {
        self.indent()
            .append("namespace ")
            .append(ns)
            .append_char(';')
            .new_line()
    }

    /// `using ns;`
    pub fn using(&mut self, ns: &str) -> &mut Self {
        self.indent()
            .append("using ")
            .append(ns)
            .append_char(';')
            .new_line()
    }

    /// `// comment`
    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.indent().append("// ").append(comment).new_line()
    }
}
