//! Declaration and list emitters.
//!
//! Type positions accept anything implementing [`TypeName`]: a literal
//! type name (`"int"`, `String`) or a resolved [`TypeRef`](srcgen_core::TypeRef),
//! which is written in its fully-qualified form.

use srcgen_core::{Accessibility, Constant, TypeName};

use crate::{EmitError, SourceBuilder};

const LIST_SEPARATOR: &str = ", ";

impl SourceBuilder {
    /// Append the keyword phrase for an accessibility level.
    ///
    /// # Panics
    ///
    /// Panics for [`Accessibility::NotApplicable`], which has no keyword.
    pub fn accessibility(&mut self, level: Accessibility) -> &mut Self {
        match self.try_accessibility(level) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Append the keyword phrase for an accessibility level, failing for
    /// levels without one.
    pub fn try_accessibility(&mut self, level: Accessibility) -> Result<&mut Self, EmitError> {
        let keyword = level
            .keyword()
            .ok_or(EmitError::UnmappedAccessibility(level))?;
        Ok(self.append(keyword))
    }

    /// Append a type name.
    pub fn type_name<T: TypeName + ?Sized>(&mut self, ty: &T) -> &mut Self {
        self.append(&ty.type_name())
    }

    /// Append a typed literal.
    pub fn constant(&mut self, value: &Constant) -> &mut Self {
        self.append_display(value)
    }

    /// Append `type name`.
    pub fn argument<T: TypeName + ?Sized>(&mut self, ty: &T, name: &str) -> &mut Self {
        self.type_name(ty).append_char(' ').append(name)
    }

    /// Append `type name` pairs separated by `, `.
    ///
    /// An empty sequence writes nothing.
    pub fn arguments<I, T, N>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: TypeName,
        N: AsRef<str>,
    {
        let start = self.len();
        for (ty, name) in items {
            self.argument(&ty, name.as_ref()).append(LIST_SEPARATOR);
        }
        self.trim_separator(start)
    }

    /// Append a single type argument list `<type>`.
    pub fn generic<T: TypeName + ?Sized>(&mut self, ty: &T) -> &mut Self {
        self.append_char('<').type_name(ty).append_char('>')
    }

    /// Append a type argument list `<A, B, ...>`.
    ///
    /// An empty sequence writes nothing, not even the angle brackets.
    pub fn generics<I>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: TypeName,
    {
        let mut types = types.into_iter().peekable();
        if types.peek().is_none() {
            return self;
        }

        self.append_char('<');
        let start = self.len();
        for ty in types {
            self.type_name(&ty).append(LIST_SEPARATOR);
        }
        self.trim_separator(start).append_char('>')
    }

    fn trim_separator(&mut self, start: usize) -> &mut Self {
        let len = self.len();
        if len > start {
            self.set_len(len - LIST_SEPARATOR.len());
        }
        self
    }

    /// `private type name [= initializer];`
    pub fn field<T: TypeName + ?Sized>(
        &mut self,
        ty: &T,
        name: &str,
        initializer: Option<&str>,
    ) -> &mut Self {
        self.field_with(Accessibility::Private, ty, name, initializer)
    }

    /// `accessibility type name [= initializer];`
    pub fn field_with<T: TypeName + ?Sized>(
        &mut self,
        accessibility: Accessibility,
        ty: &T,
        name: &str,
        initializer: Option<&str>,
    ) -> &mut Self {
        self.indent()
            .accessibility(accessibility)
            .append_char(' ')
            .argument(ty, name);
        self.initializer(initializer).append_char(';').new_line()
    }

    /// `public type name { get; set; } [= initializer;]`
    pub fn property<T: TypeName + ?Sized>(
        &mut self,
        ty: &T,
        name: &str,
        initializer: Option<&str>,
    ) -> &mut Self {
        self.property_with(Accessibility::Public, ty, name, initializer)
    }

    /// `accessibility type name { get; set; } [= initializer;]`
    pub fn property_with<T: TypeName + ?Sized>(
        &mut self,
        accessibility: Accessibility,
        ty: &T,
        name: &str,
        initializer: Option<&str>,
    ) -> &mut Self {
        self.indent()
            .accessibility(accessibility)
            .append_char(' ')
            .argument(ty, name)
            .append(" { get; set; }");
        if initializer.is_some() {
            self.initializer(initializer).append_char(';');
        }
        self.new_line()
    }

    /// `type name [= value];`
    pub fn local<T: TypeName + ?Sized>(
        &mut self,
        ty: &T,
        name: &str,
        value: Option<&str>,
    ) -> &mut Self {
        self.indent().argument(ty, name);
        self.initializer(value).append_char(';').new_line()
    }

    /// `var name [= value];`
    pub fn var(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        self.local("var", name, value)
    }

    fn initializer(&mut self, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.append(" = ").append(value),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use srcgen_core::{Accessibility, Constant, TypeRef};

    use crate::{EmitError, SourceBuilder};

    #[test]
    fn test_accessibility_keywords() {
        let mut builder = SourceBuilder::new();
        builder
            .accessibility(Accessibility::ProtectedOrInternal)
            .append_char('|')
            .accessibility(Accessibility::ProtectedAndInternal);
        assert_eq!(builder.as_str(), "protected internal|private protected");
    }

    #[test]
    fn test_unmapped_accessibility_is_an_error() {
        let mut builder = SourceBuilder::new();
        let err = builder
            .try_accessibility(Accessibility::NotApplicable)
            .unwrap_err();
        assert_eq!(
            err,
            EmitError::UnmappedAccessibility(Accessibility::NotApplicable)
        );
        assert!(builder.is_empty());
    }

    #[test]
    #[should_panic(expected = "has no keyword")]
    fn test_unmapped_accessibility_panics() {
        SourceBuilder::new().accessibility(Accessibility::NotApplicable);
    }

    #[test]
    fn test_fields() {
        let mut builder = SourceBuilder::new();
        builder
            .field("int", "x", None)
            .field("int", "y", Some("0"))
            .field_with(Accessibility::Internal, &TypeRef::string(), "name", None);
        assert_eq!(
            builder.as_str(),
            "private int x;\nprivate int y = 0;\ninternal string name;\n"
        );
    }

    #[test]
    fn test_properties() {
        let mut builder = SourceBuilder::new();
        builder
            .property("string", "Name", Some("string.Empty"))
            .property("int", "Age", None)
            .property_with(Accessibility::Protected, "bool", "Flag", Some("true"));
        assert_eq!(
            builder.as_str(),
            concat!(
                "public string Name { get; set; } = string.Empty;\n",
                "public int Age { get; set; }\n",
                "protected bool Flag { get; set; } = true;\n",
            )
        );
    }

    #[test]
    fn test_locals() {
        let mut builder = SourceBuilder::new();
        builder
            .var("ret", Some("0"))
            .local("int", "count", None)
            .local(&TypeRef::array(TypeRef::int()), "values", Some("new int[4]"));
        assert_eq!(
            builder.as_str(),
            "var ret = 0;\nint count;\nint[] values = new int[4];\n"
        );
    }

    #[test]
    fn test_arguments_join_without_trailing_separator() {
        let mut builder = SourceBuilder::new();
        builder
            .append_char('(')
            .arguments([
                ("IEnumerable<TSource>", "source"),
                ("Func<TSource, TResult>", "converter"),
            ])
            .append_char(')');
        assert_eq!(
            builder.as_str(),
            "(IEnumerable<TSource> source, Func<TSource, TResult> converter)"
        );
    }

    #[test]
    fn test_arguments_empty_writes_nothing() {
        let mut builder = SourceBuilder::new();
        builder
            .append("Run(")
            .arguments(Vec::<(&str, &str)>::new())
            .append_char(')');
        assert_eq!(builder.as_str(), "Run()");
    }

    #[test]
    fn test_generics() {
        let mut builder = SourceBuilder::new();
        builder
            .append("Convert")
            .generics(["TSource", "TResult"])
            .append_char(' ')
            .generic("T");
        assert_eq!(builder.as_str(), "Convert<TSource, TResult> <T>");
    }

    #[test]
    fn test_generics_empty_writes_nothing() {
        let mut builder = SourceBuilder::new();
        builder.append("Run").generics(Vec::<&str>::new()).append("()");
        assert_eq!(builder.as_str(), "Run()");
    }

    #[test]
    fn test_generics_with_type_refs() {
        let int = TypeRef::int();
        let list = TypeRef::generic(Some("System.Collections.Generic"), "List", vec![TypeRef::string()]);
        let mut builder = SourceBuilder::new();
        builder.append("M").generics([&int, &list]);
        assert_eq!(
            builder.as_str(),
            "M<int, global::System.Collections.Generic.List<string>>"
        );
    }

    #[test]
    fn test_constant() {
        let mut builder = SourceBuilder::new();
        builder
            .constant(&Constant::Long(5))
            .append(", ")
            .constant(&Constant::String("a".into()));
        assert_eq!(builder.as_str(), "5L, \"a\"");
    }
}
