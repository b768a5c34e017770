//! Type descriptors handed to the emitter by the symbol collaborator.
//!
//! A [`TypeRef`] is a detached description of a resolved type. It carries
//! enough structure to render the two display forms generators need:
//! the fully-qualified form used in declarations and the short class-name
//! form used in identifiers and messages.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// A built-in type with a keyword alias (`int`, `string`, ...).
    Special(SpecialType),
    /// A named type (class, struct, interface, delegate).
    Named {
        /// Containing namespace, dot separated. `None` for the global namespace.
        namespace: Option<String>,
        /// Simple metadata name without arity suffix.
        name: String,
        /// Type arguments, empty for non-generic types.
        args: Vec<TypeRef>,
    },
    /// A single-dimensional array of the element type.
    Array(Box<TypeRef>),
    /// A nullable wrapper (`T?`).
    Nullable(Box<TypeRef>),
    /// An unbound type parameter (`T`).
    Parameter(String),
}

impl TypeRef {
    /// Create a special type reference.
    pub fn special(ty: SpecialType) -> Self {
        Self::Special(ty)
    }

    /// Create a non-generic named type reference.
    pub fn named(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self::Named {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a generic named type reference.
    pub fn generic(namespace: Option<&str>, name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Named {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            args,
        }
    }

    /// Create an array type reference.
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Create a nullable type reference.
    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Create a type parameter reference.
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::Special(SpecialType::Int32)
    }

    /// Convenience: `string`.
    pub fn string() -> Self {
        Self::Special(SpecialType::String)
    }

    /// Convenience: `bool`.
    pub fn bool() -> Self {
        Self::Special(SpecialType::Boolean)
    }

    /// Fully-qualified display form.
    ///
    /// Special types use their keyword alias, named types are prefixed with
    /// `global::` and their namespace.
    pub fn display_name(&self) -> String {
        let mut out = String::new();
        self.write_display(&mut out);
        out
    }

    fn write_display(&self, out: &mut String) {
        match self {
            Self::Special(ty) => out.push_str(ty.keyword()),
            Self::Named {
                namespace,
                name,
                args,
            } => {
                out.push_str("global::");
                if let Some(ns) = namespace {
                    out.push_str(ns);
                    out.push('.');
                }
                out.push_str(name);
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.write_display(out);
                    }
                    out.push('>');
                }
            }
            Self::Array(element) => {
                element.write_display(out);
                out.push_str("[]");
            }
            Self::Nullable(inner) => {
                inner.write_display(out);
                out.push('?');
            }
            Self::Parameter(name) => out.push_str(name),
        }
    }

    /// Simple metadata name (`Int32`, `List`, `T`).
    pub fn simple_name(&self) -> Cow<'_, str> {
        match self {
            Self::Special(ty) => Cow::Borrowed(ty.metadata_name()),
            Self::Named { name, .. } | Self::Parameter(name) => Cow::Borrowed(name.as_str()),
            Self::Array(element) => Cow::Owned(format!("{}[]", element.simple_name())),
            Self::Nullable(inner) => inner.simple_name(),
        }
    }

    /// Short class name: the simple name followed by the simple names of
    /// the type arguments, e.g. `Dictionary<String, Int32>`.
    pub fn class_name(&self) -> String {
        match self {
            Self::Named { name, args, .. } if !args.is_empty() => {
                let args: Vec<_> = args.iter().map(|a| a.simple_name()).collect();
                format!("{}<{}>", name, args.join(", "))
            }
            _ => self.simple_name().into_owned(),
        }
    }

    /// True for constructed generic types and for type parameters.
    pub fn is_generic(&self) -> bool {
        match self {
            Self::Named { args, .. } => !args.is_empty(),
            Self::Parameter(_) => true,
            _ => false,
        }
    }
}

/// Built-in types that have a keyword alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialType {
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
    Void,
}

impl SpecialType {
    /// Keyword alias used in source (`int`, `string`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Boolean => "bool",
            Self::Char => "char",
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Single => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Void => "void",
        }
    }

    /// Runtime metadata name (`Int32`, `String`, ...).
    pub fn metadata_name(self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Void => "Void",
        }
    }
}

/// Anything the emitter can write in a type position.
///
/// Implemented for literal type names (`str`, `String`) and for resolved
/// [`TypeRef`]s, so declaration helpers accept either.
pub trait TypeName {
    /// The text written for this type.
    fn type_name(&self) -> Cow<'_, str>;
}

impl TypeName for str {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TypeName for String {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TypeName for TypeRef {
    fn type_name(&self) -> Cow<'_, str> {
        match self {
            Self::Special(ty) => Cow::Borrowed(ty.keyword()),
            Self::Parameter(name) => Cow::Borrowed(name.as_str()),
            _ => Cow::Owned(self.display_name()),
        }
    }
}

impl<T: TypeName + ?Sized> TypeName for &T {
    fn type_name(&self) -> Cow<'_, str> {
        (**self).type_name()
    }
}
