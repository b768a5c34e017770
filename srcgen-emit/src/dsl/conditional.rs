//! Conditional emission helpers.

use std::fmt;

use crate::SourceBuilder;

impl SourceBuilder {
    /// Append `s` only if `condition` holds.
    pub fn append_if(&mut self, condition: bool, s: &str) -> &mut Self {
        if condition { self.append(s) } else { self }
    }

    /// Append `c` only if `condition` holds.
    pub fn append_char_if(&mut self, condition: bool, c: char) -> &mut Self {
        if condition { self.append_char(c) } else { self }
    }

    /// Append the `Display` form of `value` only if `condition` holds and a
    /// value is present.
    pub fn append_display_if<T: fmt::Display>(
        &mut self,
        condition: bool,
        value: Option<T>,
    ) -> &mut Self {
        match value {
            Some(value) if condition => self.append_display(value),
            _ => self,
        }
    }

    /// Append formatted arguments only if `condition` holds.
    ///
    /// ```
    /// use srcgen_emit::SourceBuilder;
    ///
    /// let mut builder = SourceBuilder::new();
    /// builder
    ///     .append_format_if(false, format_args!("{:.2}", 0.0))
    ///     .append_format_if(true, format_args!("{:.2}", 1.0));
    /// assert_eq!(builder.as_str(), "1.00");
    /// ```
    pub fn append_format_if(&mut self, condition: bool, args: fmt::Arguments<'_>) -> &mut Self {
        if condition { self.append_fmt(args) } else { self }
    }

    /// Append the items joined by `separator`. Writes nothing for an empty
    /// sequence.
    pub fn append_join<I>(&mut self, items: I, separator: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.append(separator);
            }
            self.append_display(item);
        }
        self
    }

    /// Append the joined items only if `condition` holds. The items are not
    /// iterated otherwise.
    pub fn append_join_if<I>(&mut self, condition: bool, items: I, separator: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if condition {
            self.append_join(items, separator)
        } else {
            self
        }
    }

    /// Run `f` on the builder only if `condition` holds.
    pub fn when<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Run `f` once per item, in order.
    pub fn each<T, I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for item in items {
            f(self, item);
        }
        self
    }
}
