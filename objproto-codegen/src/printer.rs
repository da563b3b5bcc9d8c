//! Text output for generated code.
//!
//! Generators never build output files themselves. They append template text
//! to a [`Printer`] supplied by the caller, with `$name$` placeholders
//! replaced from a [`Variables`] map. `$$` produces a literal dollar sign.

use std::collections::BTreeMap;

/// Substitution variables, keyed by placeholder name.
pub type Variables = BTreeMap<&'static str, String>;

/// Append-only text destination for generated code.
pub trait Printer {
    /// Appends `template` with every `$name$` placeholder substituted.
    ///
    /// # Panics
    /// Implementations panic if the template references a variable that is
    /// not in `variables`, or contains an unterminated placeholder.
    fn print(&mut self, variables: &Variables, template: &str);

    /// Increases the indentation applied to subsequent lines.
    fn indent(&mut self);

    /// Decreases the indentation applied to subsequent lines.
    fn outdent(&mut self);

    /// Appends text that contains no placeholders.
    fn print_raw(&mut self, text: &str) {
        let variables = Variables::new();
        self.print(&variables, &text.replace('$', "$$"));
    }
}

/// Expands `$name$` placeholders in a template.
///
/// # Panics
/// Panics if a placeholder names an undefined variable or is never closed.
/// Templates are fixed strings inside the generators, so either case is a
/// bug in the generator rather than in its input.
#[must_use]
pub fn substitute(variables: &Variables, template: &str) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('$')
            .unwrap_or_else(|| panic!("unterminated variable in template: {template:?}"));
        let name = &after[..end];

        if name.is_empty() {
            output.push('$');
        } else {
            let value = variables
                .get(name)
                .unwrap_or_else(|| panic!("undefined variable `{name}` in template"));
            output.push_str(value);
        }
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    output
}

/// In-memory [`Printer`] that indents by two spaces per level.
#[derive(Debug, Clone)]
pub struct StringPrinter {
    output: String,
    indent: usize,
    at_line_start: bool,
}

impl StringPrinter {
    /// Creates an empty printer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Returns the text printed so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the printer and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }
}

impl Default for StringPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for StringPrinter {
    fn print(&mut self, variables: &Variables, template: &str) {
        let text = substitute(variables, template);

        for c in text.chars() {
            if self.at_line_start && c != '\n' {
                for _ in 0..self.indent {
                    self.output.push_str("  ");
                }
            }
            self.output.push(c);
            self.at_line_start = c == '\n';
        }
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}
