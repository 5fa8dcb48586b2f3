//! Line-oriented builder for generating properly indented TypeScript.

const INDENT: &str = "  ";

/// Fluent API for building code with two-space indentation.
///
/// # Example
///
/// ```
/// use typewright_codegen_typescript::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("export type Foo = {")
///     .indent()
///     .line("id: number;")
///     .dedent()
///     .line("};")
///     .build();
///
/// assert_eq!(code, "export type Foo = {\n  id: number;\n};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
