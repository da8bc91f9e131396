/// Indentation-aware string builder used by every generator.
///
/// All accumulation during a generation call lives in a buffer local to
/// that call, so generator functions stay pure and safe to run from any
/// number of threads at once.
#[derive(Debug)]
pub struct CodeBuffer {
    buffer: String,
    depth: usize,
    indent: &'static str,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent: "  ",
        }
    }

    /// Append raw text with no indentation or newline.
    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append a line at the current indentation.
    pub fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.add(text);
        self.add("\n");
    }

    /// Append a blank line.
    pub fn blank(&mut self) {
        self.add("\n");
    }

    /// Append the current indentation without text.
    pub fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_lines() {
        let mut buf = CodeBuffer::new();
        buf.add_line("fn main() {");
        buf.indent();
        buf.add_line("inner();");
        buf.dedent();
        buf.add_line("}");
        assert_eq!(buf.into_output(), "fn main() {\n  inner();\n}\n");
    }

    #[test]
    fn test_dedent_at_zero_is_noop() {
        let mut buf = CodeBuffer::new();
        buf.dedent();
        buf.add_line("x");
        assert_eq!(buf.into_output(), "x\n");
    }
}
