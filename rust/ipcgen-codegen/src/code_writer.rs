//! Indentation-tracking writer shared by the output targets.
//!
//! Indentation is held in an `Rc<Cell<usize>>`, so the guard returned by
//! [`CodeWriter::indent`] does not borrow the writer and output can keep going
//! while it is alive.
//!
//! ```
//! use ipcgen_codegen::code_writer::CodeWriter;
//! use ipcgen_codegen::cw_writeln;
//!
//! let mut out = String::new();
//! let mut w = CodeWriter::with_indent_spaces(&mut out, 2);
//!
//! w.block("void SendRequestPing(void)", |w| {
//!     cw_writeln!(w, "EncodeToBuffer(static_cast<int16_t>({}), SendCursor());", 1)?;
//!     w.writeln("Send();")
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     out,
//!     "void SendRequestPing(void) {\n  EncodeToBuffer(static_cast<int16_t>(1), SendCursor());\n  Send();\n}\n"
//! );
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: bool,
}

impl<W: fmt::Write> CodeWriter<W> {
    pub fn new(writer: W, indent_string: String) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string,
            at_line_start: true,
        }
    }

    pub fn with_indent_spaces(writer: W, spaces: usize) -> Self {
        Self::new(writer, " ".repeat(spaces))
    }

    /// Write text without a newline, indenting first if at the start of a line.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start = false;
        }

        self.writer.write_str(text)
    }

    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn blank_line(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    /// Indentation grows by one level while the guard is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    pub fn comment(&mut self, comment_prefix: &str, text: &str) -> fmt::Result {
        for line in text.lines() {
            self.writeln(&format!("{comment_prefix} {line}"))?;
        }
        Ok(())
    }

    /// `header {`, the indented body, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(&format!("{header} {{"))?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln("}")
    }

    /// Use [`cw_write!`](crate::cw_write) instead of calling this directly.
    #[doc(hidden)]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.write(&args.to_string())
    }

    /// Use [`cw_writeln!`](crate::cw_writeln) instead of calling this directly.
    #[doc(hidden)]
    pub fn writeln_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.writeln(&args.to_string())
    }

    /// Write `items` with `separator` between them, e.g. an argument list.
    pub fn write_separated<I, F>(
        &mut self,
        items: I,
        separator: &str,
        mut write_item: F,
    ) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator)?;
            }
            write_item(self, item)?;
            first = false;
        }
        Ok(())
    }
}

/// Drops one indentation level when it goes out of scope.
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

#[macro_export]
macro_rules! cw_write {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cw_writeln {
    ($writer:expr, $($arg:tt)*) => {
        $writer.writeln_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_follows_guards() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 2);

        w.writeln("switch (num) {").unwrap();
        {
            let _indent = w.indent();
            w.writeln("case 1:").unwrap();
            {
                let _indent = w.indent();
                w.writeln("break;").unwrap();
            }
            w.writeln("default:").unwrap();
        }
        w.writeln("}").unwrap();

        assert_eq!(
            out,
            "switch (num) {\n  case 1:\n    break;\n  default:\n}\n"
        );
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 4);

        w.block("mod private", |w| {
            w.writeln("use super::*;")?;
            w.blank_line()?;
            w.writeln("fn dispatch() {}")
        })
        .unwrap();

        assert_eq!(
            out,
            "mod private {\n    use super::*;\n\n    fn dispatch() {}\n}\n"
        );
    }

    #[test]
    fn comments_prefix_every_line() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 2);
        {
            let _indent = w.indent();
            w.comment("//", "Returns 0 on success\nand -1 on failure.").unwrap();
        }

        assert_eq!(out, "  // Returns 0 on success\n  // and -1 on failure.\n");
    }

    #[test]
    fn separated_items_and_macros() {
        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 2);

        let name = "SendRequestMove";
        cw_write!(w, "void {name}(").unwrap();
        w.write_separated(["uint32_t x", "uint32_t y"], ", ", |w, item| w.write(item))
            .unwrap();
        cw_writeln!(w, ") {{").unwrap();

        assert_eq!(out, "void SendRequestMove(uint32_t x, uint32_t y) {\n");
    }
}
