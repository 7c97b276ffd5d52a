//! Line-based console I/O for the interactive menu
//!
//! Generic over reader and writer so the menu can be driven from stdin/stdout
//! or from in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{EditorError, EditorResult};

/// Prompting console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line of input
    ///
    /// The line terminator is removed; other whitespace is kept so inserted
    /// text can start with spaces. End of input yields `InputClosed`.
    pub fn prompt(&mut self, message: &str) -> EditorResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut input = String::new();
        let read = self.input.read_line(&mut input)?;
        if read == 0 {
            return Err(EditorError::InputClosed);
        }

        let trimmed_len = input.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        input.truncate(trimmed_len);
        Ok(input)
    }

    /// Print a line
    pub fn say(&mut self, text: impl AsRef<str>) -> EditorResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print text as-is (no newline added)
    pub fn write_raw(&mut self, text: impl AsRef<str>) -> EditorResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut console = console("hello\r\n  spaced \n");

        assert_eq!(console.prompt("> ").unwrap(), "hello");
        assert_eq!(console.prompt("> ").unwrap(), "  spaced ");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > ");
    }

    #[test]
    fn test_prompt_at_eof() {
        let mut console = console("");
        assert!(matches!(console.prompt("> "), Err(EditorError::InputClosed)));
    }

    #[test]
    fn test_prompt_empty_line_is_not_eof() {
        let mut console = console("\n");
        assert_eq!(console.prompt("> ").unwrap(), "");
    }

    #[test]
    fn test_say_and_raw() {
        let mut console = console("");
        console.say("line").unwrap();
        console.write_raw("raw").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "line\nraw");
    }
}
