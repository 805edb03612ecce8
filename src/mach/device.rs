use crate::lang::Error;
use ansi_term::Style;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// ## Output sink
///
/// Everything a running program prints goes through here. The sink owns
/// the cursor column so `,` separators and `TAB()` line up.

pub trait Output {
    fn print(&mut self, s: &str);
    fn column(&self) -> usize;
    fn set_column(&mut self, col: usize);
    /// Pads with spaces up to `col`. Does nothing if already past it.
    fn tab_to(&mut self, col: usize);
    fn flush(&mut self);
    fn diagnostic(&mut self, error: &Error);
}

/// ## Line input source
///
/// The source shows the prompt itself. `None` is end of input.

pub trait Input {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct Printer<W: Write> {
    writer: W,
    col: usize,
    tab_size: usize,
    styled: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, tab_size: usize) -> Printer<W> {
        Printer {
            writer,
            col: 0,
            tab_size: tab_size.max(1),
            styled: false,
        }
    }

    /// Diagnostics are shown in bold when styled.
    pub fn styled(mut self, styled: bool) -> Printer<W> {
        self.styled = styled;
        self
    }

    fn write(&mut self, s: &str) {
        if let Err(e) = self.writer.write_all(s.as_bytes()) {
            warn!(error = %e, "output write failed");
        }
    }
}

impl<W: Write> Output for Printer<W> {
    fn print(&mut self, s: &str) {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                '\n' => {
                    out.push('\n');
                    self.col = 0;
                }
                '\r' => {
                    out.push('\r');
                    self.col = 0;
                }
                '\t' => {
                    let spaces = self.tab_size - self.col % self.tab_size;
                    out.extend(std::iter::repeat(' ').take(spaces));
                    self.col += spaces;
                }
                _ => {
                    out.push(ch);
                    self.col += 1;
                }
            }
        }
        self.write(&out);
    }

    fn column(&self) -> usize {
        self.col
    }

    fn set_column(&mut self, col: usize) {
        self.col = col;
    }

    fn tab_to(&mut self, col: usize) {
        if col > self.col {
            let pad = " ".repeat(col - self.col);
            self.print(&pad);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!(error = %e, "output flush failed");
        }
    }

    fn diagnostic(&mut self, error: &Error) {
        if self.col > 0 {
            self.print("\n");
        }
        let text = format!("?{}", error);
        if self.styled {
            let bold = Style::new().bold().paint(text).to_string();
            self.write(&bold);
            self.print("\n");
        } else {
            self.print(&text);
            self.print("\n");
        }
        self.flush();
    }
}

/// Reads answers from any buffered reader, writing the prompt to `echo`.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, echo: W) -> LineInput<R, W> {
        LineInput { reader, echo }
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.echo.write_all(prompt.as_bytes())?;
        self.echo.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
