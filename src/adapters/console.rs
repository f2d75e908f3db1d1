use crate::adapters::parse_choice;
use crate::core::{InputSource, Menu, MessageSink, CHOICE_PROMPT};
use crate::utils::error::{CoffeeError, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented prompt: writes menus to `W`, reads one answer per line from `R`.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_choice(&mut self, menu: &Menu) -> Result<i64> {
        writeln!(self.writer, "{}", menu.title)?;
        for option in menu.options {
            writeln!(self.writer, "{}", option)?;
        }
        write!(self.writer, "{}", CHOICE_PROMPT)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CoffeeError::InputClosed);
        }
        tracing::debug!("Read answer {:?} for '{}'", line.trim_end(), menu.title);
        parse_choice(&line)
    }
}

/// Writes each message as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}
