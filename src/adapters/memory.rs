use crate::adapters::parse_choice;
use crate::core::{InputSource, Menu, MessageSink};
use crate::utils::error::{CoffeeError, Result};
use std::collections::VecDeque;

/// Collects emitted lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl MessageSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Replays prepared answers; raw text goes through the same parsing as the console.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    shown_menus: Vec<&'static str>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            shown_menus: Vec::new(),
        }
    }

    pub fn from_choices(choices: &[i64]) -> Self {
        Self::new(choices.iter().map(|c| c.to_string()))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Titles of the menus shown so far.
    pub fn shown_menus(&self) -> &[&'static str] {
        &self.shown_menus
    }
}

impl InputSource for ScriptedInput {
    fn read_choice(&mut self, menu: &Menu) -> Result<i64> {
        self.shown_menus.push(menu.title);
        let answer = self.answers.pop_front().ok_or(CoffeeError::InputClosed)?;
        parse_choice(&answer)
    }
}
