use crate::domain::ports::Brewer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier that selects a brewing behavior and labels its output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeanType(String);

impl BeanType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BeanType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beverage {
    Espresso,
    Americano,
}

impl Beverage {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Beverage::Espresso),
            2 => Some(Beverage::Americano),
            _ => None,
        }
    }

    /// Bean-type identifier understood by the factory.
    pub fn bean_type(&self) -> &'static str {
        match self {
            Beverage::Espresso => "espresso",
            Beverage::Americano => "americano",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Additive {
    Milk,
    Sugar,
}

impl Additive {
    pub fn suffix(&self) -> &'static str {
        match self {
            Additive::Milk => " with milk",
            Additive::Sugar => " with sugar",
        }
    }

    /// Component menu option to additives, in wrap order.
    pub fn for_choice(choice: i64) -> Option<&'static [Additive]> {
        match choice {
            1 => Some(&[Additive::Milk]),
            2 => Some(&[Additive::Sugar]),
            3 => Some(&[Additive::Milk, Additive::Sugar]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub const BEVERAGE_MENU: Menu = Menu {
    title: "Select your coffee:",
    options: &["1. Espresso", "2. Americano"],
};

pub const COMPONENT_MENU: Menu = Menu {
    title: "Select components:",
    options: &["1. milk", "2. sugar", "3. both"],
};

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingBeverageChoice,
    AwaitingComponentChoice(Beverage),
    Resolved,
    Rejected,
}

impl SelectionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SelectionState::Resolved | SelectionState::Rejected)
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::AwaitingBeverageChoice => f.write_str("AwaitingBeverageChoice"),
            SelectionState::AwaitingComponentChoice(beverage) => {
                write!(f, "AwaitingComponentChoice({:?})", beverage)
            }
            SelectionState::Resolved => f.write_str("Resolved"),
            SelectionState::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Either a fully decorated brewer or an explicit rejection.
#[derive(Debug)]
pub enum SelectionResult {
    Resolved(Box<dyn Brewer>),
    Rejected,
}

impl SelectionResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectionResult::Rejected)
    }

    pub fn into_brewer(self) -> Option<Box<dyn Brewer>> {
        match self {
            SelectionResult::Resolved(brewer) => Some(brewer),
            SelectionResult::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewOutcome {
    Brewed {
        description: String,
        bean_type: BeanType,
    },
    Rejected,
}
