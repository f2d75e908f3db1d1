pub mod adapter;
pub mod brewer;
pub mod decorator;
pub mod engine;
pub mod machine;
pub mod notifier;
pub mod selection;

pub use crate::domain::model::{
    Additive, BeanType, Beverage, BrewOutcome, Menu, SelectionResult, SelectionState,
    BEVERAGE_MENU, CHOICE_PROMPT, COMPONENT_MENU,
};
pub use crate::domain::ports::{Brewer, InputSource, MessageSink, Notifier};
pub use crate::utils::error::Result;
