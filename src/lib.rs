pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::MachineConfig;

pub use adapters::{ConsoleSink, LineInput, MemorySink, ScriptedInput};
pub use crate::core::{
    brewer::BrewerFactory, engine::BrewEngine, machine::CoffeeMachine,
    selection::SelectionController,
};
pub use utils::error::{CoffeeError, Result};
