use crate::core::brewer::BrewerFactory;
use crate::core::decorator::decorate;
use crate::core::{
    Additive, Beverage, Brewer, InputSource, MessageSink, SelectionResult, SelectionState,
    BEVERAGE_MENU, COMPONENT_MENU,
};
use crate::utils::error::{CoffeeError, Result};

pub const INVALID_COFFEE_CHOICE: &str = "Invalid coffee choice";
pub const INVALID_COMPONENTS_CHOICE: &str = "Invalid components choice";

/// Two-step menu state machine:
/// `AwaitingBeverageChoice -> AwaitingComponentChoice -> Resolved | Rejected`.
///
/// A controller handles a single selection; once it reaches `Resolved` or
/// `Rejected` every further call fails with `SelectionOutOfOrder`.
#[derive(Debug)]
pub struct SelectionController {
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            state: SelectionState::AwaitingBeverageChoice,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    fn out_of_order(&self) -> CoffeeError {
        CoffeeError::SelectionOutOfOrder {
            state: self.state.to_string(),
        }
    }

    fn transition(&mut self, next: SelectionState) {
        tracing::debug!("Selection state {} -> {}", self.state, next);
        self.state = next;
    }

    pub fn choose_beverage(
        &mut self,
        input: i64,
        sink: &mut dyn MessageSink,
    ) -> Result<Option<Beverage>> {
        if self.state != SelectionState::AwaitingBeverageChoice {
            return Err(self.out_of_order());
        }

        match Beverage::from_choice(input) {
            Some(beverage) => {
                self.transition(SelectionState::AwaitingComponentChoice(beverage));
                Ok(Some(beverage))
            }
            None => {
                tracing::warn!(
                    "{}",
                    CoffeeError::InvalidChoice {
                        stage: "coffee",
                        choice: input,
                    }
                );
                self.transition(SelectionState::Rejected);
                sink.emit(INVALID_COFFEE_CHOICE)?;
                Ok(None)
            }
        }
    }

    /// Decorates `base` according to the component menu option `input`.
    pub fn choose_components(
        &mut self,
        input: i64,
        base: Box<dyn Brewer>,
        sink: &mut dyn MessageSink,
    ) -> Result<SelectionResult> {
        if self.state.is_terminal() {
            return Err(self.out_of_order());
        }

        match Additive::for_choice(input) {
            Some(additives) => {
                let brewer = decorate(base, additives);
                self.transition(SelectionState::Resolved);
                Ok(SelectionResult::Resolved(brewer))
            }
            None => {
                tracing::warn!(
                    "{}",
                    CoffeeError::InvalidChoice {
                        stage: "components",
                        choice: input,
                    }
                );
                self.transition(SelectionState::Rejected);
                sink.emit(INVALID_COMPONENTS_CHOICE)?;
                Ok(SelectionResult::Rejected)
            }
        }
    }

    /// Runs both prompts. The brewer is only built once the beverage choice is valid,
    /// and decoration wraps that brewer.
    pub fn resolve(
        &mut self,
        source: &mut dyn InputSource,
        factory: &BrewerFactory,
        sink: &mut dyn MessageSink,
    ) -> Result<SelectionResult> {
        let choice = source.read_choice(&BEVERAGE_MENU)?;
        let Some(beverage) = self.choose_beverage(choice, sink)? else {
            return Ok(SelectionResult::Rejected);
        };

        let base = factory.create(beverage.bean_type())?;
        let choice = source.read_choice(&COMPONENT_MENU)?;
        self.choose_components(choice, base, sink)
    }
}
