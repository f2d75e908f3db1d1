use crate::config::toml_config::MachineConfig;
use crate::core::adapter::MachineAdapter;
use crate::core::brewer::BrewerFactory;
use crate::core::notifier::{NotifierRegistry, ReadyNotifier, TracingNotifier};
use crate::core::selection::SelectionController;
use crate::core::{BrewOutcome, Brewer, InputSource, MessageSink, Notifier, SelectionResult};
use crate::utils::error::Result;

pub const INVALID_SELECTION: &str = "Invalid selection";

/// Runs one brew cycle: select, brew, notify.
#[derive(Debug)]
pub struct BrewEngine {
    factory: BrewerFactory,
    notifiers: NotifierRegistry,
}

impl BrewEngine {
    pub fn new(notifiers: NotifierRegistry) -> Self {
        Self {
            factory: BrewerFactory::new(),
            notifiers,
        }
    }

    pub fn from_config(config: &MachineConfig) -> Self {
        let mut notifiers = NotifierRegistry::new();
        if config.ready_message_enabled() {
            notifiers.attach(Box::new(ReadyNotifier));
        }
        if config.log_events_enabled() {
            notifiers.attach(Box::new(TracingNotifier::new(config.machine.name.clone())));
        }
        Self::new(notifiers)
    }

    pub fn attach(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.attach(notifier);
    }

    pub fn notifiers(&self) -> &NotifierRegistry {
        &self.notifiers
    }

    pub fn run(
        &self,
        input: &mut dyn InputSource,
        sink: &mut dyn MessageSink,
    ) -> Result<BrewOutcome> {
        let mut controller = SelectionController::new();

        let brewer = match controller.resolve(input, &self.factory, sink)? {
            SelectionResult::Resolved(brewer) => brewer,
            SelectionResult::Rejected => {
                sink.emit(INVALID_SELECTION)?;
                return Ok(BrewOutcome::Rejected);
            }
        };

        let machine = MachineAdapter::new(brewer);
        let description = machine.make_coffee(sink)?;
        tracing::debug!("Brewed: {}", description);

        let failures = self.notifiers.notify_all(&machine, sink);
        if !failures.is_empty() {
            tracing::warn!("{} notifier(s) failed after brewing", failures.len());
        }

        Ok(BrewOutcome::Brewed {
            description,
            bean_type: machine.bean_type().clone(),
        })
    }
}

impl Default for BrewEngine {
    fn default() -> Self {
        Self::from_config(&MachineConfig::default())
    }
}
