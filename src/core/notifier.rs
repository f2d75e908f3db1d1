use crate::core::{Brewer, MessageSink, Notifier};
use crate::utils::error::{CoffeeError, Result};

/// Emits "Coffee is ready: <bean_type>" into the sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadyNotifier;

impl Notifier for ReadyNotifier {
    fn name(&self) -> &str {
        "ready"
    }

    fn notify(&self, brewer: &dyn Brewer, sink: &mut dyn MessageSink) -> Result<()> {
        sink.emit(&format!("Coffee is ready: {}", brewer.bean_type()))
    }
}

/// Records the finished brew as a structured tracing event.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier {
    machine_name: String,
}

impl TracingNotifier {
    pub fn new(machine_name: impl Into<String>) -> Self {
        Self {
            machine_name: machine_name.into(),
        }
    }
}

impl Notifier for TracingNotifier {
    fn name(&self) -> &str {
        "tracing"
    }

    fn notify(&self, brewer: &dyn Brewer, _sink: &mut dyn MessageSink) -> Result<()> {
        tracing::info!(
            machine = %self.machine_name,
            bean_type = %brewer.bean_type(),
            description = %brewer.describe(),
            "Brew finished"
        );
        Ok(())
    }
}

/// Notifiers attached to the brew event, invoked in registration order.
#[derive(Default)]
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, notifier: Box<dyn Notifier>) {
        tracing::debug!("Attached notifier '{}'", notifier.name());
        self.notifiers.push(notifier);
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Every notifier runs even when an earlier one fails; failures are returned.
    pub fn notify_all(&self, brewer: &dyn Brewer, sink: &mut dyn MessageSink) -> Vec<CoffeeError> {
        let mut failures = Vec::new();

        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(brewer, sink) {
                let failure = CoffeeError::Notifier {
                    name: notifier.name().to_string(),
                    message: e.to_string(),
                };
                tracing::warn!("{}", failure);
                failures.push(failure);
            }
        }

        failures
    }
}

impl std::fmt::Debug for NotifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierRegistry")
            .field("notifiers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::core::brewer::BrewerFactory;
    use crate::core::decorator::decorate;
    use crate::core::Additive;

    struct LabelNotifier(&'static str);

    impl Notifier for LabelNotifier {
        fn name(&self) -> &str {
            self.0
        }

        fn notify(&self, _brewer: &dyn Brewer, sink: &mut dyn MessageSink) -> Result<()> {
            sink.emit(self.0)
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn name(&self) -> &str {
            "failing"
        }

        fn notify(&self, _brewer: &dyn Brewer, _sink: &mut dyn MessageSink) -> Result<()> {
            Err(CoffeeError::ConfigError {
                message: "display offline".to_string(),
            })
        }
    }

    #[test]
    fn test_ready_notifier_reports_base_bean_type() {
        let base = BrewerFactory::new().create("espresso").unwrap();
        let brewer = decorate(base, &[Additive::Milk, Additive::Sugar]);
        let mut sink = MemorySink::new();

        ReadyNotifier.notify(brewer.as_ref(), &mut sink).unwrap();

        assert_eq!(sink.lines(), &["Coffee is ready: espresso"]);
    }

    #[test]
    fn test_notifiers_run_in_registration_order() {
        let mut registry = NotifierRegistry::new();
        registry.attach(Box::new(LabelNotifier("first")));
        registry.attach(Box::new(LabelNotifier("second")));
        registry.attach(Box::new(LabelNotifier("third")));

        let brewer = BrewerFactory::new().create("americano").unwrap();
        let mut sink = MemorySink::new();
        let failures = registry.notify_all(brewer.as_ref(), &mut sink);

        assert!(failures.is_empty());
        assert_eq!(sink.lines(), &["first", "second", "third"]);
    }

    #[test]
    fn test_failing_notifier_does_not_block_others() {
        let mut registry = NotifierRegistry::new();
        registry.attach(Box::new(FailingNotifier));
        registry.attach(Box::new(ReadyNotifier));

        let brewer = BrewerFactory::new().create("americano").unwrap();
        let mut sink = MemorySink::new();
        let failures = registry.notify_all(brewer.as_ref(), &mut sink);

        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            CoffeeError::Notifier { name, message } if name == "failing" && message.contains("display offline")
        ));
        assert_eq!(sink.lines(), &["Coffee is ready: americano"]);
    }

    #[test]
    fn test_empty_registry_is_silent() {
        let registry = NotifierRegistry::new();
        let brewer = BrewerFactory::new().create("espresso").unwrap();
        let mut sink = MemorySink::new();

        assert!(registry.is_empty());
        assert!(registry.notify_all(brewer.as_ref(), &mut sink).is_empty());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_tracing_notifier_writes_nothing_to_sink() {
        let brewer = BrewerFactory::new().create("espresso").unwrap();
        let mut sink = MemorySink::new();

        TracingNotifier::new("Barista").notify(brewer.as_ref(), &mut sink).unwrap();
        assert!(sink.lines().is_empty());
    }
}
