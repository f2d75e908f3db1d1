use crate::core::{BeanType, Brewer, MessageSink};
use crate::utils::error::Result;

/// Adapts any brewer capability (base, decorated or boxed) to the
/// sink-oriented "make coffee" interface used by the brew cycle.
#[derive(Debug)]
pub struct MachineAdapter<B: Brewer> {
    brewer: B,
}

impl<B: Brewer> MachineAdapter<B> {
    pub fn new(brewer: B) -> Self {
        Self { brewer }
    }

    pub fn brewer(&self) -> &B {
        &self.brewer
    }

    pub fn into_inner(self) -> B {
        self.brewer
    }

    /// Writes the brew description and returns it.
    pub fn make_coffee(&self, sink: &mut dyn MessageSink) -> Result<String> {
        let description = self.brewer.describe();
        sink.emit(&description)?;
        Ok(description)
    }
}

impl<B: Brewer> Brewer for MachineAdapter<B> {
    fn bean_type(&self) -> &BeanType {
        self.brewer.bean_type()
    }

    fn describe(&self) -> String {
        self.brewer.describe()
    }
}
