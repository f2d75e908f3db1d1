use crate::domain::model::{BeanType, Menu};
use crate::utils::error::Result;
use std::fmt::Debug;

/// Shared capability of base brewers and every decorator wrapped around them.
pub trait Brewer: Debug {
    fn bean_type(&self) -> &BeanType;
    fn describe(&self) -> String;
}

impl<B: Brewer + ?Sized> Brewer for Box<B> {
    fn bean_type(&self) -> &BeanType {
        (**self).bean_type()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub trait InputSource {
    /// Shows `menu` and returns the integer the user picked.
    fn read_choice(&mut self, menu: &Menu) -> Result<i64>;
}

pub trait MessageSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

pub trait Notifier {
    fn name(&self) -> &str;
    fn notify(&self, brewer: &dyn Brewer, sink: &mut dyn MessageSink) -> Result<()>;
}
