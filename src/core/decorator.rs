use crate::core::{Additive, BeanType, Brewer};

#[derive(Debug)]
pub struct MilkDecorator {
    inner: Box<dyn Brewer>,
}

impl MilkDecorator {
    pub fn new(inner: Box<dyn Brewer>) -> Self {
        Self { inner }
    }
}

impl Brewer for MilkDecorator {
    fn bean_type(&self) -> &BeanType {
        self.inner.bean_type()
    }

    fn describe(&self) -> String {
        self.inner.describe() + Additive::Milk.suffix()
    }
}

#[derive(Debug)]
pub struct SugarDecorator {
    inner: Box<dyn Brewer>,
}

impl SugarDecorator {
    pub fn new(inner: Box<dyn Brewer>) -> Self {
        Self { inner }
    }
}

impl Brewer for SugarDecorator {
    fn bean_type(&self) -> &BeanType {
        self.inner.bean_type()
    }

    fn describe(&self) -> String {
        self.inner.describe() + Additive::Sugar.suffix()
    }
}

pub fn wrap(base: Box<dyn Brewer>, additive: Additive) -> Box<dyn Brewer> {
    match additive {
        Additive::Milk => Box::new(MilkDecorator::new(base)),
        Additive::Sugar => Box::new(SugarDecorator::new(base)),
    }
}

/// Wraps `base` with each additive in order; the last one ends up outermost.
pub fn decorate(base: Box<dyn Brewer>, additives: &[Additive]) -> Box<dyn Brewer> {
    additives.iter().fold(base, |brewer, additive| {
        tracing::debug!("Adding{}", additive.suffix());
        wrap(brewer, *additive)
    })
}
