use crate::core::{BeanType, Brewer};
use crate::utils::error::{CoffeeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspressoBrewer {
    bean_type: BeanType,
}

impl EspressoBrewer {
    pub fn new(bean_type: BeanType) -> Self {
        Self { bean_type }
    }
}

impl Brewer for EspressoBrewer {
    fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }

    fn describe(&self) -> String {
        format!("Making espresso with {} beans", self.bean_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmericanoBrewer {
    bean_type: BeanType,
}

impl AmericanoBrewer {
    pub fn new(bean_type: BeanType) -> Self {
        Self { bean_type }
    }
}

impl Brewer for AmericanoBrewer {
    fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }

    fn describe(&self) -> String {
        format!("Making americano with {} beans", self.bean_type)
    }
}

/// Maps a bean-type identifier to the brewer that handles it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrewerFactory;

impl BrewerFactory {
    pub const SUPPORTED: [&'static str; 2] = ["espresso", "americano"];

    pub fn new() -> Self {
        Self
    }

    /// Matching is exact and case-sensitive.
    pub fn create(&self, bean_type: &str) -> Result<Box<dyn Brewer>> {
        let brewer: Box<dyn Brewer> = match bean_type {
            "espresso" => Box::new(EspressoBrewer::new(BeanType::new(bean_type))),
            "americano" => Box::new(AmericanoBrewer::new(BeanType::new(bean_type))),
            other => return Err(CoffeeError::UnknownBeanType(other.to_string())),
        };

        tracing::debug!("Created brewer for bean type '{}'", bean_type);
        Ok(brewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_espresso() {
        let brewer = BrewerFactory::new().create("espresso").unwrap();
        assert_eq!(brewer.describe(), "Making espresso with espresso beans");
        assert_eq!(brewer.bean_type().as_str(), "espresso");
    }

    #[test]
    fn test_create_americano() {
        let brewer = BrewerFactory::new().create("americano").unwrap();
        assert_eq!(brewer.describe(), "Making americano with americano beans");
    }

    #[test]
    fn test_variants_are_distinct() {
        let factory = BrewerFactory::new();
        let espresso = factory.create("espresso").unwrap();
        let americano = factory.create("americano").unwrap();

        assert!(format!("{:?}", espresso).starts_with("EspressoBrewer"));
        assert!(format!("{:?}", americano).starts_with("AmericanoBrewer"));
        assert_ne!(espresso.describe(), americano.describe());
    }

    #[test]
    fn test_unknown_bean_type() {
        let err = BrewerFactory::new().create("mocha").unwrap_err();
        assert!(matches!(err, CoffeeError::UnknownBeanType(ref bean) if bean == "mocha"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let factory = BrewerFactory::new();
        assert!(factory.create("Espresso").is_err());
        assert!(factory.create(" americano").is_err());
        assert!(factory.create("").is_err());
    }

    #[test]
    fn test_brewer_template_uses_stored_bean_type() {
        let brewer = EspressoBrewer::new(BeanType::new("arabica"));
        assert_eq!(brewer.describe(), "Making espresso with arabica beans");

        let brewer = AmericanoBrewer::new(BeanType::new("robusta"));
        assert_eq!(brewer.describe(), "Making americano with robusta beans");
    }
}
