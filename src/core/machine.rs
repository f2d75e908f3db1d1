use crate::core::BeanType;
use std::sync::OnceLock;

static INSTANCE: OnceLock<CoffeeMachine> = OnceLock::new();

/// Process-wide machine identity. The first initialization wins.
#[derive(Debug, PartialEq, Eq)]
pub struct CoffeeMachine {
    name: String,
    bean_type: BeanType,
}

impl CoffeeMachine {
    pub fn instance(name: &str, bean_type: &str) -> &'static CoffeeMachine {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Initializing coffee machine '{}' ({})", name, bean_type);
            CoffeeMachine {
                name: name.to_string(),
                bean_type: BeanType::new(bean_type),
            }
        })
    }

    pub fn get() -> Option<&'static CoffeeMachine> {
        INSTANCE.get()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }
}
