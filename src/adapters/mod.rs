// Adapters layer: concrete input sources and message sinks.

pub mod console;
pub mod memory;

pub use console::{ConsoleSink, LineInput};
pub use memory::{MemorySink, ScriptedInput};

use crate::utils::error::{CoffeeError, Result};

pub fn parse_choice(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| CoffeeError::InvalidInput {
            input: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 3\n").unwrap(), 3);
        assert_eq!(parse_choice("-1").unwrap(), -1);
        assert!(matches!(
            parse_choice("milk"),
            Err(CoffeeError::InvalidInput { ref input, .. }) if input == "milk"
        ));
        assert!(parse_choice("").is_err());
    }
}
