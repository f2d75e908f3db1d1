use clap::Parser;
use coffee_machine::core::BrewOutcome;
use coffee_machine::utils::error::{CoffeeError, ErrorSeverity};
use coffee_machine::utils::{logger, validation::Validate};
use coffee_machine::{BrewEngine, CliConfig, CoffeeMachine, ConsoleSink, LineInput};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coffee-machine CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Brew failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), CoffeeError> {
    config.validate()?;

    let machine_config = config.machine_config()?;
    machine_config.validate()?;
    tracing::debug!("Machine config: {:?}", machine_config);

    let engine = BrewEngine::from_config(&machine_config);
    let mut input = LineInput::stdio();
    let mut sink = ConsoleSink::new();

    match engine.run(&mut input, &mut sink)? {
        BrewOutcome::Brewed { bean_type, .. } => {
            let machine = CoffeeMachine::instance(&machine_config.machine.name, bean_type.as_str());
            tracing::info!(
                "☕ Served by '{}' (first brew: {})",
                machine.name(),
                machine.bean_type()
            );
        }
        BrewOutcome::Rejected => {
            tracing::warn!("Selection rejected, nothing brewed");
        }
    }

    Ok(())
}
