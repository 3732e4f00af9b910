use colored::Colorize;
use inquire::{Confirm, CustomType, Select, Text};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tipsplit_core::prelude::*;

/// Runs the guided bill splitting wizard.
pub fn run_wizard_mode(config: &TipConfig) -> Result<TipBreakdown, Box<dyn std::error::Error>> {
    println!("\n{}", "🧾 GUIDED BILL SPLIT 🧾".bright_cyan().bold());
    println!(
        "{}",
        "This wizard will walk you through splitting a bill step-by-step.".dimmed()
    );
    println!("{}", "Ctrl+C leaves the wizard at any point.".dimmed());
    println!();

    // Shared by the bill prompt and the custom percent prompt
    let non_negative = |input: &Decimal| {
        if *input < Decimal::ZERO {
            Ok(inquire::validator::Validation::Invalid(
                inquire::validator::ErrorMessage::Custom("Value must be non-negative".to_string()),
            ))
        } else {
            Ok(inquire::validator::Validation::Valid)
        }
    };

    // 1. The bill itself
    let bill: Decimal = CustomType::new("Bill amount:")
        .with_placeholder("e.g. 120.50")
        .with_error_message("Please enter a valid amount")
        .with_validator(non_negative)
        .prompt()?;

    // 2. How many people share it
    let split_value: u32 = CustomType::new("Split between how many people?")
        .with_default(1u32)
        .with_error_message("Please enter a whole number")
        .with_validator(|count: &u32| {
            if *count == 0 {
                Ok(inquire::validator::Validation::Invalid(
                    inquire::validator::ErrorMessage::Custom(
                        "At least one person has to pay".to_string(),
                    ),
                ))
            } else {
                Ok(inquire::validator::Validation::Valid)
            }
        })
        .prompt()?;
    let split = SplitCount::new(split_value)?;

    // 3. Tip rate, offered at the same stops as the slider
    let mut options: Vec<String> = (0..=config.rate_steps)
        .map(|position| TipRate::from_position(position, config.rate_steps).percent_label())
        .collect();
    options.push("Custom".to_string());

    let choice = Select::new("Tip percentage:", options).raw_prompt()?;
    let rate = if choice.index <= config.rate_steps as usize {
        TipRate::from_position(choice.index as u32, config.rate_steps)
    } else {
        let percent: Decimal = CustomType::new("Enter tip percentage (0 - 100):")
            .with_help_message("e.g. 12.5 for one eighth on top")
            .with_validator(non_negative)
            .with_validator(|p: &Decimal| {
                if *p > dec!(100) {
                    Ok(inquire::validator::Validation::Invalid(
                        inquire::validator::ErrorMessage::Custom(
                            "Tip percentage cannot exceed 100".to_string(),
                        ),
                    ))
                } else {
                    Ok(inquire::validator::Validation::Valid)
                }
            })
            .prompt()?;
        TipRate::from_percent(percent)?
    };

    // 4. Optional label for the receipt
    let mut calculator = TipCalculator::new().bill(bill).rate(rate).split(split);
    if Confirm::new("Name this bill?").with_default(false).prompt()? {
        let label: String = Text::new("Label:").with_default("Dinner").prompt()?;
        calculator = calculator.label(label);
    }

    println!("\n{}", "✅ All set! Splitting the bill...".bold());

    Ok(calculator.calculate()?)
}
