use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Currencies the calculator can format amounts in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    /// Brazilian Real.
    #[default]
    #[strum(serialize = "BRL")]
    Brl,
    /// United States Dollar.
    #[strum(serialize = "USD")]
    Usd,
    /// Euro.
    #[strum(serialize = "EUR")]
    Eur,
    /// Pound Sterling.
    #[strum(serialize = "GBP")]
    Gbp,
}

impl Currency {
    /// The ISO 4217 code, e.g. `"BRL"`.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// The symbol shown before an amount, e.g. `"R$"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

/// Formats monetary amounts for display.
pub trait CurrencyFormatter {
    /// Returns the amount with the currency symbol and 2 decimal places,
    /// e.g. `"R$45.00"`.
    fn format_currency(&self, amount: Decimal) -> String;
}

impl CurrencyFormatter for Currency {
    fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.symbol(), rounded)
    }
}
