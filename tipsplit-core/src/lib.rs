pub mod calculator;
pub mod config;
pub mod currency;
pub mod inputs;
pub mod math;
pub mod prelude;
pub mod rate;
pub mod split;
pub mod state;
pub mod types;

pub use calculator::{compute_total_per_person, TipCalculator};
pub use config::TipConfig;
pub use currency::{Currency, CurrencyFormatter};
pub use rate::TipRate;
pub use split::SplitCount;
pub use state::CalculatorState;
pub use types::{TipBreakdown, TipDisplay, TipError};
