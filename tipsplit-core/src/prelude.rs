//! Prelude module for tipsplit
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use tipsplit_core::prelude::*;
//! ```

// Core exports
pub use crate::config::TipConfig;
pub use crate::currency::{Currency, CurrencyFormatter};
pub use crate::state::CalculatorState;
pub use crate::types::{CalculationStep, TipBreakdown, TipDisplay, TipError};

// Re-export the calculator and its input types
pub use crate::calculator::{compute_total_per_person, TipCalculator};
pub use crate::inputs::IntoTipDecimal;
pub use crate::rate::TipRate;
pub use crate::split::SplitCount;
