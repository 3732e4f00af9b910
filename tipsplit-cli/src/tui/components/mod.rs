//! Small reusable widgets the calculator screen is assembled from.

pub mod slider;
pub mod stat_card;

pub use slider::Slider;
pub use stat_card::{InlineStat, StatCard};
