pub mod indicators;

pub use indicators::{DataPoint, Indicator, Wema};

pub type Number = f32;
