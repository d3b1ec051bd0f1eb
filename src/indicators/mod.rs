mod wema;

pub use wema::Wema;

use crate::Number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: Number,
    pub timestamp: i64,
}

impl DataPoint {
    pub fn new(value: Number, timestamp: i64) -> Self {
        Self { value, timestamp }
    }
}

pub trait Indicator {
    fn name(&self) -> &str;
    fn update(&mut self, input: DataPoint) -> Number;
    fn is_ready(&self) -> bool;
    fn warm_up_period(&self) -> usize;
    fn samples(&self) -> usize;
}
