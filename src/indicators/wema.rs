use super::{DataPoint, Indicator};
use crate::Number;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Wema {
    name: String,
    k: Number,
    window_size: usize,
    window: VecDeque<Number>,
    samples: usize,
    current: Number,
}

impl Wema {
    pub fn new(k: Number, window_size: usize) -> Self {
        Self::with_name(format!("WEMA{}_{}", k, window_size), k, window_size)
    }

    pub fn with_name(name: impl Into<String>, k: Number, window_size: usize) -> Self {
        Self {
            name: name.into(),
            k,
            window_size,
            window: VecDeque::with_capacity(window_size),
            samples: 0,
            current: 0.0,
        }
    }

    pub fn get(&self) -> Number {
        self.current
    }

    // Re-derives the value over the whole window, oldest to newest. The last
    // element folded keeps a full factor of k, older elements pick up one more
    // factor of (1 - k) per step.
    fn compute_value(&self) -> Number {
        self.window
            .iter()
            .fold(0.0, |acc, &v| v * self.k + acc * (1.0 - self.k))
    }
}

impl Indicator for Wema {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, input: DataPoint) -> Number {
        self.samples += 1;
        self.window.push_back(input.value);
        while self.window.len() > self.window_size {
            self.window.pop_front();
        }

        if self.samples == self.window_size {
            log::debug!("{} is ready after {} samples.", self.name, self.samples);
        }

        self.current = if self.window.len() == self.window_size {
            self.compute_value()
        } else {
            input.value
        };

        self.current
    }

    fn is_ready(&self) -> bool {
        self.samples >= self.window_size
    }

    fn warm_up_period(&self) -> usize {
        self.window_size
    }

    fn samples(&self) -> usize {
        self.samples
    }
}
