use super::{Filter, LowPassFilter};
use crate::utils::FilterError;

/// Deepest cascade that can be built.
pub const MAX_POLES: usize = 1024;

/// An ordered chain of filters. Each stage's output is the next stage's input,
/// so N single-pole stages behave like one N-pole filter with a steeper roll-off.
pub struct FilterCascade {
    stages: Vec<Box<dyn Filter>>,
}

impl FilterCascade {
    /// Builds a chain from arbitrary stages. An empty chain is rejected.
    pub fn from_stages(stages: Vec<Box<dyn Filter>>) -> Result<Self, FilterError> {
        if stages.is_empty() {
            return Err(FilterError::NoPoles);
        }
        Ok(FilterCascade { stages })
    }

    /// Builds `poles` low-pass stages sharing one response, each starting
    /// from `initial_state`.
    pub fn low_pass(poles: usize, response: f32, initial_state: f32) -> Result<Self, FilterError> {
        if !(response > 0.0 && response < 1.0) {
            return Err(FilterError::InvalidResponse(response));
        }
        if poles > MAX_POLES {
            return Err(FilterError::TooManyPoles {
                requested: poles,
                max: MAX_POLES,
            });
        }
        let stages = (0..poles)
            .map(|_| Box::new(LowPassFilter::new(initial_state, response)) as Box<dyn Filter>)
            .collect();
        Self::from_stages(stages)
    }

    /// Runs one sample through every stage in order and returns the last output.
    pub fn process(&mut self, input: f32) -> f32 {
        self.stages
            .iter_mut()
            .fold(input, |sample, stage| stage.process_sample(sample))
    }

    pub fn poles(&self) -> usize {
        self.stages.len()
    }
}

impl Filter for FilterCascade {
    fn process_sample(&mut self, input: f32) -> f32 {
        self.process(input)
    }
}
