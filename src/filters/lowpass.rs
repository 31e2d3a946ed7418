use super::Filter;

/// Largest magnitude a filter output may reach (8-bit full scale).
pub const SATURATION_LIMIT: f32 = 128.0;

/// A first-order "forgetful integrator" low-pass filter:
/// y[n] = gain * x[n] + response * y[n-1], clamped to +/- SATURATION_LIMIT.
///
/// Higher `response` means a longer memory and a lower cutoff. The gain is
/// `-ln(response)`, which keeps the output level comparable across cutoffs.
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    state: f32,    // Previous output value
    response: f32, // Feedback coefficient
    gain: f32,     // Input normalisation
}

impl LowPassFilter {
    /// Creates a filter with the given initial state and response.
    /// The response is not range checked here; see `FilterCascade::low_pass`.
    pub fn new(state: f32, response: f32) -> Self {
        LowPassFilter {
            state,
            response,
            gain: -response.ln(),
        }
    }

    /// Last output value, i.e. the filter's memory.
    pub fn state(&self) -> f32 {
        self.state
    }

    /// Feedback coefficient fixed at construction.
    pub fn response(&self) -> f32 {
        self.response
    }

    /// Input gain, always `-ln(response)`.
    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl Filter for LowPassFilter {
    fn process_sample(&mut self, input: f32) -> f32 {
        let next = self.gain * input + self.response * self.state;

        // Saturate. NaN passes through untouched.
        self.state = if next > SATURATION_LIMIT {
            SATURATION_LIMIT
        } else if next < -SATURATION_LIMIT {
            -SATURATION_LIMIT
        } else {
            next
        };
        self.state
    }
}
