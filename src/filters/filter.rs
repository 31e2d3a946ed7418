/// Anything that turns one input sample into one output sample while
/// keeping its own memory between calls.
pub trait Filter: Send {
    /// Processes a single sample and returns the filtered value.
    fn process_sample(&mut self, input: f32) -> f32;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn process_sample(&mut self, input: f32) -> f32 {
        (**self).process_sample(input)
    }
}
