/// Converts an input byte to the filter's working range.
pub fn scale_input(sample: i8, divisor: f32) -> f32 {
    sample as f32 / divisor
}

/// Applies the output volume, rounds, and clips to a signed byte.
pub fn scale_output(value: f32, gain: f32) -> i8 {
    let scaled = (value * gain).round();
    // `as` saturates and maps NaN to 0; the clamp keeps the intent explicit.
    scaled.clamp(i8::MIN as f32, i8::MAX as f32) as i8
}
