use std::io::{self, Write};

use crate::models::StreamConfig;

/// Draws each sample as a `#` whose column tracks the sample's magnitude.
/// `-clip_level` lands in column 0, zero in the middle, `+clip_level` at `width`.
#[derive(Debug, Clone)]
pub struct Visualizer {
    width: usize,
    clip_level: f32,
}

impl Visualizer {
    pub fn new(width: usize, clip_level: f32) -> Self {
        Visualizer { width, clip_level }
    }

    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.width, config.clip_level)
    }

    /// Number of padding spaces before the marker.
    pub fn column(&self, value: f32) -> usize {
        let half = self.width as f32 / 2.0;
        let position = value * half / self.clip_level + half;
        if position.is_nan() {
            return self.width / 2;
        }
        position.clamp(0.0, self.width as f32) as usize
    }

    pub fn render_row<W: Write>(&self, value: f32, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}#", " ".repeat(self.column(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_is_centered_and_scaled() {
        let viz = Visualizer::new(220, 128.0);
        assert_eq!(viz.column(0.0), 110);
        assert_eq!(viz.column(128.0), 220);
        assert_eq!(viz.column(-128.0), 0);
        assert_eq!(viz.column(64.0), 165);
    }

    #[test]
    fn test_column_is_clamped_to_terminal() {
        let viz = Visualizer::new(80, 128.0);
        assert_eq!(viz.column(1000.0), 80);
        assert_eq!(viz.column(-1000.0), 0);
        assert_eq!(viz.column(f32::NAN), 40);
    }

    #[test]
    fn test_render_row_pads_then_marks() {
        let viz = Visualizer::new(8, 128.0);
        let mut out = Vec::new();
        viz.render_row(0.0, &mut out).unwrap();
        viz.render_row(-128.0, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    #\n#\n");
    }
}
