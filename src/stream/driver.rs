use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

use byteorder::{ReadBytesExt, WriteBytesExt};
use serde::Serialize;
use slog::{Logger, debug, info};

use crate::filters::FilterCascade;
use crate::models::{OutputMode, StreamConfig};
use crate::stream::{Visualizer, scale_input, scale_output};
use crate::utils::StreamError;

/// Why a run finished without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndOfInput,
    OutputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub samples_read: u64,
    pub samples_written: u64,
    pub stop: StopReason,
}

/// The read, filter, emit loop.
pub struct StreamDriver {
    cascade: FilterCascade,
    config: StreamConfig,
    visualizer: Visualizer,
    logger: Logger,
}

impl StreamDriver {
    pub fn new(cascade: FilterCascade, config: StreamConfig, logger: Logger) -> Self {
        let visualizer = Visualizer::from_config(&config);
        StreamDriver {
            cascade,
            config,
            visualizer,
            logger,
        }
    }

    /// Streams until the input ends or the output is closed.
    /// Any other I/O failure stops the run with an error.
    pub fn run<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<StreamSummary, StreamError> {
        debug!(self.logger, "stream started";
            "poles" => self.cascade.poles(),
            "mode" => format!("{:?}", self.config.mode));

        let mut samples_read = 0u64;
        let mut samples_written = 0u64;

        let stop = loop {
            let sample = match read_sample(&mut input) {
                Ok(Some(sample)) => sample,
                Ok(None) => break StopReason::EndOfInput,
                Err(source) => {
                    return Err(StreamError::Read {
                        index: samples_read,
                        source,
                    });
                }
            };
            samples_read += 1;

            let filtered = self.cascade.process(scale_input(sample, self.config.input_divisor));

            match self.emit(filtered, &mut output) {
                Ok(()) => samples_written += 1,
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => break StopReason::OutputClosed,
                Err(source) => {
                    return Err(StreamError::Write {
                        index: samples_written,
                        source,
                    });
                }
            }

            if self.config.mode == OutputMode::Visualize && self.config.sleep_ms > 0 {
                thread::sleep(Duration::from_millis(self.config.sleep_ms));
            }
        };

        match output.flush() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Err(source) => {
                return Err(StreamError::Write {
                    index: samples_written,
                    source,
                });
            }
        }

        let summary = StreamSummary {
            samples_read,
            samples_written,
            stop,
        };
        info!(self.logger, "stream finished";
            "samples_read" => summary.samples_read,
            "samples_written" => summary.samples_written,
            "stop" => format!("{:?}", summary.stop));
        Ok(summary)
    }

    fn emit<W: Write>(&self, filtered: f32, output: &mut W) -> io::Result<()> {
        match self.config.mode {
            OutputMode::Raw => output.write_i8(scale_output(filtered, self.config.output_gain)),
            OutputMode::Visualize => {
                self.visualizer.render_row(filtered, output)?;
                // Rows must show up before the pause.
                output.flush()
            }
        }
    }
}

/// `Ok(None)` on a clean end of input.
fn read_sample<R: Read>(input: &mut R) -> io::Result<Option<i8>> {
    loop {
        match input.read_i8() {
            Ok(sample) => return Ok(Some(sample)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
