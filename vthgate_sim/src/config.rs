use std::path::PathBuf;
use std::time::Duration;

use vthgate_rs::{waveform::DEFAULT_EDGE_OFFSET, LogicalClock, DEFAULT_VDD};

use crate::{Error, VthGateSimResult};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub vdd: f64,
    /// Logical time between two input vectors, in seconds.
    pub period: f64,
    /// How far before a level change the pre-edge sample sits, in seconds.
    pub edge_offset: f64,
    /// Wall-clock delay after each vector. Never affects timestamps.
    pub pacing: Option<Duration>,
    pub output_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 3,
            vdd: DEFAULT_VDD,
            period: LogicalClock::DEFAULT_PERIOD,
            edge_offset: DEFAULT_EDGE_OFFSET,
            pacing: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> VthGateSimResult<()> {
        if !(self.vdd.is_finite() && self.vdd > 0.0) {
            return Err(invalid(format!(
                "supply voltage must be positive, got {}",
                self.vdd
            )));
        }
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(invalid(format!(
                "clock period must be positive, got {}",
                self.period
            )));
        }
        if !(self.edge_offset.is_finite() && self.edge_offset >= 0.0) {
            return Err(invalid(format!(
                "edge offset must not be negative, got {}",
                self.edge_offset
            )));
        }
        if self.edge_offset >= self.period {
            return Err(invalid(format!(
                "edge offset {} s must be shorter than the clock period {} s",
                self.edge_offset, self.period
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}
