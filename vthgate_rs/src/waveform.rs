//! Conversion of gate outputs into a time-stamped voltage trace.
//!
//! Each input vector gets one tick of the [`LogicalClock`]. A level change
//! is drawn as a vertical edge: a sample at the old level just before the
//! tick, then a sample at the new level on the tick.

use crate::clock::LogicalClock;
use crate::gate::GateFunction;
use crate::input_space::{InputSpace, InputVector};
use crate::{Error, VthGateResult};

pub const DEFAULT_EDGE_OFFSET: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub voltage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Waveform {
    pub gate_name: &'static str,
    pub width: usize,
    pub vdd: f64,
    pub samples: Vec<Sample>,
    transitions: usize,
}

pub struct WaveformBuilder<'a> {
    gate: &'a GateFunction,
    vdd: f64,
    edge_offset: f64,
    clock: LogicalClock,
    previous_output: Option<bool>,
    samples: Vec<Sample>,
    transitions: usize,
}

impl Sample {
    pub fn new(time: f64, voltage: f64) -> Self {
        Self { time, voltage }
    }
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Number of output level changes between consecutive vectors.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn final_voltage(&self) -> Option<f64> {
        self.samples.last().map(|s| s.voltage)
    }

    pub fn end_time(&self) -> f64 {
        self.samples.last().map(|s| s.time).unwrap_or(0.0)
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.time, s.voltage)).collect()
    }
}

impl<'a> IntoIterator for &'a Waveform {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<'a> WaveformBuilder<'a> {
    pub fn new(gate: &'a GateFunction, vdd: f64) -> Self {
        Self {
            gate,
            vdd,
            edge_offset: DEFAULT_EDGE_OFFSET,
            clock: LogicalClock::default(),
            previous_output: None,
            samples: vec![],
            transitions: 0,
        }
    }

    pub fn edge_offset(mut self, edge_offset: f64) -> Self {
        self.edge_offset = edge_offset;
        self
    }

    pub fn clock(mut self, clock: LogicalClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn gate(&self) -> &GateFunction {
        self.gate
    }

    pub fn dac(&self, output: bool) -> f64 {
        f64::from(u8::from(output)) * self.vdd
    }

    /// Evaluates one vector and returns the samples it produced.
    pub fn push(&mut self, input: &InputVector) -> &[Sample] {
        let time = self.clock.trip();
        let output = self.gate.eval(input);
        let voltage = self.dac(output);
        let start = self.samples.len();
        match self.previous_output {
            Some(previous) if previous != output => {
                let previous_voltage = self.dac(previous);
                self.samples
                    .push(Sample::new(time - self.edge_offset, previous_voltage));
                self.samples.push(Sample::new(time, voltage));
                self.transitions += 1;
            }
            _ => self.samples.push(Sample::new(time, voltage)),
        }
        self.previous_output = Some(output);
        &self.samples[start..]
    }

    pub fn check_width(&self, space: &InputSpace) -> VthGateResult<()> {
        if space.width() == self.gate.width() {
            Ok(())
        } else {
            Err(Error::WidthMismatch {
                gate: self.gate.name(),
                expected: self.gate.width(),
                actual: space.width(),
            })
        }
    }

    pub fn build(mut self, space: &InputSpace) -> VthGateResult<Waveform> {
        self.check_width(space)?;
        for input in space.iter() {
            self.push(&input);
        }
        Ok(self.finish())
    }

    pub fn finish(self) -> Waveform {
        Waveform {
            gate_name: self.gate.name(),
            width: self.gate.width(),
            vdd: self.vdd,
            samples: self.samples,
            transitions: self.transitions,
        }
    }
}
