use std::thread;

use tracing::{debug, info, trace};
use vthgate_rs::{
    selector::{self, Selector},
    GateFunction, GateTable, InputSpace, LogicalClock, ThresholdBand, Waveform, WaveformBuilder,
};

use crate::{SimulationConfig, VthGateSimResult};

/// Runs threshold selections against one input width.
pub struct Session {
    config: SimulationConfig,
    selector: Selector,
    space: InputSpace,
}

#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub threshold: f64,
    pub band: &'static ThresholdBand,
    pub waveform: Waveform,
}

impl SimulationResult {
    pub fn gate(&self) -> &'static GateFunction {
        self.band.gate()
    }
}

impl Session {
    pub fn new(config: SimulationConfig) -> VthGateSimResult<Self> {
        config.validate()?;
        let selector = Selector::for_width(config.width, config.vdd)?;
        let space = InputSpace::new(config.width)?;
        Ok(Self {
            config,
            selector,
            space,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn table(&self) -> &'static GateTable {
        self.selector.table()
    }

    pub fn run_text(&self, threshold: &str) -> VthGateSimResult<SimulationResult> {
        let vth = selector::parse_threshold(threshold)?;
        self.run(vth)
    }

    pub fn run(&self, vth: f64) -> VthGateSimResult<SimulationResult> {
        let band = self.selector.band(vth)?;
        let gate = band.gate();
        info!(vth, gate = gate.name(), band = %band, "selected gate");

        let mut builder = WaveformBuilder::new(gate, self.config.vdd)
            .edge_offset(self.config.edge_offset)
            .clock(LogicalClock::new(self.config.period));
        builder.check_width(&self.space)?;
        for input in self.space.iter() {
            match builder.push(&input) {
                [before, after] => debug!(
                    input = %input,
                    time = after.time,
                    from = before.voltage,
                    to = after.voltage,
                    "transition edge"
                ),
                samples => trace!(input = %input, samples = samples.len(), "steady level"),
            }
            self.pace();
        }

        let waveform = builder.finish();
        info!(
            samples = waveform.len(),
            transitions = waveform.transitions(),
            "waveform built"
        );
        Ok(SimulationResult {
            threshold: vth,
            band,
            waveform,
        })
    }

    fn pace(&self) {
        if let Some(delay) = self.config.pacing {
            thread::sleep(delay);
        }
    }
}
