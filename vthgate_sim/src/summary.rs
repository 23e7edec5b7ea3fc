use std::fmt;

use vthgate_rs::Waveform;

/// Console table of every sample in a waveform.
pub struct Summary<'a> {
    waveform: &'a Waveform,
}

impl<'a> Summary<'a> {
    pub fn new(waveform: &'a Waveform) -> Self {
        Self { waveform }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "{} Gate Simulation Results ({}-input):",
            self.waveform.gate_name, self.waveform.width
        )?;
        writeln!(f, "Time (s) | Voltage (V)")?;
        writeln!(f, "{}", "-".repeat(30))?;
        for sample in self.waveform {
            writeln!(f, "{:8.3} | {:8.2}", sample.time, sample.voltage)?;
        }
        Ok(())
    }
}
