use crate::gate::GateFunction;
use crate::table::{GateTable, ThresholdBand};
use crate::VthGateResult;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("threshold voltage is not a number: {0:?}")]
    NotANumber(String),
    #[error("threshold voltage {vth} V is outside (0, {vdd}] V")]
    OutOfRange { vth: f64, vdd: f64 },
}

impl From<Error> for crate::Error {
    fn from(value: Error) -> Self {
        crate::Error::Validation(value)
    }
}

pub fn parse_threshold(text: &str) -> VthGateResult<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| Error::NotANumber(text.to_string()).into())
}

/// Picks the gate whose band contains a threshold voltage.
#[derive(Clone, Copy, Debug)]
pub struct Selector {
    table: &'static GateTable,
    vdd: f64,
}

impl Selector {
    pub fn new(table: &'static GateTable, vdd: f64) -> Self {
        Self { table, vdd }
    }

    pub fn for_width(width: usize, vdd: f64) -> VthGateResult<Self> {
        Ok(Self::new(GateTable::for_width(width)?, vdd))
    }

    pub fn table(&self) -> &'static GateTable {
        self.table
    }

    pub fn vdd(&self) -> f64 {
        self.vdd
    }

    pub fn validate(&self, vth: f64) -> VthGateResult<f64> {
        if vth.is_finite() && vth > 0.0 && vth <= self.vdd {
            Ok(vth)
        } else {
            Err(self.out_of_range(vth))
        }
    }

    pub fn band(&self, vth: f64) -> VthGateResult<&'static ThresholdBand> {
        let vth = self.validate(vth)?;
        self.table
            .band_for(vth, self.vdd)
            .ok_or_else(|| self.out_of_range(vth))
    }

    pub fn select(&self, vth: f64) -> VthGateResult<&'static GateFunction> {
        Ok(self.band(vth)?.gate())
    }

    fn out_of_range(&self, vth: f64) -> crate::Error {
        Error::OutOfRange { vth, vdd: self.vdd }.into()
    }
}
