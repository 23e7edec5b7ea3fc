pub mod clock;
pub mod error;
pub mod gate;
pub mod input_space;
pub mod selector;
pub mod table;
pub mod waveform;

pub use clock::LogicalClock;
pub use error::{Error, VthGateResult};
pub use gate::{GateFunction, Logic};
pub use input_space::{InputSpace, InputVector};
pub use selector::Selector;
pub use table::{GateTable, ThresholdBand};
pub use waveform::{Sample, Waveform, WaveformBuilder};

/// Nominal supply voltage the band tables were drawn for.
pub const DEFAULT_VDD: f64 = 1.8;
