pub mod config;
pub mod error;
pub mod persist;
mod session;
pub mod summary;

pub use config::SimulationConfig;
pub use error::{Error, VthGateSimResult};
pub use session::{Session, SimulationResult};
pub use summary::Summary;

pub use vthgate_rs::{GateFunction, GateTable, Sample, ThresholdBand, Waveform};
