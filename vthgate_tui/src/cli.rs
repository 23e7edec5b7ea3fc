use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use vthgate_rs::{waveform::DEFAULT_EDGE_OFFSET, LogicalClock, DEFAULT_VDD};
use vthgate_sim::SimulationConfig;

/// Simulate the output waveform of a logic gate selected by threshold voltage
#[derive(Debug, Parser)]
#[command(name = "vthgate", author, version, about, long_about = None)]
pub struct Cli {
    /// Number of gate inputs (3, 5 or 7)
    #[arg(short = 'n', long = "inputs", default_value_t = 3)]
    pub inputs: usize,

    /// Threshold voltage in volts; prompted for when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Supply voltage in volts
    #[arg(long, default_value_t = DEFAULT_VDD)]
    pub vdd: f64,

    /// Logical time between input vectors, in seconds
    #[arg(long, default_value_t = LogicalClock::DEFAULT_PERIOD)]
    pub period: f64,

    /// Offset of the pre-edge sample before a level change, in seconds
    #[arg(long, default_value_t = DEFAULT_EDGE_OFFSET)]
    pub edge: f64,

    /// Real-time delay after each input vector, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub pace_ms: u64,

    /// Directory receiving the sample file
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the terminal plot
    #[arg(long)]
    pub no_plot: bool,

    /// Skip writing the sample file
    #[arg(long)]
    pub no_save: bool,

    /// Print the threshold bands for the selected width and exit
    #[arg(long)]
    pub list: bool,

    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.inputs,
            vdd: self.vdd,
            period: self.period,
            edge_offset: self.edge,
            pacing: (self.pace_ms > 0).then(|| Duration::from_millis(self.pace_ms)),
            output_dir: self.output_dir.clone(),
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vthgate"]).unwrap();
        let config = cli.config();
        assert_eq!(config.width, 3);
        assert_eq!(config.vdd, 1.8);
        assert_eq!(config.pacing, None);
        assert!(cli.threshold.is_none());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "vthgate", "-n", "7", "-t", "1.1", "--pace-ms", "10", "-o", "out", "--no-plot", "-vv",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.width, 7);
        assert_eq!(cli.threshold.as_deref(), Some("1.1"));
        assert_eq!(config.pacing, Some(Duration::from_millis(10)));
        assert_eq!(config.output_dir.to_str(), Some("out"));
        assert!(cli.no_plot);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_negative_threshold_reaches_validation() {
        let cli = Cli::try_parse_from(["vthgate", "-t", "-0.5"]).unwrap();
        assert_eq!(cli.threshold.as_deref(), Some("-0.5"));
    }
}
