/// Logical time base driving the waveform, one tick per input vector.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicalClock {
    period: f64,
    next_tick: u64,
}

impl LogicalClock {
    /// Matches the 10 ms cadence of the real-time demonstration.
    pub const DEFAULT_PERIOD: f64 = 0.01;

    pub fn new(period: f64) -> Self {
        Self {
            period,
            next_tick: 0,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn next_trigger_time(&self) -> f64 {
        self.next_tick as f64 * self.period
    }

    pub fn trip(&mut self) -> f64 {
        let time = self.next_trigger_time();
        self.next_tick += 1;
        time
    }

    pub fn reset(&mut self) {
        self.next_tick = 0;
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD)
    }
}
