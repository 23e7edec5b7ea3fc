//! Threshold band tables, one per supported input width.
//!
//! Band edges are the literal values the gates were characterised with and
//! do not divide the supply evenly.

use std::fmt;

use crate::gate::{self, GateFunction};
use crate::VthGateResult;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no gate table for {} inputs (supported: 3, 5, 7)", _0)]
    UnsupportedWidth(usize),
    #[error("table has no bands")]
    Empty,
    #[error("first band starts at {} V instead of 0 V", _0)]
    NotStartingAtZero(f64),
    #[error("band {} is empty or reversed", _0)]
    EmptyBand(usize),
    #[error("band {index} ends at {hi} V but the next band starts at {next_lo} V")]
    Discontinuous { index: usize, hi: f64, next_lo: f64 },
    #[error("band {} is bounded by the supply but is not the last band", _0)]
    MisplacedSupplyEdge(usize),
    #[error("last band is not bounded by the supply")]
    OpenLastBand,
}

impl From<Error> for crate::Error {
    fn from(value: Error) -> Self {
        crate::Error::Table(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Upper {
    /// Exclusive upper edge in volts.
    Below(f64),
    /// Inclusive upper edge at the supply voltage.
    Supply,
}

/// `[lo, hi)` paired with the gate it selects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBand {
    lo: f64,
    hi: Upper,
    gate: GateFunction,
}

#[derive(Debug, PartialEq)]
pub struct GateTable {
    width: usize,
    bands: &'static [ThresholdBand],
}

impl ThresholdBand {
    pub const fn new(lo: f64, hi: Upper, gate: GateFunction) -> Self {
        Self { lo, hi, gate }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> Upper {
        self.hi
    }

    pub fn gate(&self) -> &GateFunction {
        &self.gate
    }

    pub fn contains(&self, vth: f64, vdd: f64) -> bool {
        vth >= self.lo
            && match self.hi {
                Upper::Below(hi) => vth < hi,
                Upper::Supply => vth <= vdd,
            }
    }
}

impl fmt::Display for ThresholdBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hi {
            Upper::Below(hi) => write!(f, "[{:.3}, {:.3}) V", self.lo, hi),
            Upper::Supply => write!(f, "[{:.3}, Vdd] V", self.lo),
        }
    }
}

static THREE_INPUT: GateTable = GateTable {
    width: 3,
    bands: &[
        ThresholdBand::new(0.0, Upper::Below(0.6), gate::AND_3),
        ThresholdBand::new(0.6, Upper::Below(1.2), gate::MAJORITY_3),
        ThresholdBand::new(1.2, Upper::Supply, gate::OR_3),
    ],
};

static FIVE_INPUT: GateTable = GateTable {
    width: 5,
    bands: &[
        ThresholdBand::new(0.0, Upper::Below(0.36), gate::OR_5),
        ThresholdBand::new(0.36, Upper::Below(0.72), gate::DIFF_LOGIC_1_5),
        ThresholdBand::new(0.72, Upper::Below(1.08), gate::MAJORITY_5),
        ThresholdBand::new(1.08, Upper::Below(1.44), gate::DIFF_LOGIC_2_5),
        ThresholdBand::new(1.44, Upper::Supply, gate::AND_5),
    ],
};

static SEVEN_INPUT: GateTable = GateTable {
    width: 7,
    bands: &[
        ThresholdBand::new(0.0, Upper::Below(0.254), gate::OR_7),
        ThresholdBand::new(0.254, Upper::Below(0.511), gate::MAJORITY1_7),
        ThresholdBand::new(0.511, Upper::Below(0.767), gate::MAJORITY2_7),
        ThresholdBand::new(0.767, Upper::Below(1.023), gate::MAJORITY3_7),
        ThresholdBand::new(1.023, Upper::Below(1.279), gate::DIFF_LOGIC_1_7),
        ThresholdBand::new(1.279, Upper::Below(1.535), gate::DIFF_LOGIC_2_7),
        ThresholdBand::new(1.535, Upper::Supply, gate::AND_7),
    ],
};

impl GateTable {
    pub fn for_width(width: usize) -> VthGateResult<&'static GateTable> {
        Self::all()
            .into_iter()
            .find(|table| table.width == width)
            .ok_or_else(|| Error::UnsupportedWidth(width).into())
    }

    pub fn all() -> [&'static GateTable; 3] {
        [&THREE_INPUT, &FIVE_INPUT, &SEVEN_INPUT]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn bands(&self) -> &'static [ThresholdBand] {
        self.bands
    }

    pub fn band_for(&self, vth: f64, vdd: f64) -> Option<&'static ThresholdBand> {
        self.bands.iter().find(|band| band.contains(vth, vdd))
    }

    pub fn check_partition(&self) -> Result<(), Error> {
        let (first, last) = match (self.bands.first(), self.bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::Empty),
        };
        if first.lo != 0.0 {
            return Err(Error::NotStartingAtZero(first.lo));
        }
        for (index, pair) in self.bands.windows(2).enumerate() {
            let (band, next) = (&pair[0], &pair[1]);
            match band.hi {
                Upper::Supply => return Err(Error::MisplacedSupplyEdge(index)),
                Upper::Below(hi) if hi <= band.lo => return Err(Error::EmptyBand(index)),
                Upper::Below(hi) if hi != next.lo => {
                    return Err(Error::Discontinuous {
                        index,
                        hi,
                        next_lo: next.lo,
                    })
                }
                Upper::Below(_) => (),
            }
        }
        match last.hi {
            Upper::Supply => Ok(()),
            Upper::Below(_) => Err(Error::OpenLastBand),
        }
    }
}

impl fmt::Display for GateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-input gate table:", self.width)?;
        for band in self.bands {
            writeln!(
                f,
                "  {:<20} {:<18} {}",
                band.to_string(),
                band.gate.name(),
                band.gate.describe()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{GateTable, ThresholdBand, Upper};
    use crate::{gate, DEFAULT_VDD};

    fn matching_bands(table: &GateTable, vth: f64, vdd: f64) -> usize {
        table
            .bands()
            .iter()
            .filter(|band| band.contains(vth, vdd))
            .count()
    }

    #[test]
    fn test_tables_partition() {
        for table in GateTable::all() {
            table.check_partition().unwrap();
            assert_eq!(table.bands().len(), table.width());
            assert!(table
                .bands()
                .iter()
                .all(|band| band.gate().width() == table.width()));
        }
    }

    #[test]
    fn test_grid_sweep_matches_exactly_one_band() {
        for table in GateTable::all() {
            for step in 1..=1800 {
                let vth = step as f64 / 1000.0;
                assert_eq!(matching_bands(table, vth, DEFAULT_VDD), 1, "vth = {vth}");
            }
        }
    }

    #[test]
    fn test_for_width() {
        assert_eq!(GateTable::for_width(5).unwrap().width(), 5);
        assert!(GateTable::for_width(4).is_err());
        assert!(GateTable::for_width(0).is_err());
    }

    #[test]
    fn test_gap_detected() {
        static GAPPED: GateTable = GateTable {
            width: 3,
            bands: &[
                ThresholdBand::new(0.0, Upper::Below(0.5), gate::AND_3),
                ThresholdBand::new(0.6, Upper::Supply, gate::OR_3),
            ],
        };
        assert!(matches!(
            GAPPED.check_partition(),
            Err(super::Error::Discontinuous { index: 0, .. })
        ));
    }

    #[test]
    fn test_open_last_band_detected() {
        static OPEN: GateTable = GateTable {
            width: 3,
            bands: &[ThresholdBand::new(0.0, Upper::Below(1.8), gate::AND_3)],
        };
        assert!(matches!(
            OPEN.check_partition(),
            Err(super::Error::OpenLastBand)
        ));
    }

    #[test]
    fn test_display_lists_every_gate() {
        let listing = GateTable::for_width(7).unwrap().to_string();
        for name in ["OR", "MAJORITY1", "MAJORITY3", "DIFFERENT-LOGIC:2", "AND"] {
            assert!(listing.contains(name), "{listing}");
        }
        assert!(listing.contains("[1.535, Vdd] V"));
    }

    proptest! {
        #[test]
        fn prop_every_threshold_matches_one_band(vth in 1e-9f64..=1.8, table in 0usize..3) {
            let table = GateTable::all()[table];
            prop_assert_eq!(matching_bands(table, vth, DEFAULT_VDD), 1);
        }

        #[test]
        fn prop_partition_holds_for_any_supply(vdd in 0.1f64..5.0, fraction in 1e-6f64..=1.0) {
            let vth = vdd * fraction;
            for table in GateTable::all() {
                prop_assert_eq!(matching_bands(table, vth, vdd), 1);
            }
        }
    }
}
