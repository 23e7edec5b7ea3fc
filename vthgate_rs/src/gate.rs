//! Boolean gate functions of N inputs.
//!
//! Every gate used by the band tables is a named constant here. The
//! "different logic" gates are literal sum-of-products or product-of-sums
//! lists; they are kept as written even where they coincide with a
//! threshold function.

use crate::input_space::InputVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
    /// High when at least `k` inputs are high.
    AtLeast(usize),
    /// Each entry is a product term as an input mask.
    SumOfProducts(&'static [u32]),
    /// Each entry is a sum clause as an input mask.
    ProductOfSums(&'static [u32]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateFunction {
    name: &'static str,
    width: usize,
    logic: Logic,
}

/// Input mask of a term spelled with input letters, `A` being input 0.
pub const fn term(letters: &str) -> u32 {
    let bytes = letters.as_bytes();
    let mut mask = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(
            bytes[i] >= b'A' && bytes[i] < b'A' + 16,
            "term letters must be A..P"
        );
        mask |= 1u32 << (bytes[i] - b'A') as u32;
        i += 1;
    }
    mask
}

impl GateFunction {
    pub const fn new(name: &'static str, width: usize, logic: Logic) -> Self {
        Self { name, width, logic }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn logic(&self) -> Logic {
        self.logic
    }

    pub fn eval(&self, input: &InputVector) -> bool {
        match self.logic {
            Logic::And => input.count_ones() == input.width(),
            Logic::Or => input.count_ones() > 0,
            Logic::AtLeast(k) => input.count_ones() >= k,
            Logic::SumOfProducts(terms) => {
                let mask = input.mask();
                terms.iter().any(|term| mask & term == *term)
            }
            Logic::ProductOfSums(clauses) => {
                let mask = input.mask();
                clauses.iter().all(|clause| mask & clause != 0)
            }
        }
    }

    /// Human readable boolean expression, e.g. `ABCD + ABCE`.
    pub fn describe(&self) -> String {
        let inputs = input_letters(u32::MAX >> (32 - self.width));
        match self.logic {
            Logic::And => inputs.into_iter().collect(),
            Logic::Or => inputs.join(" + "),
            Logic::AtLeast(k) => format!("at least {} of {} inputs high", k, self.width),
            Logic::SumOfProducts(terms) => terms
                .iter()
                .map(|term| input_letters(*term).concat())
                .collect::<Vec<_>>()
                .join(" + "),
            Logic::ProductOfSums(clauses) => clauses
                .iter()
                .map(|clause| format!("({})", input_letters(*clause).join(" + ")))
                .collect::<Vec<_>>()
                .join(" · "),
        }
    }
}

fn input_letters(mask: u32) -> Vec<String> {
    (0..32u8)
        .filter(|input| mask & (1u32 << input) != 0)
        .map(|input| char::from(b'A' + input).to_string())
        .collect()
}

pub const AND_3: GateFunction = GateFunction::new("AND", 3, Logic::And);
pub const MAJORITY_3: GateFunction = GateFunction::new("MAJORITY", 3, Logic::AtLeast(2));
pub const OR_3: GateFunction = GateFunction::new("OR", 3, Logic::Or);

const DIFF_LOGIC_1_5_CLAUSES: &[u32] = &[term("ABC"), term("ABDE"), term("CDE")];
const DIFF_LOGIC_2_5_TERMS: &[u32] = &[
    term("ABCD"),
    term("ABCE"),
    term("ABDE"),
    term("ACDE"),
    term("BCDE"),
];

pub const OR_5: GateFunction = GateFunction::new("OR", 5, Logic::Or);
pub const DIFF_LOGIC_1_5: GateFunction = GateFunction::new(
    "DIFFERENT-LOGIC:1",
    5,
    Logic::ProductOfSums(DIFF_LOGIC_1_5_CLAUSES),
);
pub const MAJORITY_5: GateFunction = GateFunction::new("MAJORITY", 5, Logic::AtLeast(3));
pub const DIFF_LOGIC_2_5: GateFunction = GateFunction::new(
    "DIFFERENT-LOGIC:2",
    5,
    Logic::SumOfProducts(DIFF_LOGIC_2_5_TERMS),
);
pub const AND_5: GateFunction = GateFunction::new("AND", 5, Logic::And);

const DIFF_LOGIC_1_7_TERMS: &[u32] = &[
    term("ABCDE"),
    term("ABCDF"),
    term("ABCDG"),
    term("ABCEF"),
    term("ABCEG"),
    term("ABCFG"),
    term("ABDEF"),
    term("ABDEG"),
    term("ABDFG"),
    term("ABEFG"),
    term("ACDEF"),
    term("ACDEG"),
    term("ACDFG"),
    term("ACEFG"),
    term("ADEFG"),
    term("BCDEF"),
    term("BCDEG"),
    term("BCDFG"),
    term("BCEFG"),
    term("BDEFG"),
    term("CDEFG"),
];
const DIFF_LOGIC_2_7_TERMS: &[u32] = &[
    term("ABCDEF"),
    term("ABCDEG"),
    term("ABCDFG"),
    term("ABCEFG"),
    term("ABDEFG"),
    term("ACDEFG"),
    term("BCDEFG"),
];

pub const OR_7: GateFunction = GateFunction::new("OR", 7, Logic::Or);
pub const MAJORITY1_7: GateFunction = GateFunction::new("MAJORITY1", 7, Logic::AtLeast(2));
pub const MAJORITY2_7: GateFunction = GateFunction::new("MAJORITY2", 7, Logic::AtLeast(3));
pub const MAJORITY3_7: GateFunction = GateFunction::new("MAJORITY3", 7, Logic::AtLeast(4));
pub const DIFF_LOGIC_1_7: GateFunction = GateFunction::new(
    "DIFFERENT-LOGIC:1",
    7,
    Logic::SumOfProducts(DIFF_LOGIC_1_7_TERMS),
);
pub const DIFF_LOGIC_2_7: GateFunction = GateFunction::new(
    "DIFFERENT-LOGIC:2",
    7,
    Logic::SumOfProducts(DIFF_LOGIC_2_7_TERMS),
);
pub const AND_7: GateFunction = GateFunction::new("AND", 7, Logic::And);
