use std::fmt;

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::VthGateResult;

pub const MAX_INPUT_WIDTH: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input width must be between 1 and {}, got {}", MAX_INPUT_WIDTH, _0)]
    InvalidWidth(usize),
}

impl From<Error> for crate::Error {
    fn from(value: Error) -> Self {
        crate::Error::InputSpace(value)
    }
}

/// One row of a truth table. Input 0 (`A`) is the most significant bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputVector {
    bits: BitVec<u32>,
}

/// Every input combination of a given width, in ascending binary order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSpace {
    width: usize,
}

impl InputVector {
    pub fn from_index(index: usize, width: usize) -> Self {
        let bits = (0..width)
            .map(|input| (index >> (width - 1 - input)) & 1 == 1)
            .collect();
        Self { bits }
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.iter().copied().collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn get(&self, input: usize) -> Option<bool> {
        self.bits.get(input).map(|bit| *bit)
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Bit `i` of the mask holds input `i`.
    pub fn mask(&self) -> u32 {
        self.bits
            .iter_ones()
            .fold(0, |mask, input| mask | (1u32 << input))
    }

    pub fn as_bits(&self) -> &BitSlice<u32> {
        &self.bits
    }
}

impl fmt::Display for InputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self
            .bits
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect();
        f.write_str(&digits)
    }
}

impl InputSpace {
    pub fn new(width: usize) -> VthGateResult<Self> {
        if width == 0 || width > MAX_INPUT_WIDTH {
            return Err(Error::InvalidWidth(width).into());
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        1 << self.width
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn vector(&self, index: usize) -> Option<InputVector> {
        (index < self.len()).then(|| InputVector::from_index(index, self.width))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = InputVector> {
        let width = self.width;
        (0..self.len()).map(move |index| InputVector::from_index(index, width))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{InputSpace, InputVector, MAX_INPUT_WIDTH};

    #[test]
    fn test_space_size_and_distinct() {
        for width in [3, 5, 7] {
            let space = InputSpace::new(width).unwrap();
            let masks: HashSet<u32> = space.iter().map(|v| v.mask()).collect();
            assert_eq!(space.len(), 1 << width);
            assert_eq!(space.iter().len(), 1 << width);
            assert_eq!(masks.len(), 1 << width);
            assert!(space.iter().all(|v| v.width() == width));
        }
    }

    #[test]
    fn test_ascending_binary_order() {
        let space = InputSpace::new(3).unwrap();
        let rows: Vec<String> = space.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rows,
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn test_msb_is_first_input() {
        let vector = InputVector::from_index(0b10000, 5);
        assert_eq!(vector.get(0), Some(true));
        assert_eq!(vector.get(4), Some(false));
        assert_eq!(vector.get(5), None);
        assert_eq!(vector.mask(), 0b00001);
    }

    #[test]
    fn test_restartable() {
        let space = InputSpace::new(5).unwrap();
        let first: Vec<InputVector> = space.iter().collect();
        let second: Vec<InputVector> = space.iter().collect();
        assert_eq!(first, second);
        assert_eq!(space.vector(31), first.last().cloned());
        assert_eq!(space.vector(32), None);
    }

    #[test]
    fn test_invalid_width() {
        assert!(InputSpace::new(0).is_err());
        assert!(InputSpace::new(MAX_INPUT_WIDTH + 1).is_err());
        assert!(InputSpace::new(1).is_ok());
    }

    #[test]
    fn test_from_bits() {
        let vector = InputVector::from_bits(&[false, true, true]);
        assert_eq!(vector, InputVector::from_index(3, 3));
        assert_eq!(vector.count_ones(), 2);
    }
}
