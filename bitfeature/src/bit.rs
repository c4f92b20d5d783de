use crate::error::VectorError;
use std::fmt;
use std::str::FromStr;

/// A single binary value, the element type of a [`BitVector`](crate::BitVector).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Bit(bool);

impl Bit {
    pub const ZERO: Bit = Bit(false);
    pub const ONE: Bit = Bit(true);

    #[inline]
    pub const fn new(value: bool) -> Self {
        Bit(value)
    }

    /// Returns the value of this bit as a `bool`
    #[inline]
    pub const fn bit_value(self) -> bool {
        self.0
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        Bit(value)
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.0
    }
}

/// `1.0` for a set bit, `0.0` otherwise
impl From<Bit> for f64 {
    #[inline]
    fn from(bit: Bit) -> Self {
        if bit.0 {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { 1 } else { 0 })
    }
}

/// Parses `"0"` or `"1"`, ignoring surrounding whitespace
impl FromStr for Bit {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Bit::ZERO),
            "1" => Ok(Bit::ONE),
            _ => Err(VectorError::InvalidBit(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("1".parse::<Bit>(), Ok(Bit::ONE));
        assert_eq!(" 0\n".parse::<Bit>(), Ok(Bit::ZERO));
        assert_eq!(
            "2".parse::<Bit>(),
            Err(VectorError::InvalidBit("2".to_owned()))
        );
        assert!("true".parse::<Bit>().is_err());
        assert!("".parse::<Bit>().is_err());
    }

    #[test]
    fn conversions() {
        assert_eq!(Bit::from(true), Bit::ONE);
        assert_eq!(bool::from(Bit::ZERO), false);
        assert_eq!(f64::from(Bit::ONE), 1.0);
        assert_eq!(f64::from(Bit::ZERO), 0.0);
        assert_eq!(Bit::default(), Bit::ZERO);
        assert_eq!(Bit::ONE.to_string(), "1");
        assert_eq!(Bit::new(false).to_string(), "0");
    }
}
