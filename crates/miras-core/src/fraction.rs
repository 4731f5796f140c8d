//! Exact rational shares.
//!
//! Statutory shares are reported as reduced fractions ("1/8", "1/6") rather
//! than rounded decimals. A [`Fraction`] is always stored in lowest terms with
//! a positive denominator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MirasError;

/// A rational number in lowest terms.
///
/// Serialises as its display string (`"1/8"`, or `"1"` for whole numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ONE_QUARTER: Fraction = Fraction::const_reduced(1, 4);
    pub const ONE_THIRD: Fraction = Fraction::const_reduced(1, 3);
    pub const ONE_SIXTH: Fraction = Fraction::const_reduced(1, 6);
    pub const ONE_EIGHTH: Fraction = Fraction::const_reduced(1, 8);

    /// Reduce `numerator / denominator` to lowest terms.
    ///
    /// The sign is carried on the numerator. Fails on a zero denominator, and
    /// on `i64::MIN` in either part, which has no positive counterpart.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, MirasError> {
        if denominator == 0 {
            return Err(MirasError::ZeroDenominator);
        }
        if numerator == i64::MIN || denominator == i64::MIN {
            return Err(MirasError::FractionOutOfRange(numerator, denominator));
        }
        Ok(Self::const_reduced(numerator, denominator))
    }

    /// Quantise a decimal share to thousandths and reduce.
    ///
    /// `0.4375` becomes `438/1000`, reduced to `219/500`. Lossy: the result is
    /// the nearest multiple of 1/1000, not an exact reconstruction.
    pub fn from_thousandths(share: f64) -> Self {
        let thousandths = ((share * 1000.0).round() as i64).max(-i64::MAX);
        Self::const_reduced(thousandths, 1000)
    }

    // Caller guarantees `denominator != 0` and neither part is `i64::MIN`.
    const fn const_reduced(numerator: i64, denominator: i64) -> Self {
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        let (mut n, mut d) = (numerator / divisor, denominator / divisor);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Self {
            numerator: n,
            denominator: d,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Decimal value, unrounded.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Percentage value (`1/8` → `12.5`), unrounded.
    pub fn to_percentage(&self) -> f64 {
        self.to_f64() * 100.0
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = MirasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MirasError::MalformedFraction(s.to_string());
        let (n, d) = match s.trim().split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s.trim(), "1"),
        };
        let numerator: i64 = n.parse().map_err(|_| malformed())?;
        let denominator: i64 = d.parse().map_err(|_| malformed())?;
        Fraction::new(numerator, denominator)
    }
}

impl TryFrom<String> for Fraction {
    type Error = MirasError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Fraction> for String {
    fn from(f: Fraction) -> Self {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        let f = Fraction::new(125, 1000).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (1, 8));
        let f = Fraction::new(6, 36).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (1, 6));
    }

    #[test]
    fn denominator_kept_positive() {
        let f = Fraction::new(3, -9).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (-1, 3));
        let f = Fraction::new(-4, -8).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (1, 2));
    }

    #[test]
    fn zero_numerator_reduces_to_zero_over_one() {
        let f = Fraction::new(0, 1000).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (0, 1));
        assert_eq!(f.to_string(), "0");
    }

    #[test]
    fn zero_denominator_rejected() {
        assert!(matches!(
            Fraction::new(1, 0),
            Err(MirasError::ZeroDenominator)
        ));
    }

    #[test]
    fn minimum_integer_rejected() {
        assert!(matches!(
            Fraction::new(1, i64::MIN),
            Err(MirasError::FractionOutOfRange(1, i64::MIN))
        ));
        assert!(Fraction::new(i64::MIN, 3).is_err());
        assert!("1/-9223372036854775808".parse::<Fraction>().is_err());
        assert!(serde_json::from_str::<Fraction>("\"-9223372036854775808/7\"").is_err());
    }

    #[test]
    fn display_strings() {
        assert_eq!(Fraction::ONE_EIGHTH.to_string(), "1/8");
        assert_eq!(Fraction::new(1000, 1000).unwrap().to_string(), "1");
        assert_eq!(Fraction::new(7, 20).unwrap().to_string(), "7/20");
    }

    #[test]
    fn percentages_are_unrounded() {
        assert_eq!(Fraction::ONE_EIGHTH.to_percentage(), 12.5);
        assert_eq!(Fraction::ONE_QUARTER.to_percentage(), 25.0);
        assert!((Fraction::ONE_SIXTH.to_percentage() - 16.666_666).abs() < 1e-5);
        assert_ne!(Fraction::ONE_SIXTH.to_percentage(), 16.67);
    }

    #[test]
    fn thousandths_quantisation() {
        // 7/24 of the estate ≈ 0.291666 → 292/1000 → 73/250
        let f = Fraction::from_thousandths(7.0 / 24.0);
        assert_eq!(f.to_string(), "73/250");
        let f = Fraction::from_thousandths(0.875 * 2.0 / 3.0);
        assert_eq!(f.to_string(), "583/1000");
    }

    #[test]
    fn parse_display_form() {
        assert_eq!("1/8".parse::<Fraction>().unwrap(), Fraction::ONE_EIGHTH);
        assert_eq!(" 2 / 16 ".parse::<Fraction>().unwrap(), Fraction::ONE_EIGHTH);
        assert_eq!("1".parse::<Fraction>().unwrap().denominator(), 1);
        assert!("one/eight".parse::<Fraction>().is_err());
        assert!("1/0".parse::<Fraction>().is_err());
    }

    #[test]
    fn serialises_as_string() {
        let json = serde_json::to_string(&Fraction::ONE_SIXTH).unwrap();
        assert_eq!(json, "\"1/6\"");
        let parsed: Fraction = serde_json::from_str("\"3/12\"").unwrap();
        assert_eq!(parsed, Fraction::new(1, 4).unwrap());
    }
}
