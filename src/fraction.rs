use std::fmt;

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, ToPrimitive, Zero};

use crate::error::CalcError;

// Exact rational in lowest terms with a positive denominator.  The checked
// operations return None when the result does not fit 64-bit parts.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fraction {
    ratio: Ratio<i64>,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Result<Fraction, CalcError> {
        if denominator == 0 {
            return Err(CalcError::division_by_zero());
        }

        // Reduced in 128 bits so that i64::MIN never overflows the sign flip.
        let wide = Ratio::new(i128::from(numerator), i128::from(denominator));
        match (wide.numer().to_i64(), wide.denom().to_i64()) {
            (Some(numer), Some(denom)) => Ok(Fraction {
                ratio: Ratio::new_raw(numer, denom),
            }),
            _ => Err(CalcError::Overflow(
                format!("{} / {} does not fit a 64-bit fraction", numerator, denominator))),
        }
    }

    pub fn from_integer(value: i64) -> Fraction {
        Fraction {
            ratio: Ratio::from_integer(value),
        }
    }

    pub fn numerator(&self) -> i64 {
        *self.ratio.numer()
    }

    pub fn denominator(&self) -> i64 {
        *self.ratio.denom()
    }

    pub fn is_whole(&self) -> bool {
        self.ratio.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.ratio.is_zero()
    }

    pub fn inverse(&self) -> Result<Fraction, CalcError> {
        if self.is_zero() {
            return Err(CalcError::division_by_zero());
        }
        if self.numerator() == i64::MIN {
            return Err(CalcError::Overflow(
                format!("the inverse of {} does not fit a 64-bit fraction", self)));
        }

        Ok(Fraction {
            ratio: self.ratio.recip(),
        })
    }

    pub fn checked_neg(&self) -> Option<Fraction> {
        Ratio::zero().checked_sub(&self.ratio).map(|ratio| Fraction { ratio })
    }

    pub fn checked_add(&self, other: &Fraction) -> Option<Fraction> {
        self.ratio.checked_add(&other.ratio).map(|ratio| Fraction { ratio })
    }

    pub fn checked_sub(&self, other: &Fraction) -> Option<Fraction> {
        self.ratio.checked_sub(&other.ratio).map(|ratio| Fraction { ratio })
    }

    pub fn checked_mul(&self, other: &Fraction) -> Option<Fraction> {
        self.ratio.checked_mul(&other.ratio).map(|ratio| Fraction { ratio })
    }

    // Also None when dividing by zero, like the integer `checked_div`.
    pub fn checked_div(&self, other: &Fraction) -> Option<Fraction> {
        self.ratio.checked_div(&other.ratio).map(|ratio| Fraction { ratio })
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::from_integer(value)
    }
}

// Conversion to an integer truncates toward zero.
impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Some(self.ratio.to_integer())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator() as f64 / self.denominator() as f64)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {}", self.numerator(), self.denominator())
    }
}
