use std::fmt;

use num_traits::{checked_pow, ToPrimitive};

use crate::error::CalcError;
use crate::fraction::Fraction;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Fraction(Fraction),
}

impl Number {
    // Whole-valued fractions collapse into integers at every arithmetic site.
    pub fn from_fraction(fraction: Fraction) -> Number {
        if fraction.is_whole() {
            Number::Integer(fraction.numerator())
        } else {
            Number::Fraction(fraction)
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::Float(x) => *x == 0.0,
            Number::Fraction(f) => f.is_zero(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(x) => *x,
            Number::Fraction(f) => f.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a.checked_add(b)
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Float(a as f64 + b as f64)),
            (Number::Float(_), _) | (_, Number::Float(_)) => Number::Float(self.to_f64() + rhs.to_f64()),
            (left, right) => exact(left, right, Fraction::checked_add)
                .unwrap_or_else(|| Number::Float(left.to_f64() + right.to_f64())),
        }
    }

    pub fn subtract(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a.checked_sub(b)
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Float(a as f64 - b as f64)),
            (Number::Float(_), _) | (_, Number::Float(_)) => Number::Float(self.to_f64() - rhs.to_f64()),
            (left, right) => exact(left, right, Fraction::checked_sub)
                .unwrap_or_else(|| Number::Float(left.to_f64() - right.to_f64())),
        }
    }

    pub fn multiply(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a.checked_mul(b)
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Float(a as f64 * b as f64)),
            (Number::Float(_), _) | (_, Number::Float(_)) => Number::Float(self.to_f64() * rhs.to_f64()),
            (left, right) => exact(left, right, Fraction::checked_mul)
                .unwrap_or_else(|| Number::Float(left.to_f64() * right.to_f64())),
        }
    }

    pub fn divide(self, rhs: Number) -> Result<Number, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::division_by_zero());
        }

        let quotient = match (self, rhs) {
            (Number::Float(_), _) | (_, Number::Float(_)) => Number::Float(self.to_f64() / rhs.to_f64()),
            (left, right) => exact(left, right, Fraction::checked_div)
                .unwrap_or_else(|| Number::Float(left.to_f64() / right.to_f64())),
        };

        Ok(quotient)
    }

    pub fn power(self, rhs: Number) -> Number {
        if rhs.is_zero() {
            return Number::Integer(1);
        }

        match (self, rhs) {
            // Negative exponents run zero multiplication steps.
            (Number::Integer(_), Number::Integer(exponent)) if exponent < 0 => Number::Integer(1),
            (Number::Integer(base), Number::Integer(exponent)) => {
                exponent.to_usize()
                    .and_then(|exponent| checked_pow(base, exponent))
                    .map(Number::Integer)
                    .unwrap_or_else(|| Number::Float((base as f64).powf(exponent as f64)))
            }
            // Fractional bases and exponents are not kept exact.
            _ => Number::Float(self.to_f64().powf(rhs.to_f64())),
        }
    }
}

// Applies an exact operation to two integer/fraction operands.
fn exact(left: Number, right: Number, op: fn(&Fraction, &Fraction) -> Option<Fraction>)
    -> Option<Number>
{
    let left = as_fraction(left)?;
    let right = as_fraction(right)?;

    op(&left, &right).map(Number::from_fraction)
}

fn as_fraction(number: Number) -> Option<Fraction> {
    match number {
        Number::Integer(n) => Some(Fraction::from(n)),
        Number::Fraction(f) => Some(f),
        Number::Float(_) => None,
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{:.6}", x),
            Number::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Float(x)
    }
}

impl From<Fraction> for Number {
    fn from(fraction: Fraction) -> Number {
        Number::from_fraction(fraction)
    }
}
