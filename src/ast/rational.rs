//! Arbitrary-precision rational numbers.
//!
//! Every numeric literal in the language is held as an exact fraction so that
//! arithmetic on literals never drifts the way binary floating point does.
//! `0.1 + 0.2` is exactly `3/10`.

use std::{
    fmt::Display,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("invalid number literal {literal:?}")]
    InvalidLiteral { literal: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("mod is not supported on rational numbers")]
    ModUnsupported,
}

/// An exact fraction. Always reduced, the denominator is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Parses a decimal literal of the form `[0-9]+(\.[0-9]*)?`.
    pub fn from_literal(literal: &str) -> Result<Self, RationalError> {
        let invalid = || RationalError::InvalidLiteral {
            literal: String::from(literal),
        };

        let (whole, fraction) = literal.split_once('.').unwrap_or((literal, ""));

        if whole.is_empty()
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let numerator = format!("{}{}", whole, fraction)
            .parse::<BigInt>()
            .map_err(|_| invalid())?;
        let denominator = num_traits::pow(BigInt::from(10u32), fraction.len());

        Ok(Rational(BigRational::new(numerator, denominator)))
    }

    pub fn from_integer(value: i64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(value)))
    }

    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Rational {
        Rational(self.0.abs())
    }

    /// Exact division. Dividing by zero is an error rather than a panic.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Rational(&self.0 / &other.0))
    }

    /// Remainder is not defined for this type yet. It always fails so a
    /// caller never receives a wrong value.
    pub fn checked_rem(&self, _other: &Rational) -> Result<Rational, RationalError> {
        Err(RationalError::ModUnsupported)
    }

    /// Formats the value as a decimal with `precision` fractional digits,
    /// rounding half away from zero.
    pub fn to_decimal_string(&self, precision: usize) -> String {
        let scale = num_traits::pow(BigInt::from(10u32), precision);
        let scaled = self.numerator().abs() * scale;
        let denominator = self.denominator();

        let mut quotient = &scaled / denominator;
        let remainder = &scaled % denominator;
        if remainder * BigInt::from(2u32) >= *denominator {
            quotient += BigInt::one();
        }

        let mut digits = quotient.to_string();
        if digits.len() <= precision {
            digits = format!("{}{}", "0".repeat(precision + 1 - digits.len()), digits);
        }

        let sign = if self.is_negative() && !quotient.is_zero() {
            "-"
        } else {
            ""
        };

        if precision == 0 {
            format!("{}{}", sign, digits)
        } else {
            let split = digits.len() - precision;
            format!("{}{}.{}", sign, &digits[..split], &digits[split..])
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::from_literal(s)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}
