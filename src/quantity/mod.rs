//! Exact non-negative magnitudes in base-10 scientific notation.
//!
//! A [`Quantity`] stores `coefficient × 10^exponent` and is always kept in
//! normalised form: the coefficient carries no trailing decimal zeros, and
//! zero is stored as `0 × 10^0`. Because the form is unique, derived
//! equality and hashing are exact and can be used as map keys.
//!
//! [`DisplayQuantity`] is the non-normalised projection used only to pick a
//! metric prefix when rendering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

mod display;
pub mod error;

pub use display::DisplayQuantity;
pub use error::QuantityError;

pub(crate) use display::format_scientific;

/// A non-negative magnitude `coefficient × 10^exponent`.
///
/// # Example
///
/// ```rust
/// use kripke_structures::Quantity;
///
/// let hundred = Quantity::new(1, 2);
/// let ten = Quantity::from(10u64);
///
/// assert_eq!(hundred + ten, Quantity::new(11, 1));
/// assert_eq!(Quantity::from(500u64).coefficient(), 5);
/// assert_eq!(Quantity::from(500u64).exponent(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuantity")]
pub struct Quantity {
    coefficient: u64,
    exponent: i64,
}

/// Wire form of a quantity; normalised again on decode.
#[derive(Deserialize)]
struct RawQuantity {
    coefficient: u64,
    exponent: i64,
}

impl TryFrom<RawQuantity> for Quantity {
    type Error = QuantityError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        Self::try_new(raw.coefficient, raw.exponent)
    }
}

impl Quantity {
    /// The canonical zero, `0 × 10^0`.
    pub const ZERO: Quantity = Quantity {
        coefficient: 0,
        exponent: 0,
    };

    /// Create a normalised quantity.
    ///
    /// # Panics
    ///
    /// Panics if stripping trailing zeros pushes the exponent past
    /// `i64::MAX`. Use [`Quantity::try_new`] to handle that case.
    pub fn new(coefficient: u64, exponent: i64) -> Self {
        match Self::try_new(coefficient, exponent) {
            Ok(quantity) => quantity,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a normalised quantity, failing if the exponent overflows.
    ///
    /// Trailing decimal zeros are moved from the coefficient into the
    /// exponent; a zero coefficient always yields [`Quantity::ZERO`].
    pub fn try_new(coefficient: u64, exponent: i64) -> Result<Self, QuantityError> {
        if coefficient == 0 {
            return Ok(Self::ZERO);
        }
        let mut normalised = coefficient;
        let mut shifted = exponent;
        while normalised % 10 == 0 {
            normalised /= 10;
            shifted = shifted
                .checked_add(1)
                .ok_or(QuantityError::ExponentOverflow {
                    coefficient,
                    exponent,
                })?;
        }
        Ok(Self {
            coefficient: normalised,
            exponent: shifted,
        })
    }

    /// The normalised coefficient.
    pub fn coefficient(&self) -> u64 {
        self.coefficient
    }

    /// The normalised base-10 exponent.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Whether this is the zero quantity.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Approximate value as a float. Display and rough comparison only.
    pub fn magnitude(&self) -> f64 {
        let scale = match i32::try_from(self.exponent) {
            Ok(exponent) => 10f64.powi(exponent),
            Err(_) => 10f64.powf(self.exponent as f64),
        };
        self.coefficient as f64 * scale
    }

    /// Project onto the nearest metric-prefix exponent at or below this one.
    ///
    /// The exponent becomes a multiple of 3 and the coefficient is scaled by
    /// 1, 10 or 100 to compensate. Zero maps to `0 × 10^0`. Exponents too
    /// close to `i64::MIN` to shift are returned unchanged.
    ///
    /// ```rust
    /// use kripke_structures::{DisplayQuantity, Quantity};
    ///
    /// assert_eq!(
    ///     Quantity::new(2, -1).si_rescale(),
    ///     DisplayQuantity::new(200, -3),
    /// );
    /// assert_eq!(
    ///     Quantity::new(2, 4).si_rescale(),
    ///     DisplayQuantity::new(20, 3),
    /// );
    /// ```
    pub fn si_rescale(&self) -> DisplayQuantity {
        if self.is_zero() {
            return DisplayQuantity::new(0, 0);
        }
        let shift = self.exponent.rem_euclid(3);
        match self.exponent.checked_sub(shift) {
            Some(exponent) => DisplayQuantity::new(
                u128::from(self.coefficient) * 10u128.pow(shift as u32),
                exponent,
            ),
            None => DisplayQuantity::from(*self),
        }
    }

    /// Checked addition. Fails when aligning exponents or summing overflows.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        if rhs.is_zero() {
            return Ok(self);
        }
        if self.is_zero() {
            return Ok(rhs);
        }
        let (lhs_coefficient, rhs_coefficient, exponent) = Self::align(self, rhs)?;
        let coefficient = lhs_coefficient
            .checked_add(rhs_coefficient)
            .ok_or_else(|| QuantityError::Overflow(format!("{self} + {rhs}")))?;
        Self::try_new(coefficient, exponent)
    }

    /// Checked subtraction. Fails on a negative result or alignment overflow.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        if rhs.is_zero() {
            return Ok(self);
        }
        match self.cmp(&rhs) {
            Ordering::Less => Err(QuantityError::Underflow { lhs: self, rhs }),
            Ordering::Equal => Ok(Self::ZERO),
            Ordering::Greater => {
                let (lhs_coefficient, rhs_coefficient, exponent) = Self::align(self, rhs)?;
                Self::try_new(lhs_coefficient - rhs_coefficient, exponent)
            }
        }
    }

    /// Checked multiplication. `x * 0 == 0` for every `x`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, QuantityError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }
        let coefficient = self
            .coefficient
            .checked_mul(rhs.coefficient)
            .ok_or_else(|| QuantityError::Overflow(format!("{self} * {rhs}")))?;
        let exponent =
            self.exponent
                .checked_add(rhs.exponent)
                .ok_or(QuantityError::ExponentOverflow {
                    coefficient,
                    exponent: self.exponent,
                })?;
        Self::try_new(coefficient, exponent)
    }

    /// Bring both coefficients to the smaller of the two exponents.
    fn align(lhs: Self, rhs: Self) -> Result<(u64, u64, i64), QuantityError> {
        match lhs.exponent.cmp(&rhs.exponent) {
            Ordering::Equal => Ok((lhs.coefficient, rhs.coefficient, lhs.exponent)),
            Ordering::Greater => Ok((
                Self::scale_up(lhs, rhs.exponent)?,
                rhs.coefficient,
                rhs.exponent,
            )),
            Ordering::Less => Ok((
                lhs.coefficient,
                Self::scale_up(rhs, lhs.exponent)?,
                lhs.exponent,
            )),
        }
    }

    /// Coefficient of `quantity` re-expressed at the lower `exponent`.
    fn scale_up(quantity: Self, exponent: i64) -> Result<u64, QuantityError> {
        let overflow = || {
            QuantityError::Overflow(format!(
                "{quantity} cannot be aligned to exponent {exponent}"
            ))
        };
        let difference = quantity
            .exponent
            .checked_sub(exponent)
            .and_then(|diff| u32::try_from(diff).ok())
            .ok_or_else(overflow)?;
        10u64
            .checked_pow(difference)
            .and_then(|factor| quantity.coefficient.checked_mul(factor))
            .ok_or_else(overflow)
    }

    /// Number of decimal digits in the coefficient. Zero has none.
    fn digits(&self) -> u32 {
        self.coefficient.checked_ilog10().map_or(0, |log| log + 1)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact numeric ordering.
impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        // Position of the leading digit decides first.
        let lead = i128::from(self.exponent) + i128::from(self.digits());
        let other_lead = i128::from(other.exponent) + i128::from(other.digits());
        lead.cmp(&other_lead).then_with(|| {
            let width = self.digits().max(other.digits());
            let lhs = u128::from(self.coefficient) * 10u128.pow(width - self.digits());
            let rhs = u128::from(other.coefficient) * 10u128.pow(width - other.digits());
            lhs.cmp(&rhs)
        })
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        // A u64 has at most 19 trailing zeros; the exponent cannot overflow.
        Self::new(value, 0)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| QuantityError::Negative(value.to_string()))
    }
}

impl TryFrom<f64> for Quantity {
    type Error = QuantityError;

    /// Convert through the shortest decimal text that round-trips `value`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(QuantityError::NonFinite(value.to_string()));
        }
        if value < 0.0 {
            return Err(QuantityError::Negative(value.to_string()));
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }
        let text = value.to_string();
        let overflow = || QuantityError::Overflow(format!("{text} does not fit a u64 coefficient"));
        match text.split_once('.') {
            None => {
                let coefficient: u64 = text.parse().map_err(|_| overflow())?;
                Self::try_new(coefficient, 0)
            }
            Some((whole, fraction)) => {
                let exponent = -(fraction.len() as i64);
                let digits = if whole == "0" {
                    fraction.trim_start_matches('0').to_string()
                } else {
                    format!("{whole}{fraction}")
                };
                let coefficient: u64 = digits.parse().map_err(|_| overflow())?;
                Self::try_new(coefficient, exponent)
            }
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_scientific(
            u128::from(self.coefficient),
            self.exponent,
        ))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics on overflow, like integer addition.
    fn add(self, rhs: Quantity) -> Quantity {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics when the result would be negative or on alignment overflow.
    fn sub(self, rhs: Quantity) -> Quantity {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics on coefficient or exponent overflow.
    fn mul(self, rhs: Quantity) -> Quantity {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quantity {
    fn mul_assign(&mut self, rhs: Quantity) {
        *self = *self * rhs;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, |total, quantity| total + quantity)
    }
}

impl<'a> Sum<&'a Quantity> for Quantity {
    fn sum<I: Iterator<Item = &'a Quantity>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
