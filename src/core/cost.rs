//! Traversal cost of an edge.

use crate::quantity::{Quantity, QuantityError};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Time and energy spent taking a transition.
///
/// Arithmetic is component-wise and inherits the exactness of [`Quantity`].
///
/// ```rust
/// use kripke_structures::{Cost, Quantity};
///
/// let first = Cost::new(Quantity::new(1, 2), Quantity::new(1, 1));
/// let second = Cost::new(Quantity::new(1, 1), Quantity::new(1, 0));
///
/// assert_eq!(
///     first + second,
///     Cost::new(Quantity::new(11, 1), Quantity::new(11, 0)),
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Seconds spent
    pub time: Quantity,
    /// Joules spent
    pub energy: Quantity,
}

impl Cost {
    /// No time and no energy.
    pub const ZERO: Cost = Cost {
        time: Quantity::ZERO,
        energy: Quantity::ZERO,
    };

    /// Create a cost from its time and energy parts.
    pub fn new(time: Quantity, energy: Quantity) -> Self {
        Self { time, energy }
    }

    /// Component-wise checked addition.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        Ok(Self {
            time: self.time.checked_add(rhs.time)?,
            energy: self.energy.checked_add(rhs.energy)?,
        })
    }

    /// Component-wise checked subtraction. Fails if either part would go negative.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        Ok(Self {
            time: self.time.checked_sub(rhs.time)?,
            energy: self.energy.checked_sub(rhs.energy)?,
        })
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost::new(self.time + rhs.time, self.energy + rhs.energy)
    }
}

impl Sub for Cost {
    type Output = Cost;

    fn sub(self, rhs: Cost) -> Cost {
        Cost::new(self.time - rhs.time, self.energy - rhs.energy)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |total, cost| total + cost)
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I: Iterator<Item = &'a Cost>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
