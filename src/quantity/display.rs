//! Metric-prefix projection and unit labels.

use super::Quantity;
use serde::{Deserialize, Serialize};

const TIME_UNITS: [(i64, &str); 6] = [
    (0, "s"),
    (-3, "ms"),
    (-6, "μs"),
    (-9, "ns"),
    (-12, "ps"),
    (-15, "fs"),
];

const ENERGY_UNITS: [(i64, &str); 10] = [
    (12, "TJ"),
    (9, "GJ"),
    (6, "MJ"),
    (3, "kJ"),
    (0, "J"),
    (-3, "mJ"),
    (-6, "μJ"),
    (-9, "nJ"),
    (-12, "pJ"),
    (-15, "fJ"),
];

/// A `coefficient × 10^exponent` pair that is not kept normalised.
///
/// Produced by [`Quantity::si_rescale`] so that the exponent lines up with a
/// metric prefix. It is never used in arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayQuantity {
    /// Coefficient scaled to match `exponent`
    pub coefficient: u128,
    /// Base-10 exponent, a multiple of 3 when produced by `si_rescale`
    pub exponent: i64,
}

impl DisplayQuantity {
    /// Wrap a pair verbatim, without normalising.
    pub fn new(coefficient: u128, exponent: i64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Render with a seconds-family unit, e.g. `200 ms`.
    ///
    /// Exponents without a prefix fall back to scientific notation: `2×10⁻² s`.
    pub fn time_label(&self) -> String {
        self.label(&TIME_UNITS, "s")
    }

    /// Render with a joules-family unit, e.g. `20 kJ`.
    ///
    /// Exponents without a prefix fall back to scientific notation: `2×10⁻² J`.
    pub fn energy_label(&self) -> String {
        self.label(&ENERGY_UNITS, "J")
    }

    fn label(&self, units: &[(i64, &str)], base: &str) -> String {
        match units.iter().find(|(exponent, _)| *exponent == self.exponent) {
            Some((_, unit)) => format!("{} {unit}", self.coefficient),
            None => format!(
                "{} {base}",
                format_scientific(self.coefficient, self.exponent)
            ),
        }
    }
}

impl From<Quantity> for DisplayQuantity {
    fn from(quantity: Quantity) -> Self {
        Self::new(u128::from(quantity.coefficient()), quantity.exponent())
    }
}

/// Scientific notation with a superscript exponent: `2.5×10⁻²`.
///
/// The mantissa keeps at most three decimals, rounded half to even, with
/// trailing zeros dropped. The pair does not need to be normalised.
pub(crate) fn format_scientific(coefficient: u128, exponent: i64) -> String {
    if coefficient == 0 {
        return "0".to_string();
    }
    let digits = coefficient.to_string();
    let mut power = i128::from(exponent) + digits.len() as i128 - 1;

    let kept_len = digits.len().min(4);
    let dropped = (digits.len() - kept_len) as u32;
    let divisor = 10u128.pow(dropped);
    let mut kept = coefficient / divisor;
    if dropped > 0 {
        let remainder = coefficient % divisor;
        let half = divisor / 2;
        if remainder > half || (remainder == half && kept % 2 == 1) {
            kept += 1;
        }
    }
    let mut mantissa = kept.to_string();
    if mantissa.len() > kept_len {
        // 9.9995 rounded up to 10.000
        mantissa.truncate(kept_len);
        power += 1;
    }

    let (whole, fraction) = mantissa.split_at(1);
    let fraction = fraction.trim_end_matches('0');
    let exponent = superscript(&power.to_string());
    if fraction.is_empty() {
        format!("{whole}×10{exponent}")
    } else {
        format!("{whole}.{fraction}×10{exponent}")
    }
}

fn superscript(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '+' => '⁺',
            '-' => '⁻',
            other => other,
        })
        .collect()
}
