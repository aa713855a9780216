//! Property values carried by Kripke structure nodes.
//!
//! The structure treats property values as opaque: it only needs to compare,
//! hash, order, render and serialize them. Any type meeting those bounds can
//! implement [`PropertyValue`]; [`SignalLiteral`] is provided for machines
//! whose variables are hardware signals.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for values stored in a node's property map.
///
/// All methods are pure. Values are immutable once placed in a node.
///
/// # Required Traits
///
/// - `Clone`: nodes are cloned into edges and initial-state sets
/// - `Eq` + `Hash`: nodes are map keys, so values must compare structurally
/// - `Ord`: structures serialize in a deterministic order
/// - `Display`: values are rendered verbatim in Graphviz labels
/// - `Serialize` + `Deserialize`: structures must round-trip through serde
///
/// # Example
///
/// ```rust
/// use kripke_structures::core::PropertyValue;
/// use serde::{Deserialize, Serialize};
/// use std::fmt;
///
/// #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl fmt::Display for Light {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Self::Red => f.write_str("red"),
///             Self::Green => f.write_str("green"),
///         }
///     }
/// }
///
/// impl PropertyValue for Light {}
///
/// assert_eq!(Light::Green.label(), "green");
/// ```
pub trait PropertyValue:
    Clone + Eq + Hash + Ord + Debug + Display + Serialize + DeserializeOwned + Send + Sync
{
    /// Text used for this value in Graphviz labels.
    ///
    /// Default implementation uses `Display`.
    fn label(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_property_value {
    ($($ty:ty),* $(,)?) => {
        $(impl PropertyValue for $ty {})*
    };
}

impl_property_value!(bool, i32, i64, u32, u64, String);

/// Value of a two-state `bit` signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitLiteral {
    Low,
    High,
}

impl Display for BitLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("'0'"),
            Self::High => f.write_str("'1'"),
        }
    }
}

/// Value of a nine-state `std_logic` signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicLiteral {
    Uninitialized,
    Unknown,
    Low,
    High,
    HighImpedance,
    WeakSignal,
    WeakLow,
    WeakHigh,
    DontCare,
}

impl Display for LogicLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Uninitialized => 'U',
            Self::Unknown => 'X',
            Self::Low => '0',
            Self::High => '1',
            Self::HighImpedance => 'Z',
            Self::WeakSignal => 'W',
            Self::WeakLow => 'L',
            Self::WeakHigh => 'H',
            Self::DontCare => '-',
        };
        write!(f, "'{symbol}'")
    }
}

/// A literal held by a signal or variable of a hardware state machine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLiteral {
    Bit(BitLiteral),
    Logic(LogicLiteral),
    Integer(i64),
    Boolean(bool),
}

impl Display for SignalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bit(bit) => Display::fmt(bit, f),
            Self::Logic(logic) => Display::fmt(logic, f),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl PropertyValue for SignalLiteral {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_literals_render_quoted() {
        assert_eq!(SignalLiteral::Bit(BitLiteral::Low).label(), "'0'");
        assert_eq!(SignalLiteral::Bit(BitLiteral::High).label(), "'1'");
    }

    #[test]
    fn logic_literals_render_quoted() {
        assert_eq!(
            SignalLiteral::Logic(LogicLiteral::HighImpedance).label(),
            "'Z'"
        );
        assert_eq!(SignalLiteral::Logic(LogicLiteral::DontCare).label(), "'-'");
        assert_eq!(
            SignalLiteral::Logic(LogicLiteral::Uninitialized).label(),
            "'U'"
        );
    }

    #[test]
    fn scalar_literals_render_plain() {
        assert_eq!(SignalLiteral::Integer(30).label(), "30");
        assert_eq!(SignalLiteral::Integer(-4).label(), "-4");
        assert_eq!(SignalLiteral::Boolean(true).label(), "true");
    }

    #[test]
    fn std_types_are_property_values() {
        assert_eq!(42i64.label(), "42");
        assert_eq!("idle".to_string().label(), "idle");
    }

    #[test]
    fn literal_serializes_correctly() {
        let literal = SignalLiteral::Logic(LogicLiteral::WeakHigh);
        let json = serde_json::to_string(&literal).unwrap();
        assert_eq!(json, r#"{"logic":"weak_high"}"#);
        let deserialized: SignalLiteral = serde_json::from_str(&json).unwrap();
        assert_eq!(literal, deserialized);
    }

    #[test]
    fn literal_is_comparable() {
        let a = SignalLiteral::Integer(20);
        let b = SignalLiteral::Integer(20);
        let c = SignalLiteral::Integer(30);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
}
