//! Scalar values and best-effort numeric coercion.

use core::fmt;

use serde::Serialize;

/// A single node data value: integer, float, or raw text.
///
/// Serializes untagged, so JSON output sees a plain number or string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

/// Try to parse a string as a number, otherwise return the original text.
///
/// Integral values collapse to integers: `"0.0"` becomes `0`, not `0.0`.
/// The collapse is part of the output contract, downstream consumers
/// distinguish integer and float cells.
pub fn coerce(raw: &str) -> Scalar {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && in_i64_range(n) => Scalar::Int(n as i64),
        Ok(n) => Scalar::Float(n),
        Err(_) => Scalar::Text(raw.to_string()),
    }
}

// 2^63 itself is not representable as i64
fn in_i64_range(n: f64) -> bool {
    n >= -(2f64.powi(63)) && n < 2f64.powi(63)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Bounded to the f64-exact integer range; the parse goes through
        // f64, so wider integers are subject to its precision.
        #[test]
        fn exact_integers_round_trip_as_int(v in -(1i64 << 53)..(1i64 << 53)) {
            prop_assert_eq!(coerce(&v.to_string()), Scalar::Int(v));
        }

        #[test]
        fn non_integral_floats_round_trip_as_float(v in -1.0e9_f64..1.0e9_f64) {
            prop_assume!(v.fract() != 0.0);
            let parsed = v.to_string().parse::<f64>().unwrap();
            prop_assert_eq!(coerce(&v.to_string()), Scalar::Float(parsed));
        }
    }
}
