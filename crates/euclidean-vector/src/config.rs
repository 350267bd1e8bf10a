use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Floating-point slack used by `EuclideanVector::approx_eq`.
///
/// `==` on vectors is exact. Callers that chain divisions or normalize
/// vectors compare through a `Tolerance` instead.
///
/// Deserialization rejects negative or non-finite bounds, the same inputs
/// `FromStr` rejects.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "TolerancePayload")]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

/// Unvalidated wire form of `Tolerance`.
#[derive(Deserialize)]
struct TolerancePayload {
    absolute: f64,

    #[serde(default)]
    relative: f64,
}

impl TryFrom<TolerancePayload> for Tolerance {
    type Error = String;

    fn try_from(payload: TolerancePayload) -> Result<Self, Self::Error> {
        for (name, value) in [("absolute", payload.absolute), ("relative", payload.relative)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Invalid {} tolerance: {}. Expected a finite, non-negative number",
                    name, value
                ));
            }
        }
        Ok(Tolerance::new(payload.absolute, payload.relative))
    }
}

impl Tolerance {
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Bit-for-bit comparison, same as `==`.
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn absolute(absolute: f64) -> Self {
        Self::new(absolute, 0.0)
    }

    /// True when `|a - b| <= absolute + relative * max(|a|, |b|)`.
    pub fn matches(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.absolute + self.relative * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 1e-12,
        }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Tolerance::exact()),
            "default" => Ok(Tolerance::default()),
            other => match other.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Ok(Tolerance::absolute(value)),
                _ => Err(format!(
                    "Unknown tolerance: {}. Expected `exact`, `default` or a non-negative number",
                    s
                )),
            },
        }
    }
}
