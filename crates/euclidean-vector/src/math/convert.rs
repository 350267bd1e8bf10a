use std::collections::LinkedList;
use std::fmt;
use std::str::FromStr;

use crate::error::VectorError;
use crate::math::vector::EuclideanVector;

impl EuclideanVector {
    /// Independent copy of the components, in index order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Independent copy of the components as a linked list, in index order.
    pub fn to_list(&self) -> LinkedList<f64> {
        self.iter().copied().collect()
    }
}

impl FromIterator<f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        EuclideanVector::from(iter.into_iter().collect::<Vec<f64>>())
    }
}

impl<'a> FromIterator<&'a f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<&[f64]> for EuclideanVector {
    fn from(value: &[f64]) -> Self {
        EuclideanVector::from_slice(value)
    }
}

impl<const N: usize> From<[f64; N]> for EuclideanVector {
    fn from(value: [f64; N]) -> Self {
        EuclideanVector::from_slice(&value)
    }
}

impl From<&EuclideanVector> for Vec<f64> {
    fn from(value: &EuclideanVector) -> Self {
        value.to_vec()
    }
}

impl From<EuclideanVector> for Vec<f64> {
    fn from(value: EuclideanVector) -> Self {
        value.to_vec()
    }
}

impl From<&EuclideanVector> for LinkedList<f64> {
    fn from(value: &EuclideanVector) -> Self {
        value.to_list()
    }
}

impl From<EuclideanVector> for LinkedList<f64> {
    fn from(value: EuclideanVector) -> Self {
        value.to_list()
    }
}

/// Renders `[c0 c1 ... cn-1]`. A formatter precision such as `{:.2}` is
/// applied to every component.
impl fmt::Display for EuclideanVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.iter().enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        write!(f, "]")
    }
}

/// Parses the rendered form back, e.g. `"[1 2.5 -3]"`.
impl FromStr for EuclideanVector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| VectorError::InvalidArgument {
            message: format!("Cannot parse `{}` as an EuclideanVector: {}", s, reason),
        };

        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| invalid("expected components enclosed in `[` and `]`".to_string()))?;

        inner
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|e| invalid(format!("component `{}`: {}", token, e)))
            })
            .collect::<Result<Vec<f64>, VectorError>>()
            .map(EuclideanVector::from)
    }
}
