use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::config::Tolerance;
use crate::error::{Result, VectorError};

/// A dense vector of `f64` components whose dimension is fixed at construction.
///
/// Cloning deep-copies the components. `Default` is the zero-dimension vector,
/// which is also what `std::mem::take` leaves behind in the source.
///
/// `==` compares dimensions and then components with exact floating-point
/// equality; use [`EuclideanVector::approx_eq`] when rounding matters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EuclideanVector {
    magnitudes: Box<[f64]>,
}

/// Largest dimension whose buffer size still fits in `isize::MAX` bytes.
const MAX_DIMENSION: usize = isize::MAX as usize / std::mem::size_of::<f64>();

fn checked_dimension(dimension: i64) -> Result<usize> {
    if dimension < 0 {
        log::debug!("Rejecting negative dimension {}", dimension);
        return Err(VectorError::negative_dimension(dimension));
    }
    usize::try_from(dimension)
        .ok()
        .filter(|&d| d <= MAX_DIMENSION)
        .ok_or_else(|| {
            log::debug!("Rejecting oversized dimension {}", dimension);
            VectorError::InvalidArgument {
                message: format!(
                    "EuclideanVector dimension {} does not fit in memory",
                    dimension
                ),
            }
        })
}

fn filled(dimension: usize, value: f64) -> Result<Box<[f64]>> {
    let mut magnitudes = Vec::new();
    magnitudes.try_reserve_exact(dimension).map_err(|e| {
        log::debug!("Allocation of {} components failed: {}", dimension, e);
        VectorError::InvalidArgument {
            message: format!(
                "EuclideanVector dimension {} does not fit in memory",
                dimension
            ),
        }
    })?;
    magnitudes.resize(dimension, value);
    Ok(magnitudes.into_boxed_slice())
}

impl EuclideanVector {
    /// Zero-filled vector of `dimension` components.
    ///
    /// Fails with `InvalidArgument` when `dimension` is negative or too large
    /// to allocate.
    pub fn new(dimension: i64) -> Result<Self> {
        Self::with_value(dimension, 0.0)
    }

    /// Vector of `dimension` components all equal to `value`.
    ///
    /// Fails with `InvalidArgument` when `dimension` is negative or too large
    /// to allocate.
    pub fn with_value(dimension: i64, value: f64) -> Result<Self> {
        let dimension = checked_dimension(dimension)?;
        log::trace!("Creating EuclideanVector of dimension {} filled with {}", dimension, value);
        Ok(Self {
            magnitudes: filled(dimension, value)?,
        })
    }

    /// # Panics
    ///
    /// Panics when the buffer cannot be allocated; use [`EuclideanVector::new`]
    /// for untrusted sizes.
    pub fn zeros(dimension: usize) -> Self {
        Self::from_elem(dimension, 0.0)
    }

    /// # Panics
    ///
    /// Panics when the buffer cannot be allocated; use
    /// [`EuclideanVector::with_value`] for untrusted sizes.
    pub fn from_elem(dimension: usize, value: f64) -> Self {
        log::trace!("Creating EuclideanVector of dimension {} filled with {}", dimension, value);
        Self {
            magnitudes: vec![value; dimension].into_boxed_slice(),
        }
    }

    /// Copies `values` in order; the dimension is `values.len()`.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            magnitudes: values.into(),
        }
    }

    pub fn num_dimensions(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.magnitudes.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.magnitudes.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.magnitudes
    }

    fn position(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.magnitudes.len())
            .ok_or_else(|| {
                log::debug!(
                    "Index {} rejected for vector of dimension {}",
                    index,
                    self.magnitudes.len()
                );
                VectorError::OutOfRange {
                    index,
                    dimension: self.magnitudes.len(),
                }
            })
    }

    /// Bounds-checked read of the component at `index`.
    pub fn at(&self, index: i64) -> Result<f64> {
        let i = self.position(index)?;
        Ok(self.magnitudes[i])
    }

    /// Bounds-checked mutable access to the component at `index`.
    pub fn at_mut(&mut self, index: i64) -> Result<&mut f64> {
        let i = self.position(index)?;
        Ok(&mut self.magnitudes[i])
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.magnitudes.get(index).copied()
    }

    /// L2 norm. `0.0` for the zero-dimension vector.
    ///
    /// Components are scaled by the largest magnitude before squaring, so the
    /// result only overflows or underflows when the norm itself does.
    pub fn euclidean_norm(&self) -> f64 {
        let scale = self.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        if self.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let sum = self
            .iter()
            .map(|v| {
                let r = v / scale;
                r * r
            })
            .sum::<f64>();
        scale * sum.sqrt()
    }

    /// Vector of the same direction with a norm of one.
    ///
    /// Fails with `InvalidArgument` for a zero-dimension vector and with
    /// `DivideByZero` when the norm is zero.
    pub fn unit_vector(&self) -> Result<Self> {
        if self.is_empty() {
            log::debug!("Unit vector requested for zero-dimension vector");
            return Err(VectorError::InvalidArgument {
                message: "EuclideanVector with no dimensions does not have a unit vector"
                    .to_string(),
            });
        }
        let norm = self.euclidean_norm();
        if norm == 0.0 {
            log::debug!("Unit vector requested for zero-norm vector {}", self);
            return Err(VectorError::DivideByZero {
                message: "EuclideanVector with euclidean normal of 0 does not have a unit vector"
                    .to_string(),
            });
        }
        log::trace!("Normalizing vector of dimension {} by {}", self.num_dimensions(), norm);
        Ok(self.iter().map(|v| v / norm).collect())
    }

    /// Same dimension and every component pair within `tolerance`.
    pub fn approx_eq(&self, other: &EuclideanVector, tolerance: &Tolerance) -> bool {
        self.num_dimensions() == other.num_dimensions()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| tolerance.matches(a, b))
    }
}

/// Unchecked by contract: the caller guarantees `index < num_dimensions()`.
///
/// # Panics
///
/// Panics when `index` is out of range.
impl Index<usize> for EuclideanVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.magnitudes[index]
    }
}

/// # Panics
///
/// Panics when `index` is out of range.
impl IndexMut<usize> for EuclideanVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.magnitudes[index]
    }
}

impl From<Vec<f64>> for EuclideanVector {
    fn from(value: Vec<f64>) -> Self {
        Self {
            magnitudes: value.into_boxed_slice(),
        }
    }
}

impl<'a> IntoIterator for &'a EuclideanVector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
