//! Arithmetic on `EuclideanVector`.
//!
//! The `checked_*` methods are the fallible surface and validate before
//! touching any component, so a failed compound operation leaves the left
//! operand unchanged. The `std::ops` impls delegate to them and panic with
//! the error message when a precondition does not hold, the same way the
//! `Array1` bitwise operators assert on length.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Result, VectorError};
use crate::math::vector::EuclideanVector;

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl EuclideanVector {
    fn ensure_same_dimension(&self, rhs: &EuclideanVector) -> Result<()> {
        if self.num_dimensions() != rhs.num_dimensions() {
            log::debug!(
                "Dimension mismatch: {} vs {}",
                self.num_dimensions(),
                rhs.num_dimensions()
            );
            return Err(VectorError::DimensionMismatch {
                lhs: self.num_dimensions(),
                rhs: rhs.num_dimensions(),
            });
        }
        Ok(())
    }

    fn ensure_nonzero(scalar: i32) -> Result<f64> {
        if scalar == 0 {
            log::debug!("Rejecting vector division by 0");
            return Err(VectorError::scalar_division());
        }
        Ok(f64::from(scalar))
    }

    pub fn checked_add_assign(&mut self, rhs: &EuclideanVector) -> Result<()> {
        self.ensure_same_dimension(rhs)?;
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += rhs;
        }
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: &EuclideanVector) -> Result<()> {
        self.ensure_same_dimension(rhs)?;
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs -= rhs;
        }
        Ok(())
    }

    /// Multiplies every component by `scalar` in place. Never fails.
    pub fn scale_assign(&mut self, scalar: i32) {
        let scalar = f64::from(scalar);
        for v in self.iter_mut() {
            *v *= scalar;
        }
    }

    pub fn checked_div_assign(&mut self, scalar: i32) -> Result<()> {
        let scalar = Self::ensure_nonzero(scalar)?;
        for v in self.iter_mut() {
            *v /= scalar;
        }
        Ok(())
    }

    pub fn checked_add(&self, rhs: &EuclideanVector) -> Result<EuclideanVector> {
        let mut out = self.clone();
        out.checked_add_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_sub(&self, rhs: &EuclideanVector) -> Result<EuclideanVector> {
        let mut out = self.clone();
        out.checked_sub_assign(rhs)?;
        Ok(out)
    }

    /// Sum of pairwise products. Both vectors must share a dimension.
    pub fn dot(&self, rhs: &EuclideanVector) -> Result<f64> {
        self.ensure_same_dimension(rhs)?;
        Ok(self.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum())
    }

    pub fn scale(&self, scalar: i32) -> EuclideanVector {
        let mut out = self.clone();
        out.scale_assign(scalar);
        out
    }

    pub fn checked_div(&self, scalar: i32) -> Result<EuclideanVector> {
        let mut out = self.clone();
        out.checked_div_assign(scalar)?;
        Ok(out)
    }
}

impl AddAssign<&EuclideanVector> for EuclideanVector {
    fn add_assign(&mut self, rhs: &EuclideanVector) {
        or_panic(self.checked_add_assign(rhs))
    }
}

impl AddAssign<EuclideanVector> for EuclideanVector {
    fn add_assign(&mut self, rhs: EuclideanVector) {
        *self += &rhs;
    }
}

impl SubAssign<&EuclideanVector> for EuclideanVector {
    fn sub_assign(&mut self, rhs: &EuclideanVector) {
        or_panic(self.checked_sub_assign(rhs))
    }
}

impl SubAssign<EuclideanVector> for EuclideanVector {
    fn sub_assign(&mut self, rhs: EuclideanVector) {
        *self -= &rhs;
    }
}

impl MulAssign<i32> for EuclideanVector {
    fn mul_assign(&mut self, rhs: i32) {
        self.scale_assign(rhs)
    }
}

impl DivAssign<i32> for EuclideanVector {
    fn div_assign(&mut self, rhs: i32) {
        or_panic(self.checked_div_assign(rhs))
    }
}

impl<'a, 'b> Add<&'b EuclideanVector> for &'a EuclideanVector {
    type Output = EuclideanVector;

    fn add(self, rhs: &'b EuclideanVector) -> Self::Output {
        or_panic(self.checked_add(rhs))
    }
}

impl Add<&EuclideanVector> for EuclideanVector {
    type Output = EuclideanVector;

    fn add(mut self, rhs: &EuclideanVector) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<EuclideanVector> for EuclideanVector {
    type Output = EuclideanVector;

    fn add(self, rhs: EuclideanVector) -> Self::Output {
        self + &rhs
    }
}

impl<'a, 'b> Sub<&'b EuclideanVector> for &'a EuclideanVector {
    type Output = EuclideanVector;

    fn sub(self, rhs: &'b EuclideanVector) -> Self::Output {
        or_panic(self.checked_sub(rhs))
    }
}

impl Sub<&EuclideanVector> for EuclideanVector {
    type Output = EuclideanVector;

    fn sub(mut self, rhs: &EuclideanVector) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<EuclideanVector> for EuclideanVector {
    type Output = EuclideanVector;

    fn sub(self, rhs: EuclideanVector) -> Self::Output {
        self - &rhs
    }
}

/// Dot product.
impl<'a, 'b> Mul<&'b EuclideanVector> for &'a EuclideanVector {
    type Output = f64;

    fn mul(self, rhs: &'b EuclideanVector) -> Self::Output {
        or_panic(self.dot(rhs))
    }
}

/// Dot product.
impl Mul<EuclideanVector> for EuclideanVector {
    type Output = f64;

    fn mul(self, rhs: EuclideanVector) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<i32> for &EuclideanVector {
    type Output = EuclideanVector;

    fn mul(self, rhs: i32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<i32> for EuclideanVector {
    type Output = EuclideanVector;

    fn mul(mut self, rhs: i32) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<&EuclideanVector> for i32 {
    type Output = EuclideanVector;

    fn mul(self, rhs: &EuclideanVector) -> Self::Output {
        rhs * self
    }
}

impl Mul<EuclideanVector> for i32 {
    type Output = EuclideanVector;

    fn mul(self, rhs: EuclideanVector) -> Self::Output {
        rhs * self
    }
}

impl Div<i32> for &EuclideanVector {
    type Output = EuclideanVector;

    fn div(self, rhs: i32) -> Self::Output {
        or_panic(self.checked_div(rhs))
    }
}

impl Div<i32> for EuclideanVector {
    type Output = EuclideanVector;

    fn div(mut self, rhs: i32) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Neg for &EuclideanVector {
    type Output = EuclideanVector;

    fn neg(self) -> Self::Output {
        self.iter().map(|v| -v).collect()
    }
}

impl Neg for EuclideanVector {
    type Output = EuclideanVector;

    fn neg(mut self) -> Self::Output {
        for v in self.iter_mut() {
            *v = -*v;
        }
        self
    }
}
