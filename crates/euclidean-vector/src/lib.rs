//! euclidean-vector: a fixed-dimension Euclidean vector of `f64` components.
//!
//! `EuclideanVector` owns its components and never changes dimension after
//! construction. Every operation that can fail has a `Result`-returning form
//! reporting a `VectorError`; the `std::ops` operators are built on top of
//! those and panic when their precondition is violated.
//!
//! ```
//! use euclidean_vector::EuclideanVector;
//!
//! let v = EuclideanVector::from([3.0, 4.0]);
//! assert_eq!(v.euclidean_norm(), 5.0);
//! assert_eq!(v.unit_vector().unwrap().to_string(), "[0.6 0.8]");
//! ```
pub mod config;
pub mod error;
pub mod math;

pub use config::Tolerance;
pub use error::{ErrorKind, Result, VectorError};
pub use math::EuclideanVector;
