//! The `EuclideanVector` value type.
//!
//! Construction, access and the numeric queries live in `vector`, checked
//! arithmetic and the `std::ops` impls in `ops`, and conversions plus the
//! `[c0 c1 ...]` text form in `convert`.
pub mod convert;
pub mod ops;
pub mod vector;

pub use vector::EuclideanVector;
