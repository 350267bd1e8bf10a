//! Integration tests for construction, value semantics and element access.

use euclidean_vector::{EuclideanVector, ErrorKind, VectorError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[test]
fn new_is_zero_filled() {
    init_logging();
    let v = EuclideanVector::new(4).unwrap();
    assert_eq!(v.num_dimensions(), 4);
    for c in v.iter() {
        assert_eq!(*c, 0.0);
    }
}

#[test]
fn new_with_zero_dimension() {
    let v = EuclideanVector::new(0).unwrap();
    assert_eq!(v.num_dimensions(), 0);
    assert!(v.is_empty());
    assert_eq!(v, EuclideanVector::default());
}

#[test]
fn new_rejects_negative_dimension() {
    init_logging();
    let err = EuclideanVector::new(-3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("negative dimension"));
}

#[test]
fn new_rejects_dimension_too_large_to_allocate() {
    init_logging();
    let err = EuclideanVector::new(i64::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("does not fit in memory"));

    let err = EuclideanVector::with_value(i64::MAX / 2, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn with_value_fills_every_component() {
    let v = EuclideanVector::with_value(3, 2.5).unwrap();
    assert_eq!(v.num_dimensions(), 3);
    assert_eq!(v.to_vec(), vec![2.5, 2.5, 2.5]);
}

#[test]
fn with_value_rejects_negative_dimension() {
    let err = EuclideanVector::with_value(-1, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn zeros_and_from_elem_match_checked_forms() {
    assert_eq!(EuclideanVector::zeros(5), EuclideanVector::new(5).unwrap());
    assert_eq!(
        EuclideanVector::from_elem(2, -1.0),
        EuclideanVector::with_value(2, -1.0).unwrap()
    );
}

#[test]
fn range_construction_copies_in_order() {
    let source = vec![1.0, -2.0, 3.5, 0.25];
    let v: EuclideanVector = source[1..3].iter().collect();
    assert_eq!(v.num_dimensions(), 2);
    assert_eq!(v.as_slice(), &[-2.0, 3.5]);

    let from_slice = EuclideanVector::from_slice(&source);
    assert_eq!(from_slice.to_vec(), source);
}

#[test]
fn range_construction_from_empty_range() {
    let source: Vec<f64> = Vec::new();
    let v: EuclideanVector = source.iter().collect();
    assert!(v.is_empty());
}

#[test]
fn from_array_and_vec() {
    let a = EuclideanVector::from([1.0, 2.0]);
    let b = EuclideanVector::from(vec![1.0, 2.0]);
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Copy / move
// ---------------------------------------------------------------------------

#[test]
fn clone_is_independent() {
    let a = EuclideanVector::from([1.0, 2.0, 3.0]);
    let mut b = a.clone();
    b[0] = 100.0;
    *b.at_mut(2).unwrap() = -1.0;
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(b.to_vec(), vec![100.0, 2.0, -1.0]);
}

#[test]
fn take_moves_data_and_leaves_empty_source() {
    let mut a = EuclideanVector::from([4.0, 5.0]);
    let b = std::mem::take(&mut a);
    assert_eq!(b.to_vec(), vec![4.0, 5.0]);
    assert_eq!(a.num_dimensions(), 0);

    a = EuclideanVector::from([9.0]);
    assert_eq!(a.at(0).unwrap(), 9.0);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn at_reads_and_writes() {
    let mut v = EuclideanVector::from([1.0, 2.0, 3.0]);
    assert_eq!(v.at(1).unwrap(), 2.0);
    *v.at_mut(1).unwrap() += 10.0;
    assert_eq!(v.at(1).unwrap(), 12.0);
}

#[test]
fn at_rejects_negative_and_past_the_end() {
    init_logging();
    let v = EuclideanVector::from([1.0, 2.0, 3.0]);

    let err = v.at(-1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        err,
        VectorError::OutOfRange {
            index: -1,
            dimension: 3
        }
    );

    let err = v.at(3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index 3 is not valid for this EuclideanVector object (dimension 3)"
    );
}

#[test]
fn at_mut_rejects_out_of_range_without_mutating() {
    let mut v = EuclideanVector::from([1.0]);
    assert!(v.at_mut(1).is_err());
    assert!(v.at_mut(-5).is_err());
    assert_eq!(v.to_vec(), vec![1.0]);
}

#[test]
fn at_on_empty_vector_always_fails() {
    let v = EuclideanVector::default();
    assert_eq!(v.at(0).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn index_operator_reads_and_writes() {
    let mut v = EuclideanVector::zeros(2);
    v[1] = 7.0;
    assert_eq!(v[0], 0.0);
    assert_eq!(v[1], 7.0);
    assert_eq!(v.get(1), Some(7.0));
    assert_eq!(v.get(2), None);
}

#[test]
#[should_panic]
fn index_operator_panics_out_of_range() {
    let v = EuclideanVector::zeros(2);
    let _value = v[2];
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equality_is_reflexive() {
    let a = EuclideanVector::from([0.1, 0.2, 0.3]);
    assert_eq!(a, a.clone());
}

#[test]
fn inequality_on_dimension_or_component() {
    let a = EuclideanVector::from([1.0, 2.0]);
    let longer = EuclideanVector::from([1.0, 2.0, 0.0]);
    let different = EuclideanVector::from([1.0, 2.000001]);
    assert!(a != longer);
    assert!(a != different);
}

#[test]
fn equality_is_exact() {
    let sum = EuclideanVector::from([0.1]) + EuclideanVector::from([0.2]);
    assert_ne!(sum, EuclideanVector::from([0.3]));
}
