//! # poly-tower
//!
//! A crate for exact arithmetic with multivariate polynomials, built as towers
//! of univariate polynomial rings over generic coefficient rings.
//!
//! The central interface is the trait [`crate::ring::RingBase`], resp. its
//! counterpart [`crate::ring::RingStore`] that abstracts over different ways
//! of storing a ring object. Polynomial rings are obtained by nesting
//! [`crate::rings::poly::dense_poly::DensePolyRing`], with every nesting level
//! contributing one variable; the trait
//! [`crate::rings::multivariate::MultivariatePolyRing`] then gives uniform
//! access to degrees and coefficients across all levels of such a tower.
//!
//! ```
//! use poly_tower::ring::*;
//! use poly_tower::rings::poly::*;
//! use poly_tower::rings::poly::dense_poly::DensePolyRing;
//! use poly_tower::rings::multivariate::*;
//! use poly_tower::primitive_int::StaticRing;
//!
//! // the ring ZZ[x][y], i.e. bivariate polynomials over the integers
//! let ring = DensePolyRing::new(DensePolyRing::new(StaticRing::<i64>::RING, "x"), "y");
//! let x = ring.shift(ring.one(), 1, 0).unwrap();
//! let y = ring.shift(ring.one(), 1, 1).unwrap();
//!
//! // f = 11 x^2 y^4 + 5 x y^4 + 7 x^2 y^3
//! let f = ring.sum([
//!     ring.mul(ring.from_int(11), ring.mul(ring.pow(&x, 2), ring.pow(&y, 4))),
//!     ring.mul(ring.from_int(5), ring.mul(ring.clone_el(&x), ring.pow(&y, 4))),
//!     ring.mul(ring.from_int(7), ring.mul(ring.pow(&x, 2), ring.pow(&y, 3)))
//! ].into_iter());
//!
//! assert_eq!(Some(4), ring.degree(&f));
//! assert_eq!(Some(2), ring.degree_in(&f, 0).unwrap());
//! assert_eq!(Some(6), ring.total_degree(&f));
//! assert_eq!(vec![Some(2), Some(4)], ring.degree_vector(&f));
//! assert_eq!(5, ring.innermost_coefficient_at(&f, &[1, 4]).unwrap());
//! assert_eq!(11, ring.innermost_lc(&f));
//! ```

///
/// Contains the core traits of the crate, [`crate::ring::RingBase`] and
/// [`crate::ring::RingStore`].
///
#[macro_use]
pub mod ring;
///
/// Contains the error type returned by fallible polynomial ring queries.
///
pub mod error;
///
/// Contains the implementation of the ring of integers using primitive
/// machine integers, usable as innermost coefficient ring of a tower.
///
pub mod primitive_int;
///
/// Contains the framework for ring-driven serialization and deserialization
/// of ring elements.
///
pub mod serialization;
///
/// Contains the polynomial ring implementations.
///
pub mod rings;
