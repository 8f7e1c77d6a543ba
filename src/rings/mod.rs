///
/// Contains [`poly::PolyRing`] and the dense univariate polynomial ring
/// [`poly::dense_poly::DensePolyRing`].
///
pub mod poly;

///
/// Contains [`multivariate::MultivariatePolyRing`], the trait characterizing
/// towers of univariate polynomial rings as multivariate polynomial rings.
///
pub mod multivariate;
