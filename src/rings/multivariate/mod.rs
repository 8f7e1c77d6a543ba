use crate::error::PolyError;
use crate::ring::*;
use crate::rings::poly::*;
use crate::rings::poly::dense_poly::DensePolyRingBase;
use crate::primitive_int::{PrimitiveInt, StaticRingBase};

use std::cmp::max;

///
/// Trait for rings that behave as a multivariate polynomial ring
/// `S[X_0, ..., X_(d-1)]` over some innermost coefficient ring `S`. The
/// canonical implementor is a tower of [`crate::rings::poly::dense_poly::DensePolyRing`]s,
/// with each nesting level contributing one variable.
///
/// Variables are indexed from the inside out: variable `0` belongs to the
/// innermost polynomial ring of the tower and variable `d - 1` to the
/// outermost one. Scalars, i.e. rings with no variables at all, form the
/// recursion base and are considered multivariate polynomial rings in zero
/// variables over themselves.
///
/// Degrees are returned as `Option<usize>`, with `None` denoting the degree
/// of the zero polynomial. Queries for coefficients are total and yield zero
/// whenever the queried monomial does not occur; only a structurally invalid
/// query, i.e. a variable index or exponent vector that does not match the
/// shape of the ring itself, gives a [`PolyError`].
///
pub trait MultivariatePolyRing: RingBase {

    ///
    /// An element of the innermost coefficient ring of the tower.
    ///
    type InnermostEl;

    ///
    /// Returns the number of variables `d` of this ring.
    ///
    fn indeterminate_len(&self) -> usize;

    fn innermost_zero(&self) -> Self::InnermostEl;

    ///
    /// Returns the innermost coefficient of the monomial
    /// `X_0^ev[0] ... X_(d-1)^ev[d-1]` in `f`, or zero if `f` has no such
    /// monomial. The exponent vector must have exactly `d` entries.
    ///
    fn innermost_coefficient_at(&self, f: &Self::Element, ev: &[usize]) -> Result<Self::InnermostEl, PolyError>;

    ///
    /// Returns the innermost leading coefficient of `f`, i.e. the result of
    /// taking the leading coefficient w.r.t. the outermost variable, then the
    /// leading coefficient of that w.r.t. the next variable, and so on down to
    /// the scalars. For `f = 0` this is zero.
    ///
    fn innermost_lc(&self, f: &Self::Element) -> Self::InnermostEl;

    ///
    /// Returns the degree of `f` in the variable `var`, i.e. the highest
    /// power of `X_var` occurring in any monomial of `f`.
    ///
    fn degree_in(&self, f: &Self::Element, var: usize) -> Result<Option<usize>, PolyError>;

    ///
    /// Returns the total degree of `f`, i.e. the maximum over all monomials
    /// of `f` of the sum of the monomial's exponents.
    ///
    fn total_degree(&self, f: &Self::Element) -> Option<usize>;

    ///
    /// Updates `degrees[v]` to the maximum of its current value and the
    /// degree of `f` in variable `v`, for every variable `v` of this ring.
    /// The slice must have exactly `d` entries. A single traversal of `f`
    /// suffices, so this is cheaper than `d` calls to
    /// [`MultivariatePolyRing::degree_in()`].
    ///
    fn accumulate_degrees(&self, f: &Self::Element, degrees: &mut [Option<usize>]);

    ///
    /// Multiplies `f` by `X_var^power`.
    ///
    fn shift(&self, f: Self::Element, power: usize, var: usize) -> Result<Self::Element, PolyError>;
}

impl<T: PrimitiveInt> MultivariatePolyRing for StaticRingBase<T> {

    type InnermostEl = T;

    fn indeterminate_len(&self) -> usize {
        0
    }

    fn innermost_zero(&self) -> Self::InnermostEl {
        self.from_int(0)
    }

    fn innermost_coefficient_at(&self, f: &Self::Element, ev: &[usize]) -> Result<Self::InnermostEl, PolyError> {
        if !ev.is_empty() {
            return Err(PolyError::InvalidExponentVector { expected: 0, found: ev.len() });
        }
        return Ok(*f);
    }

    fn innermost_lc(&self, f: &Self::Element) -> Self::InnermostEl {
        *f
    }

    fn degree_in(&self, _f: &Self::Element, var: usize) -> Result<Option<usize>, PolyError> {
        Err(PolyError::InvalidVariable { variable: var, variable_count: 0 })
    }

    fn total_degree(&self, f: &Self::Element) -> Option<usize> {
        if self.is_zero(f) {
            return None;
        }
        return Some(0);
    }

    fn accumulate_degrees(&self, _f: &Self::Element, degrees: &mut [Option<usize>]) {
        assert_eq!(0, degrees.len());
    }

    fn shift(&self, _f: Self::Element, _power: usize, var: usize) -> Result<Self::Element, PolyError> {
        Err(PolyError::InvalidVariable { variable: var, variable_count: 0 })
    }
}

impl<R> MultivariatePolyRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: MultivariatePolyRing
{
    type InnermostEl = <R::Type as MultivariatePolyRing>::InnermostEl;

    fn indeterminate_len(&self) -> usize {
        self.base_ring().get_ring().indeterminate_len() + 1
    }

    fn innermost_zero(&self) -> Self::InnermostEl {
        self.base_ring().get_ring().innermost_zero()
    }

    fn innermost_coefficient_at(&self, f: &Self::Element, ev: &[usize]) -> Result<Self::InnermostEl, PolyError> {
        let var_count = self.indeterminate_len();
        if ev.len() != var_count {
            return Err(PolyError::InvalidExponentVector { expected: var_count, found: ev.len() });
        }
        // var_count >= 1, so the exponent vector is nonempty
        let (outermost_exp, inner_ev) = ev.split_last().unwrap();
        self.base_ring().get_ring().innermost_coefficient_at(self.coefficient_at(f, *outermost_exp), inner_ev)
    }

    fn innermost_lc(&self, f: &Self::Element) -> Self::InnermostEl {
        let base = self.base_ring().get_ring();
        match self.degree(f) {
            Some(deg) => base.innermost_lc(self.coefficient_at(f, deg)),
            None => base.innermost_zero()
        }
    }

    fn degree_in(&self, f: &Self::Element, var: usize) -> Result<Option<usize>, PolyError> {
        let var_count = self.indeterminate_len();
        if var >= var_count {
            return Err(PolyError::InvalidVariable { variable: var, variable_count: var_count });
        }
        if var == var_count - 1 {
            return Ok(self.degree(f));
        }
        let base = self.base_ring().get_ring();
        let mut result = None;
        for (c, _) in self.terms(f) {
            result = max(result, base.degree_in(c, var)?);
        }
        return Ok(result);
    }

    fn total_degree(&self, f: &Self::Element) -> Option<usize> {
        let base = self.base_ring().get_ring();
        self.terms(f)
            .filter_map(|(c, i)| base.total_degree(c).map(|d| d + i))
            .max()
    }

    fn accumulate_degrees(&self, f: &Self::Element, degrees: &mut [Option<usize>]) {
        let var_count = self.indeterminate_len();
        assert_eq!(var_count, degrees.len());
        let base = self.base_ring().get_ring();
        let (own_degree, inner_degrees) = degrees.split_last_mut().unwrap();
        *own_degree = max(*own_degree, self.degree(f));
        for (c, _) in self.terms(f) {
            base.accumulate_degrees(c, inner_degrees);
        }
    }

    fn shift(&self, f: Self::Element, power: usize, var: usize) -> Result<Self::Element, PolyError> {
        let var_count = self.indeterminate_len();
        if var >= var_count {
            return Err(PolyError::InvalidVariable { variable: var, variable_count: var_count });
        }
        if power == 0 || self.is_zero(&f) {
            return Ok(f);
        }
        let self_ring = RingRef::new(self);
        if var == var_count - 1 {
            let terms = self.terms(&f).map(|(c, i)| (self.base_ring().clone_el(c), i + power)).collect::<Vec<_>>();
            return Ok(self_ring.from_terms(terms.into_iter()));
        }
        let base = self.base_ring().get_ring();
        let mut shifted_terms = Vec::new();
        for (c, i) in self.terms(&f) {
            shifted_terms.push((base.shift(self.base_ring().clone_el(c), power, var)?, i));
        }
        return Ok(self_ring.from_terms(shifted_terms.into_iter()));
    }
}

///
/// The [`RingStore`] belonging to [`MultivariatePolyRing`].
///
pub trait MultivariatePolyRingStore: RingStore
    where Self::Type: MultivariatePolyRing
{
    delegate!{ fn indeterminate_len(&self) -> usize }
    delegate!{ fn innermost_zero(&self) -> <Self::Type as MultivariatePolyRing>::InnermostEl }
    delegate!{ fn innermost_lc(&self, f: &El<Self>) -> <Self::Type as MultivariatePolyRing>::InnermostEl }
    delegate!{ fn total_degree(&self, f: &El<Self>) -> Option<usize> }
    delegate!{ fn shift(&self, f: El<Self>, power: usize, var: usize) -> Result<El<Self>, PolyError> }

    fn innermost_coefficient_at(&self, f: &El<Self>, ev: &[usize]) -> Result<<Self::Type as MultivariatePolyRing>::InnermostEl, PolyError> {
        self.get_ring().innermost_coefficient_at(f, ev)
    }

    fn degree_in(&self, f: &El<Self>, var: usize) -> Result<Option<usize>, PolyError> {
        self.get_ring().degree_in(f, var)
    }

    ///
    /// Returns the degree of `f` in every variable, computed in a single
    /// traversal of `f`.
    ///
    fn degree_vector(&self, f: &El<Self>) -> Vec<Option<usize>> {
        let mut result = vec![None; self.indeterminate_len()];
        self.get_ring().accumulate_degrees(f, &mut result);
        return result;
    }
}

impl<R: RingStore> MultivariatePolyRingStore for R
    where R::Type: MultivariatePolyRing
{}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::primitive_int::StaticRing;
    use crate::rings::poly::dense_poly::DensePolyRing;

    type Tower = DensePolyRing<DensePolyRing<StaticRing<i64>>>;

    fn bivariate_ring() -> Tower {
        DensePolyRing::new(DensePolyRing::new(StaticRing::<i64>::RING, "x"), "y")
    }

    ///
    /// Builds `11 y^4 x^2 + 5 y^4 x + 7 y^3 x^2`.
    ///
    fn example_poly(ring: &Tower) -> El<Tower> {
        let x = ring.shift(ring.one(), 1, 0).unwrap();
        let y = ring.shift(ring.one(), 1, 1).unwrap();
        ring.sum([
            ring.mul(ring.from_int(11), ring.mul(ring.pow(&y, 4), ring.pow(&x, 2))),
            ring.mul(ring.from_int(5), ring.mul(ring.pow(&y, 4), ring.clone_el(&x))),
            ring.mul(ring.from_int(7), ring.mul(ring.pow(&y, 3), ring.pow(&x, 2)))
        ].into_iter())
    }

    #[test]
    fn test_indeterminate_len() {
        let ring = bivariate_ring();
        assert_eq!(2, ring.indeterminate_len());
        assert_eq!(1, ring.base_ring().indeterminate_len());
        assert_eq!(0, ring.base_ring().base_ring().indeterminate_len());
    }

    #[test]
    fn test_shift_builds_indeterminates() {
        let ring = bivariate_ring();
        let x = ring.shift(ring.one(), 1, 0).unwrap();
        let y = ring.shift(ring.one(), 1, 1).unwrap();
        assert_el_eq!(&ring, &ring.from_ref(&ring.base_ring().indeterminate()), &x);
        assert_el_eq!(&ring, &ring.indeterminate(), &y);
        // shifting by zero or shifting zero is a no-op
        assert_el_eq!(&ring, &ring.one(), &ring.shift(ring.one(), 0, 0).unwrap());
        assert!(ring.is_zero(&ring.shift(ring.zero(), 3, 1).unwrap()));
    }

    #[test]
    fn test_degree_in() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!(Some(2), ring.degree_in(&f, 0).unwrap());
        assert_eq!(Some(4), ring.degree_in(&f, 1).unwrap());
        // the default degree is the one w.r.t. the outermost variable
        assert_eq!(ring.degree(&f), ring.degree_in(&f, 1).unwrap());
        assert_eq!(None, ring.degree_in(&ring.zero(), 0).unwrap());
        assert_eq!(None, ring.degree_in(&ring.zero(), 1).unwrap());
        assert_eq!(Some(0), ring.degree_in(&ring.one(), 0).unwrap());
    }

    #[test]
    fn test_total_degree() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!(Some(6), ring.total_degree(&f));
        assert_eq!(None, ring.total_degree(&ring.zero()));
        assert_eq!(Some(0), ring.total_degree(&ring.from_int(3)));
    }

    #[test]
    fn test_degree_vector() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!(vec![Some(2), Some(4)], ring.degree_vector(&f));
        assert_eq!(vec![None, None], ring.degree_vector(&ring.zero()));
        assert_eq!(vec![Some(0), Some(0)], ring.degree_vector(&ring.one()));
    }

    #[test]
    fn test_outer_coefficients() {
        let ring = bivariate_ring();
        let inner = ring.base_ring();
        let f = example_poly(&ring);
        // the coefficient of y^4 is 11 x^2 + 5 x, the coefficient of y^3 is 7 x^2
        assert_el_eq!(inner, &inner.from_terms([(5, 1), (11, 2)].into_iter()), ring.coefficient_at(&f, 4));
        assert_el_eq!(inner, &inner.from_terms([(7, 2)].into_iter()), ring.coefficient_at(&f, 3));
        for i in 0..3 {
            assert!(inner.is_zero(ring.coefficient_at(&f, i)));
        }
        assert!(inner.is_zero(ring.coefficient_at(&f, 100)));
        assert_el_eq!(inner, &inner.from_terms([(5, 1), (11, 2)].into_iter()), ring.lc(&f).unwrap());
    }

    #[test]
    fn test_innermost_coefficient_at() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!(11, ring.innermost_coefficient_at(&f, &[2, 4]).unwrap());
        assert_eq!(5, ring.innermost_coefficient_at(&f, &[1, 4]).unwrap());
        assert_eq!(7, ring.innermost_coefficient_at(&f, &[2, 3]).unwrap());
        // absent monomials yield zero, also far beyond the degree
        assert_eq!(0, ring.innermost_coefficient_at(&f, &[0, 0]).unwrap());
        assert_eq!(0, ring.innermost_coefficient_at(&f, &[100, 100]).unwrap());
        assert_eq!(0, ring.innermost_coefficient_at(&ring.zero(), &[0, 0]).unwrap());
    }

    #[test]
    fn test_innermost_lc() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!(11, ring.innermost_lc(&f));
        assert_eq!(0, ring.innermost_lc(&ring.zero()));
        assert_eq!(-3, ring.innermost_lc(&ring.from_int(-3)));
    }

    #[test]
    fn test_invalid_variable() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        match ring.degree_in(&f, 2) {
            Err(PolyError::InvalidVariable { variable: 2, variable_count: 2 }) => {},
            other => panic!("expected InvalidVariable, got {:?}", other.map(|_| ()))
        }
        assert!(ring.shift(ring.one(), 1, 2).is_err());
        assert!(ring.base_ring().shift(ring.base_ring().one(), 1, 1).is_err());
    }

    #[test]
    fn test_invalid_exponent_vector() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        match ring.innermost_coefficient_at(&f, &[1]) {
            Err(PolyError::InvalidExponentVector { expected: 2, found: 1 }) => {},
            other => panic!("expected InvalidExponentVector, got {:?}", other)
        }
        assert!(ring.innermost_coefficient_at(&f, &[1, 4, 0]).is_err());
        assert!(ring.innermost_coefficient_at(&f, &[]).is_err());
    }

    #[test]
    fn test_shift_matches_multiplication() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        let x = ring.shift(ring.one(), 1, 0).unwrap();
        let y = ring.shift(ring.one(), 1, 1).unwrap();
        assert_el_eq!(&ring, &ring.mul_ref_snd(ring.pow(&x, 3), &f), &ring.shift(ring.clone_el(&f), 3, 0).unwrap());
        assert_el_eq!(&ring, &ring.mul_ref_snd(ring.pow(&y, 2), &f), &ring.shift(ring.clone_el(&f), 2, 1).unwrap());
    }

    #[test]
    fn test_shift_random_polys() {
        let mut rng = oorandom::Rand64::new(1);
        let ring = bivariate_ring();
        for _ in 0..10 {
            let f = random_poly(&ring, &mut rng);
            let power = (rng.rand_u64() % 4) as usize;
            let var = (rng.rand_u64() % 2) as usize;
            let shifted = ring.shift(ring.clone_el(&f), power, var).unwrap();
            for i in 0..8 {
                for j in 0..8 {
                    let mut ev = [i, j];
                    let expected = ring.innermost_coefficient_at(&f, &ev).unwrap();
                    ev[var] += power;
                    assert_eq!(expected, ring.innermost_coefficient_at(&shifted, &ev).unwrap());
                }
            }
        }
    }

    fn random_poly(ring: &Tower, rng: &mut oorandom::Rand64) -> El<Tower> {
        let inner = ring.base_ring();
        let mut result = ring.zero();
        for _ in 0..(rng.rand_u64() % 8) {
            let c = inner.from_terms([((rng.rand_u64() % 19) as i64 - 9, (rng.rand_u64() % 4) as usize)].into_iter());
            let term = ring.shift(ring.from_ref(&c), (rng.rand_u64() % 4) as usize, 1).unwrap();
            ring.add_assign(&mut result, term);
        }
        return result;
    }

    #[test]
    fn test_degree_vector_bounds_monomials() {
        let mut rng = oorandom::Rand64::new(2);
        let ring = bivariate_ring();
        for _ in 0..10 {
            let f = random_poly(&ring, &mut rng);
            let degrees = ring.degree_vector(&f);
            for v in 0..2 {
                assert_eq!(degrees[v], ring.degree_in(&f, v).unwrap());
            }
            if !ring.is_zero(&f) {
                // every bound is attained by some monomial
                for v in 0..2 {
                    let d = degrees[v].unwrap();
                    let attained = (0..10).any(|e| {
                        let ev = if v == 0 { [d, e] } else { [e, d] };
                        ring.innermost_coefficient_at(&f, &ev).unwrap() != 0
                    });
                    assert!(attained);
                }
            }
        }
    }

    #[test]
    fn test_cancellation_cascades_through_tower() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        let g = ring.negate(ring.clone_el(&f));
        let sum = ring.add(f, g);
        assert!(ring.is_zero(&sum));
        assert_eq!(None, ring.degree(&sum));
        assert_eq!(None, ring.total_degree(&sum));
    }

    #[test]
    fn test_format() {
        let ring = bivariate_ring();
        let f = example_poly(&ring);
        assert_eq!("7x^2y^3 + (5x + 11x^2)y^4", format!("{}", ring.format(&f)));
    }
}
