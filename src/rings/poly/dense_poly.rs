use serde::{Deserializer, Serializer};

use crate::ring::*;
use crate::rings::poly::*;
use crate::serialization::*;

use std::cmp::min;

///
/// The univariate polynomial ring `R[X]`. Polynomials are stored as dense
/// vectors of coefficients, in normalized form: the coefficient vector always
/// has length `degree + 1` with a nonzero top coefficient, and the zero
/// polynomial is the empty vector. Every operation re-normalizes its result,
/// so two elements are equal if and only if their coefficient vectors are
/// structurally equal.
///
/// Nesting this ring gives multivariate polynomial rings, see
/// [`crate::rings::multivariate::MultivariatePolyRing`].
///
/// # Example
/// ```
/// # use poly_tower::ring::*;
/// # use poly_tower::rings::poly::*;
/// # use poly_tower::rings::poly::dense_poly::*;
/// # use poly_tower::primitive_int::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let P = DensePolyRing::new(ZZ, "X");
/// let x_plus_1 = P.add(P.indeterminate(), P.from_int(1));
/// let binomial_coefficients = P.pow(&x_plus_1, 10);
/// assert_eq!(10 * 9 * 8 * 7 * 6 / 120, *P.coefficient_at(&binomial_coefficients, 5));
/// ```
///
pub struct DensePolyRingBase<R: RingStore> {
    base_ring: R,
    unknown_name: &'static str,
    zero: El<R>
}

impl<R: RingStore + Clone> Clone for DensePolyRingBase<R> {

    fn clone(&self) -> Self {
        DensePolyRingBase {
            base_ring: self.base_ring.clone(),
            unknown_name: self.unknown_name,
            zero: self.base_ring.zero()
        }
    }
}

///
/// The univariate polynomial ring `R[X]`, with polynomials being stored as
/// normalized dense vectors of coefficients. For details, see
/// [`DensePolyRingBase`].
///
pub type DensePolyRing<R> = RingValue<DensePolyRingBase<R>>;

impl<R: RingStore> DensePolyRing<R> {

    pub fn new(base_ring: R, unknown_name: &'static str) -> Self {
        let zero = base_ring.zero();
        RingValue::from(DensePolyRingBase {
            base_ring,
            unknown_name,
            zero
        })
    }
}

impl<R: RingStore> DensePolyRingBase<R> {

    ///
    /// Removes trailing zero coefficients until the top coefficient is nonzero,
    /// or the vector is empty (representing the zero polynomial). Repeated
    /// scanning is necessary since cancellation during addition may expose
    /// further trailing zeros.
    ///
    fn normalize(&self, el: &mut DensePolyRingEl<R>) {
        while el.data.last().map_or(false, |c| self.base_ring.is_zero(c)) {
            el.data.pop();
        }
    }

    fn grow(&self, vector: &mut Vec<El<R>>, size: usize) {
        if vector.len() < size {
            vector.resize_with(size, || self.base_ring.zero());
        }
    }
}

///
/// An element of [`DensePolyRing`].
///
pub struct DensePolyRingEl<R: RingStore> {
    data: Vec<El<R>>
}

impl<R: RingStore> RingBase for DensePolyRingBase<R> {

    type Element = DensePolyRingEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        DensePolyRingEl {
            data: val.data.iter().map(|c| self.base_ring.clone_el(c)).collect()
        }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.grow(&mut lhs.data, rhs.data.len());
        for i in 0..rhs.data.len() {
            self.base_ring.add_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        self.normalize(lhs);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.grow(&mut lhs.data, rhs.data.len());
        for (i, x) in rhs.data.into_iter().enumerate() {
            self.base_ring.add_assign(&mut lhs.data[i], x);
        }
        self.normalize(lhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.grow(&mut lhs.data, rhs.data.len());
        for i in 0..rhs.data.len() {
            self.base_ring.sub_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        self.normalize(lhs);
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for i in 0..lhs.data.len() {
            self.base_ring.negate_inplace(&mut lhs.data[i]);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.mul_ref(lhs, rhs);
    }

    fn zero(&self) -> Self::Element {
        DensePolyRingEl {
            data: Vec::new()
        }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        let mut result = DensePolyRingEl {
            data: vec![ self.base_ring.get_ring().from_int(value) ]
        };
        self.normalize(&mut result);
        return result;
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            if !self.base_ring.eq_el(&lhs.data[i], &rhs.data[i]) {
                return false;
            }
        }
        let longer = if lhs.data.len() > rhs.data.len() { lhs } else { rhs };
        for i in min(lhs.data.len(), rhs.data.len())..longer.data.len() {
            if !self.base_ring.is_zero(&longer.data[i]) {
                return false;
            }
        }
        return true;
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.data.is_empty()
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_noetherian(&self) -> bool {
        // by Hilbert's basis theorem
        self.base_ring.is_noetherian()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        self.dbg_within(value, out, EnvBindingStrength::Weakest)
    }

    fn dbg_within<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>, env: EnvBindingStrength) -> std::fmt::Result {
        generic_impls::dbg_poly(self, value, out, self.unknown_name, env)
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        if lhs.data.is_empty() || rhs.data.is_empty() {
            return self.zero();
        }
        let mut data = Vec::new();
        data.resize_with(lhs.data.len() + rhs.data.len() - 1, || self.base_ring.zero());
        for i in 0..lhs.data.len() {
            for j in 0..rhs.data.len() {
                self.base_ring.add_assign(&mut data[i + j], self.base_ring.mul_ref(&lhs.data[i], &rhs.data[j]));
            }
        }
        let mut result = DensePolyRingEl { data };
        self.normalize(&mut result);
        return result;
    }
}

impl<R> PartialEq for DensePolyRingBase<R>
    where R: RingStore, R::Type: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring()
    }
}

impl<R: RingStore> RingExtension for DensePolyRingBase<R> {

    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        let mut result = DensePolyRingEl { data: vec![ x ] };
        self.normalize(&mut result);
        return result;
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        for i in 0..lhs.data.len() {
            self.base_ring.mul_assign_ref(&mut lhs.data[i], rhs);
        }
        self.normalize(lhs);
    }
}

///
/// Iterator over all terms of an element of [`DensePolyRing`].
///
pub struct TermIterator<'a, R>
    where R: RingStore
{
    iter: std::iter::Enumerate<std::slice::Iter<'a, El<R>>>,
    ring: &'a R
}

impl<'a, R> Clone for TermIterator<'a, R>
    where R: RingStore
{
    fn clone(&self) -> Self {
        TermIterator {
            iter: self.iter.clone(),
            ring: self.ring
        }
    }
}

impl<'a, R> Iterator for TermIterator<'a, R>
    where R: RingStore
{
    type Item = (&'a El<R>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, c)) = self.iter.next() {
            if !self.ring.is_zero(c) {
                return Some((c, i));
            }
        }
        return None;
    }
}

impl<R> PolyRing for DensePolyRingBase<R>
    where R: RingStore
{
    type TermsIterator<'a> = TermIterator<'a, R>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element {
        DensePolyRingEl {
            data: vec![ self.base_ring.zero(), self.base_ring.one() ]
        }
    }

    fn terms<'a>(&'a self, f: &'a Self::Element) -> TermIterator<'a, R> {
        TermIterator {
            iter: f.data.iter().enumerate(),
            ring: self.base_ring()
        }
    }

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: Iterator<Item = (El<Self::BaseRing>, usize)>
    {
        for (c, i) in rhs {
            self.grow(&mut lhs.data, i + 1);
            self.base_ring.add_assign(&mut lhs.data[i], c);
        }
        self.normalize(lhs);
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing> {
        if i < f.data.len() {
            return &f.data[i];
        } else {
            return &self.zero;
        }
    }

    fn degree(&self, f: &Self::Element) -> Option<usize> {
        f.data.len().checked_sub(1)
    }
}

impl<R> SerializableElementRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: SerializableElementRing
{
    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serialize_seq_helper(serializer, el.data.iter().map(|c| SerializeWithRing::new(c, &self.base_ring)))
    }

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let mut data = Vec::new();
        deserialize_seq_helper(deserializer, |c| data.push(c), DeserializeWithRing::new(&self.base_ring))?;
        let mut result = DensePolyRingEl { data };
        self.normalize(&mut result);
        return Ok(result);
    }
}
