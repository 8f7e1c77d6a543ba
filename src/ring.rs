use std::rc::Rc;

///
/// Basic trait for objects that have a ring structure.
///
/// Implementors of this trait should provide the basic ring operations,
/// and additionally operators for displaying and equality testing. If
/// a performance advantage can be achieved by accepting some arguments by
/// reference instead of by value, the default-implemented functions for
/// ring operations on references should be overwritten.
///
/// Note that usually, this trait will not be used directly, but always
/// through a [`RingStore`]. In more detail, while this trait
/// defines the functionality, [`RingStore`] allows abstracting
/// the storage - everything that allows access to a ring then is a
/// [`RingStore`]. For example, references or shared pointers
/// to rings. If you want to use rings directly by value, some technical
/// details make it necessary to use the no-op container [`RingValue`].
///
pub trait RingBase {

    type Element;

    fn clone_el(&self, val: &Self::Element) -> Self::Element;
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.add_assign(lhs, self.clone_el(rhs)) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.sub_assign(lhs, self.clone_el(rhs)) }
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.mul_assign(lhs, self.clone_el(rhs)) }
    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn from_int(&self, value: i32) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }
    fn is_neg_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.neg_one()) }
    fn is_commutative(&self) -> bool;
    fn is_noetherian(&self) -> bool;
    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;

    ///
    /// Writes the given element like [`RingBase::dbg()`], but parenthesized as necessary
    /// for the environment the output is embedded in. For example, a sum of two terms
    /// must be wrapped in parentheses when it appears as a factor of a product.
    ///
    fn dbg_within<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>, _env: EnvBindingStrength) -> std::fmt::Result {
        self.dbg(value, out)
    }

    fn square(&self, value: &mut Self::Element) {
        let copy = self.clone_el(value);
        self.mul_assign(value, copy);
    }

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn add_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut rhs, lhs);
        self.negate_inplace(&mut rhs);
        return rhs;
    }

    fn sub_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        if self.is_commutative() {
            self.mul_assign_ref(&mut rhs, lhs);
            return rhs;
        } else {
            let mut result = self.clone_el(lhs);
            self.mul_assign(&mut result, rhs);
            return result;
        }
    }

    fn mul_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.mul_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }
}

///
/// The precedence of the textual environment that a ring element is rendered
/// into by [`RingBase::dbg_within()`]. Environments bind stronger the further
/// down the list they appear; an expression must be parenthesized whenever its
/// outermost operator binds weaker than the environment.
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum EnvBindingStrength {
    Weakest,
    Sum,
    Product,
    Power,
    Strongest
}

macro_rules! delegate {
    (fn $name:ident (&self, $($pname:ident: $ptype:ty),*) -> $rtype:ty) => {
        fn $name (&self, $($pname: $ptype),*) -> $rtype {
            self.get_ring().$name($($pname),*)
        }
    };
    (fn $name:ident (&self) -> $rtype:ty) => {
        fn $name (&self) -> $rtype {
            self.get_ring().$name()
        }
    };
}

///
/// Asserts that two elements of the given ring are equal, printing both via
/// the ring's formatting on failure.
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match ($ring, $lhs, $rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    $crate::ring::RingStore::eq_el(ring_val, lhs_val, rhs_val),
                    "Assertion failed: {} != {}",
                    $crate::ring::RingStore::format(ring_val, lhs_val),
                    $crate::ring::RingStore::format(ring_val, rhs_val)
                );
            }
        }
    };
}

///
/// Basic trait for objects that store (in some sense) a ring. This can
/// be a ring-by-value, a reference to a ring, or a box to a ring. Note
/// that this trait is also designed to allow chaining, with the exception
/// of [`RingValue`].
///
/// As opposed to [`RingBase`], which is responsible for the
/// functionality and ring operations, this trait is solely responsible for
/// the storage. Note however, that storage can be quite difficult once we
/// build rings onto other rings and so on.
///
pub trait RingStore {

    type Type: RingBase;

    fn get_ring<'a>(&'a self) -> &'a Self::Type;

    delegate!{ fn clone_el(&self, val: &El<Self>) -> El<Self> }
    delegate!{ fn add_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn add_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn sub_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn negate_inplace(&self, lhs: &mut El<Self>) -> () }
    delegate!{ fn mul_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn mul_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn zero(&self) -> El<Self> }
    delegate!{ fn one(&self) -> El<Self> }
    delegate!{ fn neg_one(&self) -> El<Self> }
    delegate!{ fn from_int(&self, value: i32) -> El<Self> }
    delegate!{ fn eq_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_zero(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_neg_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_commutative(&self) -> bool }
    delegate!{ fn is_noetherian(&self) -> bool }
    delegate!{ fn negate(&self, value: El<Self>) -> El<Self> }
    delegate!{ fn sub_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn square(&self, value: &mut El<Self>) -> () }
    delegate!{ fn add_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn add_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }

    fn sum<I>(&self, els: I) -> El<Self>
        where I: Iterator<Item = El<Self>>
    {
        els.fold(self.zero(), |a, b| self.add(a, b))
    }

    fn prod<I>(&self, els: I) -> El<Self>
        where I: Iterator<Item = El<Self>>
    {
        els.fold(self.one(), |a, b| self.mul(a, b))
    }

    fn base_ring<'a>(&'a self) -> &'a <Self::Type as RingExtension>::BaseRing
        where Self::Type: RingExtension
    {
        self.get_ring().base_ring()
    }

    fn from(&self, x: El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from(x)
    }

    fn from_ref(&self, x: &El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from_ref(x)
    }

    fn mul_assign_base(&self, lhs: &mut El<Self>, rhs: &El<<Self::Type as RingExtension>::BaseRing>)
        where Self::Type: RingExtension
    {
        self.get_ring().mul_assign_base(lhs, rhs)
    }

    ///
    /// Raises `x` to the given power, using binary square-and-multiply.
    ///
    fn pow(&self, x: &El<Self>, power: usize) -> El<Self> {
        if power == 0 {
            return self.one();
        }
        let highest_bit = usize::BITS - power.leading_zeros() - 1;
        let mut result = self.clone_el(x);
        for i in (0..highest_bit).rev() {
            self.square(&mut result);
            if power & (1 << i) != 0 {
                self.mul_assign_ref(&mut result, x);
            }
        }
        return result;
    }

    fn format<'a>(&'a self, value: &'a El<Self>) -> RingElementDisplayWrapper<'a, Self> {
        RingElementDisplayWrapper { ring: self, element: value }
    }

    fn println(&self, value: &El<Self>) {
        println!("{}", self.format(value));
    }
}

pub struct RingElementDisplayWrapper<'a, R: RingStore + ?Sized> {
    ring: &'a R,
    element: &'a El<R>
}

impl<'a, R: RingStore + ?Sized> std::fmt::Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

///
/// Trait for rings that are an extension of a base ring, i.e. come with a
/// canonical inclusion of the base ring.
///
pub trait RingExtension: RingBase {

    type BaseRing: RingStore;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing;
    fn from(&self, x: El<Self::BaseRing>) -> Self::Element;

    fn from_ref(&self, x: &El<Self::BaseRing>) -> Self::Element {
        self.from(self.base_ring().clone_el(x))
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        self.mul_assign(lhs, self.from_ref(rhs));
    }
}

pub type El<R> = <<R as RingStore>::Type as RingBase>::Element;

///
/// The most fundamental [`RingStore`]. It is basically
/// a no-op container, i.e. stores a [`RingBase`] object
/// by value, and allows accessing it.
///
/// # Why is this necessary?
///
/// In fact, that we need this trait is just the result of a technical
/// detail. We cannot implement
/// ```ignore
/// impl<R: RingBase> RingStore for R {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// since this might cause conflicting implementations.
/// Instead, we implement
/// ```ignore
/// impl<R: RingBase> RingStore for RingValue<R> {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// This causes some inconvenience, as now we cannot chain
/// [`RingStore`] in the case of [`RingValue`].
/// Furthermore, this trait will be necessary everywhere -
/// to define a reference to a ring of type `A`, we now have to
/// write `&RingValue<A>`.
///
/// To simplify this, we propose to use the following simple pattern:
/// Create your ring type as
/// ```ignore
/// struct ABase { ... }
/// impl RingBase for ABase { ... }
/// ```
/// and then provide a type alias
/// ```ignore
/// type A = RingValue<ABase>;
/// ```
///
#[derive(Copy, Clone)]
pub struct RingValue<R: RingBase> {
    ring: R
}

impl<R: RingBase> RingValue<R> {

    pub const fn from(value: R) -> Self {
        RingValue { ring: value }
    }
}

impl<R: RingBase> RingStore for RingValue<R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        &self.ring
    }
}

///
/// The second most basic [`RingStore`]. Similarly to
/// [`RingValue`] it is just a no-op container.
///
/// # Why do we need this in addition to [`RingValue`]?
///
/// The role of `RingRef` is much more niche than the role of [`RingValue`].
/// However, it might happen that we want to implement [`RingBase`]-functions,
/// and use more high-level functionality for that. In this case, we only have
/// a reference to a [`RingBase`] object, but require a [`RingStore`] object
/// to use the functionality.
///
pub struct RingRef<'a, R: RingBase> {
    ring: &'a R
}

impl<'a, R: RingBase> Clone for RingRef<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: RingBase> Copy for RingRef<'a, R> {}

impl<'a, R: RingBase> RingRef<'a, R> {

    pub const fn new(value: &'a R) -> Self {
        RingRef { ring: value }
    }
}

impl<'a, R: RingBase> RingStore for RingRef<'a, R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        self.ring
    }
}

impl<'a, R: RingStore> RingStore for &'a R {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<'a, R: RingStore> RingStore for &'a mut R {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<R: RingStore> RingStore for Box<R> {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<R: RingStore> RingStore for Rc<R> {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<R: RingStore> RingStore for std::sync::Arc<R> {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_ring_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        // check self-subtraction
        for a in &elements {
            assert!(ring.eq_el(&zero, &ring.sub(ring.clone_el(a), ring.clone_el(a))));
        }

        // check identity elements
        for a in &elements {
            assert!(ring.eq_el(a, &ring.add(ring.clone_el(a), ring.clone_el(&zero))));
            assert!(ring.eq_el(a, &ring.mul(ring.clone_el(a), ring.clone_el(&one))));
        }

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert!(ring.eq_el(
                    &ring.add(ring.clone_el(a), ring.clone_el(b)),
                    &ring.add(ring.clone_el(b), ring.clone_el(a))
                ));

                if ring.is_commutative() {
                    assert!(ring.eq_el(
                        &ring.mul(ring.clone_el(a), ring.clone_el(b)),
                        &ring.mul(ring.clone_el(b), ring.clone_el(a))
                    ));
                }
            }
        }

        // check associativity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert!(ring.eq_el(
                        &ring.add(ring.clone_el(a), ring.add(ring.clone_el(b), ring.clone_el(c))),
                        &ring.add(ring.add(ring.clone_el(a), ring.clone_el(b)), ring.clone_el(c))
                    ));
                    assert!(ring.eq_el(
                        &ring.mul(ring.clone_el(a), ring.mul(ring.clone_el(b), ring.clone_el(c))),
                        &ring.mul(ring.mul(ring.clone_el(a), ring.clone_el(b)), ring.clone_el(c))
                    ));
                }
            }
        }

        // check distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert!(ring.eq_el(
                        &ring.mul(ring.clone_el(a), ring.add(ring.clone_el(b), ring.clone_el(c))),
                        &ring.add(ring.mul(ring.clone_el(a), ring.clone_el(b)), ring.mul(ring.clone_el(a), ring.clone_el(c)))
                    ));
                    assert!(ring.eq_el(
                        &ring.mul(ring.add(ring.clone_el(a), ring.clone_el(b)), ring.clone_el(c)),
                        &ring.add(ring.mul(ring.clone_el(a), ring.clone_el(c)), ring.mul(ring.clone_el(b), ring.clone_el(c)))
                    ));
                }
            }
        }

        // check powering
        for a in &elements {
            assert!(ring.eq_el(&one, &ring.pow(a, 0)));
            assert!(ring.eq_el(a, &ring.pow(a, 1)));
            assert!(ring.eq_el(
                &ring.mul(ring.clone_el(a), ring.mul(ring.clone_el(a), ring.clone_el(a))),
                &ring.pow(a, 3)
            ));
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::primitive_int::StaticRing;

    #[test]
    fn test_ring_axioms_i64() {
        generic_tests::test_ring_axioms(StaticRing::<i64>::RING, [-2, -1, 0, 1, 2, 3, 7].into_iter());
    }

    #[test]
    fn test_pow() {
        let ring = StaticRing::<i64>::RING;
        assert_eq!(1, ring.pow(&3, 0));
        assert_eq!(3, ring.pow(&3, 1));
        assert_eq!(81, ring.pow(&3, 4));
        assert_eq!(1024, ring.pow(&2, 10));
    }

    #[test]
    fn test_stores_of_stores() {
        let ring = StaticRing::<i64>::RING;
        assert!((&ring).eq_el(&(&&ring).add(4, 5), &Rc::new(ring).from_int(9)));
    }
}
