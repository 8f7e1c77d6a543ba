use std::fmt::Display;
use std::marker::PhantomData;
use std::ops::{AddAssign, SubAssign, MulAssign, Neg};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer, Deserializer};

use crate::ring::*;
use crate::serialization::SerializableElementRing;

///
/// Trait for the fixed-size signed integer types provided by the language.
///
pub trait PrimitiveInt: AddAssign + SubAssign + MulAssign + Neg<Output = Self> + Eq + From<i8> + TryFrom<i32> + Into<i128> + Copy + Display {}

impl PrimitiveInt for i8 {}

impl PrimitiveInt for i16 {}

impl PrimitiveInt for i32 {}

impl PrimitiveInt for i64 {}

impl PrimitiveInt for i128 {}

///
/// The ring of integers, with arithmetic performed on a fixed-size
/// primitive integer type `T`. Overflow behavior is that of `T` itself.
///
/// Use as `StaticRing::<i64>::RING`.
///
pub struct StaticRingBase<T> {
    element: PhantomData<T>
}

impl<T> PartialEq for StaticRingBase<T> {

    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: PrimitiveInt> RingValue<StaticRingBase<T>> {
    pub const RING: StaticRing<T> = RingValue::from(StaticRingBase { element: PhantomData });
}

impl<T> Copy for StaticRingBase<T> {}

impl<T> Clone for StaticRingBase<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PrimitiveInt> RingBase for StaticRingBase<T> {

    type Element = T;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        *lhs = -*lhs;
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn from_int(&self, value: i32) -> Self::Element { T::try_from(value).map_err(|_| ()).unwrap() }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_commutative(&self) -> bool { true }
    fn is_noetherian(&self) -> bool { true }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }

    fn dbg_within<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>, env: EnvBindingStrength) -> std::fmt::Result {
        if env >= EnvBindingStrength::Product && (*value).into() < 0 {
            write!(out, "({})", *value)
        } else {
            write!(out, "{}", *value)
        }
    }
}

impl<T: PrimitiveInt + Serialize + DeserializeOwned> SerializableElementRing for StaticRingBase<T> {

    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        el.serialize(serializer)
    }

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        T::deserialize(deserializer)
    }
}

pub type StaticRing<T> = RingValue<StaticRingBase<T>>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ring_axioms() {
        crate::ring::generic_tests::test_ring_axioms(StaticRing::<i32>::RING, [-8, -3, -1, 0, 1, 2, 5].into_iter());
        crate::ring::generic_tests::test_ring_axioms(StaticRing::<i128>::RING, [-8, -3, -1, 0, 1, 2, 5].into_iter());
    }

    #[test]
    fn test_from_int() {
        let ring = StaticRing::<i64>::RING;
        assert_eq!(0, ring.zero());
        assert_eq!(1, ring.one());
        assert_eq!(-1, ring.neg_one());
        assert_eq!(42, ring.from_int(42));
    }

    #[test]
    fn test_dbg_within_negative() {
        let ring = StaticRing::<i64>::RING;
        assert_eq!("-5", format!("{}", ring.format(&-5)));
    }
}
