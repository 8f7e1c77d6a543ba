use crate::ring::*;

pub mod dense_poly;

///
/// Trait for all rings that represent the polynomial ring `R[X]` with
/// any base ring R.
///
pub trait PolyRing: RingExtension {

    type TermsIterator<'a>: Iterator<Item = (&'a El<Self::BaseRing>, usize)>
        where Self: 'a;

    ///
    /// Returns the indeterminate `X` as a ring element.
    ///
    fn indeterminate(&self) -> Self::Element;

    ///
    /// Returns all terms of the given polynomial, i.e. all pairs of a nonzero
    /// coefficient and the corresponding exponent.
    ///
    fn terms<'a>(&'a self, f: &'a Self::Element) -> Self::TermsIterator<'a>;

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: Iterator<Item = (El<Self::BaseRing>, usize)>, Self: Sized
    {
        let self_ring = RingRef::new(self);
        self.add_assign(lhs, self_ring.sum(
            rhs.map(|(c, i)| self.mul(self.from(c), self_ring.pow(&self.indeterminate(), i)))
        ));
    }

    ///
    /// Returns the coefficient of `X^i` in the given polynomial. If `i` exceeds
    /// the degree, this returns zero (it is never an error).
    ///
    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing>;

    ///
    /// Returns the degree of the given polynomial, i.e. the highest exponent
    /// with nonzero coefficient, or `None` for the zero polynomial.
    ///
    fn degree(&self, f: &Self::Element) -> Option<usize>;
}

///
/// The [`RingStore`] corresponding to [`PolyRing`].
///
pub trait PolyRingStore: RingStore
    where Self::Type: PolyRing
{
    delegate!{ fn indeterminate(&self) -> El<Self> }
    delegate!{ fn degree(&self, f: &El<Self>) -> Option<usize> }

    fn coefficient_at<'a>(&'a self, f: &'a El<Self>, i: usize) -> &'a El<<Self::Type as RingExtension>::BaseRing> {
        self.get_ring().coefficient_at(f, i)
    }

    fn terms<'a>(&'a self, f: &'a El<Self>) -> <Self::Type as PolyRing>::TermsIterator<'a> {
        self.get_ring().terms(f)
    }

    ///
    /// Creates the polynomial from the given terms. The iterator may yield the
    /// same exponent multiple times, in which case the corresponding
    /// coefficients are summed up.
    ///
    fn from_terms<I>(&self, iter: I) -> El<Self>
        where I: Iterator<Item = (El<<Self::Type as RingExtension>::BaseRing>, usize)>,
    {
        let mut result = self.zero();
        self.get_ring().add_assign_from_terms(&mut result, iter);
        return result;
    }

    ///
    /// Returns the leading coefficient of the given polynomial, or `None`
    /// for the zero polynomial.
    ///
    fn lc<'a>(&'a self, f: &'a El<Self>) -> Option<&'a El<<Self::Type as RingExtension>::BaseRing>> {
        Some(self.coefficient_at(f, self.degree(f)?))
    }
}

impl<R: RingStore> PolyRingStore for R
    where R::Type: PolyRing
{}

pub mod generic_impls {
    use crate::ring::*;
    use super::PolyRing;

    pub fn dbg_poly<P: PolyRing>(ring: &P, el: &P::Element, out: &mut std::fmt::Formatter, unknown_name: &str, env: EnvBindingStrength) -> std::fmt::Result {
        let term_count = ring.terms(el).count();
        if term_count == 0 {
            return write!(out, "0");
        }
        let use_parens = env >= EnvBindingStrength::Product && term_count > 1;
        if use_parens {
            write!(out, "(")?;
        }
        let print_term = |c: &El<P::BaseRing>, i: usize, out: &mut std::fmt::Formatter| {
            let coefficient_env = if i == 0 { EnvBindingStrength::Sum } else { EnvBindingStrength::Product };
            ring.base_ring().get_ring().dbg_within(c, out, coefficient_env)?;
            if i == 1 {
                write!(out, "{}", unknown_name)
            } else if i > 1 {
                write!(out, "{}^{}", unknown_name, i)
            } else {
                Ok(())
            }
        };
        let mut terms = ring.terms(el);
        if let Some((c, i)) = terms.next() {
            print_term(c, i, out)?;
        }
        while let Some((c, i)) = terms.next() {
            write!(out, " + ")?;
            print_term(c, i, out)?;
        }
        if use_parens {
            write!(out, ")")?;
        }
        return Ok(());
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use crate::ring::*;
    use super::*;

    pub fn test_poly_ring_axioms<R: PolyRingStore, I: Iterator<Item = El<<R::Type as RingExtension>::BaseRing>>>(ring: R, interesting_base_ring_elements: I)
        where R::Type: PolyRing
    {
        let x = ring.indeterminate();
        let elements = interesting_base_ring_elements.collect::<Vec<_>>();
        let base_ring = ring.base_ring();

        // test linear independence of X
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                        let c_dx = ring.add(ring.from_ref(c), ring.mul_ref_snd(ring.from_ref(d), &x));
                        assert!(ring.eq_el(&a_bx, &c_dx) == (base_ring.eq_el(a, c) && base_ring.eq_el(b, d)));
                    }
                }
            }
        }

        // elementwise addition follows trivially from the ring axioms

        // technically, convoluted multiplication follows from the ring axioms too, but test it anyway
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                        let c_dx = ring.add(ring.from_ref(c), ring.mul_ref_snd(ring.from_ref(d), &x));
                        let result = ring.sum([
                            ring.mul(ring.from_ref(a), ring.from_ref(c)),
                            ring.mul(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(d), &x)),
                            ring.mul(ring.from_ref(b), ring.mul_ref_snd(ring.from_ref(c), &x)),
                            ring.mul(ring.from_ref(b), ring.mul(ring.from_ref(d), ring.pow(&x, 2)))
                        ].into_iter());
                        assert_el_eq!(&ring, &result, &ring.mul(a_bx, c_dx));
                    }
                }
            }
        }

        // test degree() and lc()
        for a in &elements {
            for b in &elements {
                let f = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                match ring.degree(&f) {
                    Some(d) => {
                        assert!(!base_ring.is_zero(ring.coefficient_at(&f, d)));
                        assert!(base_ring.eq_el(ring.lc(&f).unwrap(), ring.coefficient_at(&f, d)));
                    },
                    None => {
                        assert!(ring.is_zero(&f));
                        assert!(base_ring.is_zero(a) && base_ring.is_zero(b));
                    }
                }
            }
        }

        // test terms(), from_terms()
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = ring.sum([
                        ring.from_ref(a),
                        ring.mul_ref_snd(ring.from_ref(b), &x),
                        ring.mul(ring.from_ref(c), ring.pow(&x, 3))
                    ].into_iter());
                    let actual = ring.from_terms([(base_ring.clone_el(a), 0), (base_ring.clone_el(c), 3), (base_ring.clone_el(b), 1)].into_iter());
                    assert_el_eq!(&ring, &f, &actual);
                    assert_el_eq!(&ring, &f, &ring.from_terms(ring.terms(&f).map(|(c, i)| (base_ring.clone_el(c), i))));
                }
            }
        }
    }
}
