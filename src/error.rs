use thiserror::Error;

///
/// Errors reported by the polynomial rings in this crate.
///
/// Queries whose result is mathematically well-defined never fail; in
/// particular, the coefficient of a monomial that does not appear in a
/// polynomial is zero, not an error. Only genuinely invalid arguments -
/// a variable index outside `0..d`, or an exponent vector whose length
/// is not `d` - are rejected.
///
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// The given variable index does not refer to a variable of the ring.
    #[error("variable index {variable} is out of range for a polynomial ring in {variable_count} variables")]
    InvalidVariable {
        /// The offending variable index.
        variable: usize,
        /// The number of variables of the ring.
        variable_count: usize
    },
    /// The given exponent vector does not have one entry per variable.
    #[error("exponent vector has length {found}, expected {expected}")]
    InvalidExponentVector {
        /// The number of variables of the ring.
        expected: usize,
        /// The length of the given exponent vector.
        found: usize
    }
}
