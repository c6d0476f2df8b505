/// Numeric conversion and formatting helpers.
///
/// This module holds the conversions between the `f64` values that arithmetic
/// produces and the `i64` values stored in integer variables, and the
/// formatting used when printing floating variables.
pub mod num;
