/// Numeric conversion helpers.
///
/// Exact conversions between `f64` and integers for result display, and
/// strict parsing of digit-run literals.
pub mod num;
