/// Numeric conversion helpers.
///
/// The evaluator works on `f64` throughout, but shifts and bitwise operators
/// are defined on integers. These helpers convert between the two totally
/// (saturating, never failing) and implement the integer and remainder
/// operations whose edge cases need pinning down.
pub mod num;
