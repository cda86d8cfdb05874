/// Numeric conversion helpers.
///
/// Integer operands meet float operands in mixed arithmetic and comparisons;
/// the conversion used there refuses to round silently.
pub mod num;
