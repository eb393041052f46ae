/// Arbitrary-width unsigned entries rendered as binary digit strings.
pub mod binary;
/// Row-by-row construction of the triangle.
pub mod generate;
