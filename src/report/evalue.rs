//! Expect value formatting for exported rows.

/// Significant digits kept when writing an expect value
pub const EXPECT_DIGITS: usize = 12;

/// Expect value in scientific notation at full precision (`1e-200`,
/// `2.345678e-10`).
///
/// The value is rounded to [`EXPECT_DIGITS`] significant digits first, which
/// drops the noise left by the exponent to probability conversion, and is
/// then written in its shortest form. A nonzero expect never collapses to
/// zero.
pub fn format_expect(expect: f64) -> String {
    if expect == 0.0 || !expect.is_finite() {
        return expect.to_string();
    }
    let rounded: f64 = format!("{:.*e}", EXPECT_DIGITS - 1, expect)
        .parse()
        .unwrap_or(expect);
    format!("{:e}", rounded)
}
