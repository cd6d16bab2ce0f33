pub mod csv;
pub mod serde;

/// Tolerance for scores computed along different floating point paths.
pub const SCORE_TOLERANCE: f64 = 1e-9;

#[track_caller]
pub fn assert_are_close(a: f64, b: f64) {
    assert!(
        (a - b).abs() <= SCORE_TOLERANCE * a.abs().max(b.abs()).max(1.0),
        "{} and {} are not close",
        a,
        b
    );
}
