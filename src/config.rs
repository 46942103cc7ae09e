/// Tolerance used by the `almost_eq` comparison helpers and by tests that
/// verify floating point properties. Exact equality (`==`) never uses it.
pub const EPSILON: f32 = 1e-5;
