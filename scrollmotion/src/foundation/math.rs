/// Spans at or below this width are treated as a single point (step).
pub(crate) const SPAN_EPSILON: f64 = 1e-9;

/// `a + (b - a) * t`, kept inside `[min(a, b), max(a, b)]`.
///
/// Floating point rounding can push the raw blend one ulp past an endpoint; the bound keeps
/// sampled values within the range of their keyframes.
pub(crate) fn bounded_lerp(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    let v = a + (b - a) * t;
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Position of `v` between `a` and `b` as a fraction clamped to `[0, 1]`.
///
/// Degenerate spans behave as a step at `a`.
pub(crate) fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span.abs() <= SPAN_EPSILON {
        return if v >= a { 1.0 } else { 0.0 };
    }
    let t = (v - a) / span;
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Length of the overlap between `[a0, a1]` and `[b0, b1]`.
pub(crate) fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
