use crate::animation::tween::Transition;

/// Start delays for `count` items revealed one after another: `base + i * step` seconds.
pub fn stagger(base_secs: f64, step_secs: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| base_secs + (i as f64) * step_secs).collect()
}

/// Copies of `transition`, each delayed by its stagger slot on top of its own delay.
pub fn staggered(
    transition: Transition,
    base_secs: f64,
    step_secs: f64,
    count: usize,
) -> Vec<Transition> {
    stagger(base_secs, step_secs, count)
        .into_iter()
        .map(|d| transition.delayed(transition.delay_secs + d))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
