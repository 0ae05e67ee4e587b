/// Relative slack used when deciding whether the increment divides the sampled length evenly
const STEP_TOL: f64 = 1e-9;

/// Generates the chordwise station positions covering the closed interval [0, calculate_to] in
/// steps of `increment`. Each regular station is computed as `i * increment` rather than by
/// accumulation. The last station is always exactly `calculate_to`; when the increment does not
/// divide the interval evenly the final step is shorter than the others.
///
/// Both arguments are expected to be positive and finite, with a bounded ratio between them. This
/// is checked during validation.
pub fn station_positions(calculate_to: f64, increment: f64) -> Vec<f64> {
    let steps = calculate_to / increment;
    let rounded = steps.round();
    let count = if (steps - rounded).abs() <= STEP_TOL * rounded.max(1.0) {
        rounded as usize
    } else {
        steps.ceil() as usize
    }
    .max(1);

    let mut positions: Vec<f64> = (0..count).map(|i| i as f64 * increment).collect();
    positions.push(calculate_to);
    positions
}
