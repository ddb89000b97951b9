//! Longitudinal Helpers

/// Map a desired acceleration (m/s^2) to a combined gas/brake command.
/// Speed does not affect the mapping on these cars.
pub fn compute_gb(accel: f64, _speed: f64) -> f64 {
    accel / 3.0
}

/// Acceleration override factor; stock cruise owns longitudinal control
pub fn calc_accel_override(_a_ego: f64, _a_target: f64, _v_ego: f64, _v_target: f64) -> f64 {
    1.0
}
