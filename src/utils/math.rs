/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Hermite ease `3t² − 2t³` on a clamped fraction.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sign that is zero at zero, unlike `f64::signum`.
#[inline]
pub fn sign_or_zero(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is ~0.
#[inline]
pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator.abs() <= f64::EPSILON {
        fallback
    } else {
        numerator / denominator
    }
}

/// Moves `current` toward `target` by at most `max_step`.
#[inline]
pub fn approach(current: f64, target: f64, max_step: f64) -> f64 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step * delta.signum()
    }
}

/// Euclidean remainder normalised into `[0, 1)`.
#[inline]
pub fn wrap_unit(value: f64, period: f64) -> f64 {
    if period <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(period) / period;
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
