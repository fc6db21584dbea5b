//! Cuckoo-hashing failure probability vs. expansion factor.
//!
//! The curve is a decaying exponential, `y = c * exp(-k * (x - low))`, sampled
//! on a uniform grid. It approximates the trend only; nothing is simulated.

use crate::error::AppError;

/// Parameters of the synthetic failure curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Smallest expansion factor (x at which `y == base`).
    pub low: f64,
    pub high: f64,
    pub samples: usize,
    /// Decay rate `k`.
    pub decay: f64,
    /// Base coefficient `c`.
    pub base: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            low: 1.05,
            high: 1.20,
            samples: 7,
            decay: 50.0,
            base: 1e-2,
        }
    }
}

/// Generate `samples` evenly spaced points of the failure curve.
pub fn failure_curve(params: &CurveParams) -> Result<Vec<(f64, f64)>, AppError> {
    let CurveParams {
        low,
        high,
        samples,
        decay,
        base,
    } = *params;

    if !(low.is_finite() && high.is_finite() && decay.is_finite() && base.is_finite()) {
        return Err(AppError::InvalidCurve(format!(
            "parameters must be finite (low={low}, high={high}, decay={decay}, base={base})."
        )));
    }
    if high < low {
        return Err(AppError::InvalidCurve(format!(
            "domain is empty: high={high} < low={low}."
        )));
    }

    let xs = linspace(low, high, samples);
    Ok(xs
        .into_iter()
        .map(|x| (x, base * (-decay * (x - low)).exp()))
        .collect())
}

/// `n` points from `start` to `stop` inclusive; the last point is exactly `stop`.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}
