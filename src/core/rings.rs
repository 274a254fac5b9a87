use serde::{Deserialize, Serialize};

/// One concentric calibration ring, centered on the chart origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingStep {
    /// Fractional position of the ring, `i / scales` in `(0, 1]`.
    pub value: f64,
    pub radius: f64,
}

/// Computes `scales` calibration rings from the outermost inward.
///
/// Descending radius order is a layering contract: later rings draw on top,
/// so inner rings must come last or they would be occluded.
#[must_use]
pub fn ring_steps(scales: u32, chart_size: f64) -> Vec<RingStep> {
    let mut rings = Vec::with_capacity(scales as usize);
    for i in (1..=scales).rev() {
        let value = f64::from(i) / f64::from(scales);
        rings.push(RingStep {
            value,
            radius: value * chart_size / 2.0,
        });
    }
    rings
}
