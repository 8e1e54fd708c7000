use egui::Color32;
use egui::ecolor::Hsva;

/// Degrees of hue advanced per traversed sample.
const HUE_STEP_PER_SAMPLE: f64 = 10.0;
/// Milliseconds of wall clock per degree of hue.
const MS_PER_HUE_DEGREE: f64 = 10.0;

/// Stroke color for the sweep: hue cycles with wall-clock time and advances
/// with the sample counter, at full saturation and half lightness. Purely
/// cosmetic; geometry never depends on it.
pub fn sweep_color(now_ms: f64, counter: usize) -> Color32 {
    let degrees = now_ms / MS_PER_HUE_DEGREE + counter as f64 * HUE_STEP_PER_SAMPLE;
    let hue = (degrees.rem_euclid(360.0) / 360.0) as f32;
    // HSL at s = 100%, l = 50% is HSV with s = v = 1.
    Color32::from(Hsva::new(hue, 1.0, 1.0, 1.0))
}
