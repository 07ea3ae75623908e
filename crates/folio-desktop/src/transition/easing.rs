//! Easing functions for animations

/// Overshoot amount for [`ease_out_back`]
const BACK_OVERSHOOT: f32 = 1.70158;

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-out with a slight overshoot past 1.0 before settling
///
/// Gives windows a springy "pop" when they finish expanding.
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    let c3 = BACK_OVERSHOOT + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
}
