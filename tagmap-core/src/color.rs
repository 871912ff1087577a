use tagmap_entities::{color::Rgb, tag::TagCount};

/// Exponent of the ease-in curve applied before blending.
///
/// Values below 1 pull small ratios towards the upper color.
pub const EASING_EXPONENT: f64 = 0.6;

/// Blend two colors depending on a ratio between 0 (`low`) and 1 (`high`).
///
/// The ratio is clamped to `[0, 1]`, a `NaN` ratio counts as 0.
pub fn interpolate(ratio: f64, low: Rgb, high: Rgb) -> Rgb {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    let eased = ratio.powf(EASING_EXPONENT);
    let blend = |l: u8, h: u8| {
        let l = f64::from(l);
        let h = f64::from(h);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (l + (h - l) * eased).round().clamp(0.0, 255.0) as u8;
        v
    };
    Rgb::new(
        blend(low.r, high.r),
        blend(low.g, high.g),
        blend(low.b, high.b),
    )
}

/// Normalize a count by the corresponding maximum.
///
/// A missing or zero maximum yields a ratio of 0.
pub fn ratio(count: TagCount, max: Option<TagCount>) -> f64 {
    match max {
        Some(max) if max > 0 => {
            #[allow(clippy::cast_precision_loss)]
            let r = count as f64 / max as f64;
            r
        }
        _ => 0.0,
    }
}
