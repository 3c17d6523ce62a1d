//! Evenly spaced perceptual colors for entity clusters.

use std::collections::HashMap;

/// Generate one color per label: hues evenly spaced over the full circle at
/// the given saturation and lightness, converted to hex through the HPLuv
/// color space so perceived lightness stays uniform across the palette.
///
/// Which label receives which hue follows iteration order. The pairing is
/// stable within one invocation; callers must not rely on more than that.
pub fn hpluv_color_map<I>(labels: I, saturation: f64, lightness: f64) -> HashMap<String, String>
where
    I: IntoIterator<Item = String>,
{
    let labels: Vec<String> = labels.into_iter().collect();
    let n = labels.len();
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let hue = 360.0 * (i as f64 / n as f64);
            (label, hsluv::hpluv_to_hex((hue, saturation, lightness)))
        })
        .collect()
}
