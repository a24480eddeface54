use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Hue of the first series; later series are spread evenly around the wheel.
const BASE_HUE: f32 = 215.0;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` visually distinct colours as 8-bit RGB triples.
pub fn palette_rgb(n: usize) -> Vec<(u8, u8, u8)> {
    (0..n)
        .map(|i| {
            let hue = BASE_HUE + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Same colours as [`palette_rgb`], for egui.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    palette_rgb(n)
        .into_iter()
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(palette_rgb(4).len(), 4);
    }

    #[test]
    fn colours_are_distinct() {
        let colours = palette_rgb(5);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
