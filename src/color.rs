use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

/// Histogram bar fill.
pub const HIST_FILL: Color32 = Color32::from_rgb(135, 206, 235);
/// Histogram bar outline.
pub const HIST_EDGE: Color32 = Color32::BLACK;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species to a distinct colour, shared by the scatter plot,
/// its legend and the species checkboxes.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given species.
    pub fn new(species: &[Species]) -> Self {
        let palette = generate_palette(species.len());
        let mapping = species.iter().copied().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_distinct() {
        let p = generate_palette(3);
        assert_eq!(p.len(), 3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
        assert_ne!(p[0], p[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_lookup() {
        let cm = ColorMap::new(&Species::ALL);
        let colors: Vec<Color32> = Species::ALL.iter().map(|s| cm.color_for(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn test_missing_species_falls_back_to_gray() {
        let cm = ColorMap::new(&[Species::Setosa]);
        assert_eq!(cm.color_for(Species::Virginica), Color32::GRAY);
    }
}
