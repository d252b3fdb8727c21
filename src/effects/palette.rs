use crate::effects::canvas::Rgba;

/// Alpha shared by every palette color (0.8 of 255).
pub const PALETTE_ALPHA: u8 = 204;

/// Overlay pattern painted over the fitted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMethod {
    #[default]
    Quadrant,
    Grid,
    Circle,
}

impl PatternMethod {
    pub const ALL: [PatternMethod; 3] = [
        PatternMethod::Quadrant,
        PatternMethod::Grid,
        PatternMethod::Circle,
    ];

    /// Literal dropdown option text.
    pub fn label(self) -> &'static str {
        match self {
            PatternMethod::Quadrant => "Квадранти",
            PatternMethod::Grid => "Сітка",
            PatternMethod::Circle => "Кола",
        }
    }

    /// Map the current dropdown text back to a method. Unrecognized labels
    /// fall back to the default pattern.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == label)
            .unwrap_or_default()
    }
}

/// Named 4-color palette driving gradients and ring strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    BlueGreen,
    RedBlue,
    GreenRed,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::BlueGreen,
        ColorScheme::RedBlue,
        ColorScheme::GreenRed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::BlueGreen => "Синьо-зелена",
            ColorScheme::RedBlue => "Червоно-синя",
            ColorScheme::GreenRed => "Зелено-червона",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or_default()
    }

    /// Ordered gradient/stroke stops of this scheme.
    pub fn palette(self) -> [Rgba; 4] {
        const A: u8 = PALETTE_ALPHA;
        match self {
            ColorScheme::BlueGreen => [
                Rgba::rgba(0, 0, 255, A),
                Rgba::rgba(0, 191, 255, A),
                Rgba::rgba(0, 255, 127, A),
                Rgba::rgba(0, 128, 0, A),
            ],
            ColorScheme::RedBlue => [
                Rgba::rgba(220, 20, 60, A),
                Rgba::rgba(255, 69, 0, A),
                Rgba::rgba(138, 43, 226, A),
                Rgba::rgba(0, 0, 255, A),
            ],
            ColorScheme::GreenRed => [
                Rgba::rgba(0, 128, 0, A),
                Rgba::rgba(154, 205, 50, A),
                Rgba::rgba(255, 165, 0, A),
                Rgba::rgba(220, 20, 60, A),
            ],
        }
    }
}

/// Live selection of the two processing-page dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectSelection {
    pub method: PatternMethod,
    pub scheme: ColorScheme,
}

impl EffectSelection {
    /// Resolve the current dropdown texts, falling back per enum defaults.
    pub fn from_labels(method: &str, scheme: &str) -> Self {
        Self {
            method: PatternMethod::from_label(method),
            scheme: ColorScheme::from_label(scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorScheme, EffectSelection, PatternMethod, PALETTE_ALPHA};

    #[test]
    fn grid_label_maps_to_grid() {
        assert_eq!(PatternMethod::from_label("Сітка"), PatternMethod::Grid);
        assert_eq!(PatternMethod::from_label("Кола"), PatternMethod::Circle);
    }

    #[test]
    fn unknown_labels_fall_back_to_defaults() {
        let selection = EffectSelection::from_labels("???", "невідома");
        assert_eq!(selection.method, PatternMethod::Quadrant);
        assert_eq!(selection.scheme, ColorScheme::BlueGreen);
    }

    #[test]
    fn labels_round_trip() {
        for method in PatternMethod::ALL {
            assert_eq!(PatternMethod::from_label(method.label()), method);
        }
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_label(scheme.label()), scheme);
        }
    }

    #[test]
    fn palettes_carry_the_shared_alpha() {
        for scheme in ColorScheme::ALL {
            for color in scheme.palette() {
                assert_eq!(color.a, PALETTE_ALPHA);
            }
        }
        let blue_green = ColorScheme::BlueGreen.palette();
        assert_eq!(blue_green[0].b, 255);
        assert_eq!(blue_green[3].g, 128);
    }
}
