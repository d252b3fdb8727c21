pub mod canvas;
pub mod palette;
pub mod render;

pub use canvas::{Canvas, CompositeOp, GradientAxis, Rgba};
pub use palette::{ColorScheme, EffectSelection, PatternMethod};
pub use render::render;
