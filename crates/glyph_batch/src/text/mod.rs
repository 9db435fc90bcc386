//! Glyph layout
//!
//! Bitmap font descriptions and the layout engine that turns strings into
//! per-glyph quads.
//!
//! # Architecture
//!
//! - [`FontDescription`]: atlas dimensions, glyph metrics and kerning
//! - [`GlyphLayoutService`]: places glyphs; [`SimpleLayout`] is the default
//! - [`TextLayout`]: converts placed glyphs into a [`GlyphAttributeSet`]

mod font_description;
mod text_layout;

pub use font_description::{
    FontCommon, FontDescription, FontError, FontFile, FontResult, GlyphMetrics, KerningPair,
};
pub use text_layout::{
    GlyphAttributeSet, GlyphLayoutService, LayoutOptions, PlacedGlyph, SimpleLayout, TextAlign,
    TextBounds, TextLayout, Winding,
};
