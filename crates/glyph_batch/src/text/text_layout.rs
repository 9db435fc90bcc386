//! Text layout engine
//!
//! Converts text strings into positioned quads (positions, UVs and indices)
//! for rendering. Pen placement is delegated to a [`GlyphLayoutService`];
//! this module turns the placed glyphs into vertex channels.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the top-left corner of the first line
//! - +X axis points right
//! - +Y axis points down, one `line_height` per line

use serde::{Deserialize, Serialize};

use super::{FontDescription, GlyphMetrics};
use crate::foundation::math::Vec2;

/// Horizontal alignment of each line against the widest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Lines start at x = 0
    #[default]
    Left,
    /// Lines are centered on the widest line
    Center,
    /// Lines end at the right edge of the widest line
    Right,
}

/// Triangle winding used for every generated quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// Clockwise on screen (with +Y down)
    #[default]
    Clockwise,
    /// Counter-clockwise on screen (with +Y down)
    CounterClockwise,
}

impl Winding {
    /// Indices of the two triangles of a quad whose first corner is `base`
    ///
    /// Corners are expected in bottom-left, top-left, top-right, bottom-right order.
    /// Returns `None` when the last corner would not fit in `u32`.
    pub const fn quad_indices(self, base: u32) -> Option<[u32; 6]> {
        if base > u32::MAX - 3 {
            return None;
        }
        let (a, b, c, d) = (base, base + 1, base + 2, base + 3);
        Some(match self {
            Self::Clockwise => [a, b, c, a, c, d],
            Self::CounterClockwise => [a, c, b, a, d, c],
        })
    }
}

/// Options controlling glyph placement and quad generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Extra space added after every glyph advance
    pub letter_spacing: f32,
    /// Per-line horizontal alignment
    pub align: TextAlign,
    /// Measure V from the bottom of the atlas instead of the top
    pub flip_y: bool,
    /// Triangle winding for every quad
    pub winding: Winding,
    /// Line advance override; the font's line height is used when `None`
    pub line_height: Option<f32>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            letter_spacing: 0.0,
            align: TextAlign::Left,
            flip_y: false,
            winding: Winding::Clockwise,
            line_height: None,
        }
    }
}

/// One glyph placed by a layout service
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph<'f> {
    /// Character this glyph renders
    pub ch: char,
    /// Glyph metrics from the font description
    pub metrics: &'f GlyphMetrics,
    /// Top-left corner of the glyph quad in layout space
    pub position: Vec2,
    /// Zero-based line the glyph sits on
    pub line: usize,
}

/// Service that turns text into ordered glyph placements
///
/// Implementations only decide where glyphs go; quad generation is done by
/// [`TextLayout`]. Characters missing from the font must be left out of the
/// returned placements.
pub trait GlyphLayoutService {
    /// Place every glyph of `text` that exists in `font`, in reading order
    fn layout<'f>(
        &self,
        font: &'f FontDescription,
        text: &str,
        options: &LayoutOptions,
    ) -> Vec<PlacedGlyph<'f>>;
}

/// Left-to-right pen layout with kerning, letter spacing, line breaks and alignment
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLayout;

impl GlyphLayoutService for SimpleLayout {
    fn layout<'f>(
        &self,
        font: &'f FontDescription,
        text: &str,
        options: &LayoutOptions,
    ) -> Vec<PlacedGlyph<'f>> {
        let line_height = options.line_height.unwrap_or_else(|| font.line_height());

        let mut placed = Vec::with_capacity(text.len());
        let mut line_widths = vec![0.0f32];
        let mut line = 0usize;
        let mut pen_x = 0.0f32;
        let mut previous: Option<char> = None;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                line_widths.push(0.0);
                pen_x = 0.0;
                previous = None;
                continue;
            }

            // Characters absent from the atlas are skipped, not substituted
            let Some(metrics) = font.glyph(ch) else {
                continue;
            };

            if let Some(prev) = previous {
                pen_x += font.kerning(prev, ch);
            }

            let position = Vec2::new(
                pen_x + metrics.x_offset,
                line as f32 * line_height + metrics.y_offset,
            );
            if !metrics.is_empty() {
                line_widths[line] = line_widths[line].max(position.x + metrics.width as f32);
            }

            placed.push(PlacedGlyph {
                ch,
                metrics,
                position,
                line,
            });

            pen_x += metrics.x_advance + options.letter_spacing;
            previous = Some(ch);
        }

        if options.align != TextAlign::Left {
            let widest = line_widths.iter().copied().fold(0.0f32, f32::max);
            for glyph in &mut placed {
                let slack = widest - line_widths[glyph.line];
                glyph.position.x += match options.align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => slack * 0.5,
                    TextAlign::Right => slack,
                };
            }
        }

        placed
    }
}

/// Per-glyph geometry for one string
///
/// `positions` and `uvs` hold one `[x, y]` / `[u, v]` pair per vertex.
/// Indices are local to this set and zero-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphAttributeSet {
    /// Vertex positions, two floats per vertex
    pub positions: Vec<f32>,
    /// Atlas texture coordinates, two floats per vertex
    pub uvs: Vec<f32>,
    /// Triangle list indices into this set's vertices
    pub indices: Vec<u32>,
}

impl GlyphAttributeSet {
    /// Create an empty set with room for `glyphs` quads
    pub fn with_glyph_capacity(glyphs: usize) -> Self {
        Self {
            positions: Vec::with_capacity(glyphs * 8),
            uvs: Vec::with_capacity(glyphs * 8),
            indices: Vec::with_capacity(glyphs * 6),
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Number of glyph quads
    pub fn glyph_count(&self) -> usize {
        self.vertex_count() / 4
    }

    /// Whether no geometry was produced
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check the channel-length and index-range invariants
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertex_count();
        self.positions.len() % 2 == 0
            && self.positions.len() == self.uvs.len()
            && self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }
}

/// Bounding box for text layout
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl TextBounds {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Text layout engine that converts strings to glyph quads
#[derive(Debug, Clone)]
pub struct TextLayout<S = SimpleLayout> {
    font: FontDescription,
    options: LayoutOptions,
    service: S,
}

impl TextLayout<SimpleLayout> {
    /// Create a layout engine using the built-in pen layout
    pub fn new(font: FontDescription, options: LayoutOptions) -> Self {
        Self::with_service(font, options, SimpleLayout)
    }
}

impl<S: GlyphLayoutService> TextLayout<S> {
    /// Create a layout engine backed by a custom placement service
    pub fn with_service(font: FontDescription, options: LayoutOptions, service: S) -> Self {
        Self {
            font,
            options,
            service,
        }
    }

    /// Convert a text string into glyph quads
    ///
    /// Each drawn glyph contributes 4 vertices and 6 indices (2 triangles)
    /// in reading order. Whitespace advances the pen without producing a
    /// quad, and characters missing from the font produce nothing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use glyph_batch::text::{FontDescription, LayoutOptions, TextLayout};
    /// # let font: FontDescription = unimplemented!();
    /// let layout = TextLayout::new(font, LayoutOptions::default());
    /// let glyphs = layout.layout_text("Hi there");
    /// assert_eq!(glyphs.vertex_count(), 28); // 7 visible glyphs × 4 vertices
    /// assert_eq!(glyphs.indices.len(), 42);  // 7 visible glyphs × 6 indices
    /// ```
    pub fn layout_text(&self, text: &str) -> GlyphAttributeSet {
        let placed = self.service.layout(&self.font, text, &self.options);
        let mut set = GlyphAttributeSet::with_glyph_capacity(placed.len());

        for glyph in placed.iter().filter(|g| Self::is_drawn(g)) {
            self.push_glyph_quad(&mut set, glyph);
        }

        set
    }

    /// Calculate the bounding box of the quads `text` would produce
    pub fn measure(&self, text: &str) -> TextBounds {
        let placed = self.service.layout(&self.font, text, &self.options);
        let mut drawn = placed.iter().filter(|g| Self::is_drawn(g));

        let Some(first) = drawn.next() else {
            return TextBounds::default();
        };

        let quad_bounds = |g: &PlacedGlyph<'_>| TextBounds {
            min_x: g.position.x,
            min_y: g.position.y,
            max_x: g.position.x + g.metrics.width as f32,
            max_y: g.position.y + g.metrics.height as f32,
        };

        drawn.fold(quad_bounds(first), |acc, g| {
            let b = quad_bounds(g);
            TextBounds {
                min_x: acc.min_x.min(b.min_x),
                min_y: acc.min_y.min(b.min_y),
                max_x: acc.max_x.max(b.max_x),
                max_y: acc.max_y.max(b.max_y),
            }
        })
    }

    /// Font description used by this layout engine
    pub const fn font(&self) -> &FontDescription {
        &self.font
    }

    /// Current layout options
    pub const fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replace the layout options
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    fn is_drawn(glyph: &PlacedGlyph<'_>) -> bool {
        !glyph.ch.is_whitespace() && !glyph.metrics.is_empty()
    }

    /// Append one glyph quad to `set`
    ///
    /// Quads whose indices would not be addressable with `u32` are dropped.
    fn push_glyph_quad(&self, set: &mut GlyphAttributeSet, glyph: &PlacedGlyph<'_>) {
        let Some(indices) = u32::try_from(set.vertex_count())
            .ok()
            .and_then(|base| self.options.winding.quad_indices(base))
        else {
            log::warn!("Glyph '{}' dropped: vertex count exceeds u32 indices", glyph.ch);
            return;
        };

        let metrics = glyph.metrics;
        let (atlas_w, atlas_h) = self.font.atlas_dimensions();
        let (atlas_w, atlas_h) = (atlas_w as f32, atlas_h as f32);

        let x0 = glyph.position.x;
        let y0 = glyph.position.y;
        let x1 = x0 + metrics.width as f32;
        let y1 = y0 + metrics.height as f32;

        let u0 = metrics.x as f32 / atlas_w;
        let u1 = (metrics.x + metrics.width) as f32 / atlas_w;
        let mut v_top = metrics.y as f32 / atlas_h;
        let mut v_bottom = (metrics.y + metrics.height) as f32 / atlas_h;
        if self.options.flip_y {
            v_top = 1.0 - v_top;
            v_bottom = 1.0 - v_bottom;
        }

        // Bottom-left, top-left, top-right, bottom-right
        set.positions.extend_from_slice(&[x0, y1, x0, y0, x1, y0, x1, y1]);
        set.uvs
            .extend_from_slice(&[u0, v_bottom, u0, v_top, u1, v_top, u1, v_bottom]);
        set.indices.extend_from_slice(&indices);
    }
}
