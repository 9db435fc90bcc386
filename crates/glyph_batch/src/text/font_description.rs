//! Bitmap font description
//!
//! Glyph metrics and atlas rectangles for a pre-generated bitmap (or SDF)
//! font atlas. The atlas image itself and the tooling that produced it live
//! outside this crate; only the metrics needed to lay out quads are kept.
//!
//! Field names follow the BMFont layout, and the BMFont JSON spellings
//! (`lineHeight`, `scaleW`, `xoffset`, `xadvance`, ...) are accepted as
//! aliases so exported descriptions can be converted to RON verbatim.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Result type for font description operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or validating a font description
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read the description file
    #[error("Failed to read font description: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the description contents
    #[error("Failed to parse font description: {0}")]
    Parse(String),

    /// File extension is not a supported description format
    #[error("Unsupported font description format: {0}")]
    UnsupportedFormat(String),

    /// Atlas dimensions or line metrics are unusable
    #[error("Invalid font metrics: {0}")]
    InvalidMetrics(String),

    /// Glyph id is not a Unicode scalar value
    #[error("Glyph id {0} is not a valid character")]
    InvalidGlyph(u32),

    /// Glyph rectangle extends past the atlas bounds
    #[error("Glyph '{0}' lies outside the {1}x{2} atlas")]
    GlyphOutsideAtlas(char, u32, u32),
}

/// Font-wide metrics shared by every glyph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontCommon {
    /// Distance between baselines of consecutive lines, in atlas pixels
    #[serde(alias = "lineHeight")]
    pub line_height: f32,
    /// Distance from the top of a line to the baseline
    pub base: f32,
    /// Atlas texture width in pixels
    #[serde(alias = "scaleW")]
    pub scale_w: u32,
    /// Atlas texture height in pixels
    #[serde(alias = "scaleH")]
    pub scale_h: u32,
}

/// Metrics and atlas rectangle for a single glyph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Unicode code point
    pub id: u32,
    /// Left edge of the glyph rectangle in the atlas
    pub x: u32,
    /// Top edge of the glyph rectangle in the atlas
    pub y: u32,
    /// Rectangle width in pixels
    pub width: u32,
    /// Rectangle height in pixels
    pub height: u32,
    /// Horizontal offset from the pen position to the quad's left edge
    #[serde(alias = "xoffset", default)]
    pub x_offset: f32,
    /// Vertical offset from the line top to the quad's top edge
    #[serde(alias = "yoffset", default)]
    pub y_offset: f32,
    /// Pen advance after this glyph
    #[serde(alias = "xadvance")]
    pub x_advance: f32,
}

impl GlyphMetrics {
    /// Whether the glyph covers no atlas pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Pair adjustment applied between two consecutive glyphs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerningPair {
    /// Code point of the left glyph
    pub first: u32,
    /// Code point of the right glyph
    pub second: u32,
    /// Horizontal adjustment added to the pen
    pub amount: f32,
}

/// On-disk shape of a font description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontFile {
    /// Font-wide metrics
    pub common: FontCommon,
    /// Every glyph present in the atlas
    pub chars: Vec<GlyphMetrics>,
    /// Optional kerning table
    #[serde(default)]
    pub kernings: Vec<KerningPair>,
}

/// Validated font description with per-character lookup
///
/// Built from a [`FontFile`], either directly with [`FontDescription::new`]
/// or through serde (`FontDescription` deserializes from the file shape and
/// validates on the way in).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "FontFile")]
pub struct FontDescription {
    common: FontCommon,
    glyphs: HashMap<char, GlyphMetrics>,
    kernings: HashMap<(char, char), f32>,
}

impl FontDescription {
    /// Validate and index a font description
    ///
    /// # Errors
    ///
    /// - [`FontError::InvalidMetrics`] for a zero-sized atlas or non-positive line height
    /// - [`FontError::InvalidGlyph`] for ids that are not characters
    /// - [`FontError::GlyphOutsideAtlas`] for rectangles past the atlas edge
    pub fn new(
        common: FontCommon,
        chars: Vec<GlyphMetrics>,
        kernings: Vec<KerningPair>,
    ) -> FontResult<Self> {
        if common.scale_w == 0 || common.scale_h == 0 {
            return Err(FontError::InvalidMetrics(format!(
                "atlas size {}x{} must be non-zero",
                common.scale_w, common.scale_h
            )));
        }
        if common.line_height <= 0.0 {
            return Err(FontError::InvalidMetrics(format!(
                "line height {} must be positive",
                common.line_height
            )));
        }

        let mut glyphs = HashMap::with_capacity(chars.len());
        for glyph in chars {
            let ch = char::from_u32(glyph.id).ok_or(FontError::InvalidGlyph(glyph.id))?;
            let right = u64::from(glyph.x) + u64::from(glyph.width);
            let bottom = u64::from(glyph.y) + u64::from(glyph.height);
            if right > u64::from(common.scale_w) || bottom > u64::from(common.scale_h) {
                return Err(FontError::GlyphOutsideAtlas(ch, common.scale_w, common.scale_h));
            }
            glyphs.insert(ch, glyph);
        }

        let mut kerning_table = HashMap::with_capacity(kernings.len());
        for pair in kernings {
            let first = char::from_u32(pair.first).ok_or(FontError::InvalidGlyph(pair.first))?;
            let second = char::from_u32(pair.second).ok_or(FontError::InvalidGlyph(pair.second))?;
            kerning_table.insert((first, second), pair.amount);
        }

        Ok(Self {
            common,
            glyphs,
            kernings: kerning_table,
        })
    }

    /// Parse a description from RON text
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] for malformed RON; validation errors from
    /// [`FontDescription::new`] are passed through.
    pub fn from_ron_str(source: &str) -> FontResult<Self> {
        let file: FontFile = ron::from_str(source).map_err(|e| FontError::Parse(e.to_string()))?;
        Self::try_from(file)
    }

    /// Parse a description from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] for malformed TOML; validation errors from
    /// [`FontDescription::new`] are passed through.
    pub fn from_toml_str(source: &str) -> FontResult<Self> {
        let file: FontFile = toml::from_str(source).map_err(|e| FontError::Parse(e.to_string()))?;
        Self::try_from(file)
    }

    /// Load a description from a `.ron` or `.toml` file
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] when the file cannot be read,
    /// [`FontError::UnsupportedFormat`] for other extensions, and parse or
    /// validation errors otherwise.
    pub fn load_from_file(path: impl AsRef<Path>) -> FontResult<Self> {
        let path = path.as_ref();
        let parse: fn(&str) -> FontResult<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("ron") => Self::from_ron_str,
                Some("toml") => Self::from_toml_str,
                _ => return Err(FontError::UnsupportedFormat(path.display().to_string())),
            };

        let contents = std::fs::read_to_string(path)?;
        let font = parse(&contents)?;

        log::info!(
            "Loaded font description {}: {} glyphs, {}x{} atlas",
            path.display(),
            font.glyph_count(),
            font.common.scale_w,
            font.common.scale_h
        );
        Ok(font)
    }

    /// Look up a glyph by character
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    /// Kerning adjustment between two characters, zero when no pair exists
    pub fn kerning(&self, left: char, right: char) -> f32 {
        self.kernings.get(&(left, right)).copied().unwrap_or(0.0)
    }

    /// Font-wide metrics
    pub const fn common(&self) -> &FontCommon {
        &self.common
    }

    /// Atlas dimensions in pixels
    pub const fn atlas_dimensions(&self) -> (u32, u32) {
        (self.common.scale_w, self.common.scale_h)
    }

    /// Distance between consecutive baselines
    pub const fn line_height(&self) -> f32 {
        self.common.line_height
    }

    /// Number of glyphs in the atlas
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl TryFrom<FontFile> for FontDescription {
    type Error = FontError;

    fn try_from(file: FontFile) -> FontResult<Self> {
        Self::new(file.common, file.chars, file.kernings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        common: (lineHeight: 32.0, base: 26.0, scaleW: 128, scaleH: 64),
        chars: [
            (id: 65, x: 0, y: 0, width: 16, height: 20, xoffset: 1.0, yoffset: 6.0, xadvance: 18.0),
            (id: 86, x: 16, y: 0, width: 16, height: 20, xoffset: 0.0, yoffset: 6.0, xadvance: 17.0),
            (id: 32, x: 0, y: 0, width: 0, height: 0, xadvance: 8.0),
        ],
        kernings: [(first: 65, second: 86, amount: -2.0)],
    )"#;

    #[test]
    fn test_parse_bmfont_aliases() {
        let font = FontDescription::from_ron_str(SAMPLE).unwrap();
        assert_eq!(font.glyph_count(), 3);
        assert_eq!(font.atlas_dimensions(), (128, 64));
        assert_eq!(font.line_height(), 32.0);

        let a = font.glyph('A').unwrap();
        assert_eq!(a.x_advance, 18.0);
        assert_eq!(a.x_offset, 1.0);
        assert!(font.glyph(' ').unwrap().is_empty());
        assert!(font.glyph('Z').is_none());
    }

    const SAMPLE_TOML: &str = r#"
        [common]
        lineHeight = 32.0
        base = 26.0
        scaleW = 128
        scaleH = 64

        [[chars]]
        id = 65
        x = 0
        y = 0
        width = 16
        height = 20
        xoffset = 1.0
        yoffset = 6.0
        xadvance = 18.0

        [[chars]]
        id = 32
        x = 0
        y = 0
        width = 0
        height = 0
        xadvance = 8.0
    "#;

    #[test]
    fn test_parse_toml() {
        let font = FontDescription::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(font.glyph_count(), 2);
        assert_eq!(font.atlas_dimensions(), (128, 64));
        assert_eq!(font.glyph('A').unwrap().y_offset, 6.0);
        assert_eq!(font.glyph(' ').unwrap().x_advance, 8.0);
        assert_eq!(font.kerning('A', ' '), 0.0);
    }

    #[test]
    fn test_load_from_file_both_formats() {
        let dir = std::env::temp_dir().join("glyph_batch_font_test_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let ron_path = dir.join("sample.ron");
        std::fs::write(&ron_path, SAMPLE).unwrap();
        let from_ron = FontDescription::load_from_file(&ron_path).unwrap();
        assert_eq!(from_ron.glyph_count(), 3);
        assert_eq!(from_ron.kerning('A', 'V'), -2.0);

        let toml_path = dir.join("sample.toml");
        std::fs::write(&toml_path, SAMPLE_TOML).unwrap();
        let from_toml = FontDescription::load_from_file(&toml_path).unwrap();
        assert_eq!(from_toml.glyph('A'), from_ron.glyph('A'));

        assert!(matches!(
            FontDescription::load_from_file(dir.join("absent.ron")),
            Err(FontError::Io(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_kerning_lookup() {
        let font = FontDescription::from_ron_str(SAMPLE).unwrap();
        assert_eq!(font.kerning('A', 'V'), -2.0);
        assert_eq!(font.kerning('V', 'A'), 0.0);
    }

    #[test]
    fn test_glyph_outside_atlas_rejected() {
        let common = FontCommon {
            line_height: 10.0,
            base: 8.0,
            scale_w: 16,
            scale_h: 16,
        };
        let glyph = GlyphMetrics {
            id: 'x' as u32,
            x: 10,
            y: 0,
            width: 8,
            height: 8,
            x_offset: 0.0,
            y_offset: 0.0,
            x_advance: 8.0,
        };
        assert!(matches!(
            FontDescription::new(common, vec![glyph], vec![]),
            Err(FontError::GlyphOutsideAtlas('x', 16, 16))
        ));
    }

    #[test]
    fn test_invalid_metrics_rejected() {
        let common = FontCommon {
            line_height: 10.0,
            base: 8.0,
            scale_w: 0,
            scale_h: 16,
        };
        assert!(matches!(
            FontDescription::new(common, vec![], vec![]),
            Err(FontError::InvalidMetrics(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            FontDescription::load_from_file("font.fnt"),
            Err(FontError::UnsupportedFormat(_))
        ));
    }
}
