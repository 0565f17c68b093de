use thiserror::Error;

/// Longest accepted custom sticker, in characters.
pub const MAX_GLYPH_CHARS: usize = 4;

/// Rejections for user-supplied tool styling.
///
/// The history engine never validates and never errors; style problems are
/// caught here, at the input-collection boundary, before `equip_tool` is
/// called.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("sticker text is empty")]
    EmptyGlyph,
    #[error("sticker text is {0} characters long (limit {MAX_GLYPH_CHARS})")]
    GlyphTooLong(usize),
}

/// Check a custom sticker glyph: non-empty and at most
/// [`MAX_GLYPH_CHARS`] characters (one emoji or a short word).
pub fn validate_glyph(glyph: &str) -> Result<(), StyleError> {
    let count = glyph.chars().count();
    if count == 0 {
        return Err(StyleError::EmptyGlyph);
    }
    if count > MAX_GLYPH_CHARS {
        return Err(StyleError::GlyphTooLong(count));
    }
    Ok(())
}
