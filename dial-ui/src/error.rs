/// Failure while drawing to the display.
#[derive(Debug)]
pub enum UiError<E> {
    Display(E),
    /// The font has no glyph for this character.
    MissingGlyph(char),
    /// The font renderer was asked to draw a background it cannot fill.
    FontBackground,
}

impl<E> From<u8g2_fonts::Error<E>> for UiError<E> {
    fn from(e: u8g2_fonts::Error<E>) -> Self {
        match e {
            u8g2_fonts::Error::DisplayError(e) => UiError::Display(e),
            u8g2_fonts::Error::GlyphNotFound(c) => UiError::MissingGlyph(c),
            u8g2_fonts::Error::BackgroundColorNotSupported => UiError::FontBackground,
        }
    }
}
