//! Glyph mode detection
//!
//! Picks emoji faces when the terminal locale looks like UTF-8, and single
//! letters otherwise.

use std::env;

use serde::{Deserialize, Serialize};

use crate::game::Symbol;

use super::surface::CardFace;

/// How card faces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlyphMode {
    /// Heart emoji (💖 😍 ...)
    #[default]
    Emoji,
    /// Letters A-F, works everywhere
    Ascii,
}

impl GlyphMode {
    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            GlyphMode::Emoji => "Emoji",
            GlyphMode::Ascii => "ASCII",
        }
    }

    pub fn symbol(&self, symbol: Symbol) -> &'static str {
        match self {
            GlyphMode::Emoji => symbol.glyph(),
            GlyphMode::Ascii => symbol.ascii(),
        }
    }

    /// Text shown for a card face
    pub fn face(&self, face: CardFace) -> &'static str {
        match face {
            CardFace::Placeholder => "?",
            CardFace::Symbol(symbol) => self.symbol(symbol),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GlyphMode::Emoji => GlyphMode::Ascii,
            GlyphMode::Ascii => GlyphMode::Emoji,
        }
    }
}

/// Detect the best glyph mode for the current terminal
pub fn detect_glyph_mode() -> GlyphMode {
    if locale_is_utf8() {
        log::info!("UTF-8 locale detected, using emoji faces");
        GlyphMode::Emoji
    } else {
        log::info!("Falling back to ASCII faces");
        GlyphMode::Ascii
    }
}

fn locale_is_utf8() -> bool {
    // LC_ALL overrides LANG when set
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                let upper = value.to_uppercase();
                return upper.contains("UTF-8") || upper.contains("UTF8");
            }
        }
    }
    false
}
