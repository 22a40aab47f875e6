//! The [`Glyphs`] table used by [`Grid::render`](crate::Grid::render).

use crate::terrain::CellType;

/// One character per terrain type plus the three overlay markers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    pub open: char,
    pub building: char,
    pub water: char,
    pub blocked: char,
    pub path: char,
    pub origin: char,
    pub target: char,
}

impl Glyphs {
    /// Plain ASCII, safe for any terminal.
    pub const fn ascii() -> Self {
        Self {
            open: '.',
            building: '#',
            water: '~',
            blocked: 'X',
            path: '*',
            origin: 'S',
            target: 'G',
        }
    }

    /// Emoji set. Every glyph is a single code point but renders two
    /// columns wide.
    pub const fn emoji() -> Self {
        Self {
            open: '⬜',
            building: '🏢',
            water: '💧',
            blocked: '⛔',
            path: '⭐',
            origin: '🚦',
            target: '🏁',
        }
    }

    /// Base glyph for a terrain type.
    #[inline]
    pub const fn for_cell(&self, cell: CellType) -> char {
        match cell {
            CellType::Open => self.open,
            CellType::Building => self.building,
            CellType::Water => self.water,
            CellType::Blocked => self.blocked,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ascii()
    }
}
