use clap::{Parser, ValueEnum};
use gridroute_core::Glyphs;

#[derive(Parser, Debug)]
#[command(name = "gridroute", version, about = "Cheapest routes across a terrain grid")]
pub struct Args {
    /// Rows of the starting map. Without --rows or --cols no map is created
    /// until one is chosen from the menu.
    #[arg(short = 'r', long = "rows")]
    pub rows: Option<i32>,

    /// Columns of the starting map
    #[arg(short = 'c', long = "cols")]
    pub cols: Option<i32>,

    /// Glyph set used to draw the map
    #[arg(short = 'g', long = "glyphs", value_enum, default_value = "ascii")]
    pub glyphs: GlyphSet,

    /// Seed for random terrain, for reproducible maps
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSet {
    Ascii,
    Emoji,
}

impl GlyphSet {
    pub fn glyphs(self) -> Glyphs {
        match self {
            GlyphSet::Ascii => Glyphs::ascii(),
            GlyphSet::Emoji => Glyphs::emoji(),
        }
    }
}
