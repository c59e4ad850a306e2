use colored::Color;
use comfy_table::Color as CellColor;
use once_cell::sync::Lazy;

/// Colors for the parts of roster output.
pub struct Palette {
    /// Section titles such as "Search Results"
    pub title: Color,
    /// Labels in `label: value` lines
    pub label: Color,
    /// Group names in summaries
    pub group: Color,
    pub ok: Color,
    pub problem: Color,
    pub caution: Color,
    pub note: Color,
    pub trace: Color,
    /// Table header cells
    pub header_cell: CellColor,
    /// The `#` column of student tables
    pub index_cell: CellColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            title: Color::BrightBlue,
            label: Color::BrightCyan,
            group: Color::Magenta,
            ok: Color::Green,
            problem: Color::Red,
            caution: Color::Yellow,
            note: Color::Blue,
            trace: Color::BrightBlack,
            header_cell: CellColor::Cyan,
            index_cell: CellColor::DarkGrey,
        }
    }
}

pub static PALETTE: Lazy<Palette> = Lazy::new(Palette::default);
