//! Plain-text export of a palette: a title line, one line per shade, and the
//! distributor footer.

use crate::domain::ColorShade;

pub const PALETTE_TITLE: &str = "ПАЛИТРА ЦВЕТОВ BBcos Innovation EVO";
pub const PALETTE_FOOTER: &str = "Официальный дистрибьютор: IMAN Cosmetics";
pub const PALETTE_FILE_NAME: &str = "bbcos-palette.txt";

/// Formats a single shade as `<code> - <name> (<category>)`.
pub fn palette_line(shade: &ColorShade) -> String {
    format!("{} - {} ({})", shade.code, shade.name, shade.category)
}

pub fn render_palette<'a>(shades: impl IntoIterator<Item = &'a ColorShade>) -> String {
    let body = shades.into_iter().map(palette_line).collect::<Vec<_>>().join("\n");
    format!("{}\n\n{}\n\n{}", PALETTE_TITLE, body, PALETTE_FOOTER)
}
