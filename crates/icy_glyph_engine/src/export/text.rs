use crate::RenderedArt;

/// Lines joined by `\n`, without a trailing line break.
pub fn to_plain_text(art: &RenderedArt) -> String {
    art.lines().join("\n")
}
