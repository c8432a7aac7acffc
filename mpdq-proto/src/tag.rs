use strum::{EnumString, IntoStaticStr};

/// Tags understood as the first argument of the `list` command.
///
/// Parsing is case insensitive, the canonical (MPD) spelling is returned by
/// [`Tag::as_str`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Tag {
    Artist,
    AlbumArtist,
    Album,
    Date,
    Genre,
    Title,
    Track,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
