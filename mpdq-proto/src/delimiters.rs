use std::collections::HashMap;

use itertools::Itertools;

use crate::{command::Command, tag::Tag};

// MPD does not mark where one entry of a listing ends and the next one
// starts. The keys below are the ones MPD always sends first for an entry of
// the given command.
const DELIMITERS: &[(&[&str], &[&str])] = &[
    (&["lsinfo", "listall", "listallinfo"], &["file", "directory", "playlist"]),
    (&["listfiles"], &["file", "directory"]),
    (&["update", "rescan"], &["updating_db"]),
    (&["commands", "notcommands"], &["command"]),
    (&["listplaylists"], &["playlist"]),
    (
        &["currentsong", "playlistinfo", "listplaylist", "listplaylistinfo", "playlistid", "search"],
        &["file"],
    ),
    (&["idle"], &["changed"]),
    (&["tagtype"], &["tagtype"]),
    (&["decoders"], &["plugin"]),
    (&["status"], &["volume"]),
    (&["stats"], &["uptime"]),
];

/// The `list` command's output is keyed by the listed tag itself.
const LIST: &str = "list";

/// Maps MPD verbs to the keys which start a new record in their output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterTable {
    by_verb: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for DelimiterTable {
    fn default() -> Self {
        let by_verb = DELIMITERS
            .iter()
            .flat_map(|(verbs, delimiters)| verbs.iter().map(move |verb| (*verb, *delimiters)))
            .collect();

        Self { by_verb }
    }
}

impl DelimiterTable {
    /// Static entry for `verb`, `list` has none since it depends on the
    /// command's arguments.
    pub fn get(&self, verb: &str) -> Option<&'static [&'static str]> {
        self.by_verb.get(verb).copied()
    }

    /// Record delimiters for a single command. Empty when the whole output
    /// of the command is a single record.
    pub fn for_command(&self, command: &Command) -> Vec<&'static str> {
        if command.name() == LIST {
            return command
                .args()
                .first()
                .and_then(|tag| tag.parse::<Tag>().ok())
                .map(|tag| vec![tag.as_str()])
                .unwrap_or_default();
        }

        self.get(command.name()).map(<[_]>::to_vec).unwrap_or_default()
    }

    /// Union of delimiters of all `commands` in first seen order.
    pub fn for_commands<'a>(
        &self,
        commands: impl IntoIterator<Item = &'a Command>,
    ) -> Vec<&'static str> {
        commands.into_iter().flat_map(|command| self.for_command(command)).unique().collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn table() -> DelimiterTable {
        DelimiterTable::default()
    }

    #[rstest]
    #[case("lsinfo", &["file", "directory", "playlist"])]
    #[case("listall", &["file", "directory", "playlist"])]
    #[case("listallinfo", &["file", "directory", "playlist"])]
    #[case("listfiles", &["file", "directory"])]
    #[case("update", &["updating_db"])]
    #[case("rescan", &["updating_db"])]
    #[case("commands", &["command"])]
    #[case("notcommands", &["command"])]
    #[case("listplaylists", &["playlist"])]
    #[case("currentsong", &["file"])]
    #[case("playlistinfo", &["file"])]
    #[case("listplaylist", &["file"])]
    #[case("listplaylistinfo", &["file"])]
    #[case("playlistid", &["file"])]
    #[case("search", &["file"])]
    #[case("idle", &["changed"])]
    #[case("tagtype", &["tagtype"])]
    #[case("decoders", &["plugin"])]
    #[case("status", &["volume"])]
    #[case("stats", &["uptime"])]
    fn static_entries(table: DelimiterTable, #[case] verb: &str, #[case] expected: &[&str]) {
        assert_eq!(table.for_command(&Command::bare(verb)), expected);
    }

    #[rstest]
    fn unknown_verb_has_no_delimiters(table: DelimiterTable) {
        assert!(table.for_command(&Command::bare("play")).is_empty());
        assert_eq!(table.get("find"), None);
    }

    #[rstest]
    #[case("artist", &["Artist"])]
    #[case("albumartist", &["AlbumArtist"])]
    #[case("Genre", &["Genre"])]
    #[case("composer", &[])]
    fn list_uses_first_argument(
        table: DelimiterTable,
        #[case] tag: &str,
        #[case] expected: &[&str],
    ) {
        let command = Command::new("list", [tag, "group", "date"]);

        assert_eq!(table.for_command(&command), expected);
    }

    #[rstest]
    fn list_without_arguments(table: DelimiterTable) {
        assert!(table.for_command(&Command::bare("list")).is_empty());
        assert_eq!(table.get("list"), None);
    }

    #[rstest]
    fn union_is_deduplicated_in_first_seen_order(table: DelimiterTable) {
        let commands = [
            Command::bare("listfiles"),
            Command::bare("status"),
            Command::bare("play"),
            Command::bare("lsinfo"),
            Command::bare("currentsong"),
        ];

        assert_eq!(table.for_commands(&commands), ["file", "directory", "volume", "playlist"]);
    }
}
