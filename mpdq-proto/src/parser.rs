use log::{trace, warn};

use crate::{
    command::{Command, Executable},
    command_list::{CommandList, LIST_OK, ListMode},
    delimiters::DelimiterTable,
    errors::{MpdError, MpdFailureResponse, MpdResult},
    response::{CommandResponse, Record, Response},
};

const OK: &str = "OK";

/// Turns the complete text MPD sent for one request into records.
#[derive(Debug)]
pub struct ResponseParser<'a> {
    response: &'a str,
    executable: &'a Executable,
    delimiters: &'a DelimiterTable,
}

impl<'a> ResponseParser<'a> {
    pub fn new(
        response: &'a str,
        executable: &'a Executable,
        delimiters: &'a DelimiterTable,
    ) -> Self {
        Self { response, executable, delimiters }
    }

    pub fn parse(&self) -> MpdResult<Response> {
        if let Some(failure) = find_failure(self.response) {
            return Err(MpdError::Mpd(failure));
        }

        let normalized = normalize(self.response);

        let response = match self.executable {
            Executable::Single(command) => Response::Command(self.parse_command(&normalized, command)),
            Executable::List(list) => match list.mode() {
                ListMode::Separated => Response::SeparatedList(self.parse_separated(&normalized, list)),
                ListMode::Aggregate => {
                    let delimiters = self.delimiters.for_commands(list.commands());
                    Response::AggregateList(group_records(&normalized, &delimiters))
                }
            },
        };

        trace!(command = self.executable.describe().as_str(), kind:? = response.kind(); "Parsed MPD response");
        Ok(response)
    }

    fn parse_command(&self, text: &str, command: &Command) -> Vec<Record> {
        group_records(text, &self.delimiters.for_command(command))
    }

    fn parse_separated(&self, text: &str, list: &CommandList) -> Vec<CommandResponse> {
        let lines: Vec<&str> = text.lines().collect();
        let mut segments = lines.split(|line| *line == LIST_OK);

        let result = list
            .commands()
            .iter()
            .map(|command| {
                let segment = segments.next().map(|lines| lines.join("\n")).unwrap_or_default();
                CommandResponse {
                    command: command.name().to_owned(),
                    records: self.parse_command(segment.trim(), command),
                }
            })
            .collect();

        let leftover = segments.filter(|lines| lines.iter().any(|l| !l.trim().is_empty())).count();
        if leftover > 0 {
            trace!(leftover; "Ignoring output past the last command of the list");
        }

        result
    }
}

/// First well formed `ACK` line of the response, if any.
fn find_failure(text: &str) -> Option<MpdFailureResponse> {
    text.lines().filter(|line| line.starts_with("ACK")).find_map(|line| {
        match line.parse::<MpdFailureResponse>() {
            Ok(failure) => Some(failure),
            Err(error) => {
                warn!(line, error:?; "Line looks like an ACK but could not be parsed");
                None
            }
        }
    })
}

/// Drops the `OK` terminator lines and surrounding whitespace.
fn normalize(text: &str) -> String {
    text.lines().filter(|line| *line != OK).collect::<Vec<_>>().join("\n").trim().to_owned()
}

/// Splits `key: value` lines into records. A new record is started whenever
/// one of `delimiters` is seen and the current record already holds data.
/// Lines without a `": "` separator, with an empty key or with an empty value
/// are skipped.
pub fn group_records(text: &str, delimiters: &[&str]) -> Vec<Record> {
    let mut result = Vec::new();
    let mut current = Record::default();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }

        if delimiters.contains(&key) && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.insert(key.to_owned(), value.to_owned());
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}
