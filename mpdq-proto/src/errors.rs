use std::{fmt::Display, str::FromStr};

pub type MpdResult<T> = Result<T, MpdError>;

#[derive(Debug, Clone, PartialEq)]
pub enum MpdError {
    Parse(String),
    Generic(String),
    Io(std::io::ErrorKind, String),
    Mpd(MpdFailureResponse),
    TimedOut(String),
    InvalidInput(String),
}

impl std::error::Error for MpdError {}

impl From<std::io::Error> for MpdError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut => {
                MpdError::TimedOut(err.to_string())
            }
            kind => MpdError::Io(kind, err.to_string()),
        }
    }
}

impl From<std::num::ParseIntError> for MpdError {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::Parse(value.to_string())
    }
}

impl Display for MpdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MpdError::Parse(msg) => write!(f, "ParseError: '{msg}'"),
            MpdError::Generic(msg) => write!(f, "GenericError: '{msg}'"),
            MpdError::Io(kind, msg) => write!(f, "IoError ({kind}): '{msg}'"),
            MpdError::Mpd(err) => write!(f, "{err}"),
            MpdError::TimedOut(msg) => write!(f, "Reading response from MPD timed out, '{msg}'"),
            MpdError::InvalidInput(msg) => write!(f, "InvalidInput: '{msg}'"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    /// not a list
    NotList,
    /// bad command arguments
    Argument,
    /// invalid password
    Password,
    /// insufficient permissions
    Permission,
    /// unknown command
    UnknownCmd,
    /// object doesn't exist
    NoExist,
    /// maximum playlist size exceeded
    PlaylistMax,
    /// general system error
    System,
    /// error loading playlist
    PlaylistLoad,
    /// update database is already in progress
    UpdateAlready,
    /// player synchronization error
    PlayerSync,
    /// object already exists
    Exist,
    /// Codes above `u32::MAX` are clamped to it.
    Other(u32),
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        match self {
            ErrorCode::NotList => 1,
            ErrorCode::Argument => 2,
            ErrorCode::Password => 3,
            ErrorCode::Permission => 4,
            ErrorCode::UnknownCmd => 5,
            ErrorCode::NoExist => 50,
            ErrorCode::PlaylistMax => 51,
            ErrorCode::System => 52,
            ErrorCode::PlaylistLoad => 53,
            ErrorCode::UpdateAlready => 54,
            ErrorCode::PlayerSync => 55,
            ErrorCode::Exist => 56,
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::NotList,
            2 => Self::Argument,
            3 => Self::Password,
            4 => Self::Permission,
            5 => Self::UnknownCmd,

            50 => Self::NoExist,
            51 => Self::PlaylistMax,
            52 => Self::System,
            53 => Self::PlaylistLoad,
            54 => Self::UpdateAlready,
            55 => Self::PlayerSync,
            56 => Self::Exist,

            other => Self::Other(other),
        }
    }
}

impl FromStr for ErrorCode {
    type Err = MpdError;

    fn from_str(s: &str) -> Result<ErrorCode, MpdError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MpdError::Parse(format!("Invalid error code '{s}'")));
        }
        // only overflow is left to fail at this point
        Ok(s.parse::<u32>().unwrap_or(u32::MAX).into())
    }
}

/// A single `ACK` line sent by MPD in place of the `OK` terminator.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MpdFailureResponse {
    pub code: ErrorCode,
    /// Zero based index of the failed command inside a command list, always
    /// `0` for a single command. Positions MPD sends that are not a number
    /// are read as `0`, oversized ones as `u32::MAX`.
    pub command_list_index: u32,
    pub command: String,
    pub message: String,
}

impl Display for MpdFailureResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MPD returned an error: {} (command: {}, code: {}, position: {})",
            self.message,
            self.command,
            self.code.code(),
            self.command_list_index
        )
    }
}

enum ParseError {
    NoAck,
    NoCode,
    NoCommandIndex,
    NoCurrentCommand,
    NoMessage,
}

impl From<ParseError> for MpdError {
    fn from(value: ParseError) -> Self {
        let text = match value {
            ParseError::NoAck => "No Ack",
            ParseError::NoCode => "No error code",
            ParseError::NoCommandIndex => "No command index",
            ParseError::NoCurrentCommand => "No current command",
            ParseError::NoMessage => "No message",
        };
        Self::Parse(format!("Invalid error format. {text}."))
    }
}

// ACK [error@command_listNum] {current_command} message_text
impl FromStr for MpdFailureResponse {
    type Err = MpdError;

    fn from_str(s: &str) -> Result<Self, MpdError> {
        let rest = s.strip_prefix("ACK [").ok_or(ParseError::NoAck)?;
        let (code, rest) = rest.split_once('@').ok_or(ParseError::NoCode)?;
        let code: ErrorCode = code.parse()?;

        let (command_idx, rest) = rest.split_once(']').ok_or(ParseError::NoCommandIndex)?;
        if command_idx.is_empty() {
            return Err(ParseError::NoCommandIndex.into());
        }
        let command_list_index = parse_command_index(command_idx);

        let rest = rest
            .strip_prefix(char::is_whitespace)
            .and_then(|rest| rest.strip_prefix('{'))
            .ok_or(ParseError::NoCurrentCommand)?;
        let (command, rest) = rest.split_once('}').ok_or(ParseError::NoCurrentCommand)?;
        let message = rest
            .strip_prefix(char::is_whitespace)
            .ok_or(ParseError::NoMessage)?
            .trim_end_matches(['\r', '\n']);
        if message.is_empty() {
            return Err(ParseError::NoMessage.into());
        }

        Ok(Self {
            code,
            command_list_index,
            command: command.to_owned(),
            message: message.to_owned(),
        })
    }
}

fn parse_command_index(idx: &str) -> u32 {
    if idx.bytes().all(|b| b.is_ascii_digit()) {
        idx.parse().unwrap_or(u32::MAX)
    } else {
        0
    }
}
