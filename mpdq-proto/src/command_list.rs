use std::sync::OnceLock;

use strum::{AsRefStr, Display};

use crate::{
    command::Command,
    errors::{MpdError, MpdResult},
};

pub const COMMAND_LIST_BEGIN: &str = "command_list_begin\n";
pub const COMMAND_LIST_OK_BEGIN: &str = "command_list_ok_begin\n";
pub const COMMAND_LIST_END: &str = "command_list_end\n";
/// Sent by MPD on its own line after each command of a
/// [`ListMode::Separated`] list.
pub const LIST_OK: &str = "list_OK";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum ListMode {
    /// MPD answers the whole list as if it was a single command.
    #[default]
    #[strum(serialize = "command_list_begin")]
    Aggregate,
    /// MPD terminates the output of every command with `list_OK`.
    #[strum(serialize = "command_list_ok_begin")]
    Separated,
}

impl ListMode {
    pub fn begin(self) -> &'static str {
        match self {
            ListMode::Aggregate => COMMAND_LIST_BEGIN,
            ListMode::Separated => COMMAND_LIST_OK_BEGIN,
        }
    }
}

/// Batch of commands executed by MPD in one go.
#[derive(Debug, Clone)]
pub struct CommandList {
    commands: Vec<Command>,
    mode: ListMode,
    query: OnceLock<String>,
}

impl CommandList {
    pub fn new(commands: Vec<Command>, mode: ListMode) -> MpdResult<Self> {
        if commands.is_empty() {
            return Err(MpdError::InvalidInput("Command list cannot be empty".to_owned()));
        }

        Ok(Self { commands, mode, query: OnceLock::new() })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn build_query(&self) -> &str {
        self.query.get_or_init(|| {
            let mut query = String::from(self.mode.begin());
            for command in &self.commands {
                query.push_str(command.build_query());
            }
            query.push_str(COMMAND_LIST_END);
            query
        })
    }
}

impl PartialEq for CommandList {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.commands == other.commands
    }
}

impl Eq for CommandList {}
