use std::sync::OnceLock;

use crate::command_list::CommandList;

/// A single MPD verb with its arguments.
///
/// The wire query is built lazily on the first call to
/// [`Command::build_query`] and cached afterwards. Changing the arguments
/// through [`Command::args_mut`] after that point has no effect on the query.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    args: Vec<String>,
    query: OnceLock<String>,
}

impl Command {
    pub fn new<I>(name: impl AsRef<str>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self {
            name: name.as_ref().trim().to_owned(),
            args: args.into_iter().map(|arg| arg.to_string()).collect(),
            query: OnceLock::new(),
        }
    }

    /// Command without any arguments, ie. `status` or `currentsong`.
    pub fn bare(name: impl AsRef<str>) -> Self {
        Self::new(name, std::iter::empty::<String>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn args_mut(&mut self) -> &mut Vec<String> {
        &mut self.args
    }

    /// `name\t"arg1"\t"arg2"\n`
    pub fn build_query(&self) -> &str {
        self.query.get_or_init(|| {
            let mut query = self.name.clone();
            for arg in &self.args {
                query.push('\t');
                query.push_str(&arg.as_str().quote());
            }
            query.push('\n');
            query
        })
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl Eq for Command {}

/// Anything that can be sent to MPD in a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executable {
    Single(Command),
    List(CommandList),
}

impl Executable {
    pub fn build_query(&self) -> &str {
        match self {
            Executable::Single(command) => command.build_query(),
            Executable::List(list) => list.build_query(),
        }
    }

    /// Verb of a single command or the verbs of every command in a list,
    /// comma separated. Only meant for logging.
    pub fn describe(&self) -> String {
        match self {
            Executable::Single(command) => command.name().to_owned(),
            Executable::List(list) => {
                list.commands().iter().map(Command::name).collect::<Vec<_>>().join(",")
            }
        }
    }
}

impl From<Command> for Executable {
    fn from(value: Command) -> Self {
        Self::Single(value)
    }
}

impl From<CommandList> for Executable {
    fn from(value: CommandList) -> Self {
        Self::List(value)
    }
}

pub(crate) trait StrExt {
    fn quote(self) -> String;
}

impl StrExt for &str {
    // Only the first double quote is swapped for a single quote, anything
    // else is passed through as is.
    fn quote(self) -> String {
        // reserve at least the input len + 2 for surrounding double quotes
        let mut result = String::with_capacity(self.len() + 2);

        result.push('"');
        result.push_str(&self.replacen('"', "'", 1));
        result.push('"');
        result
    }
}
