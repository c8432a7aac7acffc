use std::{
    borrow::Cow,
    path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR},
};

use crate::env::ENV;

/// Expands `$VAR` path segments first and a leading `~` second, the same way
/// a socket path coming from `MPD_HOST` or a config file is expected to be
/// written.
pub fn expand(inp: &str) -> String {
    let expanded = env_var_expand(inp);
    tilde_expand(&expanded).into_owned()
}

pub fn tilde_expand(inp: &str) -> Cow<'_, str> {
    let Some(home) = ENV.var("HOME") else {
        return Cow::Borrowed(inp);
    };
    let home = home.strip_suffix(MAIN_SEPARATOR).unwrap_or(&home);

    match inp.strip_prefix('~') {
        Some("") => Cow::Owned(home.to_owned()),
        Some(rest) if rest.starts_with(MAIN_SEPARATOR) => Cow::Owned(format!("{home}{rest}")),
        _ => Cow::Borrowed(inp),
    }
}

/// Only segments consisting entirely of `$NAME` are expanded. Unknown
/// variables are left untouched.
pub fn env_var_expand(inp: &str) -> String {
    inp.split(MAIN_SEPARATOR)
        .map(|part| match part.strip_prefix('$') {
            Some(key) => ENV.var(key).unwrap_or_else(|| part.to_owned()),
            None => part.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR)
}
