// src/system/quote.rs

use crate::system::Platform;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Anything outside this set forces POSIX single-quoting.
    static ref POSIX_UNSAFE: Regex = Regex::new(r"[^A-Za-z0-9_@%+=:,./-]").expect("valid regex");
    /// Control characters, whitespace, quotes and `cmd.exe` metacharacters.
    static ref WINDOWS_SPECIAL: Regex = Regex::new(r#"[\x00-\x20"^%~!@&?*<>|()=]"#).expect("valid regex");
}

/// Quotes `arg` so it survives as a single token in a space-joined command line
/// interpreted with `platform`'s conventions. Arguments that need no quoting are
/// borrowed back unchanged.
pub fn quote(arg: &str, platform: Platform) -> Cow<'_, str> {
    match platform {
        Platform::Windows => quote_windows(arg),
        Platform::Posix => quote_posix(arg),
    }
}

/// POSIX `sh` quoting: wrap in single quotes and splice embedded single quotes as `'"'"'`.
pub fn quote_posix(arg: &str) -> Cow<'_, str> {
    if arg.is_empty() {
        return Cow::Borrowed("''");
    }
    if !POSIX_UNSAFE.is_match(arg) {
        return Cow::Borrowed(arg);
    }
    Cow::Owned(format!("'{}'", arg.replace('\'', r#"'"'"'"#)))
}

/// `cmd.exe` / MSVC argv quoting.
///
/// Embedded `"` are doubled, the whole argument is wrapped in `"`, and every run of
/// backslashes that ends right before a `"` is doubled so the quote is not escaped.
pub fn quote_windows(arg: &str) -> Cow<'_, str> {
    if !WINDOWS_SPECIAL.is_match(arg) {
        return Cow::Borrowed(arg);
    }

    let wrapped = format!("\"{}\"", arg.replace('"', "\"\""));
    let mut out = String::with_capacity(wrapped.len() + 8);
    let mut pending_backslashes = 0usize;
    for ch in wrapped.chars() {
        match ch {
            '\\' => pending_backslashes += 1,
            '"' => {
                out.extend(std::iter::repeat_n('\\', pending_backslashes * 2));
                pending_backslashes = 0;
                out.push('"');
            }
            other => {
                out.extend(std::iter::repeat_n('\\', pending_backslashes));
                pending_backslashes = 0;
                out.push(other);
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', pending_backslashes));
    Cow::Owned(out)
}

/// Quotes each argument and joins them with single spaces.
pub fn join_command<S: AsRef<str>>(args: &[S], platform: Platform) -> String {
    args.iter()
        .map(|arg| quote(arg.as_ref(), platform))
        .collect::<Vec<_>>()
        .join(" ")
}

// MARK: --- UNIT TESTS ---
