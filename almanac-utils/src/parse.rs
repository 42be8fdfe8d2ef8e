use crate::COMMAND_PREFIX;

/// Split `/name rest of line` into `("name", "rest of line")`.
///
/// Returns `None` when the line is not a command.
pub fn parse_command(line: &str) -> Option<(&str, &str)> {
    let body = line.trim_start().strip_prefix(COMMAND_PREFIX)?;
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body.trim_end(), ""),
    };

    if name.is_empty() {
        return None;
    }

    Some((name, rest))
}

/// Turn the two-character sequence `\n` into a newline so multi-line text can
/// be entered on one terminal line. `\\` yields a single backslash.
pub fn unescape_newlines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
