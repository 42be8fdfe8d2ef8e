/// Mask a secret for display, keeping at most the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.trim().chars().collect();
    if chars.is_empty() {
        return "(not set)".to_owned();
    }

    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

/// Shorten text to `max_chars` characters on a single line, adding `…` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }

    let mut out: String = flattened.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Prefix every line of `text` with `indent`.
pub fn indent_block(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
