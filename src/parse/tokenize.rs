/// Tokenize a command part into words using shlex (POSIX word splitting).
pub fn tokenize(part: &str) -> Vec<String> {
    shlex::split(part).unwrap_or_else(|| {
        // Fallback: simple whitespace splitting if shlex can't parse
        part.split_whitespace().map(String::from).collect()
    })
}

/// The first word of a command part — the command name being invoked.
pub fn lead_word(part: &str) -> String {
    tokenize(part).into_iter().next().unwrap_or_default()
}
