use super::types::{Operator, ParsedChain, Shape};

/// Classify a raw command string before any decomposition work.
///
/// A command is a candidate for the gate if it contains one of the three
/// sequencing operators (`&&`, `||`, `;`) or its first non-whitespace
/// character is `(`. Detection is a plain substring scan: operator
/// characters inside quoted arguments classify as `Compound` anyway, and
/// the mis-split parts then fail rule matching downstream.
pub fn classify(command: &str) -> Shape {
    if command.trim_start().starts_with('(') {
        return Shape::Subshell;
    }
    if command.contains("&&") || command.contains("||") || command.contains(';') {
        return Shape::Compound;
    }
    Shape::Simple
}

/// Remove exactly one layer of subshell parentheses.
///
/// Nested subshells are not recursively unwrapped; a surviving inner
/// parenthesis is ordinary text and will fail matching.
fn strip_subshell(command: &str) -> &str {
    let s = command.trim();
    let s = s.strip_prefix('(').unwrap_or(s).trim();
    s.strip_suffix(')').unwrap_or(s)
}

/// Strip one trailing descriptor-duplication redirect (`2>&1`, `>&2`, ...)
/// from the very end of the string.
fn strip_trailing_fd_dup(command: &str) -> &str {
    let s = command.trim_end();
    let b = s.as_bytes();

    // digits after >&
    let mut i = s.len();
    while i > 0 && b[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i == s.len() {
        return s;
    }

    // the >& itself
    if i < 2 || b[i - 1] != b'&' || b[i - 2] != b'>' {
        return s;
    }
    i -= 2;

    // optional source descriptor before >
    while i > 0 && b[i - 1].is_ascii_digit() {
        i -= 1;
    }

    s[..i].trim_end()
}

/// Split a command at `&&`, `||`, and `;`.
///
/// No quote tracking: the recognized grammar is deliberately narrow, and
/// anything mis-split fails closed in the eval layer.
fn split_operators(command: &str) -> (Vec<String>, Vec<Operator>) {
    let mut parts = Vec::new();
    let mut operators = Vec::new();
    let mut buf = String::new();

    let chars: Vec<char> = command.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let c = chars[i];

        // Two-char operators
        if i + 1 < len {
            let op = match (c, chars[i + 1]) {
                ('&', '&') => Some(Operator::And),
                ('|', '|') => Some(Operator::Or),
                _ => None,
            };
            if let Some(op) = op {
                parts.push(buf.trim().to_string());
                operators.push(op);
                buf.clear();
                i += 2;
                continue;
            }
        }

        if c == ';' {
            parts.push(buf.trim().to_string());
            operators.push(Operator::Semi);
            buf.clear();
            i += 1;
            continue;
        }

        buf.push(c);
        i += 1;
    }

    let tail = buf.trim().to_string();
    if !tail.is_empty() {
        parts.push(tail);
    }

    parts.retain(|p| !p.is_empty());

    (parts, operators)
}

/// Decompose a compound or subshell command into its constituent parts.
///
/// One layer of subshell parentheses and one trailing fd-duplication
/// redirect are stripped before splitting. A command with no operators
/// decomposes to a single part holding the whole stripped string.
pub fn decompose(command: &str) -> ParsedChain {
    let inner = strip_subshell(command);
    let inner = strip_trailing_fd_dup(inner);
    let (parts, operators) = split_operators(inner);
    ParsedChain { parts, operators }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify ──

    #[test]
    fn classify_simple() {
        assert_eq!(classify("ls -la"), Shape::Simple);
    }

    #[test]
    fn classify_and() {
        assert_eq!(classify("ls && pwd"), Shape::Compound);
    }

    #[test]
    fn classify_or() {
        assert_eq!(classify("ls || pwd"), Shape::Compound);
    }

    #[test]
    fn classify_semi() {
        assert_eq!(classify("ls; pwd"), Shape::Compound);
    }

    #[test]
    fn classify_subshell() {
        assert_eq!(classify("(ls -la)"), Shape::Subshell);
    }

    #[test]
    fn classify_subshell_leading_whitespace() {
        assert_eq!(classify("   (ls -la)"), Shape::Subshell);
    }

    #[test]
    fn classify_pipe_is_simple() {
        // A single | is not a recognized operator
        assert_eq!(classify("cat file | grep pat"), Shape::Simple);
    }

    #[test]
    fn classify_single_ampersand_is_simple() {
        assert_eq!(classify("sleep 10 &"), Shape::Simple);
    }

    #[test]
    fn classify_inner_parens_is_simple() {
        // Parenthesis not in leading position does not make a subshell
        assert_eq!(classify("echo (not a subshell)"), Shape::Simple);
    }

    #[test]
    fn classify_empty() {
        assert_eq!(classify(""), Shape::Simple);
    }

    // ── strip_trailing_fd_dup ──

    #[test]
    fn fd_dup_stderr_to_stdout() {
        assert_eq!(strip_trailing_fd_dup("npx tsc --noEmit 2>&1"), "npx tsc --noEmit");
    }

    #[test]
    fn fd_dup_bare() {
        assert_eq!(strip_trailing_fd_dup("echo hi >&2"), "echo hi");
    }

    #[test]
    fn fd_dup_no_space() {
        assert_eq!(strip_trailing_fd_dup("cmd2>&1"), "cmd");
    }

    #[test]
    fn fd_dup_trailing_whitespace() {
        assert_eq!(strip_trailing_fd_dup("cmd 2>&1   "), "cmd");
    }

    #[test]
    fn fd_dup_absent() {
        assert_eq!(strip_trailing_fd_dup("ls -la"), "ls -la");
    }

    #[test]
    fn fd_dup_mid_string_untouched() {
        // Only the very end of the string is considered
        assert_eq!(
            strip_trailing_fd_dup("cmd 2>&1 | tee log"),
            "cmd 2>&1 | tee log"
        );
    }

    #[test]
    fn file_redirect_untouched() {
        assert_eq!(strip_trailing_fd_dup("ls > out.txt"), "ls > out.txt");
    }

    // ── split_operators ──

    #[test]
    fn split_no_operators() {
        let (parts, ops) = split_operators("ls -la");
        assert_eq!(parts, vec!["ls -la"]);
        assert!(ops.is_empty());
    }

    #[test]
    fn split_and() {
        let (parts, ops) = split_operators("ls && pwd");
        assert_eq!(parts, vec!["ls", "pwd"]);
        assert_eq!(ops, vec![Operator::And]);
    }

    #[test]
    fn split_mixed() {
        let (parts, ops) = split_operators("a && b || c; d");
        assert_eq!(parts, vec!["a", "b", "c", "d"]);
        assert_eq!(ops, vec![Operator::And, Operator::Or, Operator::Semi]);
    }

    #[test]
    fn split_no_surrounding_whitespace() {
        let (parts, _) = split_operators("npx tsc&&pnpm build");
        assert_eq!(parts, vec!["npx tsc", "pnpm build"]);
    }

    #[test]
    fn split_discards_empty_pieces() {
        let (parts, _) = split_operators("a ;; b &&");
        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn split_idempotent_on_single_part() {
        let (parts, _) = split_operators("npx tsc --noEmit");
        let (again, ops) = split_operators(&parts[0]);
        assert_eq!(again, parts);
        assert!(ops.is_empty());
    }

    // ── decompose ──

    #[test]
    fn decompose_compound() {
        let chain = decompose("cd /path && npx tsc");
        assert_eq!(chain.parts, vec!["cd /path", "npx tsc"]);
        assert_eq!(chain.operators, vec![Operator::And]);
    }

    #[test]
    fn decompose_subshell_with_fd_dup() {
        let chain = decompose("(npx tsc --noEmit 2>&1)");
        assert_eq!(chain.parts, vec!["npx tsc --noEmit"]);
        assert!(chain.operators.is_empty());
    }

    #[test]
    fn decompose_subshell_chain() {
        let chain = decompose("(cd /path && npx tsc)");
        assert_eq!(chain.parts, vec!["cd /path", "npx tsc"]);
    }

    #[test]
    fn decompose_strips_one_paren_layer_only() {
        let chain = decompose("((npx tsc))");
        assert_eq!(chain.parts, vec!["(npx tsc)"]);
    }

    #[test]
    fn decompose_empty_subshell() {
        let chain = decompose("()");
        assert!(chain.parts.is_empty());
    }

    #[test]
    fn decompose_no_operators_passes_through() {
        let chain = decompose("curl evil.com");
        assert_eq!(chain.parts, vec!["curl evil.com"]);
    }
}
