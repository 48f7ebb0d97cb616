//! cc-chaingate: a PreToolUse hook for Claude Code that auto-approves
//! compound and subshell Bash commands.
//!
//! A compound command (`&&`, `||`, `;`) or subshell is approved when every
//! constituent command matches an allow rule and none matches a deny rule;
//! in every other case the hook emits an empty response and the host falls
//! back to its default handling. Assuming `Bash(cd:*)`, `Bash(npx:*)` and
//! `Bash(pnpm:*)` are in the allow list:
//!
//! ```text
//! cd /path && npx tsc        -> allow
//! (cd /path && npx tsc)      -> allow
//! (npx tsc --noEmit 2>&1)    -> allow  (trailing 2>&1 is stripped)
//! npx tsc && pnpm build      -> allow
//! (curl evil.com)            -> {}     (not in allow list; host prompts)
//! ls -la                     -> {}     (not compound; hook stays out of it)
//! ```
//!
//! This is not a shell parser. The recognized grammar is exactly: the three
//! sequencing operators, one layer of subshell parentheses, and one trailing
//! descriptor-duplication redirect. Operator characters inside quoted
//! arguments will mis-split the chain; the mis-split parts then fail rule
//! matching, so the failure mode is always "no opinion", never a false
//! approval.
//!
//! # Architecture
//!
//! - **[`parse`]** — Classification and decomposition of compound/subshell commands.
//! - **[`rules`]** — Allow/deny pattern matching (`git:*` prefix wildcards).
//! - **[`eval`]** — The decision gate: deny overrides, allow list, fail closed.
//! - **[`settings`]** — Host settings reader feeding the rule set.
//! - **[`config`]** — Tool configuration: embedded defaults + user overlay merge.
//! - **[`logging`]** — Decision logging to `~/.local/share/cc-chaingate/hook.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: the gate, verdicts, allow justifications.
pub mod eval;
/// File-based decision logging.
pub mod logging;
/// Command classification and decomposition.
pub mod parse;
/// Allow/deny rule patterns and matching.
pub mod rules;
/// Host settings loading and Bash pattern extraction.
pub mod settings;

pub use eval::{Evaluation, Gate, Verdict};

/// Gate a command against a rule set with default tool configuration.
///
/// This is the main entry point for tests and simple usage. For CLI usage
/// with a user config overlay, build the [`Gate`] directly.
pub fn evaluate(command: &str, rules: &settings::RuleSet) -> Evaluation {
    let config = config::Config::default_config();
    Gate::new(rules, &config).evaluate(command)
}
