pub mod decision;

pub use decision::{Evaluation, Verdict};

use crate::config::Config;
use crate::parse::{self, ParsedChain, Shape};
use crate::rules::matches_any;
use crate::settings::RuleSet;

/// The decision gate for one invocation: the extracted rule set plus the
/// exempt command names.
pub struct Gate<'a> {
    rules: &'a RuleSet,
    exempt: Vec<String>,
}

impl<'a> Gate<'a> {
    pub fn new(rules: &'a RuleSet, config: &Config) -> Self {
        Self {
            rules,
            exempt: config.exempt.commands.clone(),
        }
    }

    /// Directory changes (and anything else in the exempt list) are safe
    /// inside a chain and are never checked against rules.
    fn is_exempt(&self, part: &str) -> bool {
        let word = parse::lead_word(part);
        !word.is_empty() && self.exempt.iter().any(|e| *e == word)
    }

    /// Gate a raw command string.
    ///
    /// Deny rules are checked before allow rules for every part, and the
    /// first denied or unmatched part settles the whole chain: no-opinion,
    /// without evaluating the remaining parts.
    pub fn evaluate(&self, command: &str) -> Evaluation {
        match parse::classify(command) {
            Shape::Simple => {
                return Evaluation {
                    verdict: Verdict::NoOpinion,
                    reason: "not a compound or subshell command".into(),
                };
            }
            Shape::Compound | Shape::Subshell => {}
        }

        let chain = parse::decompose(command);

        for part in &chain.parts {
            if self.is_exempt(part) {
                continue;
            }
            if matches_any(part, &self.rules.deny) {
                return Evaluation {
                    verdict: Verdict::NoOpinion,
                    reason: format!("part matches a deny rule: {part}"),
                };
            }
            if !matches_any(part, &self.rules.allow) {
                return Evaluation {
                    verdict: Verdict::NoOpinion,
                    reason: format!("part not covered by allow rules: {part}"),
                };
            }
        }

        Evaluation {
            verdict: Verdict::Allow,
            reason: describe_allow(&chain),
        }
    }
}

/// Human-readable justification for an approved chain.
fn describe_allow(chain: &ParsedChain) -> String {
    let n = chain.parts.len();
    if chain.operators.is_empty() {
        return format!("auto-approved: subshell with {n} allowed command(s)");
    }
    let mut ops: Vec<&str> = chain.operators.iter().map(|o| o.as_str()).collect();
    ops.sort();
    ops.dedup();
    format!(
        "auto-approved: compound command ({}) with {n} allowed command(s)",
        ops.join(", ")
    )
}
