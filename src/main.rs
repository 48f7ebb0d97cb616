//! cc-chaingate binary: reads a PreToolUse hook request from stdin and
//! writes a permission decision to stdout.
//!
//! Always exits 0 and always prints exactly one JSON object: either `{}`
//! (no opinion — the host applies its default handling) or an allow
//! decision. Malformed input and unreadable configuration degrade to `{}`.

use serde::Deserialize;
use std::io::Read;

use cc_chaingate::config::Config;
use cc_chaingate::eval::{Gate, Verdict};
use cc_chaingate::logging;
use cc_chaingate::settings::RuleSet;

#[derive(Deserialize)]
struct HookInput {
    tool_name: Option<String>,
    tool_input: Option<ToolInput>,
}

#[derive(Deserialize)]
struct ToolInput {
    command: Option<String>,
}

fn print_no_opinion() {
    println!("{{}}");
}

fn main() {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        print_no_opinion();
        return;
    }

    let hook_input: HookInput = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(_) => {
            print_no_opinion();
            return;
        }
    };

    // The hook may be wired with a broader matcher; only Bash calls carry commands.
    if let Some(tool) = hook_input.tool_name.as_deref()
        && tool != "Bash"
    {
        print_no_opinion();
        return;
    }

    let command = hook_input
        .tool_input
        .and_then(|t| t.command)
        .unwrap_or_default();

    let config = Config::load();
    if config.settings.log_decisions {
        logging::init();
    }

    let rules = RuleSet::load(&config.settings_path());
    let result = Gate::new(&rules, &config).evaluate(&command);

    if config.settings.log_decisions {
        logging::log_decision(&command, &result);
    }

    match result.verdict {
        Verdict::NoOpinion => print_no_opinion(),
        Verdict::Allow => {
            let output = serde_json::json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": "allow",
                    "permissionDecisionReason": result.reason,
                }
            });
            println!("{output}");
        }
    }
}
