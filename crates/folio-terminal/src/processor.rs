//! Dispatch of submitted lines.
//!
//! Every outcome, including user mistakes, ends up as history lines. Nothing
//! here can fail.

use crate::history::Reply;
use crate::parser::{Args, FlagValue, parse};
use crate::registry::{CommandDef, CommandRegistry};
use crate::session::Session;

/// The one command with flags.
pub const EXPERIENCE: &str = "experience";
/// The experience flag that takes a sub-command name as its value.
pub const VALUE_FLAG: &str = "company";
const EXPERIENCE_FLAGS: &[&str] = &[VALUE_FLAG, "help", "list"];

/// Flags `command` accepts.
pub fn recognized_flags(command: &str) -> &'static [&'static str] {
    if command == EXPERIENCE {
        EXPERIENCE_FLAGS
    } else {
        &[]
    }
}

/// Process a submitted line against `registry`, writing results into the
/// session history. Blank input does nothing.
///
/// While a game is running it sees the line first and consumes it.
pub fn process_command(input: &str, registry: &CommandRegistry, session: &mut Session) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return;
    }

    if let Some(reply) = session.game.process_input(trimmed) {
        session.history.push_reply(reply);
        return;
    }

    let parsed = parse(trimmed);
    let Some(def) = registry.resolve(&parsed.command) else {
        log::debug!("Unknown command: {}", parsed.command);
        session
            .history
            .push_reply(Reply::error(format!("Command not found: {}", parsed.command)));
        return;
    };
    log::debug!("Dispatching '{}' with {} flags", parsed.command, parsed.args.len());

    if parsed.command == EXPERIENCE {
        for reply in experience(def, &parsed.args) {
            session.history.push_reply(reply);
        }
    } else if !parsed.args.is_empty() {
        session.history.push_reply(Reply::error(format!(
            "Command '{}' does not accept any flags.",
            parsed.command
        )));
    } else if let Some(action) = &def.action {
        log::debug!("Running action '{}'", action.name());
        let output = action.execute(&parsed.args, def.output.as_deref());
        session.apply(output);
    } else if let Some(output) = &def.output {
        session.history.push_reply(Reply::output(output.iter().cloned()));
    }
}

fn flag_set(args: &Args, name: &str) -> bool {
    args.get(name).is_some_and(FlagValue::is_set)
}

/// `experience`: help > list > company > invalid flags > own page.
/// A flag given an empty value counts as not set.
fn experience(def: &CommandDef, args: &Args) -> Vec<Reply> {
    if flag_set(args, "help") {
        return vec![match def.sub_command("help") {
            Some(help) => Reply::output(help.output.iter().cloned()),
            None => Reply::error(
                "Usage: experience --company \"COMPANY_NAME\" or experience --list",
            ),
        }];
    }

    if flag_set(args, "list") {
        let companies: Vec<String> = def
            .sub_commands
            .values()
            .filter(|sub| sub.original_name.to_lowercase() != "help")
            .map(|sub| format!("  - <span class=\"text-cyan-400\">{}</span>", sub.original_name))
            .collect();
        if companies.is_empty() {
            return vec![Reply::output(["No companies found."])];
        }
        let mut lines = vec!["Available companies:".to_string()];
        lines.extend(companies);
        return vec![Reply::output(lines)];
    }

    if let Some(FlagValue::Text(company)) = args.get(VALUE_FLAG)
        && !company.is_empty()
    {
        return vec![match def.sub_command(company) {
            Some(sub) => Reply::output(sub.output.iter().cloned()),
            None => Reply::error(format!("Experience for company \"{company}\" not found.")),
        }];
    }

    if !args.is_empty() {
        return vec![
            Reply::error(format!("Invalid flag for command '{EXPERIENCE}'.")),
            Reply::output([format!("Run '{EXPERIENCE} --help' for available flags.")]),
        ];
    }

    def.output
        .iter()
        .map(|lines| Reply::output(lines.iter().cloned()))
        .collect()
}
