//! Command registry.
//!
//! Built in two phases by [`RegistryBuilder`]: static content is loaded
//! first, then behavior is attached to named commands. Attaching an action
//! keeps whatever content the command already had. Once built the registry
//! is immutable.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use folio_content::{ContentTree, normalize_key};

use crate::parser::Args;

/// A content page nested under a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCommand {
    /// Display lines.
    pub output: Vec<String>,
    /// Name as authored, before key normalization.
    pub original_name: String,
}

/// What an action asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Print lines as regular output.
    Lines(Vec<String>),
    /// Wipe the history, then print `banner`.
    Clear { banner: Vec<String> },
    /// Start the guessing game, then print `intro`.
    StartGame { intro: Vec<String> },
}

/// Behavior attached to a command.
pub trait Action {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Run the action. `output` is the command's static content, if any.
    fn execute(&self, args: &Args, output: Option<&[String]>) -> CommandOutput;
}

/// Everything known about one command.
///
/// A command may have static output, sub-commands, an action, or any
/// combination. On a flagless call the action wins over static output.
#[derive(Default)]
pub struct CommandDef {
    pub output: Option<Vec<String>>,
    /// Sub-commands by normalized key.
    pub sub_commands: BTreeMap<String, SubCommand>,
    pub action: Option<Box<dyn Action>>,
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("output", &self.output)
            .field("sub_commands", &self.sub_commands)
            .field("action", &self.action.as_ref().map(|a| a.name()))
            .finish()
    }
}

impl CommandDef {
    /// Look up a sub-command by any spelling of its key.
    pub fn sub_command(&self, raw_key: &str) -> Option<&SubCommand> {
        self.sub_commands.get(&normalize_key(raw_key))
    }
}

/// Two-phase builder for [`CommandRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: HashMap<String, CommandDef>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase 1: load command pages and sub-pages from a content tree.
    pub fn load_content(mut self, tree: &ContentTree) -> Self {
        for (name, pages) in tree.commands() {
            let def = self.commands.entry(name.to_string()).or_default();
            if let Some(page) = &pages.page {
                def.output = Some(page.clone());
            }
            for (sub_name, lines) in &pages.sub_pages {
                let key = normalize_key(sub_name);
                if key.is_empty() {
                    log::warn!("Skipping sub-command '{sub_name}' of '{name}': empty key");
                    continue;
                }
                let previous = def.sub_commands.insert(
                    key.clone(),
                    SubCommand {
                        output: lines.clone(),
                        original_name: sub_name.clone(),
                    },
                );
                if let Some(prev) = previous {
                    log::warn!(
                        "Sub-command '{sub_name}' of '{name}' replaces '{}' (key '{key}')",
                        prev.original_name
                    );
                }
            }
        }
        self
    }

    /// Phase 2: attach an action to `name`, keeping any loaded content.
    pub fn attach(mut self, name: &str, action: Box<dyn Action>) -> Self {
        let def = self.commands.entry(name.to_lowercase()).or_default();
        if let Some(old) = def.action.replace(action) {
            log::warn!("Action '{}' on '{name}' was replaced", old.name());
        }
        self
    }

    pub fn build(self) -> CommandRegistry {
        log::info!("Command registry built with {} commands", self.commands.len());
        CommandRegistry {
            commands: self.commands,
        }
    }
}

/// Immutable name → definition lookup.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDef>,
}

impl CommandRegistry {
    /// Build a registry from content with the built-in commands attached.
    pub fn from_content(tree: &ContentTree, welcome: &[String]) -> Self {
        let builder = RegistryBuilder::new().load_content(tree);
        crate::builtins::register_builtins(builder, welcome).build()
    }

    /// Definition of `name` (already lowercased by the resolver).
    pub fn resolve(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(name)
    }

    /// Sub-command of `name` by any spelling of its key.
    pub fn sub_command(&self, name: &str, raw_key: &str) -> Option<&SubCommand> {
        self.resolve(name)?.sub_command(raw_key)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
