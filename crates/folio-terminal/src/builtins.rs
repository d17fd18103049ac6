//! Built-in behavioral commands: `clear` and `game`.

use crate::parser::Args;
use crate::registry::{Action, CommandOutput, RegistryBuilder};

/// Attach the built-in actions. Must run after content loading so `game`
/// keeps its help page.
pub fn register_builtins(builder: RegistryBuilder, welcome: &[String]) -> RegistryBuilder {
    builder
        .attach(
            "clear",
            Box::new(ClearCmd {
                banner: welcome.to_vec(),
            }),
        )
        .attach("game", Box::new(GameCmd))
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd {
    banner: Vec<String>,
}

impl Action for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &Args, _output: Option<&[String]>) -> CommandOutput {
        CommandOutput::Clear {
            banner: self.banner.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// game
// ---------------------------------------------------------------------------

struct GameCmd;

impl Action for GameCmd {
    fn name(&self) -> &str {
        "game"
    }
    fn execute(&self, _args: &Args, output: Option<&[String]>) -> CommandOutput {
        CommandOutput::StartGame {
            intro: output.map(<[String]>::to_vec).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ContentTree;

    fn welcome() -> Vec<String> {
        vec!["Welcome!".to_string()]
    }

    #[test]
    fn clear_returns_banner() {
        let reg = register_builtins(RegistryBuilder::new(), &welcome()).build();
        let def = reg.resolve("clear").unwrap();
        let out = def.action.as_ref().unwrap().execute(&Args::new(), None);
        assert_eq!(out, CommandOutput::Clear { banner: welcome() });
    }

    #[test]
    fn game_keeps_loaded_help_text() {
        let mut tree = ContentTree::new();
        tree.insert_page("game", "Guess a number\nType quit to leave");
        let builder = RegistryBuilder::new().load_content(&tree);
        let reg = register_builtins(builder, &welcome()).build();

        let def = reg.resolve("game").unwrap();
        assert_eq!(def.output.as_ref().unwrap().len(), 2);
        let out = def
            .action
            .as_ref()
            .unwrap()
            .execute(&Args::new(), def.output.as_deref());
        assert_eq!(
            out,
            CommandOutput::StartGame {
                intro: vec![
                    "Guess a number".to_string(),
                    "Type quit to leave".to_string()
                ]
            }
        );
    }

    #[test]
    fn game_without_content_starts_silently() {
        let reg = register_builtins(RegistryBuilder::new(), &welcome()).build();
        let def = reg.resolve("game").unwrap();
        let out = def.action.as_ref().unwrap().execute(&Args::new(), None);
        assert_eq!(out, CommandOutput::StartGame { intro: Vec::new() });
    }

    #[test]
    fn clear_keeps_loaded_content() {
        let mut tree = ContentTree::new();
        tree.insert_page("clear", "Clears the screen");
        let reg = register_builtins(RegistryBuilder::new().load_content(&tree), &welcome()).build();
        let def = reg.resolve("clear").unwrap();
        assert!(def.output.is_some());
        assert!(def.action.is_some());
    }
}
