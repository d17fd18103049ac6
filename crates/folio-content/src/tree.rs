//! In-memory content tree.
//!
//! Every command owns at most one page of its own plus any number of named
//! sub-pages. Command names are stored lowercased so the lowercased command
//! the resolver produces always finds them.

use std::collections::BTreeMap;

use crate::split_lines;

/// Pages loaded for a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPages {
    /// The command's own page, already split into display lines.
    pub page: Option<Vec<String>>,
    /// Sub-pages keyed by their display name as authored.
    pub sub_pages: BTreeMap<String, Vec<String>>,
}

/// A read-only tree of portfolio documents.
#[derive(Debug, Clone, Default)]
pub struct ContentTree {
    commands: BTreeMap<String, CommandPages>,
}

/// Key commands the same way the resolver lowercases what the user types.
fn command_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ContentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page of `command`. Replaces any previous page.
    pub fn insert_page(&mut self, command: &str, text: &str) {
        let key = command_key(command);
        if key.is_empty() {
            log::warn!("Ignoring page with an empty command name");
            return;
        }
        self.commands.entry(key).or_default().page = Some(split_lines(text));
    }

    /// Set the sub-page `sub` of `command`. Replaces any previous sub-page
    /// with the same display name.
    pub fn insert_sub_page(&mut self, command: &str, sub: &str, text: &str) {
        let key = command_key(command);
        if key.is_empty() {
            log::warn!("Ignoring sub-page '{sub}' with an empty command name");
            return;
        }
        self.commands
            .entry(key)
            .or_default()
            .sub_pages
            .insert(sub.to_string(), split_lines(text));
    }

    /// Pages of a single command.
    pub fn get(&self, command: &str) -> Option<&CommandPages> {
        self.commands.get(&command_key(command))
    }

    /// All commands in name order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &CommandPages)> {
        self.commands.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of commands with at least one page.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the tree holds no pages at all.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_is_empty() {
        let tree = ContentTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.get("about").is_none());
    }

    #[test]
    fn page_is_split_into_lines() {
        let mut tree = ContentTree::new();
        tree.insert_page("about", "Hi.\nI build things.");
        let pages = tree.get("about").unwrap();
        assert_eq!(
            pages.page.as_deref(),
            Some(&["Hi.".to_string(), "I build things.".to_string()][..])
        );
        assert!(pages.sub_pages.is_empty());
    }

    #[test]
    fn command_names_are_lowercased() {
        let mut tree = ContentTree::new();
        tree.insert_page(" About ", "x");
        assert!(tree.get("about").is_some());
        assert!(tree.get("ABOUT").is_some());
        assert_eq!(tree.commands().next().unwrap().0, "about");
    }

    #[test]
    fn sub_pages_keep_display_name() {
        let mut tree = ContentTree::new();
        tree.insert_sub_page("experience", "Acme Corp", "Engineer");
        tree.insert_sub_page("experience", "help", "usage");
        let pages = tree.get("experience").unwrap();
        assert!(pages.page.is_none());
        let names: Vec<&str> = pages.sub_pages.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Acme Corp", "help"]);
    }

    #[test]
    fn page_and_sub_pages_share_a_command() {
        let mut tree = ContentTree::new();
        tree.insert_sub_page("experience", "Acme Corp", "Engineer");
        tree.insert_page("experience", "Where I've worked");
        let pages = tree.get("experience").unwrap();
        assert!(pages.page.is_some());
        assert_eq!(pages.sub_pages.len(), 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn empty_command_name_is_ignored() {
        let mut tree = ContentTree::new();
        tree.insert_page("   ", "x");
        tree.insert_sub_page("", "sub", "x");
        assert!(tree.is_empty());
    }

    #[test]
    fn commands_iterate_in_name_order() {
        let mut tree = ContentTree::new();
        tree.insert_page("projects", "p");
        tree.insert_page("about", "a");
        tree.insert_page("help", "h");
        let names: Vec<&str> = tree.commands().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["about", "help", "projects"]);
    }
}
