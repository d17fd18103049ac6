//! Loading a content tree from a directory.
//!
//! Layout:
//!
//! ```text
//! <root>/<command>/content.txt           command page
//! <root>/<command>/<sub>/content.txt     sub-page named <sub>
//! ```
//!
//! Anything else in the tree is ignored.

use std::path::{Path, PathBuf};

use folio_types::error::{FolioError, Result};

use crate::tree::ContentTree;

/// File name holding a page's text.
pub const CONTENT_FILE: &str = "content.txt";

/// Subdirectories of `dir`, sorted by name, with their UTF-8 names.
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => dirs.push((name, entry.path())),
            Err(name) => log::warn!("Skipping non UTF-8 directory {name:?}"),
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Read `dir/content.txt` if it exists.
fn read_page(dir: &Path) -> Result<Option<String>> {
    let path = dir.join(CONTENT_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(std::fs::read_to_string(&path)?))
}

impl ContentTree {
    /// Load every command page and sub-page under `root`.
    pub fn from_directory(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(FolioError::Content(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let mut tree = ContentTree::new();
        for (command, command_dir) in subdirectories(root)? {
            if let Some(text) = read_page(&command_dir)? {
                tree.insert_page(&command, &text);
            }
            for (sub, sub_dir) in subdirectories(&command_dir)? {
                if let Some(text) = read_page(&sub_dir)? {
                    tree.insert_sub_page(&command, &sub, &text);
                }
            }
        }

        log::info!(
            "Loaded content for {} commands from {}",
            tree.len(),
            root.display()
        );
        Ok(tree)
    }
}
