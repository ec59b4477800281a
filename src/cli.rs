//! Command line interface of the `tocbar` binary.

use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use tocbar_core::location::PageLocation;
use tocbar_core::{MatchKind, SidebarConfig, SidebarError, TocTree, mount, resolve};

#[derive(Parser, Debug)]
#[command(name = "tocbar", version, about = "Render and inspect table-of-contents sidebars")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sidebar markup for a table of contents.
    Render {
        /// JSON file holding the table of contents.
        tree: PathBuf,
        /// Relative path from the page back to the site root.
        #[arg(long, default_value = "")]
        path_to_root: String,
        /// Render expand/collapse toggles on entries with children.
        #[arg(long)]
        toggles: bool,
        /// Start entries deeper than this level collapsed (top level is 1).
        #[arg(long)]
        fold_level: Option<usize>,
        /// Highlight the entry for this page URL.
        #[arg(long)]
        url: Option<String>,
    },
    /// Report which entry a page URL activates.
    Resolve {
        /// JSON file holding the table of contents.
        tree: PathBuf,
        /// Absolute URL of the page.
        #[arg(long)]
        url: String,
        /// Relative path from the page back to the site root.
        #[arg(long, default_value = "")]
        path_to_root: String,
        /// Print the resolved tree as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

/// Load a table of contents from a JSON file.
pub fn load_tree(path: &Path) -> Result<TocTree, SidebarError> {
    let json = std::fs::read_to_string(path)?;
    let tree = TocTree::from_json(&json)?;
    info!("Loaded {} entries from {}", tree.len(), path.display());
    Ok(tree)
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), SidebarError> {
    match cli.command {
        Command::Render {
            tree,
            path_to_root,
            toggles,
            fold_level,
            url,
        } => {
            let mut tree = load_tree(&tree)?;
            if let Some(level) = fold_level {
                tree.fold(level);
            }
            let config = SidebarConfig::default()
                .with_path_to_root(path_to_root)
                .with_toggles(toggles);
            if let Some(url) = url {
                tree.clear_active();
                let location = PageLocation::try_parse(&url)?;
                if let Some(found) = resolve::find_active(&tree, &location, &config) {
                    resolve::apply(&mut tree, &found.path);
                }
            }
            writeln!(out, "{}", mount::render(&tree, &config))?;
        }
        Command::Resolve {
            tree,
            url,
            path_to_root,
            json,
        } => {
            let mut tree = load_tree(&tree)?;
            tree.clear_active();
            let config = SidebarConfig::default().with_path_to_root(path_to_root);
            let location = PageLocation::try_parse(&url)?;
            let found = resolve::find_active(&tree, &location, &config);
            let expanded = found
                .as_ref()
                .map(|found| resolve::apply(&mut tree, &found.path))
                .unwrap_or_default();

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&tree)?)?;
                return Ok(());
            }

            match found {
                Some(found) => {
                    let label = tree
                        .get(&found.path)
                        .map(|node| node.label.as_str())
                        .unwrap_or_default();
                    let how = match found.matched_by {
                        MatchKind::Exact => "exact",
                        MatchKind::RootAlias => "root alias",
                    };
                    writeln!(out, "active: {} \"{}\" ({})", found.path, label, how)?;
                    for path in expanded {
                        writeln!(out, "expanded: {path}")?;
                    }
                }
                None => writeln!(out, "no entry matches {}", location.canonical())?,
            }
        }
    }
    Ok(())
}
