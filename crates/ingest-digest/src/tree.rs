//! Directory tree rendering

use std::collections::BTreeMap;

use crate::NormalizedPath;

/// In-memory directory tree built from the included file paths.
///
/// Only directories that contain at least one included file appear.
#[derive(Debug, Default)]
pub struct DirTree {
    dirs: BTreeMap<String, DirTree>,
    files: Vec<String>,
}

impl DirTree {
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a NormalizedPath>) -> Self {
        let mut tree = Self::default();
        for path in paths {
            tree.insert(path);
        }
        tree
    }

    fn insert(&mut self, path: &NormalizedPath) {
        let components: Vec<&str> = path.components().collect();
        let Some((file, dirs)) = components.split_last() else {
            return;
        };

        let mut node = self;
        for dir in dirs {
            node = node.dirs.entry((*dir).to_string()).or_default();
        }
        node.files.push((*file).to_string());
    }

    /// Render the tree under a `Directory structure:` heading, rooted at
    /// `root_name/`.
    pub fn render(&self, root_name: &str) -> String {
        let mut out = String::from("Directory structure:\n");
        out.push_str(&format!("└── {}/\n", root_name));
        self.render_children("    ", &mut out);
        out.trim_end_matches('\n').to_string()
    }

    /// File paths in display order: the order the tree prints them in.
    pub fn ordered_paths(&self) -> Vec<NormalizedPath> {
        let mut out = Vec::new();
        self.collect_paths(&NormalizedPath::new(""), &mut out);
        out
    }

    fn collect_paths(&self, prefix: &NormalizedPath, out: &mut Vec<NormalizedPath>) {
        for entry in self.entries() {
            match entry {
                Entry::File(name) => out.push(prefix.join(name)),
                Entry::Dir(name, child) => child.collect_paths(&prefix.join(name), out),
            }
        }
    }

    fn render_children(&self, indent: &str, out: &mut String) {
        let entries = self.entries();
        let count = entries.len();

        for (idx, entry) in entries.into_iter().enumerate() {
            let last = idx + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            let child_indent = format!("{}{}", indent, if last { "    " } else { "│   " });

            match entry {
                Entry::File(name) => out.push_str(&format!("{indent}{connector}{name}\n")),
                Entry::Dir(name, child) => {
                    out.push_str(&format!("{indent}{connector}{name}/\n"));
                    child.render_children(&child_indent, out);
                }
            }
        }
    }

    /// Children sorted README first, then files, then directories, each
    /// group alphabetical.
    fn entries(&self) -> Vec<Entry<'_>> {
        let mut files: Vec<&str> = self.files.iter().map(String::as_str).collect();
        files.sort_by_key(|name| (!is_readme(name), name.to_lowercase()));

        let mut dirs: Vec<(&String, &DirTree)> = self.dirs.iter().collect();
        dirs.sort_by_key(|(name, _)| name.to_lowercase());

        files
            .into_iter()
            .map(Entry::File)
            .chain(dirs.into_iter().map(|(name, child)| Entry::Dir(name, child)))
            .collect()
    }
}

enum Entry<'a> {
    File(&'a str),
    Dir(&'a str, &'a DirTree),
}

fn is_readme(name: &str) -> bool {
    name.to_lowercase().starts_with("readme")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree(paths: &[&str]) -> DirTree {
        let paths: Vec<NormalizedPath> = paths.iter().map(|p| NormalizedPath::new(p)).collect();
        DirTree::from_paths(&paths)
    }

    #[test]
    fn renders_nested_tree() {
        let rendered = tree(&["src/main.rs", "README.md", "src/lib/mod.rs", "Cargo.toml"])
            .render("demo");

        let expected = "\
Directory structure:
└── demo/
    ├── README.md
    ├── Cargo.toml
    └── src/
        ├── main.rs
        └── lib/
            └── mod.rs";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn ordered_paths_follow_display_order() {
        let ordered = tree(&["b/x.txt", "a.txt", "readme.txt", "a/y.txt"]).ordered_paths();
        let ordered: Vec<&str> = ordered.iter().map(|p| p.as_str()).collect();
        assert_eq!(ordered, vec!["readme.txt", "a.txt", "a/y.txt", "b/x.txt"]);
    }

    #[test]
    fn empty_tree_renders_root_only() {
        assert_eq!(
            DirTree::default().render("empty"),
            "Directory structure:\n└── empty/"
        );
    }
}
