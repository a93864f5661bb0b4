use std::path::Path;

/// Rewrites a file name into its normalized form: whitespace becomes
/// underscores and apostrophes are dropped.
pub fn normalize_file_name(name: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE: regex::Regex =
            regex::Regex::new(r"\s").expect("a valid regex pattern");
    }

    WHITESPACE.replace_all(name, "_").replace('\'', "")
}

/// Renders `path` relative to `root` for narration lines; paths outside the
/// root fall back to their full form.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
