//! Branch name checks applied before a name is handed to git.

const FORBIDDEN: &[char] = &[' ', '~', '^', ':', '?', '*', '[', '\\'];

/// Returns true when `name` is usable as a git branch name.
///
/// This follows the rules of `git check-ref-format --branch`, so anything
/// accepted here can be resolved as `origin/<name>` without being mistaken
/// for an option or a revision expression.
pub fn is_valid_branch(name: &str) -> bool {
    if name.is_empty() || name == "@" || name.starts_with('-') || name.ends_with('.') {
        return false;
    }

    if name.contains("..") || name.contains("@{") {
        return false;
    }

    if name
        .chars()
        .any(|c| c.is_ascii_control() || FORBIDDEN.contains(&c))
    {
        return false;
    }

    name.split('/')
        .all(|part| !part.is_empty() && !part.starts_with('.') && !part.ends_with(".lock"))
}
