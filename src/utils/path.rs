use std::path::PathBuf;

/// Normalize a path string typed by a user or read from a config file.
///
/// - Trims surrounding whitespace
/// - Strips matching single or double quotes
/// - Expands a leading `~` to the home directory when one is known
pub fn expand_user_path(input: &str) -> PathBuf {
    let trimmed = input.trim();

    let unquoted = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    let rest = match unquoted.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(unquoted),
    };

    match dirs::home_dir() {
        Some(mut home) => {
            if !rest.is_empty() {
                home.push(rest);
            }
            home
        }
        None => PathBuf::from(unquoted),
    }
}
