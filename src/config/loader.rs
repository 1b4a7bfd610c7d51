//! Configuration loading

use std::path::{Path, PathBuf};

use crate::error::{HassfestError, HassfestResult};

use super::types::{Action, Config, Verbosity, CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HassfestResult<(Config, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HassfestError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<root>/hassfest.toml` (or defaults) and apply `HASSFEST_*` overrides
pub fn discover(root: &Path) -> HassfestResult<(Config, Vec<ConfigWarning>)> {
    let config_path = root.join(CONFIG_FILE);

    let (mut config, warnings) = if config_path.is_file() {
        tracing::debug!(path = %config_path.display(), "loading config file");
        load_with_warnings(&config_path)?
    } else {
        (Config::default(), Vec::new())
    };
    config.root = root.to_path_buf();

    let config = with_env_overrides(config, |key| std::env::var(key).ok())?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (HASSFEST_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> HassfestResult<Config> {
    // HASSFEST_ACTION
    if let Some(action) = get_env("HASSFEST_ACTION") {
        config.action = action.parse::<Action>()?;
    }

    // HASSFEST_VERBOSITY
    if let Some(verbosity) = get_env("HASSFEST_VERBOSITY") {
        config.output.verbosity = verbosity.parse::<Verbosity>()?;
    }

    // HASSFEST_COMPONENTS
    if let Some(components) = get_env("HASSFEST_COMPONENTS") {
        if !components.trim().is_empty() {
            config.paths.components = PathBuf::from(components);
        }
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["paths", "components", "output", "verbosity", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_key_finds_close_match() {
        assert_eq!(suggest_key("componets").as_deref(), Some("components"));
        assert_eq!(suggest_key("colour").as_deref(), Some("color"));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn find_line_number_is_one_based() {
        let content = "[paths]\ncomponets = \"x\"\n";
        assert_eq!(find_line_number(content, "componets"), Some(2));
        assert_eq!(find_line_number(content, "missing"), None);
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("color", "color"), 0);
        assert_eq!(levenshtein("colr", "color"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }
}
