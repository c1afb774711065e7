//! `.env`-style file parsing.
//!
//! Files seed variables that are not already set in the process environment.
//! The resolver overlays the process environment on top of whatever these
//! functions return, so file values can never shadow real variables.

use std::collections::HashMap;
use std::path::Path;

use crate::{ConfigResult, Environment};

/// Parse `KEY=VALUE` lines.
///
/// Blank lines and lines starting with `#` are ignored, as are lines with no
/// `=`. Whitespace around keys and values is trimmed. If a key repeats within
/// the file, the first occurrence wins.
pub fn parse_env_file(text: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.entry(key.to_string())
            .or_insert_with(|| value.trim().to_string());
    }
    vars
}

/// Load the environment file for `environment` from `dir`.
///
/// Tries `.env.<environment>` first, then falls back to `.env`. A missing file
/// is not an error; the file layer is optional seeding.
pub fn load_env_file(dir: &Path, environment: Environment) -> ConfigResult<HashMap<String, String>> {
    let candidates = [
        dir.join(format!(".env.{environment}")),
        dir.join(".env"),
    ];
    for path in candidates {
        if path.is_file() {
            let text = std::fs::read_to_string(&path)?;
            return Ok(parse_env_file(&text));
        }
    }
    Ok(HashMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let text = "\n# comment\nSHIPIT_DEV_BUCKET=my-bucket\n\n  # indented comment\nSHIPIT_REGION = eu-west-3 \n";
        let vars = parse_env_file(text);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["SHIPIT_DEV_BUCKET"], "my-bucket");
        assert_eq!(vars["SHIPIT_REGION"], "eu-west-3");
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let vars = parse_env_file("KEY=first\nKEY=second\n");
        assert_eq!(vars["KEY"], "first");
    }

    #[test]
    fn test_parse_ignores_lines_without_equals() {
        let vars = parse_env_file("not a pair\nKEY=value\n");
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_load_prefers_environment_specific_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "WHICH=generic\n").unwrap();
        std::fs::write(dir.path().join(".env.dev"), "WHICH=dev\n").unwrap();

        let vars = load_env_file(dir.path(), Environment::Dev).unwrap();
        assert_eq!(vars["WHICH"], "dev");

        let vars = load_env_file(dir.path(), Environment::Prod).unwrap();
        assert_eq!(vars["WHICH"], "generic");
    }

    #[test]
    fn test_load_missing_files_yield_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let vars = load_env_file(dir.path(), Environment::Prod).unwrap();
        assert!(vars.is_empty());
    }
}
