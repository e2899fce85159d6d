//! # Pre-commit Configuration
//!
//! Read-only view of `.pre-commit-config.yaml`, used to decide whether a
//! tool is configured, plus a text-level URL rewrite that leaves comments and
//! layout of the rest of the file untouched.

use std::path::Path;

use errors::Defect;
use serde_yaml::{Mapping, Value};

use crate::compile_pattern;
use crate::fs::read_optional;

const REPO_LINE_PATTERN: &str =
    r#"^(?P<prefix>\s*-\s+repo:\s*|\s+repo:\s*)(?P<url>"[^"]*"|'[^']*'|[^\s#]+)(?P<rest>.*)$"#;

/// One entry of the `hooks` list of a repo.
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub id: String,
    raw: Mapping
}

impl Hook {
    /// Whether the entry only names the hook, without extra options.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.raw.len() == 1
    }
}

/// One entry of the top-level `repos` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Repo {
    pub url: String,
    pub hooks: Vec<Hook>,
    keys: Vec<String>
}

impl Repo {
    /// Keys of the entry in file order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn from_value(index: usize, value: &Value) -> Result<Self, String> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| format!("repos[{index}] is not a mapping"))?;
        let keys = mapping
            .keys()
            .filter_map(|key| key.as_str().map(str::to_string))
            .collect();
        let url = mapping
            .get("repo")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("repos[{index}] has no repo URL"))?
            .to_string();
        let hooks = match mapping.get("hooks") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(entries)) => entries
                .iter()
                .enumerate()
                .map(|(hook_index, entry)| {
                    let raw = entry.as_mapping().cloned().ok_or_else(|| {
                        format!("repos[{index}].hooks[{hook_index}] is not a mapping")
                    })?;
                    let id = raw
                        .get("id")
                        .and_then(Value::as_str)
                        .ok_or_else(|| format!("repos[{index}].hooks[{hook_index}] has no id"))?
                        .to_string();
                    Ok(Hook { id, raw })
                })
                .collect::<Result<_, String>>()?,
            Some(_) => return Err(format!("repos[{index}].hooks is not a list"))
        };
        Ok(Self {
            url,
            hooks,
            keys
        })
    }
}

/// Parsed `.pre-commit-config.yaml` together with its source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecommitConfig {
    repos: Vec<Repo>,
    source: String
}

impl PrecommitConfig {
    /// Load the managed-hooks list. A missing file has no repos.
    pub fn load(path: &Path) -> Result<Self, Defect> {
        match read_optional(path)? {
            Some(source) => Self::parse(&source).map_err(|reason| Defect::parse(path, reason)),
            None => {
                tracing::debug!("{} does not exist, no hooks configured", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn parse(source: &str) -> Result<Self, String> {
        let document: Value = serde_yaml::from_str(source).map_err(|e| e.to_string())?;
        let repos = match &document {
            Value::Null => Vec::new(),
            Value::Mapping(mapping) => match mapping.get("repos") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Sequence(entries)) => entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| Repo::from_value(index, entry))
                    .collect::<Result<_, _>>()?,
                Some(_) => return Err("repos is not a list".to_string())
            },
            _ => return Err("top level is not a mapping".to_string())
        };
        Ok(Self {
            repos,
            source: source.to_string()
        })
    }

    #[must_use]
    pub fn repos(&self) -> &[Repo] {
        &self.repos
    }

    /// Index of the first repo whose URL matches `pattern` (regex search).
    pub fn get_repo_index(&self, pattern: &str) -> Result<Option<usize>, Defect> {
        let regex = compile_pattern(pattern)?;
        Ok(self.repos.iter().position(|repo| regex.is_match(&repo.url)))
    }

    pub fn find_repo(&self, pattern: &str) -> Result<Option<&Repo>, Defect> {
        Ok(self
            .get_repo_index(pattern)?
            .and_then(|index| self.repos.get(index)))
    }

    /// Source text with the URL of `repos[index]` replaced.
    ///
    /// Only the value on the matching `repo:` line changes. Returns `None`
    /// when the entry cannot be located in the text.
    pub fn with_repo_url(&self, index: usize, url: &str) -> Result<Option<String>, Defect> {
        let repo_line = compile_pattern(REPO_LINE_PATTERN)?;
        let mut seen = 0;
        let mut replaced = false;
        let mut output = String::with_capacity(self.source.len() + url.len());

        for line in self.source.split_inclusive('\n') {
            let (body, ending) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, "")
            };
            if !replaced {
                if let Some(captures) = repo_line.captures(body) {
                    if seen == index {
                        output.push_str(&captures["prefix"]);
                        output.push_str(url);
                        output.push_str(&captures["rest"]);
                        output.push_str(ending);
                        replaced = true;
                        continue;
                    }
                    seen += 1;
                }
            }
            output.push_str(line);
        }
        Ok(replaced.then_some(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "\
ci:
  autoupdate_commit_msg: 'ci: update hooks'

repos:
  # formatting
  - repo: https://github.com/psf/black
    rev: 22.3.0
    hooks:
      - id: black

  - repo: https://github.com/streetsidesoftware/cspell-cli
    rev: v5.9.1
    hooks:
      - id: cspell
";

    #[test]
    fn test_parse_repos() {
        let config = PrecommitConfig::parse(CONFIG).unwrap();
        assert_eq!(config.repos().len(), 2);

        let cspell = &config.repos()[1];
        assert_eq!(cspell.url, "https://github.com/streetsidesoftware/cspell-cli");
        assert_eq!(cspell.keys(), ["repo", "rev", "hooks"]);
        assert_eq!(cspell.hooks.len(), 1);
        assert_eq!(cspell.hooks[0].id, "cspell");
        assert!(cspell.hooks[0].is_bare());
    }

    #[test]
    fn test_find_repo_by_pattern() {
        let config = PrecommitConfig::parse(CONFIG).unwrap();

        assert_eq!(config.get_repo_index(r".*/cspell-cli$").unwrap(), Some(1));
        assert_eq!(config.get_repo_index("psf/black").unwrap(), Some(0));
        assert!(config.find_repo("mirrors-cspell").unwrap().is_none());
    }

    #[test]
    fn test_invalid_pattern_is_defect() {
        let config = PrecommitConfig::parse(CONFIG).unwrap();
        let err = config.get_repo_index("(unclosed").unwrap_err();
        assert!(matches!(err, Defect::Pattern { .. }));
    }

    #[test]
    fn test_with_repo_url_keeps_layout() {
        let source = CONFIG.replace(
            "https://github.com/streetsidesoftware/cspell-cli",
            "https://github.com/pre-commit/mirrors-cspell  # spelling"
        );
        let config = PrecommitConfig::parse(&source).unwrap();

        let rewritten = config
            .with_repo_url(1, "https://github.com/streetsidesoftware/cspell-cli")
            .unwrap()
            .unwrap();

        assert_eq!(
            rewritten,
            CONFIG.replace(
                "streetsidesoftware/cspell-cli\n",
                "streetsidesoftware/cspell-cli  # spelling\n"
            )
        );
    }

    #[test]
    fn test_with_repo_url_out_of_range() {
        let config = PrecommitConfig::parse(CONFIG).unwrap();
        assert!(config.with_repo_url(5, "x").unwrap().is_none());
    }

    #[test]
    fn test_empty_and_missing() {
        assert!(PrecommitConfig::parse("").unwrap().repos().is_empty());

        let dir = tempfile::TempDir::new().unwrap();
        let config = PrecommitConfig::load(&dir.path().join(".pre-commit-config.yaml")).unwrap();
        assert!(config.repos().is_empty());
    }

    #[test]
    fn test_malformed_entries() {
        assert!(PrecommitConfig::parse("repos: 3\n").is_err());
        assert!(PrecommitConfig::parse("repos:\n  - rev: v1\n").is_err());
        assert!(PrecommitConfig::parse("- a\n- b\n").is_err());
    }
}
