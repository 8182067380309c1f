//! Data file configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where termbook finds its data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermbookConfig {
    /// Directory holding the data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Glossary terms, relative to `data_dir`.
    #[serde(default = "default_terms_file")]
    pub terms_file: PathBuf,
    /// Texts and translations, relative to `data_dir`.
    #[serde(default = "default_texts_file")]
    pub texts_file: PathBuf,
    /// Quiz questions, relative to `data_dir`.
    #[serde(default = "default_quiz_file")]
    pub quiz_file: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_terms_file() -> PathBuf {
    PathBuf::from("terms.csv")
}
fn default_texts_file() -> PathBuf {
    PathBuf::from("texts.csv")
}
fn default_quiz_file() -> PathBuf {
    PathBuf::from("tests.csv")
}

impl Default for TermbookConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            terms_file: default_terms_file(),
            texts_file: default_texts_file(),
            quiz_file: default_quiz_file(),
        }
    }
}

impl TermbookConfig {
    /// Config rooted at `data_dir` with default file names.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn terms_path(&self) -> PathBuf {
        self.data_dir.join(&self.terms_file)
    }

    pub fn texts_path(&self) -> PathBuf {
        self.data_dir.join(&self.texts_file)
    }

    pub fn quiz_path(&self) -> PathBuf {
        self.data_dir.join(&self.quiz_file)
    }
}

/// Expand `${VAR_NAME}` references in a string.
///
/// Substituted values are copied through as-is and never rescanned. An unset
/// variable is an error; an unterminated `${` is kept literally.
fn resolve_env_vars(s: &str) -> Result<String> {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + 2 + len];
        let value = std::env::var(var_name)
            .with_context(|| format!("environment variable {var_name} is not set"))?;
        result.push_str(&rest[..start]);
        result.push_str(&value);
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    Ok(result)
}

fn resolve_path(path: &Path) -> Result<PathBuf> {
    let resolved = resolve_env_vars(&path.to_string_lossy())
        .with_context(|| format!("failed to expand path: {}", path.display()))?;
    Ok(PathBuf::from(resolved))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `termbook.toml` in the current directory
/// 2. `~/.config/termbook/config.toml`
///
/// `TERMBOOK_DATA_DIR` overrides `data_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<TermbookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("termbook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<TermbookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => TermbookConfig::default(),
    };

    if let Ok(dir) = std::env::var("TERMBOOK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir)?;
    config.terms_file = resolve_path(&config.terms_file)?;
    config.texts_file = resolve_path(&config.texts_file)?;
    config.quiz_file = resolve_path(&config.quiz_file)?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("termbook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_TERMBOOK_TEST_VAR", "corpus");
        assert_eq!(resolve_env_vars("${_TERMBOOK_TEST_VAR}").unwrap(), "corpus");
        assert_eq!(
            resolve_env_vars("/srv/${_TERMBOOK_TEST_VAR}/data").unwrap(),
            "/srv/corpus/data"
        );
        assert_eq!(
            resolve_env_vars("${unterminated").unwrap(),
            "${unterminated"
        );
        std::env::remove_var("_TERMBOOK_TEST_VAR");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        std::env::set_var("_TERMBOOK_SELF_REF", "${_TERMBOOK_SELF_REF}");
        std::env::set_var("_TERMBOOK_SECOND", "b");

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(resolve_env_vars("/srv/${_TERMBOOK_SELF_REF}/${_TERMBOOK_SECOND}"));
        });
        let resolved = rx
            .recv_timeout(std::time::Duration::from_secs(2))
            .expect("expansion did not terminate")
            .unwrap();
        assert_eq!(resolved, "/srv/${_TERMBOOK_SELF_REF}/b");

        std::env::remove_var("_TERMBOOK_SELF_REF");
        std::env::remove_var("_TERMBOOK_SECOND");
    }

    #[test]
    fn unset_variable_is_an_error() {
        std::env::remove_var("_TERMBOOK_NEVER_SET");
        let err = resolve_env_vars("${_TERMBOOK_NEVER_SET}/data").unwrap_err();
        assert!(err.to_string().contains("_TERMBOOK_NEVER_SET"));
    }

    #[test]
    fn unset_variable_in_config_fails_loading() {
        std::env::remove_var("_TERMBOOK_NEVER_SET_DIR");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termbook.toml");
        std::fs::write(&path, "data_dir = \"${_TERMBOOK_NEVER_SET_DIR}/data\"\n").unwrap();
        let err = load_config_from(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("_TERMBOOK_NEVER_SET_DIR"));
    }

    #[test]
    fn default_config_paths() {
        let config = TermbookConfig::default();
        assert_eq!(config.terms_path(), PathBuf::from("./data/terms.csv"));
        assert_eq!(config.texts_path(), PathBuf::from("./data/texts.csv"));
        assert_eq!(config.quiz_path(), PathBuf::from("./data/tests.csv"));
    }

    #[test]
    fn parse_partial_config() {
        let config: TermbookConfig = toml::from_str(
            r#"
data_dir = "/var/lib/termbook"
quiz_file = "capitals.csv"
"#,
        )
        .unwrap();
        assert_eq!(
            config.quiz_path(),
            PathBuf::from("/var/lib/termbook/capitals.csv")
        );
        assert_eq!(
            config.terms_path(),
            PathBuf::from("/var/lib/termbook/terms.csv")
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termbook.toml");
        std::fs::write(&path, "terms_file = \"glossary.csv\"\n").unwrap();
        let config = load_config_from(Some(path.as_path())).unwrap();
        assert!(config.terms_path().ends_with("glossary.csv"));
    }
}
