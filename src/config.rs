use std::env;
use std::path::{Path, PathBuf};

/// Number of edge servers generated when no override is given
pub const EDGE_SERVER_NUM: usize = 3;

/// Environment variable holding the project base directory
pub const PROJECT_PATH_VAR: &str = "PROJECT_PATH";

/// Location of the output file relative to the project base directory
pub const OUTPUT_RELATIVE_PATH: &str = "Main/config/json_files/config_main_server.json";

/// Errors raised while resolving settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PROJECT_PATH is not set (define it in the environment or in a .env file)")]
    MissingProjectPath,

    #[error("PROJECT_PATH is set but empty")]
    EmptyProjectPath,

    #[error("Edge server count {requested} is too large (the cloud server must also fit)")]
    TooManyEdgeServers { requested: usize },
}

/// Values supplied on the command line that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project_path: Option<PathBuf>,
    pub edge_server_num: Option<usize>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Resolved settings for a generator run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Project base directory. `None` only when an explicit output path was given.
    pub project_path: Option<PathBuf>,
    pub edge_server_num: usize,
    /// Explicit output file, bypassing the derived path
    pub output: Option<PathBuf>,
    /// Seed for reproducible address generation
    pub seed: Option<u64>,
}

impl Settings {
    /// Resolve settings from the process environment, loading `.env` first.
    ///
    /// Variables already present in the environment win over `.env` entries.
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {:?}", path),
            Err(e) if e.not_found() => log::debug!("No .env file found"),
            Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Resolve settings using `lookup` for environment variables
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_path = match overrides.project_path {
            Some(path) => Some(path),
            None => match lookup(PROJECT_PATH_VAR) {
                Some(value) if value.trim().is_empty() => {
                    if overrides.output.is_none() {
                        return Err(ConfigError::EmptyProjectPath);
                    }
                    None
                }
                Some(value) => Some(PathBuf::from(value)),
                None => {
                    if overrides.output.is_none() {
                        return Err(ConfigError::MissingProjectPath);
                    }
                    None
                }
            },
        };

        let edge_server_num = overrides.edge_server_num.unwrap_or(EDGE_SERVER_NUM);
        if edge_server_num.checked_add(1).is_none() {
            return Err(ConfigError::TooManyEdgeServers {
                requested: edge_server_num,
            });
        }

        Ok(Settings {
            project_path,
            edge_server_num,
            output: overrides.output,
            seed: overrides.seed,
        })
    }

    /// Number of servers including the cloud server
    pub fn server_count(&self) -> usize {
        self.edge_server_num.saturating_add(1)
    }

    /// File the document is written to
    pub fn output_path(&self) -> PathBuf {
        match (&self.output, &self.project_path) {
            (Some(output), _) => output.clone(),
            (None, Some(base)) => derive_output_path(base),
            // resolve() rejects this combination
            (None, None) => PathBuf::from(OUTPUT_RELATIVE_PATH),
        }
    }
}

/// `{base}/Main/config/json_files/config_main_server.json`
pub fn derive_output_path(base: &Path) -> PathBuf {
    base.join(OUTPUT_RELATIVE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(project_path: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let value = project_path.map(str::to_string);
        move |key| {
            if key == PROJECT_PATH_VAR {
                value.clone()
            } else {
                None
            }
        }
    }

    #[test]
    fn test_defaults_from_environment() {
        let settings =
            Settings::resolve(Overrides::default(), env_with(Some("/opt/mecm2m"))).unwrap();
        assert_eq!(settings.edge_server_num, EDGE_SERVER_NUM);
        assert_eq!(settings.server_count(), EDGE_SERVER_NUM + 1);
        assert_eq!(
            settings.output_path(),
            PathBuf::from("/opt/mecm2m/Main/config/json_files/config_main_server.json")
        );
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_missing_project_path() {
        let err = Settings::resolve(Overrides::default(), env_with(None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingProjectPath));
    }

    #[test]
    fn test_empty_project_path() {
        let err = Settings::resolve(Overrides::default(), env_with(Some("  "))).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyProjectPath));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            project_path: Some(PathBuf::from("/srv/project")),
            edge_server_num: Some(7),
            output: None,
            seed: Some(9),
        };
        let settings = Settings::resolve(overrides, env_with(Some("/opt/mecm2m"))).unwrap();
        assert_eq!(settings.edge_server_num, 7);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(
            settings.output_path(),
            PathBuf::from("/srv/project/Main/config/json_files/config_main_server.json")
        );
    }

    #[test]
    fn test_explicit_output_without_project_path() {
        let overrides = Overrides {
            output: Some(PathBuf::from("/tmp/servers.json")),
            ..Default::default()
        };
        let settings = Settings::resolve(overrides, env_with(None)).unwrap();
        assert_eq!(settings.project_path, None);
        assert_eq!(settings.output_path(), PathBuf::from("/tmp/servers.json"));
    }

    #[test]
    fn test_edge_server_count_overflow_rejected() {
        let overrides = Overrides {
            edge_server_num: Some(usize::MAX),
            output: Some(PathBuf::from("/tmp/servers.json")),
            ..Default::default()
        };
        let err = Settings::resolve(overrides, env_with(None)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManyEdgeServers { requested } if requested == usize::MAX
        ));
    }
}
