//! Command-line tool configuration.
//!
//! Loaded from an optional TOML file, then `W3QUERY_*` environment variables
//! (`__` separates sections, e.g. `W3QUERY_ENGINE__PROGRAM`). The engine
//! arguments are read from the environment as one space-separated list
//! (`W3QUERY_ENGINE__ARGS="--db students"`). Missing keys fall back to the
//! defaults below. The library itself never reads this.

use crate::engine::ProcessEngine;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "W3QUERY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub output: OutputConfig,
}

/// External engine invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Program receiving the payload as its last argument
    pub program: Option<PathBuf>,
    /// Arguments placed before the payload
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent encoded payloads
    pub pretty: bool,
}

impl Config {
    /// Load configuration from `path` (if any) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("engine.args"),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse configuration from TOML text, without the environment
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// The configured engine, if a program is set
    pub fn engine(&self) -> Result<ProcessEngine> {
        let program = self.engine.program.clone().ok_or_else(|| {
            Error::Config(format!(
                "no engine program configured (set engine.program or {}_ENGINE__PROGRAM)",
                ENV_PREFIX
            ))
        })?;
        Ok(ProcessEngine::new(program).with_args(self.engine.args.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.output.pretty);
        assert!(matches!(config.engine(), Err(Error::Config(_))));
    }

    #[test]
    fn test_engine_section() {
        let config = Config::from_toml(
            r#"
            [engine]
            program = "/usr/local/bin/testquery"
            args = ["--db", "students"]

            [output]
            pretty = true
            "#,
        )
        .unwrap();

        let engine = config.engine().unwrap();
        assert_eq!(engine.program(), &PathBuf::from("/usr/local/bin/testquery"));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.engine.program = Some(PathBuf::from("engine"));
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/w3query.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    // The only test touching the process environment
    #[test]
    fn test_environment_overrides() {
        std::env::set_var("W3QUERY_ENGINE__PROGRAM", "/usr/bin/testquery");
        std::env::set_var("W3QUERY_ENGINE__ARGS", "--db students");
        std::env::set_var("W3QUERY_OUTPUT__PRETTY", "true");
        let loaded = Config::load(None);
        std::env::remove_var("W3QUERY_ENGINE__PROGRAM");
        std::env::remove_var("W3QUERY_ENGINE__ARGS");
        std::env::remove_var("W3QUERY_OUTPUT__PRETTY");

        let config = loaded.unwrap();
        assert_eq!(
            config.engine.program,
            Some(PathBuf::from("/usr/bin/testquery"))
        );
        assert_eq!(config.engine.args, vec!["--db", "students"]);
        assert!(config.output.pretty);

        let engine = config.engine().unwrap();
        assert_eq!(engine.program(), &PathBuf::from("/usr/bin/testquery"));
    }
}
