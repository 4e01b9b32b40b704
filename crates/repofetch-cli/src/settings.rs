//! Layered settings for the `repofetch` binary.
//!
//! Sources, lowest precedence first: built-in defaults, a settings file
//! (`repofetch.{toml,yaml,json}` in the working directory, or an explicit
//! path), then `REPOFETCH_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use repofetch_git::CloneOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// VCS executable name or path.
    #[serde(default = "default_program")]
    pub program: String,

    /// Directory in which the temporary directory is created.
    /// Defaults to the system temp dir.
    #[serde(default)]
    pub temp_parent: Option<PathBuf>,

    /// Set `GIT_TERMINAL_PROMPT=0` on git invocations.
    #[serde(default)]
    pub disable_terminal_prompt: bool,

    /// Keep the clone after a successful run.
    #[serde(default = "default_true")]
    pub keep: bool,

    /// Extra arguments for `git clone`.
    #[serde(default)]
    pub extra_clone_args: Vec<String>,
}

fn default_program() -> String {
    "git".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: default_program(),
            temp_parent: None,
            disable_terminal_prompt: false,
            keep: true,
            extra_clone_args: Vec::new(),
        }
    }
}

/// `REPOFETCH_*` variables. `REPOFETCH_EXTRA_CLONE_ARGS` is split on spaces.
fn environment() -> Environment {
    Environment::with_prefix("REPOFETCH")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("extra_clone_args")
}

impl Settings {
    /// Loads settings from defaults, an optional file and the environment.
    ///
    /// When `file` is `None`, `repofetch.*` in the working directory is read
    /// if present.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(file, environment())
    }

    fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("program", default_program())?
            .set_default("keep", true)?
            .set_default("disable_terminal_prompt", false)?;

        let builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("repofetch").required(false)),
        };

        builder
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Builds the clone options these settings describe.
    pub fn clone_options(&self) -> Result<CloneOptions, CliError> {
        CloneOptions::builder()
            .program(&self.program)
            .disable_terminal_prompt(self.disable_terminal_prompt)
            .extra_clone_args(self.extra_clone_args.clone())
            .build()
            .map_err(|e| CliError::InvalidSettings(e.to_string()))
    }
}
