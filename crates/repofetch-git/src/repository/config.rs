//! Clone configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how the VCS binary is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneOptions {
    /// The VCS executable, as a name looked up on `PATH` or a path.
    #[serde(default = "default_program")]
    program: String,

    /// Whether to set `GIT_TERMINAL_PROMPT=0` so credential prompts fail
    /// instead of blocking.
    #[serde(default)]
    disable_terminal_prompt: bool,

    /// Extra arguments placed between `clone` and the URL.
    #[serde(default)]
    extra_clone_args: Vec<String>,
}

fn default_program() -> String {
    "git".to_string()
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            program: default_program(),
            disable_terminal_prompt: false,
            extra_clone_args: Vec::new(),
        }
    }
}

impl CloneOptions {
    /// Creates a new builder for CloneOptions.
    pub fn builder() -> CloneOptionsBuilder {
        CloneOptionsBuilder::default()
    }

    /// Returns the VCS executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns whether terminal prompts are disabled.
    pub fn disable_terminal_prompt(&self) -> bool {
        self.disable_terminal_prompt
    }

    /// Returns the extra clone arguments.
    pub fn extra_clone_args(&self) -> &[String] {
        &self.extra_clone_args
    }

    /// Returns environment variables added to every invocation.
    pub fn envs(&self) -> Vec<(String, String)> {
        if self.disable_terminal_prompt {
            vec![("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())]
        } else {
            Vec::new()
        }
    }
}

/// Builder for CloneOptions.
#[derive(Debug, Default)]
pub struct CloneOptionsBuilder {
    program: Option<String>,
    disable_terminal_prompt: bool,
    extra_clone_args: Vec<String>,
}

impl CloneOptionsBuilder {
    /// Sets the VCS executable.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Sets whether to disable terminal prompts.
    pub fn disable_terminal_prompt(mut self, disable: bool) -> Self {
        self.disable_terminal_prompt = disable;
        self
    }

    /// Adds an extra clone argument.
    pub fn extra_clone_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_clone_args.push(arg.into());
        self
    }

    /// Sets the extra clone arguments.
    pub fn extra_clone_args(mut self, args: Vec<impl Into<String>>) -> Self {
        self.extra_clone_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the program is empty.
    pub fn build(self) -> Result<CloneOptions, &'static str> {
        let program = self.program.unwrap_or_else(default_program);
        if program.trim().is_empty() {
            return Err("program cannot be empty");
        }

        Ok(CloneOptions {
            program,
            disable_terminal_prompt: self.disable_terminal_prompt,
            extra_clone_args: self.extra_clone_args,
        })
    }
}
