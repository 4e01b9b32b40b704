//! Test helpers for repofetch-git.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use parking_lot::Mutex;
use repofetch_git::{CommandOutput, CommandRunner, Invocation};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// A runner that records invocations and replays scripted outputs.
///
/// When the script runs out every further invocation succeeds with empty
/// output.
#[derive(Debug, Clone)]
pub struct RecordingRunner {
    installed: bool,
    script: Arc<Mutex<VecDeque<CommandOutput>>>,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            installed: true,
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    /// Queues the output returned by the next unscripted invocation.
    pub fn then(self, output: CommandOutput) -> Self {
        self.script.lock().push_back(output);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn is_installed(&self, _program: &str) -> bool {
        self.installed
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.lock().push(invocation.clone());
        Ok(self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::success("")))
    }
}

/// A runner whose processes can never be spawned.
#[derive(Debug, Clone, Copy)]
pub struct BrokenRunner;

impl CommandRunner for BrokenRunner {
    fn is_installed(&self, _program: &str) -> bool {
        true
    }

    fn run(&self, _invocation: &Invocation) -> io::Result<CommandOutput> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "spawn denied"))
    }
}

/// Shared buffer that collects formatted log lines.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Lines whose level field equals `level`.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        let level = level.to_string();
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().any(|word| word == level))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with every event at DEBUG and above recorded into the returned
/// buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, LogBuffer) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(logs.clone())
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    (value, logs)
}

/// Returns true if a usable `git` is on PATH.
pub fn git_available() -> bool {
    repofetch_git::is_vcs_installed("git")
}

/// Runs git in `dir` with a throwaway identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=repofetch",
            "-c",
            "user.email=repofetch@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(status.status.success(), "git {:?} failed: {:?}", args, status);
}

/// Creates a local repository at `dir/name` with two commits, a `v1.0`
/// tag on the first and a `feature` branch.
pub fn init_source_repo(dir: &Path, name: &str) -> std::path::PathBuf {
    let repo = dir.join(name);
    std::fs::create_dir_all(&repo).unwrap();

    git(&repo, &["init", "--quiet"]);
    std::fs::write(repo.join("README.md"), "first\n").unwrap();
    git(&repo, &["add", "README.md"]);
    git(&repo, &["commit", "--quiet", "-m", "first"]);
    git(&repo, &["tag", "v1.0"]);
    git(&repo, &["branch", "feature"]);

    std::fs::write(repo.join("README.md"), "second\n").unwrap();
    git(&repo, &["commit", "--quiet", "-am", "second"]);

    repo
}
