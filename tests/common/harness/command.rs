//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` running `staticpress export`.
///
/// Global options go before the subcommand; everything else after it.
pub struct ExportCommand {
    global: Vec<String>,
    args: Vec<String>,
}

impl ExportCommand {
    /// Creates an `export` command with no options.
    pub fn new() -> Self {
        Self {
            global: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Adds arguments after the `export` subcommand.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    fn arg_path(self, flag: &str, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args([flag, path.as_str()])
    }

    /// Uses an explicit config file (a missing file keeps defaults).
    pub fn config(mut self, path: &Path) -> Self {
        self.global.push("--config".to_string());
        self.global.push(path.to_string_lossy().to_string());
        self
    }

    pub fn data_dir(self, path: &Path) -> Self {
        self.arg_path("--data-dir", path)
    }

    pub fn output_dir(self, path: &Path) -> Self {
        self.arg_path("--output-dir", path)
    }

    pub fn document_root(self, path: &Path) -> Self {
        self.arg_path("--document-root", path)
    }

    pub fn db_name(self, name: &str) -> Self {
        self.args(["--db-name", name])
    }

    pub fn db_user(self, user: &str) -> Self {
        self.args(["--db-user", user])
    }

    pub fn export_pages(self) -> Self {
        self.args(["--export-pages"])
    }

    pub fn export_format(self, format: &str) -> Self {
        self.args(["--export-format", format])
    }

    pub fn trust_content(self) -> Self {
        self.args(["--trust-content"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Returns the full argument list (for testing).
    pub fn get_args(&self) -> Vec<String> {
        let mut all = self.global.clone();
        all.push("export".to_string());
        all.extend(self.args.iter().cloned());
        all
    }

    /// Runs the command and returns an Assert for making assertions.
    ///
    /// The config file defaults to a path that never exists so a developer's
    /// own config can't leak into tests.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("staticpress").expect("Failed to find staticpress binary");
        if !self.global.iter().any(|a| a == "--config") {
            cmd.args(["--config", "/nonexistent/staticpress-test.toml"]);
        }
        cmd.env_remove("RUST_LOG");
        cmd.args(self.get_args());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }
}

impl Default for ExportCommand {
    fn default() -> Self {
        Self::new()
    }
}
