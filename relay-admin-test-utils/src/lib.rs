//! Test utilities for the relay admin crates
//!
//! Provides shared fixtures so tests across crates agree on the same schemas,
//! plus an isolated working directory for tests that touch config files or
//! `RELAY_ADMIN_` environment variables.
//!
//! ## Usage
//!
//! ```no_run
//! use relay_admin_test_utils::IsolatedConfigDir;
//!
//! #[test]
//! fn test_something() {
//!     let dir = IsolatedConfigDir::new().unwrap();
//!     dir.write("relay.yaml", "routes: []\n").unwrap();
//!     // environment variables set through `dir` are restored on drop
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use relay_admin_fields::{FieldDescriptor, Record, Schema, SelectOption};
use serde_json::json;
use tempfile::TempDir;

/// RAII guard around a temporary config directory.
///
/// Environment variables changed through the guard are restored on drop.
/// Tests that set variables should also run under `#[serial_test::serial]`.
pub struct IsolatedConfigDir {
    temp_dir: TempDir,
    original_env_vars: HashMap<String, Option<String>>,
}

impl IsolatedConfigDir {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_temp_dir_with_retry()?;
        Ok(Self {
            temp_dir,
            original_env_vars: HashMap::new(),
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a file inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Set an environment variable, remembering the original for restoration.
    pub fn set_env_var(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) {
        let key = key.as_ref().to_string();
        if !self.original_env_vars.contains_key(&key) {
            self.original_env_vars
                .insert(key.clone(), std::env::var(&key).ok());
        }
        std::env::set_var(&key, value.as_ref());
    }
}

impl Drop for IsolatedConfigDir {
    fn drop(&mut self) {
        for (key, original_value) in &self.original_env_vars {
            match original_value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Create a temporary directory, retrying briefly under parallel test load.
pub fn create_temp_dir_with_retry() -> std::io::Result<TempDir> {
    let mut last_err = None;
    for attempt in 1..=3u64 {
        match TempDir::new() {
            Ok(dir) => return Ok(dir),
            Err(e) => {
                last_err = Some(e);
                std::thread::sleep(std::time::Duration::from_millis(10 * attempt));
            }
        }
    }
    Err(last_err.unwrap_or_else(|| std::io::Error::other("temp dir creation failed")))
}

/// Two-field schema: `a` is text, `b` is a tag set.
pub fn text_and_tags_schema() -> Schema {
    Schema::new(vec![FieldDescriptor::text("a"), FieldDescriptor::tags("b")])
        .expect("fixture schema is valid")
}

/// A record for [`text_and_tags_schema`].
pub fn text_and_tags(a: &str, b: &[&str]) -> Record {
    Record::new().with("a", a).with("b", json!(b))
}

/// Route-like schema with a visibility-gated secret.
pub fn gated_schema() -> Schema {
    Schema::new(vec![
        FieldDescriptor::select(
            "mode",
            vec![SelectOption::plain("open"), SelectOption::plain("locked")],
        ),
        FieldDescriptor::text("a"),
        FieldDescriptor::text("secret").visible_when(|r| r.text("mode") == "locked"),
    ])
    .expect("fixture schema is valid")
}
