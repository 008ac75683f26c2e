//! Shared test utilities for integration and E2E tests.
//!
//! This module provides the sample configurations the edit tests run against
//! and a fixture for tests that edit a file in place.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_conf(samples::SAMPLE);
//!     fixture.command().args(["disable", "Dir2"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::samples;
    pub use super::TestFixture;
}

/// Sample configuration texts shared by the edit tests.
#[allow(dead_code)]
pub mod samples {
    /// Top-level directives, a section with a nested section, and values that
    /// need quoting or contain regex metacharacters.
    pub const SAMPLE: &str = r#"Dir1 None
Dir2 "\"a\\z\""
Dir3 On "($)+"
Dir4 Off "[*].?"
<Sec1 />
    Dir2 None
    Dir2 "\"a\\z\""
    Dir4 On "($)+"
    Dir4 Off "($)+"
    <Sec2 "/var/www">
        Dir4 Off "[*].?"
    </Sec2>
</Sec1>
"#;

    /// [`SAMPLE`] with every directive commented out.
    pub const SAMPLE_DISABLED: &str = r#"#Dir1 None
#Dir2 "\"a\\z\""
#Dir3 On "($)+"
#Dir4 Off "[*].?"
<Sec1 />
    #Dir2 None
    #Dir2 "\"a\\z\""
    #Dir4 On "($)+"
    #Dir4 Off "($)+"
    <Sec2 "/var/www">
        #Dir4 Off "[*].?"
    </Sec2>
</Sec1>
"#;

    /// A small but realistic httpd.conf excerpt.
    pub const HTTPD: &str = r#"ServerRoot "/etc/httpd"
Listen 80
ServerName www.example.com
<VirtualHost *:80>
    ServerName www.example.com
    Listen 8080
</VirtualHost>
<VirtualHost *:443>
    Listen 8443
</VirtualHost>
"#;

    /// An edit script chaining a disable and an add.
    pub const SCRIPT: &str = r#"
- disable:
    directive: Dir2
    with: ["None"]
- add:
    directive: Dir9
    values: ["On"]
    section: "Sec1:/"
"#;
}

/// A test fixture that provides a temporary directory holding a
/// configuration file to edit in place.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_conf(samples::SAMPLE);
///
/// fixture
///     .command()
///     .args(["set", "Dir1", "-v", "On", "-f"])
///     .arg(fixture.conf_path())
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an `httpd.conf` file with the given content.
    pub fn with_conf(self, content: &str) -> Self {
        self.with_file("httpd.conf", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the configuration file.
    pub fn conf_path(&self) -> PathBuf {
        self.temp_dir.path().join("httpd.conf")
    }

    /// Read the configuration file back.
    pub fn conf(&self) -> String {
        std::fs::read_to_string(self.conf_path()).expect("Failed to read config file")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("htconf");
        cmd.current_dir(self.path());
        cmd.env_remove("HTCONF_FILE");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_conf() {
        let fixture = TestFixture::new().with_conf(samples::SAMPLE);
        assert_eq!(fixture.conf(), samples::SAMPLE);
    }

    #[test]
    fn test_script_sample_is_valid_yaml() {
        serde_yaml::from_str::<serde_yaml::Value>(samples::SCRIPT)
            .expect("Script should be valid YAML");
    }
}
