use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub mod test_helpers {
    use super::*;

    /// Scratch directory holding a config file for one test
    pub struct Sandbox {
        pub dir: TempDir,
        pub config: PathBuf,
    }

    impl Sandbox {
        pub fn new() -> Self {
            Self::with_config("")
        }

        pub fn with_config(toml: &str) -> Self {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let config = dir.path().join("config.toml");
            fs::write(&config, toml).expect("Failed to write config");
            Self { dir, config }
        }

        pub fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        /// `desk` isolated from the user's config and clipboard override
        pub fn desk(&self) -> Command {
            let mut cmd = Command::cargo_bin("desk").expect("desk binary not built");
            cmd.env_remove("DESK_CLIPBOARD")
                .env_remove("RUST_LOG")
                .env("NO_COLOR", "1")
                .arg("--config")
                .arg(&self.config);
            cmd
        }
    }
}
