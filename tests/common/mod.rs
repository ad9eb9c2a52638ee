use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_home: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        // Isolate config and audit log inside temp_dir
        let config_home = temp_dir.path().join("config");
        fs::create_dir_all(&config_home).expect("Failed to create config dir");

        TestContext {
            temp_dir,
            config_home,
        }
    }

    /// Config dir the binary will resolve through XDG_CONFIG_HOME
    pub fn app_dir(&self) -> PathBuf {
        self.config_home.join("voxcmd")
    }

    pub fn write_config(&self, json: &str) {
        fs::create_dir_all(self.app_dir()).expect("Failed to create app dir");
        fs::write(self.app_dir().join("config.json"), json).expect("Failed to write config");
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_voxcmd"));
        cmd.args(args)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run the binary and return its output
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to run voxcmd")
    }

    /// Run the binary with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn voxcmd");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for voxcmd")
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}
