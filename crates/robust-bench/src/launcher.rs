use crate::command::BenchCommand;
use crate::errors::{BenchError, BenchResult};
use std::process::{Command, Stdio};

/// Everything a finished checker process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs a command to completion. Implementations block until the process exits.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessLauncher {
    fn run(&mut self, command: &BenchCommand) -> BenchResult<ProcessOutput>;
}

/// Launches the checker as a real child process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn run(&mut self, command: &BenchCommand) -> BenchResult<ProcessOutput> {
        tracing::debug!("Running: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .envs(command.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BenchError::LaunchError {
                program: command.program.clone(),
                source,
            })?;

        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(program: &str, args: &[&str]) -> BenchCommand {
        BenchCommand {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            envs: Vec::new(),
            format: None,
        }
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let err = SystemLauncher
            .run(&command("/nonexistent/bin/storm", &[]))
            .unwrap_err();
        assert!(matches!(err, BenchError::LaunchError { .. }));
        assert!(err.to_string().contains("/nonexistent/bin/storm"));
    }

    #[cfg(unix)]
    #[test]
    fn stderr_is_captured_and_stdout_discarded() {
        let output = SystemLauncher
            .run(&command(
                "/bin/sh",
                &["-c", "echo ignored; printf '1.5\\n0.2\\n3\\n' >&2"],
            ))
            .unwrap();
        assert!(output.success());
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, b"1.5\n0.2\n3\n");
    }

    #[cfg(unix)]
    #[test]
    fn extra_environment_reaches_the_child() {
        let mut cmd = command("/bin/sh", &["-c", "printf '%s' \"$BENCH_MARKER\" >&2"]);
        cmd.envs.push(("BENCH_MARKER".to_string(), "present".to_string()));
        let output = SystemLauncher.run(&cmd).unwrap();
        assert_eq!(output.stderr, b"present");
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_reported() {
        let output = SystemLauncher
            .run(&command("/bin/sh", &["-c", "exit 3"]))
            .unwrap();
        assert_eq!(output.status, Some(3));
        assert!(!output.success());
    }
}
