// ============================================================================
// File: src/command.rs
// ----------------------------------------------------------------------------
// External command execution for disk management operations.
//
// One primitive: spawn a tool, capture both standard streams to end, wait
// for exit, deliver a single CommandResult. Every invocation owns its own
// child process and pipe pair; there is no shared state, no retry and no
// adapter-level timeout.
// ============================================================================

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::error::{DiskError, Result};

/// Captured output of one external tool invocation.
///
/// `output` and `error` hold the complete stdout and stderr streams, decoded
/// as UTF-8 and stripped of trailing whitespace. Values are never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Captured standard output, trailing whitespace removed
    pub output: String,

    /// Captured standard error, trailing whitespace removed
    pub error: String,

    /// Process exit code; -1 if the process was terminated by a signal
    pub status: i32,
}

impl CommandResult {
    /// Check whether the tool exited with status 0.
    ///
    /// Callers that need stricter semantics (e.g. treating any stderr text
    /// as failure, which `diskutil` warrants) should inspect `error` too.
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Run an external command and capture its full output.
///
/// Every invocation resolves to exactly one result: a spawn failure is
/// reported as `DiskError::Launch`, and everything else (including non-zero
/// exits and signal termination) is delivered as a `CommandResult`. The
/// returned future may be awaited or spawned; the caller is never blocked
/// while the tool runs.
///
/// # Arguments
/// * `program` - Absolute path of the executable to run
/// * `args` - Positional arguments, passed verbatim
///
/// # Returns
/// Captured output, error text and exit status of the finished process
pub async fn run(program: &str, args: &[String]) -> Result<CommandResult> {
    debug!("running {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| DiskError::Launch {
            command: program.to_string(),
            source: e,
        })?;

    let status = output.status.code().unwrap_or(-1);
    if status != 0 {
        warn!("{} exited with status {}", program, status);
    }

    Ok(CommandResult {
        output: trim_trailing_whitespace(&String::from_utf8_lossy(&output.stdout)).to_string(),
        error: trim_trailing_whitespace(&String::from_utf8_lossy(&output.stderr)).to_string(),
        status,
    })
}

/// Remove the run of whitespace (including newlines) at the end of a string.
pub(crate) fn trim_trailing_whitespace(s: &str) -> &str {
    s.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_whitespace_trimming() {
        assert_eq!(trim_trailing_whitespace("/dev/disk4\n"), "/dev/disk4");
        assert_eq!(trim_trailing_whitespace("text \t\r\n"), "text");
        assert_eq!(trim_trailing_whitespace("  leading kept"), "  leading kept");
        assert_eq!(trim_trailing_whitespace(""), "");
    }

    #[test]
    fn trimming_is_idempotent() {
        let once = trim_trailing_whitespace("disk5 \n");
        assert_eq!(trim_trailing_whitespace(once), once);
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = CommandResult {
            output: "/dev/disk4".to_string(),
            error: String::new(),
            status: 0,
        };
        let json = serde_json::to_string(&result).expect("result should serialize");
        let back: CommandResult = serde_json::from_str(&json).expect("result should deserialize");
        assert_eq!(back, result);
    }

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let result = run("/bin/echo", &["hello".to_string()])
            .await
            .expect("echo should launch");
        assert_eq!(result.output, "hello");
        assert_eq!(result.error, "");
        assert_eq!(result.status, 0);
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn captures_stderr_and_nonzero_exit() {
        let args = vec!["-c".to_string(), "echo oops >&2; exit 3".to_string()];
        let result = run("/bin/sh", &args).await.expect("sh should launch");
        assert_eq!(result.output, "");
        assert_eq!(result.error, "oops");
        assert_eq!(result.status, 3);
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn missing_executable_is_a_launch_error() {
        let result = run("/nonexistent/tool", &[]).await;
        assert!(matches!(result, Err(DiskError::Launch { .. })));
    }
}
