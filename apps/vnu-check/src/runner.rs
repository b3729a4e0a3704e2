//! Process execution for v.Nu invocations.

use crate::command::Invocation;
use crate::error::{Result, ValidatorError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs an invocation and returns its captured stdout.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<String>;
}

/// Spawns the binary with tokio, feeding the payload through a stdin pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, invocation: &Invocation) -> Result<String> {
        let command = invocation.to_string();
        debug!("Executing v.Nu: {}", command);

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ValidatorError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Payload is written while stdout is drained; both must finish.
        let stdin = child.stdin.take();
        let payload = invocation.stdin.as_bytes();
        let write = async move {
            if let Some(mut pipe) = stdin {
                pipe.write_all(payload).await?;
                // dropping the pipe closes the child's stdin
            }
            Ok::<(), std::io::Error>(())
        };
        let (written, output) = tokio::join!(write, child.wait_with_output());

        let output = output.map_err(|source| ValidatorError::Spawn {
            command: command.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(ValidatorError::ProcessExecution {
                command,
                detail: format!("{}: {}", output.status, stderr.trim()),
            });
        }
        if let Err(e) = written {
            return Err(ValidatorError::ProcessExecution {
                command,
                detail: format!("document was not fully delivered on stdin: {}", e),
            });
        }
        if !stderr.trim().is_empty() {
            warn!("v.Nu wrote to stderr: {}", stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
