use crate::error::WrapperError;
use crate::models::Invocation;
use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runner for the external optimizer executable
#[derive(Debug, Clone)]
pub struct OptimizerRunner {
    program: String,
}

impl OptimizerRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the optimizer on an invocation's target and wait for it to exit
    ///
    /// Standard streams are inherited so optipng talks to the terminal
    /// directly. Any non-zero exit, or death by signal, is a failure.
    pub async fn run(&self, invocation: &Invocation) -> Result<(), WrapperError> {
        let status = self.spawn_and_wait(invocation).await?;

        if !status.success() {
            return Err(WrapperError::ExternalTool {
                program: self.program.clone(),
                target: invocation.target.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }

    async fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitStatus, WrapperError> {
        let mut child = Command::new(&self.program)
            .args(invocation.optimizer_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        child.wait().await.map_err(|e| self.spawn_error(e))
    }

    fn spawn_error(&self, source: std::io::Error) -> WrapperError {
        if source.kind() == ErrorKind::NotFound {
            WrapperError::ToolNotFound {
                program: self.program.clone(),
            }
        } else {
            WrapperError::Spawn {
                program: self.program.clone(),
                source,
            }
        }
    }
}
