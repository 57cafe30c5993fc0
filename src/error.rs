use std::path::PathBuf;

/// Terminal failures of a wrapper run. Each one maps to exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum WrapperError {
    #[error("Usage: optipngp [optipng-flags...] <filename>")]
    Usage,

    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to run '{program}': command not found. Please ensure it is installed and in your PATH.")]
    ToolNotFound { program: String },

    #[error("Failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed on '{}' with exit code {}", .target.display(), display_code(.code))]
    ExternalTool {
        program: String,
        target: PathBuf,
        code: Option<i32>,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // killed by a signal
        None => "none".to_string(),
    }
}
