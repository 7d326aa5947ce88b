//! Error types for relmark with contextual messages and exit codes
//!
//! Identity resolution itself never fails: every git query degrades to a
//! well-defined default. The errors here cover the edges around it, such as
//! running outside a git checkout or being unable to write the CI
//! environment file.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid invocation, not a repository)
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relmark
#[derive(Debug)]
pub enum MarkError {
  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl MarkError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    MarkError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      MarkError::Message { message, context, help } => MarkError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      MarkError::Git(_) => ExitCode::System,
      MarkError::Io(_) => ExitCode::System,
      MarkError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      MarkError::Git(e) => e.help_message(),
      MarkError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for MarkError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MarkError::Git(e) => write!(f, "{}", e),
      MarkError::Io(e) => write!(f, "I/O error: {}", e),
      MarkError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for MarkError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      MarkError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for MarkError {
  fn from(err: io::Error) -> Self {
    MarkError::Io(err)
  }
}

impl From<String> for MarkError {
  fn from(msg: String) -> Self {
    MarkError::message(msg)
  }
}

impl From<&str> for MarkError {
  fn from(msg: &str) -> Self {
    MarkError::message(msg)
  }
}

impl From<serde_json::Error> for MarkError {
  fn from(err: serde_json::Error) -> Self {
    MarkError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for MarkError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    MarkError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RepoNotFound { path } => Some(format!(
        "Run relmark from inside a git checkout, or check the path: {}",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
    }
  }
}

/// Result type alias for relmark
pub type MarkResult<T> = Result<T, MarkError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> MarkResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> MarkResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<MarkError>,
{
  fn context(self, ctx: impl Into<String>) -> MarkResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> MarkResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &MarkError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
