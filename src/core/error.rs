//! Error types for depgraph with contextual messages and exit codes
//!
//! Errors are split by who has to act on them:
//!
//! - **GraphError**: the inputs to a render do not line up (styling gaps,
//!   dangling edges, unknown projects). Always the caller's fault.
//! - **ConfigError**: styling or workspace files could not be found or parsed.
//! - **Io**: the filesystem failed underneath us.
//!
//! Every variant maps to an [`ExitCode`] and may carry a help line for the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for depgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (cycles found)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for depgraph
#[derive(Debug, Error)]
pub enum DepGraphError {
  /// Graph construction or styling lookup errors
  #[error(transparent)]
  Graph(#[from] GraphError),

  /// Configuration and input file errors
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Validation failures reported by a command (e.g. cycles present)
  #[error("{0}")]
  Validation(String),

  /// I/O errors
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  /// Generic error with message and optional context
  #[error("{message}{}", suffix(.context))]
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl DepGraphError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    DepGraphError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error.
  ///
  /// Structured variants are folded into a `Message` so the original text is kept.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      DepGraphError::Message { message, context, help } => DepGraphError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      other => {
        let help = other.help_message();
        DepGraphError::Message {
          message: ctx_str,
          context: Some(other.to_string()),
          help,
        }
      }
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      DepGraphError::Graph(_) => ExitCode::User,
      DepGraphError::Config(ConfigError::Read { .. }) => ExitCode::System,
      DepGraphError::Config(_) => ExitCode::User,
      DepGraphError::Validation(_) => ExitCode::Validation,
      DepGraphError::Io(_) => ExitCode::System,
      DepGraphError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      DepGraphError::Graph(e) => e.help_message(),
      DepGraphError::Config(e) => e.help_message(),
      DepGraphError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

fn suffix(context: &Option<String>) -> String {
  context.as_ref().map(|c| format!("\n{}", c)).unwrap_or_default()
}

impl From<serde_json::Error> for DepGraphError {
  fn from(err: serde_json::Error) -> Self {
    DepGraphError::message(format!("JSON error: {}", err))
  }
}

/// Which half of the styling table a gap was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSection {
  Nodes,
  Edges,
}

impl std::fmt::Display for StyleSection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StyleSection::Nodes => write!(f, "nodes"),
      StyleSection::Edges => write!(f, "edges"),
    }
  }
}

/// Graph and styling errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  /// A project type or dependency kind has no style for a variant
  #[error("Styling configuration has no `{variant}` style for {section} of kind '{key}'")]
  ConfigurationGap {
    section: StyleSection,
    key: String,
    variant: String,
  },

  /// An edge points at a project that is not in the workspace
  #[error("Project '{source_project}' depends on unknown project '{target}'")]
  DanglingReference { source_project: String, target: String },

  /// A project name was referenced that the workspace does not define
  #[error("Project '{name}' not found. Available projects: {available}")]
  UnknownProject { name: String, available: String },

  /// A project definition is malformed (empty or duplicate name)
  #[error("Invalid project '{name}': {reason}")]
  InvalidProject { name: String, reason: String },
}

impl GraphError {
  fn help_message(&self) -> Option<String> {
    match self {
      GraphError::ConfigurationGap { section, key, variant } => Some(format!(
        "Add a [{}.{}.{}] table to your depgraph.toml.",
        section, key, variant
      )),
      GraphError::DanglingReference { target, .. } => Some(format!(
        "Declare '{}' under \"projects\" in the workspace file, or remove the dependency.",
        target
      )),
      _ => None,
    }
  }
}

/// `what` for a missing workspace description
pub const WORKSPACE_FILE: &str = "workspace file";

/// `what` for a missing styling file
pub const STYLING_FILE: &str = "styling file";

/// Configuration and input file errors
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Input file not found
  #[error("No {what} found.\nExpected file: {}", .path.display())]
  NotFound { what: &'static str, path: PathBuf },

  /// File could not be read
  #[error("Failed to read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// File contents could not be parsed
  #[error("Failed to parse {}: {reason}", .path.display())]
  Parse { path: PathBuf, reason: String },

  /// A command-line value was not recognized
  #[error("Unknown {what} '{value}'. Valid values: {valid}")]
  InvalidValue {
    what: &'static str,
    value: String,
    valid: &'static str,
  },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { what: WORKSPACE_FILE, .. } => {
        Some("Pass --workspace <file> or create depgraph.json in the workspace root.".to_string())
      }
      _ => None,
    }
  }
}

/// Result type alias for depgraph
pub type DepGraphResult<T> = Result<T, DepGraphError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> DepGraphResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<DepGraphError>,
{
  fn with_context<F>(self, f: F) -> DepGraphResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &DepGraphError) {
  eprintln!("\nerror: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("help: {}\n", help);
  }
}
