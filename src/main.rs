mod commands;
mod core;
mod graph;
mod workspace;

use clap::{Parser, Subcommand};
use crate::core::error::{DepGraphError, print_error};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Render workspace project dependency graphs with the affected critical path highlighted
#[derive(Parser)]
#[command(name = "depgraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Workspace root directory (defaults to current directory)
  #[arg(short = 'C', long, global = true)]
  workspace_root: Option<PathBuf>,

  /// Workspace description file (default: depgraph.json under the workspace root)
  #[arg(long, global = true)]
  workspace: Option<PathBuf>,

  /// Verbose logging to stderr (repeat for more: -v, -vv, -vvv)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render the dependency graph to stdout
  Graph {
    /// Changed files (workspace-relative); their projects and dependents are highlighted
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    files: Vec<String>,
    /// Projects to highlight explicitly
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    projects: Vec<String>,
    /// Output format: dot (default), json
    #[arg(long, default_value = "dot")]
    format: String,
    /// Styling file (default: depgraph.toml under the workspace root, else the built-in theme)
    #[arg(long)]
    style: Option<PathBuf>,
  },

  /// Show which projects are affected by changed files
  Affected {
    /// Changed files (workspace-relative)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    files: Vec<String>,
    /// Output format: text (default), json, names-only
    #[arg(long, default_value = "text")]
    format: String,
  },

  /// Report dependency cycles between projects
  Cycles,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let filter = match cli.verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  // stdout carries the rendered graph; logs go to stderr
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let workspace_root = match cli.workspace_root {
    Some(root) => root,
    None => match std::env::current_dir() {
      Ok(dir) => dir,
      Err(e) => handle_error(e.into()),
    },
  };

  // Load the workspace file and build the graph once for every command
  let ctx = match crate::core::context::WorkspaceContext::build(&workspace_root, cli.workspace.as_deref()) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let result = match cli.command {
    Commands::Graph {
      files,
      projects,
      format,
      style,
    } => commands::run_graph(&ctx, files, projects, format, style),
    Commands::Affected { files, format } => commands::run_affected(&ctx, files, format),
    Commands::Cycles => commands::run_cycles(&ctx),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: DepGraphError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
