mod commands;
mod core;

use clap::{Parser, Subcommand};

use crate::core::error::{MarkError, print_error};

/// Derive a deterministic release identity from git state and CI signals
#[derive(Parser)]
#[command(name = "relmark")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve the release identity for the current repository
  Resolve {
    /// Output the identity in JSON format
    #[arg(long)]
    json: bool,
    /// Export PERMALINK and VERSION into the CI environment
    #[arg(long)]
    export: bool,
  },

  /// Print just the permalink alias (for pipeline interpolation)
  Permalink,

  /// Exit 0 when the permalink should be published, non-zero otherwise
  ShouldPublish,
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
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let repo_path = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let result = match cli.command {
    Commands::Resolve { json, export } => commands::run_resolve(&repo_path, json, export),
    Commands::Permalink => commands::run_permalink(&repo_path),
    Commands::ShouldPublish => commands::run_should_publish(&repo_path),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: MarkError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
