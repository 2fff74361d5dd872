use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use log::{debug, LevelFilter};
use prettydiff::config::App;
use prettydiff::opener::SystemOpener;
use prettydiff::source::GitDiff;
use prettydiff::{Error, Outcome, Pipeline, Revision};

const EMOJI: Emoji<'_, '_> = Emoji("🔍", "");

/// Will print the git diff output in a visual way in your browser.
///
/// If no revision is provided, it shows the output of `git diff`, otherwise
/// it shows the git diff at that commit ID.
#[derive(Parser, Debug)]
#[clap(author, version, after_help = "Usage:\n  git-prettydiff\n  git-prettydiff 53aa6b98860f8e2a610d003a63b586e67396b003")]
struct Cli {
  /// Full 40-character commit ID to diff against
  revision: Option<String>,

  #[clap(long, help = "Write the page without opening it")]
  no_open: bool,

  #[clap(short, long, help = "Enables verbose logging")]
  verbose: bool
}

fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      err.print().ok();
      return match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(1)
      };
    }
  };

  if cli.verbose {
    env_logger::builder()
      .filter_level(LevelFilter::Debug)
      .format_target(false)
      .format_timestamp(None)
      .init();
    debug!("Verbose logging enabled");
  } else {
    env_logger::init();
  }

  match run(&cli) {
    Ok(Outcome::NoChanges) => {
      println!("No diff to show");
      ExitCode::SUCCESS
    },
    Ok(Outcome::Rendered { path, sections, warning }) => {
      println!("{EMOJI} Rendered {} file(s) to {}", sections, path.display().to_string().italic());
      if let Some(warning) = warning {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
      }
      ExitCode::SUCCESS
    },
    Err(err) => {
      eprintln!("{} {}", "error:".red().bold(), err);
      ExitCode::from(err.exit_code())
    }
  }
}

fn run(cli: &Cli) -> Result<Outcome, Error> {
  // Validate before touching the filesystem or spawning git
  let revision = cli.revision.as_deref().map(str::parse::<Revision>).transpose()?;

  let app = App::new()?;
  let artifacts = app.artifacts();
  debug!("Artifacts: {:?}", artifacts);

  let source = GitDiff::new(app.git, artifacts.text);
  Pipeline::new(source, SystemOpener, artifacts.html)
    .open_viewer(app.open && !cli.no_open)
    .run(revision.as_ref())
}
