//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod apply;

pub use apply::{ApplyArgs, run_apply};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string including the git commit when available.
fn long_version() -> &'static str {
  let s = match option_env!("GIT_HASH") {
    Some(hash) if !hash.is_empty() => format!("{} ({})", env!("CARGO_PKG_VERSION"), hash),
    _ => env!("CARGO_PKG_VERSION").to_string(),
  };
  Box::leak(s.into_boxed_str())
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  long_version = long_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Prepend NOTICE.txt to every Python file under proj/
  headstamp NOTICE.txt proj/ --add '**/*.py'

  # Exclude generated files from the set
  headstamp NOTICE.txt proj/ --add '**/*.py' --rm 'gen/**/*.py'

  # Rewrite the template path inside each file to its real relative path
  headstamp LICENSE.header proj/ --add 'lib/**/*.rb' --path 'path/to/file.rb'

  # Ask before touching anything, and list each file as it is processed
  headstamp NOTICE.txt proj/ --add '**/*.c' --interactive --verbose

  # Save a machine-readable record of the run
  headstamp NOTICE.txt proj/ --add 'src/**/*.rs' --report-json run.json
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub apply_args: ApplyArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
