use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use commit_kit::cli::{self, ChangelogArgs, MessageSource, ParseArgs, ValidateArgs, VersionArgs};
use commit_kit::config;
use commit_kit::domain::ChangelogDomain;
use commit_kit::ui::{self, OutputFormat};

#[derive(clap::Parser)]
#[command(
    name = "commit-kit",
    version,
    about = "Parse, validate and release from emoji-tagged commit messages"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        help = "Path inside the git repository"
    )]
    repo: PathBuf,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options naming the message to work on
#[derive(clap::Args)]
struct MessageOptions {
    #[arg(short, long, help = "Commit message text")]
    message: Option<String>,

    #[arg(short, long, help = "File holding the commit message ('-' for stdin)")]
    file: Option<PathBuf>,

    #[arg(long, help = "Revision whose message is read")]
    commit: Option<String>,
}

impl MessageOptions {
    fn into_source(self) -> commit_kit::Result<MessageSource> {
        MessageSource::from_options(self.message, self.file, self.commit)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Parse a commit message into its fields
    Parse {
        #[command(flatten)]
        source: MessageOptions,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },

    /// Validate a commit message; exits with 1 when invalid
    Validate {
        #[command(flatten)]
        source: MessageOptions,

        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },

    /// Show the category table
    Categories {
        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },

    /// Generate a changelog for a revision range
    Changelog {
        #[arg(long, help = "Start of the range, exclusive [default: latest version tag]")]
        from: Option<String>,

        #[arg(long, default_value = "HEAD", help = "End of the range, inclusive")]
        to: String,

        #[arg(long, default_value = "external", help = "Audience: internal or external")]
        domain: ChangelogDomain,

        #[arg(long, help = "Plain text instead of markdown")]
        plain: bool,
    },

    /// Determine the next version from the commits since the current one
    Version {
        #[arg(long, help = "Current version or tag [default: latest version tag]")]
        current: Option<String>,

        #[arg(long, help = "Start of the range, exclusive [default: current tag]")]
        from: Option<String>,

        #[arg(long, default_value = "HEAD", help = "End of the range, inclusive")]
        to: String,

        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Parse { source, format } => {
            let parse_args = ParseArgs {
                source: source.into_source()?,
                format,
                repo_path: args.repo,
            };
            println!("{}", cli::run_parse(&parse_args)?);
        }
        Command::Validate { source, format } => {
            let validate_args = ValidateArgs {
                source: source.into_source()?,
                repo_path: args.repo,
            };
            let report = cli::run_validate(&validate_args)?;
            match format {
                OutputFormat::Json | OutputFormat::Yaml => {
                    println!("{}", ui::render(&report, format)?)
                }
                OutputFormat::Text | OutputFormat::Markdown => ui::display_validation_report(&report),
            }
            if !report.valid {
                std::process::exit(1);
            }
        }
        Command::Categories { format } => {
            println!("{}", cli::run_categories(format)?);
        }
        Command::Changelog {
            from,
            to,
            domain,
            plain,
        } => {
            ui::display_status(&format!("Generating {} changelog", domain));
            let changelog_args = ChangelogArgs {
                repo_path: args.repo,
                from,
                to,
                domain,
                plain,
            };
            println!("{}", cli::run_changelog(&changelog_args, &config)?);
        }
        Command::Version {
            current,
            from,
            to,
            format,
        } => {
            let version_args = VersionArgs {
                repo_path: args.repo,
                current,
                from,
                to,
            };
            let outcome = cli::run_version(&version_args, &config)?;
            match format {
                OutputFormat::Json | OutputFormat::Yaml => {
                    println!("{}", ui::render(&outcome, format)?)
                }
                OutputFormat::Text | OutputFormat::Markdown => {
                    ui::display_commit_analysis(&outcome.commits);
                    let current = outcome.current.as_ref().map(|v| v.display_string());
                    ui::display_version_change(current.as_deref(), &outcome.next.display_string());
                    println!("{}", outcome.next);
                }
            }
        }
    }

    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn, `--verbose`: debug)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
