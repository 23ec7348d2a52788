//! university CLI — replays a scenario file and prints academic reports.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use university_core::{CourseId, StudentId};

mod commands;

#[derive(Parser)]
#[command(name = "university", version, about = "University academic records and rankings")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a university from a scenario and print the full report
    Run {
        /// Path to the .toml scenario
        #[arg(long)]
        scenario: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a single query against a scenario
    Query {
        /// Path to the .toml scenario
        #[arg(long)]
        scenario: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        target: QueryTarget,
    },

    /// Validate a scenario file
    Validate {
        /// Path to the .toml scenario
        #[arg(long)]
        scenario: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example scenario
    Init,
}

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum QueryTarget {
    /// Information about a student
    Student { id: StudentId },
    /// Information about a course
    Course { id: CourseId },
    /// Students attending a course
    Attendees { course: CourseId },
    /// Courses a student is registered for
    StudyPlan { student: StudentId },
    /// Average grade of a student
    StudentAvg { student: StudentId },
    /// Average grade of a course
    CourseAvg { course: CourseId },
    /// Best students by score (defaults to the configured ranking size)
    Top { n: Option<usize> },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "university_core=debug,university_cli=debug"
    } else {
        "university_core=warn,university_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run {
            scenario,
            config,
            format,
            output,
        } => commands::run::execute(scenario, config, format, output),
        Commands::Query {
            scenario,
            config,
            target,
        } => commands::query::execute(scenario, config, target),
        Commands::Validate { scenario, config } => commands::validate::execute(scenario, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
