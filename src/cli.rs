use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use yearly::solver::constants::{DEFAULT_MAX_TARGET, DEFAULT_MIN_TARGET};
use yearly::{Solution, SolverConfig, YearSolver, parse_year};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How solved expressions are printed
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Latex,
}

/// Yearly - Find the simplest expression over the digits of a year
#[derive(Parser, Debug)]
#[command(name = "yearly")]
#[command(
    about = "Find the simplest arithmetic expression over the digits of a year for every target from 1 to 100"
)]
#[command(version)]
pub struct CliArgs {
    /// Year whose digits are used in the expressions
    pub year: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Output format for expressions
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Append the operator count to every line
    #[arg(long)]
    pub show_cost: bool,

    /// Smallest target to solve
    #[arg(long, default_value_t = DEFAULT_MIN_TARGET)]
    pub min_target: i64,

    /// Largest target to solve
    #[arg(long, default_value_t = DEFAULT_MAX_TARGET)]
    pub max_target: i64,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub year: String,
    pub digits: Vec<u8>,
    pub log_level: LogLevel,
    pub format: OutputFormat,
    pub show_cost: bool,
    pub solver: SolverConfig,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let digits = parse_year(&args.year).context("Invalid year")?;

    let solver = SolverConfig {
        min_target: args.min_target,
        max_target: args.max_target,
        ..SolverConfig::default()
    };
    solver.validate().context("Invalid target range")?;

    Ok(CliConfig {
        year: args.year,
        digits,
        log_level: args.log_level,
        format: args.format,
        show_cost: args.show_cost,
        solver,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Render one output line for a solved target
pub fn format_line(
    target: i64,
    solution: &Solution,
    format: OutputFormat,
    show_cost: bool,
) -> String {
    let expression = match format {
        OutputFormat::Plain => solution.to_string(),
        OutputFormat::Latex => solution.expression.to_latex(),
    };
    if show_cost {
        format!("{}: {} [{} ops]", target, expression, solution.cost)
    } else {
        format!("{}: {}", target, expression)
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = YearSolver::new(config.solver);

    info!("Searching expressions over the digits of {}", config.year);

    let solutions = solver
        .solve_digits(&config.digits)
        .context("Search failed")?;

    println!("Solution for year {}:", config.year);
    for (target, solution) in solutions.iter() {
        println!(
            "{}",
            format_line(target, solution, config.format, config.show_cost)
        );
    }

    let missing = solutions.missing_targets();
    if !missing.is_empty() {
        warn!("No expression found for {} targets: {:?}", missing.len(), missing);
    }

    Ok(())
}
