use crate::solver::{PuzzleSolver, Strategy};
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};

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

/// Search strategy selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Candidates use only distinct characters
    Bara,
    /// No repeat restriction
    All,
}

impl StrategyArg {
    pub fn to_strategy(self) -> Strategy {
        match self {
            StrategyArg::Bara => Strategy::Bara,
            StrategyArg::All => Strategy::All,
        }
    }
}

/// Mathdle - rank the best next guesses for an arithmetic guessing puzzle
#[derive(Parser, Debug)]
#[command(name = "mathdle")]
#[command(
    about = "Rank candidate expressions for a Mathler-style puzzle from the feedback so far"
)]
#[command(version)]
pub struct CliArgs {
    /// Alternating guess/response pairs: guess1 resp1 guess2 resp2 ...
    /// (o = hit, x = present elsewhere, _/-/space = absent)
    pub rounds: Vec<String>,

    /// Number of squares: easy=5, normal=6, hard=8
    #[arg(short = 'k', long = "depth")]
    pub depth: usize,

    /// Value the hidden expression evaluates to
    #[arg(short = 'a', long = "answer")]
    pub answer: f64,

    /// Force a search strategy instead of auto-selecting one
    #[arg(short = 's', long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Keep algebraically redundant forms such as 1*x, x/1 and x+0
    #[arg(short = 'g', long = "allow-identities")]
    pub allow_identities: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    if args.rounds.len() % 2 != 0 {
        bail!("rounds must come in guess/response pairs");
    }

    let mut solver =
        PuzzleSolver::new(args.depth, args.answer).context("unsupported puzzle shape")?;
    solver.set_allow_identities(args.allow_identities);

    for pair in args.rounds.chunks(2) {
        solver
            .add(&pair[0], &pair[1])
            .with_context(|| format!("rejected round '{} {}'", pair[0], pair[1]))?;
    }

    info!(
        "Searching depth-{} expressions that equal {}",
        args.depth, args.answer
    );

    let candidates = solver.solve(args.strategy.map(StrategyArg::to_strategy));
    if candidates.is_empty() {
        warn!("No candidate matches the accumulated feedback");
        println!("Unknown.");
        return Ok(());
    }
    for candidate in &candidates {
        println!("{}", candidate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "mathdle", "-k", "6", "-a", "6", "12/2-0", "ox_oxx",
        ])
        .expect("valid arguments");

        assert_eq!(args.depth, 6);
        assert_eq!(args.answer, 6.0);
        assert_eq!(args.rounds, vec!["12/2-0", "ox_oxx"]);
        assert!(args.strategy.is_none());
        assert!(!args.allow_identities);
    }

    #[test]
    fn test_depth_and_answer_are_required() {
        assert!(CliArgs::try_parse_from(["mathdle", "-k", "6"]).is_err());
        assert!(CliArgs::try_parse_from(["mathdle", "-a", "9"]).is_err());
    }

    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(StrategyArg::Bara.to_strategy(), Strategy::Bara);
        assert_eq!(StrategyArg::All.to_strategy(), Strategy::All);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
