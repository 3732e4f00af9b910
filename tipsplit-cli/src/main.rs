//! # tipsplit - Interactive Tip Calculator TUI
//!
//! A terminal user interface for splitting a restaurant bill with gratuity:
//! live per-person totals while typing the bill, a discrete tip slider,
//! +/- split controls, plus one-shot and guided-prompt modes for scripts
//! and quick answers.
//!
//! ```bash
//! # Interactive calculator
//! tipsplit
//!
//! # One-shot: 120.50 bill, 15% tip, split 4 ways
//! tipsplit --bill 120.50 --tip 15 --split 4
//!
//! # Same, as JSON
//! tipsplit --bill 120.50 --tip 15 --split 4 --json
//!
//! # Guided prompts instead of the TUI
//! tipsplit --wizard
//!
//! # Write a sample config file
//! tipsplit init-config
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::warn;

use tipsplit_core::prelude::*;

mod config_loader;
mod report;
mod tui;
mod wizard;

use config_loader::CliConfig;
use tui::{handle_events, ui, App};

/// Interactive tip calculator CLI
#[derive(Parser, Debug)]
#[command(name = "tipsplit")]
#[command(author = "tipsplit contributors")]
#[command(version)]
#[command(about = "Split a bill with tip, interactively or in one shot", long_about = None)]
struct Args {
    /// Write debug logs to the logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Currency code for display (BRL, USD, EUR, GBP)
    #[arg(long)]
    currency: Option<String>,

    /// Number of intervals on the tip slider
    #[arg(long)]
    steps: Option<u32>,

    /// Bill amount (switches to one-shot mode)
    #[arg(long)]
    bill: Option<Decimal>,

    /// Number of people sharing the bill
    #[arg(long)]
    split: Option<u32>,

    /// Tip percentage, e.g. 15 for 15%
    #[arg(long)]
    tip: Option<Decimal>,

    /// Label for the bill (e.g. "Dinner")
    #[arg(long)]
    label: Option<String>,

    /// Output results as JSON (one-shot mode)
    #[arg(long, default_value = "false")]
    json: bool,

    /// Answer guided prompts instead of using the TUI
    #[arg(long, default_value = "false")]
    wizard: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a sample configuration file and print its location
    InitConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file_config = CliConfig::load();

    // Tracing setup. The TUI owns the terminal, so while it runs log lines
    // may go to a file but never to the console.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none() && args.bill.is_none() && !args.wizard;
    let log_enabled = args.log || file_config.enable_logging.unwrap_or(false);

    if log_enabled {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "tipsplit.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tipsplit=debug".parse().unwrap());

        // File layer only inside the TUI, console plus file everywhere else
        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        tracing::info!(
            "--- Tip Split Session Started [{}] ---",
            chrono::Utc::now()
        );
    } else {
        _file_guard = None;
        // With logging off, the TUI gets no subscriber at all; the other
        // modes still report at info level on the console.
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("tipsplit=info".parse().unwrap()),
                )
                .init();
        }
    }

    let config = resolve_config(&args, &file_config)?;
    let default_rate = resolve_default_rate(&file_config);

    // Subcommands finish before any terminal takeover
    if let Some(Commands::InitConfig) = args.command {
        let path = CliConfig::create_sample()?;
        println!("Sample configuration written to {:?}", path);
        return Ok(());
    }

    if args.wizard {
        let breakdown = wizard::run_wizard_mode(&config)?;
        report::print_breakdown(&breakdown, &config);
        report::print_trace(&breakdown);
        return Ok(());
    }

    if args.bill.is_some() {
        return run_once(&args, &config, default_rate);
    }

    let mut state = CalculatorState::new();
    state.set_rate(default_rate);
    run_tui(config, state)
}

/// Merges settings from the config file and command line flags.
/// Flags win over the file, the file wins over defaults.
fn resolve_config(args: &Args, file: &CliConfig) -> Result<TipConfig, Box<dyn std::error::Error>> {
    let mut config = TipConfig::default();

    if let Some(code) = &file.currency {
        match code.parse::<Currency>() {
            Ok(currency) => config.currency = currency,
            Err(_) => warn!("Ignoring unknown currency {:?} from config file", code),
        }
    }
    if let Some(steps) = file.tip_steps {
        config.rate_steps = steps;
    }

    if let Some(code) = &args.currency {
        config.currency = code
            .parse::<Currency>()
            .map_err(|_| format!("Unknown currency code: {}", code))?;
    }
    if let Some(steps) = args.steps {
        config.rate_steps = steps;
    }

    config.validate()?;
    Ok(config)
}

/// The tip rate preselected before the user touches the slider.
fn resolve_default_rate(file: &CliConfig) -> TipRate {
    let Some(percent) = file.default_tip_percent else {
        return TipRate::ZERO;
    };
    match TipRate::from_percent(percent) {
        Ok(rate) => rate,
        Err(e) => {
            warn!("Ignoring default-tip-percent from config file: {}", e);
            TipRate::ZERO
        }
    }
}

/// Calculates and prints a single breakdown without entering the TUI.
fn run_once(
    args: &Args,
    config: &TipConfig,
    default_rate: TipRate,
) -> Result<(), Box<dyn std::error::Error>> {
    let bill = args.bill.unwrap_or_default();
    let split = SplitCount::new(args.split.unwrap_or(1))?;
    let rate = match args.tip {
        Some(percent) => TipRate::from_percent(percent)?,
        None => default_rate,
    };

    let mut calculator = TipCalculator::new().bill(bill).rate(rate).split(split);
    if let Some(label) = &args.label {
        calculator = calculator.label(label.clone());
    }
    let breakdown = calculator.calculate()?;

    if args.json {
        report::print_json(&breakdown)
    } else {
        report::print_breakdown(&breakdown, config);
        report::print_trace(&breakdown);
        Ok(())
    }
}

/// Hands the terminal to the interactive calculator until the user quits.
fn run_tui(config: TipConfig, state: CalculatorState) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, state);

    let mut terminal = ratatui::init();

    // The terminal must be restored even when the loop errors out
    let result = run_app(&mut terminal, &mut app);

    ratatui::restore();

    result
}

/// Draw-then-handle loop; returns once a handler requests shutdown.
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}
