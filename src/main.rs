//! Terminal front-end and entry point.
//!
//! A thin shell around the library: it parses flags, loads configuration,
//! wires the command backend and OSC 52 clipboard into a [`Runtime`], and
//! redraws the screen whenever an event changes the view.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐   Event::CommandLine   ┌─────────────────────────┐
//! │ stdin reader (task)  │ ─────────────────────► │ Runtime (event loop)    │
//! └──────────────────────┘                        │  handle_event → actions │
//!                                                 │  timers, gateway calls  │
//! ┌──────────────────────┐   translation-result   │  toasts, clipboard      │
//! │ CommandBackend       │ ─────────────────────► │                         │
//! └──────────────────────┘                        └───────────┬─────────────┘
//!                                                             │ render
//!                                                             ▼
//!                                                          stdout
//! ```
//!
//! # Input
//!
//! Each line typed replaces the input text. Lines starting with `:` are
//! commands (`:src`, `:tgt`, `:swap`, `:clear`, `:go`, `:copy`, `:theme`,
//! `:quit`); `::` escapes a leading colon. End of input quits.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use translaterm::backend::CommandBackend;
use translaterm::infrastructure::Osc52Clipboard;
use translaterm::services::TranslationGateway;
use translaterm::{Config, Event, Runtime};

/// Width used when `$COLUMNS` is unset or unparsable.
const DEFAULT_COLS: usize = 80;

/// Translate text as you type.
#[derive(Debug, Parser)]
#[command(name = "translaterm", version, about)]
struct Args {
    /// Configuration file (default: $XDG_CONFIG_HOME/translaterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Span journal level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Translator program to run for each request
    #[arg(long, value_name = "PROGRAM")]
    translator: Option<String>,
}

impl Args {
    /// Flags override values from the configuration file.
    fn apply(self, config: &mut Config) {
        if let Some(level) = self.trace_level {
            config.trace_level = Some(level);
        }
        if self.light {
            config.start_dark = false;
        }
        if let Some(program) = self.translator {
            config.translator_command = program;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("translaterm: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> translaterm::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);

    translaterm::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let runtime = {
        let _guard = span.enter();
        tracing::debug!(translator = %config.translator_command, "starting");

        let backend = Arc::new(CommandBackend::new(config.translator_command.clone()));
        let gateway = Arc::new(TranslationGateway::new(backend));
        let clipboard = Arc::new(Osc52Clipboard::stdout());

        Runtime::new(
            translaterm::initialize(&config),
            gateway,
            clipboard,
            config.toast_duration(),
        )
    };

    event_loop(runtime, terminal_cols()).await
}

async fn event_loop(mut runtime: Runtime, cols: usize) -> translaterm::Result<()> {
    spawn_line_reader(runtime.sender());

    runtime.dispatch(Event::Startup)?;
    draw(&runtime, cols)?;

    while let Some(event) = runtime.next_event().await {
        match runtime.dispatch(event) {
            Ok(true) => draw(&runtime, cols)?,
            Ok(false) => {}
            Err(e) => tracing::debug!(error = %e, "error handling event"),
        }

        if runtime.should_quit() {
            tracing::debug!("quit requested");
            break;
        }
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Forwards every stdin line to the loop; end of input quits.
fn spawn_line_reader(tx: mpsc::UnboundedSender<Event>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(Event::CommandLine(line)).is_err() {
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            }
        }

        let _ = tx.send(Event::Quit);
    });
}

fn draw(runtime: &Runtime, cols: usize) -> std::io::Result<()> {
    let frame = translaterm::ui::render(runtime.state(), cols);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{frame}\r\n> ")?;
    stdout.flush()
}

fn terminal_cols() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse().ok())
        .unwrap_or(DEFAULT_COLS)
}
