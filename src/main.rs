//! Argonaut - A terminal explorer for ARGO float profiles.

use anyhow::Result;
use argonaut::app::App;
use argonaut::catalog::{
    discover_sources, initial_catalog, run_ingest, summarize, synthetic::DEFAULT_FLOAT_COUNT,
    CatalogConfig, CatalogHandle, FsFetcher, SourceSpec,
};
use argonaut::data::NetcdfDecoder;
use argonaut::{ui, ArgonautError};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "argonaut")]
#[command(about = "A terminal explorer for ARGO float profiles", long_about = None)]
struct Args {
    /// Directory of <float>_prof.nc files, or a single NetCDF profile file
    data: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Size of the synthetic float population
    #[arg(long, default_value_t = DEFAULT_FLOAT_COUNT)]
    floats: usize,

    /// Seed for a reproducible synthetic population
    #[arg(long)]
    seed: Option<u64>,

    /// Print a catalog summary and exit instead of opening the viewer
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = CatalogConfig {
        floats: args.floats,
        seed: args.seed,
    };
    config.validate()?;

    let sources = match &args.data {
        Some(path) => match discover_sources(path) {
            Ok(sources) => sources,
            Err(ArgonautError::SourceNotFound { .. }) => {
                eprintln!("Error: Path not found: {}", path.display());
                std::process::exit(1);
            },
            Err(e) => return Err(e.into()),
        },
        None => Vec::new(),
    };

    // One worker is enough: sources are awaited one at a time.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let mut rng = config.rng();
    let handle = CatalogHandle::new(initial_catalog(config.floats, &mut rng));
    let ingest_rng = StdRng::seed_from_u64(rng.gen());

    if args.summary {
        let report = runtime.block_on(ingest_sources(handle.clone(), sources, ingest_rng));
        for line in summarize(&handle.snapshot()).report_lines() {
            println!("{}", line);
        }
        if report.attempted > 0 {
            println!("Ingest: {}", report.summary());
            for failure in &report.failures {
                println!("  failed {}", failure);
            }
        }
        return Ok(());
    }

    if !sources.is_empty() {
        runtime.spawn(ingest_sources(handle.clone(), sources, ingest_rng));
    }

    // Setup terminal
    enable_raw_mode().map_err(|e| ArgonautError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&handle, StdRng::seed_from_u64(rng.gen()));
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runtime.shutdown_background();

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Argonaut exited");
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        tracing::info!("Starting Argonaut");
    } else if args.summary {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

async fn ingest_sources(
    handle: CatalogHandle,
    sources: Vec<SourceSpec>,
    mut rng: StdRng,
) -> argonaut::catalog::IngestReport {
    run_ingest(&handle, &sources, &FsFetcher, &NetcdfDecoder, &mut rng).await
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        app.refresh();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.cursor_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.cursor_down();
            },

            // Vim navigation
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                app.goto_last();
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('t')) => {
                app.toggle_details();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.cycle_theme();
            },
            (KeyModifiers::NONE, KeyCode::Char('c')) => {
                app.cycle_chart();
            },

            // Clipboard
            (KeyModifiers::NONE, KeyCode::Char('y')) => {
                app.copy_current();
            },

            _ => {},
        }
        pending_g = false;
    }
}
