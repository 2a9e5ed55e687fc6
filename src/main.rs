use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, EventStream,
};
use crossterm::execute;
use futures::StreamExt;
use ratatui::DefaultTerminal;

use suggestbox::{SuggestError, WordListProvider};
use suggestbox::app::App;
use suggestbox::config::load_config;

/// Words offered when no --words file is given
const DEFAULT_WORDS: &[&str] = &[
    "canary", "capybara", "caracal", "cardinal", "caribou", "cat", "catfish", "cattle",
    "chameleon", "cheetah", "chinchilla", "cobra", "condor", "cougar", "coyote", "crab",
    "crane", "crocodile", "crow", "dingo", "dolphin", "donkey", "dove", "eagle", "eel",
    "falcon", "ferret", "flamingo", "fox", "gazelle", "gecko", "giraffe", "gorilla",
    "hamster", "hedgehog", "heron", "hyena", "ibis", "iguana", "jackal", "jaguar",
    "kangaroo", "koala", "lemur", "leopard", "lynx", "macaw", "marmot", "meerkat",
    "mongoose", "narwhal", "ocelot", "otter", "panther", "pelican", "puffin", "raccoon",
];

/// Interactive demo of the suggestion dropdown
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Word list to suggest from, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Simulated provider latency in milliseconds
    #[arg(short, long, default_value_t = 0)]
    latency_ms: u64,

    /// Config file (defaults to ~/.config/suggestbox/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = load_config(args.config.as_deref());
    let provider = match &args.words {
        Some(path) => WordListProvider::from_file(path)?,
        None => WordListProvider::new(DEFAULT_WORDS.iter().copied()),
    }
    .with_latency(Duration::from_millis(args.latency_ms));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async move {
        let mut app = App::new(provider, config.config.dropdown.to_options())?;
        if let Some(warning) = config.warning {
            app.set_status(warning);
        }

        // Initialize terminal (handles raw mode, alternate screen, etc.)
        let terminal = ratatui::init();
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableFocusChange,
            EnableBracketedPaste
        )?;

        let result = run(terminal, &mut app).await;

        app.autocomplete.dispose();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture
        );
        ratatui::restore();

        result
    })
}

async fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = app.autocomplete.next_event() => {
                app.autocomplete.handle_event(event);
            }
        }
    }

    Ok(())
}

/// Send logs to `path`; without a path logging stays off so the TUI is not
/// overdrawn
fn init_logging(path: Option<&Path>) -> Result<(), SuggestError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = std::fs::File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("Logging to {}", path.display());
    Ok(())
}
