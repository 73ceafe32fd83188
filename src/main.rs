// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Player TUI.
//!
//! A terminal front-end for the playlist sequencing controller.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! MPV media engine driven through [`PlaybackController`].
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the controller and its engine, manages the
//!   terminal lifecycle and renders the UI.
//! * **Event Loops** capture user input and system ticks and feed them to the
//!   main thread.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input threads and the main thread is handled via
//! `std::sync::mpsc` channels.

mod events;
mod now_playing;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::TableState};
use std::{
    fs::{self, OpenOptions},
    io::{self},
    path::PathBuf,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use listplay::{
    PlaybackController,
    config::{self, AppConfig},
    player::mpv::MpvEngine,
    resolve::resolve_inputs,
};

use crate::{
    events::{AppEvent, process_events},
    now_playing::NowPlaying,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Play files, directories and M3U playlists in order")]
struct Cli {
    /// Media files, directories, M3U playlists or URLs.
    inputs: Vec<String>,

    /// Start playing as soon as the playlist is loaded.
    #[arg(long)]
    play: bool,

    /// Stay on a track when it finishes instead of moving on.
    #[arg(long)]
    no_advance: bool,

    /// Store the effective settings, command-line overrides included, as the
    /// new configuration.
    #[arg(long)]
    save_config: bool,

    /// Write the log here instead of next to the configuration file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaybackController<MpvEngine>,

    pub table_state: TableState,

    pub now_playing: NowPlaying,
    pub status_message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(controller: PlaybackController<MpvEngine>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let now_playing = NowPlaying::new(controller.engine().loaded_item());

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            table_state: TableState::new().with_selected(Some(0)),
            now_playing,
            status_message: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, resolves the inputs into a playlist, initialises
/// the media engine, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_config();

    init_logging(&config, cli.log_file.clone().or_else(config::default_log_file))?;

    config.start_playing |= cli.play;
    config.auto_advance &= !cli.no_advance;
    if cli.save_config {
        config::save_config(&config).context("Failed to save configuration")?;
        info!("configuration saved");
    }

    let tracks =
        resolve_inputs(&cli.inputs, &config.extensions).context("Failed to resolve inputs")?;
    info!(tracks = tracks.len(), "starting");

    let engine = MpvEngine::new().context("Failed to initialise media engine")?;
    let mut controller =
        PlaybackController::new(engine).with_auto_advance(config.auto_advance);

    controller
        .set_playlist(tracks)
        .context("Failed to load playlist")?;
    if config.start_playing {
        controller.play().context("Failed to start playback")?;
    }

    let mut app = App::new(controller);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Installs the `tracing` subscriber.
///
/// The terminal belongs to the TUI, so log output goes to a file. `RUST_LOG`
/// takes precedence over the configured level. Without a log file location
/// logging stays disabled.
fn init_logging(config: &AppConfig, log_file: Option<PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour))
        .context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// The controller and its engine stay on this thread, the spawned threads
/// only post [`AppEvent`]s.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is both
    // the minimum "frame rate" and the engine polling interval.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
