mod tick_events;
mod ui;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::audio::{open_audio, AudioSink};
use flappy::core::constants::CONFIG_FILE;
use flappy::input::InputAdapter;
use flappy::utils::{build_info, logging, persistence};
use flappy::{FlappyGame, GameConfig, GameLoop};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const USAGE: &str = "\
Usage: flappy [OPTIONS]

Options:
  --debug        Write debug-level logs to ~/.flappy/flappy.log
  -v, --version  Print version information
  -h, --help     Print this help

Controls: any key flaps, Space restarts after a crash, Esc or q quits.";

fn main() -> io::Result<()> {
    let mut verbose = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "--debug" => verbose = true,
            other => {
                eprintln!("Unknown argument: {}\n\n{}", other, USAGE);
                std::process::exit(2);
            }
        }
    }

    logging::init_logging(verbose);
    info!("{}", build_info::version_line());

    let config = load_config();
    let mut audio = open_audio(&config.sounds_dir);
    let mut game = match FlappyGame::new(config) {
        Ok(game) => game,
        Err(e) => {
            warn!(error = %e, "config rejected, using defaults");
            FlappyGame::default()
        }
    };

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let enhanced = enable_key_event_types();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut game, audio.as_mut());

    // Always restore the terminal, even if the loop failed.
    let restored = restore_terminal(&mut terminal, enhanced);

    if let Err(ref e) = result {
        warn!(error = %e, "game loop exited with an error");
    }
    if let Err(ref e) = restored {
        warn!(error = %e, "terminal restore failed");
    }
    info!(final_score = game.state().score, "exiting");
    result.and(restored)
}

/// Ask the terminal to report repeat and release events, so a held key
/// arrives as one press followed by repeats. Terminals without the kitty
/// keyboard protocol send auto-repeat as plain presses.
fn enable_key_event_types() -> bool {
    match supports_keyboard_enhancement() {
        Ok(true) => match io::stdout().execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        )) {
            Ok(_) => {
                info!("keyboard enhancement enabled");
                true
            }
            Err(e) => {
                warn!(error = %e, "could not enable keyboard enhancement");
                false
            }
        },
        Ok(false) => {
            info!("terminal reports key repeats as presses");
            false
        }
        Err(e) => {
            warn!(error = %e, "keyboard enhancement query failed");
            false
        }
    }
}

/// Run every restore step, then report the first failure.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    enhanced: bool,
) -> io::Result<()> {
    let pop = if enhanced {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)
            .map(|_| ())
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let cursor = terminal.show_cursor();

    first_error([pop, raw, screen, cursor])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn load_config() -> GameConfig {
    match persistence::data_path(CONFIG_FILE) {
        Ok(path) => GameConfig::load_or_default(&path),
        Err(e) => {
            warn!(error = %e, "no data directory, using default config");
            GameConfig::default()
        }
    }
}

/// Fixed-tick loop: poll keys until the next tick deadline, then advance
/// the game once with whatever was pressed in between.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut FlappyGame,
    audio: &mut dyn AudioSink,
) -> io::Result<()> {
    let tick = Duration::from_millis(game.config().tick_interval_ms);
    let mut input = InputAdapter::new();
    let mut rng = rand::thread_rng();
    let started = Instant::now();
    let mut last_tick = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| ui::draw_ui(frame, game))?;
            needs_redraw = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input.handle_key(key),
                Event::Resize(..) => needs_redraw = true,
                _ => {}
            }
        }

        if input.quit_requested() {
            info!("quit requested");
            return Ok(());
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let now_ms = started.elapsed().as_millis() as u64;
            let events = game.update(input.take_tick_input(), now_ms, &mut rng);
            tick_events::apply_tick_events(&events, audio);
            needs_redraw = true;
        }
    }
}
