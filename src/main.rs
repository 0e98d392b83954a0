//! Skyflap entry point
//!
//! Parses arguments, sets up logging and the terminal, and runs the
//! fixed-rate game loop.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

use skyflap::platform::{FrameClock, drain_events};
use skyflap::renderer::{Framebuffer, FramebufferView, fit_viewport, framebuffer_size};
use skyflap::settings::DEFAULT_SETTINGS_FILE;
use skyflap::{App, Settings, Theme};

/// Command line options
struct Options {
    config: PathBuf,
    seed: Option<u64>,
    theme: Option<Theme>,
}

fn main() -> io::Result<()> {
    let options = parse_args();
    let mut settings = Settings::load(&options.config);
    if let Some(theme) = options.theme {
        settings.theme = theme;
    }
    init_logging(&settings);
    log::info!("Skyflap {} starting...", env!("CARGO_PKG_VERSION"));
    log::info!("Theme: {}", settings.theme.as_str());

    let seed = options
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    let mut app = App::new(&settings, seed);
    log::info!("Game initialized with seed: {}", app.seed());
    run(&mut app)?;

    log::info!("Skyflap exiting (high score {})", app.state().high_score);
    Ok(())
}

fn parse_args() -> Options {
    let mut options = Options {
        config: PathBuf::from(DEFAULT_SETTINGS_FILE),
        seed: None,
        theme: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("skyflap {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyflap - terminal pipe-dodging arcade game\n");
                println!("Usage: skyflap [options]\n");
                println!("Options:");
                println!("  --config <path>  Settings file (default {})", DEFAULT_SETTINGS_FILE);
                println!("  --seed <n>       Fixed random seed");
                println!("  --theme <name>   Starting theme: day or night");
                println!("  --version        Show version information");
                println!("  --help           Show this help message\n");
                println!("Controls:");
                println!("  SPACE / Up       Flap, start, restart");
                println!("  Mouse click      Press the start button");
                println!("  N                Toggle day/night");
                println!("  Q / Esc          Quit");
                std::process::exit(0);
            }
            "--config" => match args.next() {
                Some(path) => options.config = PathBuf::from(path),
                None => usage_error("--config needs a path"),
            },
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => options.seed = Some(seed),
                None => usage_error("--seed needs a non-negative integer"),
            },
            "--theme" => match args.next().as_deref().and_then(Theme::from_str) {
                Some(theme) => options.theme = Some(theme),
                None => usage_error("--theme needs 'day' or 'night'"),
            },
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
    }
    options
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'skyflap --help' for usage.");
    std::process::exit(1);
}

/// Log to a file: the terminal belongs to the game
fn init_logging(settings: &Settings) {
    let Some(path) = &settings.log_path else {
        return;
    };
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Logging disabled, cannot open {}: {}", path.display(), e),
    }
}

/// Set up the terminal, run the loop, and restore the terminal
fn run(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = game_loop(&mut terminal, app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn game_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut clock = FrameClock::new();
    let mut framebuffer = Framebuffer::new(0, 0);
    let mut viewport = fit_viewport(terminal.size()?);

    loop {
        clock.wait();

        // Pointer events map through the viewport of the last drawn frame
        let events = drain_events(viewport)?;
        if app.step(events, clock.elapsed_ms()).is_break() {
            return Ok(());
        }

        terminal.draw(|frame| {
            viewport = fit_viewport(frame.size());
            let (width, height) = framebuffer_size(viewport);
            framebuffer.resize(width, height);
            app.draw(&mut framebuffer);
            frame.render_widget(FramebufferView::new(&framebuffer), viewport);
        })?;
    }
}
