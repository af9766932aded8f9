mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappycat::core::constants::MAX_POLL_MS;
use flappycat::core::logging;
use flappycat::engine::Engine;
use flappycat::host::{ClosePositionOutcome, LandingPage};
use flappycat::input::{map_game_event, map_landing_event, GameInput, LandingInput};
use flappycat::{GameConfig, ScoringRule};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use ui::{draw_ui, View};

enum Screen {
    Landing,
    Game(Engine<StdRng>),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    seed: Option<u64>,
    exact_scoring: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliArgs),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                cli.seed = Some(seed);
            }
            "--exact-scoring" => cli.exact_scoring = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Command::Run(cli))
}

fn print_help() {
    println!("flappycat - absolutely shooketh\n");
    println!("Usage: flappycat [options]\n");
    println!("Options:");
    println!("  --seed <n>       Seed the random number generator");
    println!("  --exact-scoring  Score pipes only on an exact pass of the scoring line");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    if let Some(path) = GameConfig::config_path() {
        println!("\nConfig file: {}", path.display());
    }
    if let Some(path) = logging::log_file_path() {
        println!("Log file:    {}", path.display());
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("flappycat {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappycat --help' for usage.");
            std::process::exit(1);
        }
    };

    let (mut config, config_error) = match GameConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.exact_scoring {
        config.scoring = ScoringRule::ExactPosition;
    }

    let log_path = match logging::init(&config.log_filter) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    info!(seed = ?config.seed, scoring = ?config.scoring, log = ?log_path, "Starting flappycat");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Cleanup terminal, whether or not the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("Exiting"),
        Err(e) => error!(error = %e, "Event loop failed"),
    }
    println!("Goodbye! Still shook.");

    result
}

/// Each game gets its own RNG drawn from the session RNG, so a seeded
/// session replays the same games in the same order.
fn mount_engine(config: &GameConfig, rng: &mut StdRng) -> Engine<StdRng> {
    let engine_rng = StdRng::seed_from_u64(rng.gen());
    Engine::mount(config, engine_rng, Instant::now())
}

/// Wait for input no longer than the engine's next deadline.
fn poll_timeout(screen: &Screen, now: Instant) -> Duration {
    let max = Duration::from_millis(MAX_POLL_MS);
    match screen {
        Screen::Game(engine) => engine
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(max))
            .unwrap_or(max),
        Screen::Landing => max,
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &GameConfig) -> io::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut page = LandingPage::new(Instant::now());
    let mut screen = Screen::Landing;

    loop {
        let now = Instant::now();
        if let Screen::Game(engine) = &mut screen {
            engine.pump(now);
        }

        terminal.draw(|frame| {
            let view = match &screen {
                Screen::Landing => View::Landing(&page),
                Screen::Game(engine) => View::Game(engine.game()),
            };
            draw_ui(frame, view, now);
        })?;

        if !event::poll(poll_timeout(&screen, Instant::now()))? {
            continue;
        }
        let event = event::read()?;

        match &mut screen {
            Screen::Landing => match map_landing_event(&event) {
                LandingInput::PetCat => page.pet_cat(Instant::now()),
                LandingInput::ClosePosition => {
                    if page.try_close_position(&mut rng) == ClosePositionOutcome::OpenGame {
                        info!(money_lost = page.money_lost, "Opening game");
                        screen = Screen::Game(mount_engine(config, &mut rng));
                    }
                }
                LandingInput::Quit => return Ok(()),
                LandingInput::Other => {}
            },
            Screen::Game(engine) => match map_game_event(&event, engine.is_terminal()) {
                GameInput::Jump => {
                    engine.jump();
                }
                GameInput::Close => {
                    engine.close();
                    screen = Screen::Landing;
                }
                GameInput::Restart => {
                    info!(score = engine.score(), "Restarting game");
                    screen = Screen::Game(mount_engine(config, &mut rng));
                }
                GameInput::Quit => return Ok(()),
                GameInput::Other => {}
            },
        }
    }
}
