//! Binary entrypoint for the Treasure Hunter CLI.
//!
//! Commands:
//! - `play [--name <n>] [--mode <y|n|e|s|test>] [--seed <s>] [--script <file>]` - start a hunt (default)
//! - `init` - write a starter `treasure-hunter.toml`
//!
//! See the library crate docs for module-level details: `treasure_hunter::`.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use treasure_hunter::config::{Config, Modes, Rules};
use treasure_hunter::errors::HuntError;
use treasure_hunter::game::{
    CommandSource, Game, GameRng, LineInput, Palette, ScriptedInput,
};

#[derive(Parser)]
#[command(name = "treasure-hunter")]
#[command(about = "Hunt for the crown, the trophy and the gem")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "treasure-hunter.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a hunt
    Play(PlayArgs),
    /// Write a default configuration file
    Init,
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Hunter name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Mode: y (hard), n (normal), e (easy), s (samurai) or test
    #[arg(short, long)]
    mode: Option<String>,

    /// Seed for the random source, to replay a hunt
    #[arg(long)]
    seed: Option<u64>,

    /// Read commands from a file instead of the terminal
    #[arg(long)]
    script: Option<String>,

    /// Print a JSON summary of the session when it ends
    #[arg(long)]
    summary_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(PlayArgs::default())) {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            info!("Initializing new configuration");
            Config::create_default(&cli.config)?;
            println!("Configuration file created at {}", cli.config);
            Ok(())
        }
        Commands::Play(args) => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&Some(config.clone()), cli.verbose);
            play(&config, args)
        }
    }
}

fn play(config: &Config, args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    let name = match args.name {
        Some(name) => name,
        None => prompt(&mut stdin, &mut stdout, "What's your name, Hunter? ")?.unwrap_or_default(),
    };
    let modes = match args.mode.as_deref() {
        Some(answer) => Modes::from_answer(answer)
            .ok_or_else(|| anyhow::anyhow!("Unknown mode '{}' (expected y, n, e, s or test)", answer))?,
        None => ask_modes(&mut stdin, &mut stdout)?,
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {} (replay with --seed {})", rng.seed(), rng.seed());

    let rules = Rules::new(&config.game, modes);
    let palette = Palette::new(config.display.color && atty::is(atty::Stream::Stdout));
    let mut game = Game::new(&name, rules, rng);

    let mut input: Box<dyn CommandSource + '_> = match args.script {
        Some(path) => {
            let script = ScriptedInput::from_file(&path)
                .map_err(|source| HuntError::Script { path: path.clone(), source })?;
            info!("replaying {} commands from {}", script.remaining(), path);
            Box::new(script)
        }
        None => Box::new(LineInput::new(stdin)),
    };

    let ending = game.run(input.as_mut(), &mut stdout, palette).map_err(HuntError::from)?;
    info!("session ended: {:?}", ending);

    if args.summary_json {
        let summary = serde_json::to_string_pretty(&game.summary()).map_err(HuntError::from)?;
        println!("{}", summary);
    }
    Ok(())
}

/// Print a question and read one trimmed answer. `None` on end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_modes(input: &mut impl BufRead, out: &mut impl Write) -> Result<Modes> {
    let mut question = "Hard mode? (y/n) Or just type \"test\" for test mode: ";
    loop {
        let Some(answer) = prompt(input, out, question)? else {
            warn!("input closed before a mode was chosen; playing normal mode");
            return Ok(Modes::default());
        };
        if let Some(modes) = Modes::from_answer(&answer) {
            return Ok(modes);
        }
        question = "That ain't an option, bucko. Try again: ";
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Warn,
        (1, _) => log::LevelFilter::Info,
        (2, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_deref())
        .filter(|path| !path.is_empty())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(file) = log_file {
        let file = std::sync::Mutex::new(file);
        // The game owns the terminal; only mirror log lines there when stderr is a tty.
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let line = format!(
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            );
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
