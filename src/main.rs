//! Galactic Clash entry point
//!
//! Native builds run headless: a seeded demo script stands in for the
//! keyboard, and frames, banners and sounds go to the log.
//!
//! Usage: `galactic-clash [CONFIG.json] [--matches N] [--seed S] [--ticks T] [--realtime]`

use galactic_clash::MatchConfig;
use galactic_clash::audio::LogAudio;
use galactic_clash::controls::Controls;
use galactic_clash::driver::FrameDriver;
use galactic_clash::platform::{Clock, ManualClock, ScriptedInput, SystemClock};
use galactic_clash::renderer::LogRenderer;
use galactic_clash::sim::Side;

/// Command line options
#[derive(Debug)]
struct Options {
    config_path: Option<String>,
    matches: Option<usize>,
    seed: u64,
    ticks: usize,
    realtime: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: None,
            matches: None,
            seed: 12345,
            ticks: 60 * 60 * 5,
            realtime: false,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--matches" => options.matches = Some(parse_value(&arg, args.next())?),
            "--seed" => options.seed = parse_value(&arg, args.next())?,
            "--ticks" => options.ticks = parse_value(&arg, args.next())?,
            "--realtime" => options.realtime = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => options.config_path = Some(arg),
        }
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn play<C: Clock>(config: MatchConfig, options: &Options, clock: C) {
    let controls = Controls::default();
    let input = ScriptedInput::random_demo(options.seed, options.ticks, &controls);
    let driver = FrameDriver::new(
        config,
        controls,
        input,
        LogRenderer::new(),
        LogAudio::new(),
        clock,
    );
    let mut driver = match driver {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Invalid config: {e}");
            std::process::exit(1);
        }
    };

    let board = driver.run(options.matches);
    log::info!(
        "Session over: {} matches, {} {} - {} {}, {} frames drawn, {} sounds",
        board.matches_played(),
        Side::A.name(),
        board.wins(Side::A),
        board.wins(Side::B),
        Side::B.name(),
        driver.renderer().frames,
        driver.audio().played,
    );
}

fn main() {
    env_logger::init();
    log::info!("Galactic Clash (headless) starting...");

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => match MatchConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default match config");
            MatchConfig::default()
        }
    };

    if options.realtime {
        play(config, &options, SystemClock::new());
    } else {
        play(config, &options, ManualClock::new());
    }
}
