use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::init::Mode;
use crate::pattern::Pattern;

/// Smallest grid the tool will run. Patterns need at least 3x3 of room, and anything under 9
/// leaves a glider nowhere to go.
pub const MIN_GRID_SIZE: usize = 9;

pub const DEFAULT_GRID_SIZE: usize = 50;
pub const DEFAULT_INTERVAL_MS: u64 = 50;
pub const DEFAULT_FRAMES: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "toroid-life")]
#[command(version)]
#[command(about = "Conway's game of life on a torus")]
pub struct Cli {
    /// Side length of the square grid
    #[arg(long = "grid-size", default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Delay between generations, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval: u64,

    /// Save the animation to this file. Must end in `.gif`.
    #[arg(long = "mov-file")]
    pub mov_file: Option<PathBuf>,

    /// Number of frames to record. In headless mode, this is also how many generations run.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Start from a single glider instead of a random grid
    #[arg(long, conflicts_with = "blinker")]
    pub glider: bool,

    /// Start from a single blinker instead of a random grid
    #[arg(long)]
    pub blinker: bool,

    /// Don't draw to the terminal
    #[arg(long)]
    pub headless: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be at least {min}, got {size}")]
    GridTooSmall { size: usize, min: usize },

    #[error("Interval must be at least 1 ms")]
    ZeroInterval,

    #[error("Frame count must be at least 1")]
    ZeroFrames,

    #[error("Movies are saved as GIF, expected a .gif file but got {0:?}")]
    NotAGif(PathBuf),
}

/// Everything a run needs, checked up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub interval: Duration,
    pub mode: Mode,
    pub mov_file: Option<PathBuf>,
    pub frames: usize,
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            mode: Mode::Random,
            mov_file: None,
            frames: DEFAULT_FRAMES,
            headless: false,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: cli.grid_size,
                min: MIN_GRID_SIZE,
            });
        }

        if cli.interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if cli.frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }

        if let Some(path) = &cli.mov_file {
            let is_gif = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));

            if !is_gif {
                return Err(ConfigError::NotAGif(path.clone()));
            }
        }

        let mode = match (cli.glider, cli.blinker) {
            (true, _) => Mode::Pattern(Pattern::Glider),
            (_, true) => Mode::Pattern(Pattern::Blinker),
            _ => Mode::Random,
        };

        Ok(Self {
            size: cli.grid_size,
            interval: Duration::from_millis(cli.interval),
            mode,
            mov_file: cli.mov_file,
            frames: cli.frames,
            headless: cli.headless,
        })
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use super::Cli;
    use super::Config;
    use super::ConfigError;
    use super::MIN_GRID_SIZE;
    use crate::init::Mode;
    use crate::pattern::Pattern;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("toroid-life").chain(args.iter().copied()))
            .expect("arguments should parse");

        Config::try_from(cli)
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]), Ok(Config::default()));
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "--grid-size",
            "20",
            "--interval",
            "100",
            "--mov-file",
            "out.gif",
            "--frames",
            "10",
            "--blinker",
            "--headless",
        ])
        .unwrap();

        assert_eq!(
            config,
            Config {
                size: 20,
                interval: Duration::from_millis(100),
                mode: Mode::Pattern(Pattern::Blinker),
                mov_file: Some(PathBuf::from("out.gif")),
                frames: 10,
                headless: true,
            }
        );
    }

    #[test]
    fn glider() {
        assert_eq!(
            parse(&["--glider"]).unwrap().mode,
            Mode::Pattern(Pattern::Glider)
        );
    }

    #[test]
    fn patterns_are_exclusive() {
        assert!(Cli::try_parse_from(["toroid-life", "--glider", "--blinker"]).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        for size in [0, 8] {
            assert_eq!(
                parse(&["--grid-size", &size.to_string()]),
                Err(ConfigError::GridTooSmall {
                    size,
                    min: MIN_GRID_SIZE
                })
            );
        }
        assert_eq!(parse(&["--interval", "0"]), Err(ConfigError::ZeroInterval));
        assert_eq!(parse(&["--frames", "0"]), Err(ConfigError::ZeroFrames));

        for path in ["out.mp4", "out", "gif"] {
            assert_eq!(
                parse(&["--mov-file", path]),
                Err(ConfigError::NotAGif(PathBuf::from(path)))
            );
        }

        assert!(parse(&["--mov-file", "OUT.GIF"]).is_ok());
        assert!(parse(&["--grid-size", "9"]).is_ok());
        assert!(Cli::try_parse_from(["toroid-life", "--grid-size", "-3"]).is_err());
    }
}
