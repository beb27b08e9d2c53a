use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use dailies::config::constants::DEFAULT_DATA_DIR;
use dailies::games::GameKind;

#[derive(Clone)]
pub(crate) struct Options {
    data_dir: PathBuf,
    game: Option<GameKind>,
    input: Option<PathBuf>,
    seed: Option<u64>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let game = match matches.value_of("game") {
            Some(name) => {
                Some(GameKind::from_name(name).ok_or_else(|| anyhow!("unknown game: {}", name))?)
            }
            None => None,
        };
        let seed = match matches.value_of("seed") {
            Some(s) => Some(s.parse::<u64>().with_context(|| format!("invalid seed: {}", s))?),
            None => None,
        };
        Ok(Self {
            data_dir: matches
                .value_of("data_dir")
                .unwrap_or(DEFAULT_DATA_DIR)
                .into(),
            game,
            input: matches.value_of("input").map(PathBuf::from),
            seed,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The single game to play instead of showing the menu
    pub fn game(&self) -> Option<GameKind> {
        self.game
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Dailies")
        .about("Solve and play the NYT daily puzzle games")
        .arg(
            Arg::with_name("data_dir")
                .short("d")
                .long("data-dir")
                .takes_value(true)
                .value_name("DIR")
                .help("directory of the game files")
                .default_value(DEFAULT_DATA_DIR),
        )
        .arg(
            Arg::with_name("game")
                .short("g")
                .long("game")
                .takes_value(true)
                .value_name("NAME")
                .help("play one game without the menu"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .requires("game")
                .help("read the puzzle for the game from a file"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .takes_value(true)
                .value_name("N")
                .help("seed the random number generator"),
        )
}
