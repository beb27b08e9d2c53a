#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;

use anyhow::{bail, Result};
use dailies::config::constants::LOGGING_LEVEL_DEFAULT;
use dailies::config::Paths;
use dailies::games::{Console, Daily, Game};
use dailies::menu::Menu;
use env_logger::{Builder, Env};
use log::info;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(LOGGING_LEVEL_DEFAULT)).init();
    info!("Application started.");
    let options = Options::from_args()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let mut console = Console::new(&mut input, &mut output);
    start(&options, &mut console)?;
    info!("Application finished.");
    Ok(())
}

fn start(options: &Options, console: &mut Console<'_>) -> Result<()> {
    let mut paths = Paths::new(options.data_dir());
    let kind = match options.game() {
        Some(kind) => kind,
        None => return Menu::load(&paths, options.seed()).run(console),
    };
    if let Some(input) = options.input() {
        paths = paths.with_input(kind, input);
    }
    match Daily::load(kind, &paths, options.seed())? {
        Some(mut game) => game.play(console),
        None => bail!("{} is not available", kind.name()),
    }
}
