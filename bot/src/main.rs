use std::io::{self, BufRead};

use clap::Parser;
use lightsout_bot::{Console, LightsOutBot};

#[derive(Parser, Debug)]
#[command(version, about = "Play Lights Out through the bot from a terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// User to act as until switched with `user <name>`
    #[arg(short, long, default_value = "player")]
    user: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut console = Console::new(LightsOutBot::new(seed), io::stdout().lock(), &args.user);
    console.run_line("help")?;

    for line in io::stdin().lock().lines() {
        match console.run_line(&line?) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => log::error!("{err:#}"),
        }
    }

    log::debug!("Bye");
    Ok(())
}
