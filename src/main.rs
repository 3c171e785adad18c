use clap::Parser;
use font_installer::cli::Cli;
use font_installer::config::Config;
use font_installer::constants::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use font_installer::run;
use std::sync::mpsc;
use std::thread;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    cli.apply(&mut config.install);

    let folder = cli.folder.clone();
    let settings = config.install;
    let (tx, rx) = mpsc::channel();

    // Installation blocks on file I/O and OS calls; progress is printed here
    // while the worker runs.
    let worker = thread::spawn(move || run(&folder, &settings, tx));

    for event in rx {
        println!("{}", event);
    }

    match worker.join() {
        Ok(Ok(outcome)) => {
            if outcome.any_installed {
                println!("{}", SUCCESS_MESSAGE);
            } else {
                eprintln!("{}", FAILURE_MESSAGE);
                std::process::exit(1);
            }
        }
        Ok(Err(e)) => {
            log::error!("Application error: {}", e);
            std::process::exit(1);
        }
        Err(_) => {
            log::error!("Installer thread panicked");
            std::process::exit(1);
        }
    }
}
