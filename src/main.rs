use clap::{Arg, Command};
use color_eyre::Result;

mod adapters;
mod application;
mod domain;
mod ports;

use adapters::{console::MainMenu, store::FileProjectStore};
use application::Tracker;

fn main() -> Result<()> {
    // Initialize color-eyre for better error reporting
    color_eyre::install()?;

    // Initialize logging to file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("tracker-cli.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Parse command line arguments
    let matches = Command::new("tracker-cli")
        .version("0.1.0")
        .about("A console tracker for projects and their tasks")
        .long_about("An interactive console tracker for projects and their tasks.\n\nProjects are kept in memory while the menu runs and written back to a\nJSON snapshot file when you exit.")
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Snapshot file to load and save (defaults to the platform data directory)"),
        )
        .get_matches();

    // Create the snapshot store
    let store = match matches.get_one::<String>("file") {
        Some(path) => FileProjectStore::with_path(path),
        None => FileProjectStore::new()?,
    };

    let mut tracker = Tracker::new(Box::new(store));

    // Restore the previous session; a broken snapshot is reported but not
    // fatal, the session just starts empty.
    if let Err(e) = tracker.load() {
        eprintln!("Could not load saved projects ({e}); starting with an empty collection.");
    }

    let menu = MainMenu::new();
    menu.run(&mut tracker)?;

    tracker.save()?;
    println!("Projects saved. Bye!");

    Ok(())
}
