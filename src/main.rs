use anyhow::{Context, Result};
use funcsort::config::{executable_dir, OrganizerConfig};
use funcsort::organizer::Organizer;
use funcsort::output::Reporter;

fn main() -> Result<()> {
    // The script is always looked up next to the binary; no arguments are read
    let dir = executable_dir().context("cannot locate the funcsort executable")?;
    let paths = OrganizerConfig::default().paths_in(&dir, chrono::Local::now());

    let organizer = Organizer::new(Reporter::new());
    if let Err(err) = organizer.run(&paths) {
        organizer.reporter().error(&err);
        std::process::exit(err.exit_code);
    }

    Ok(())
}
