use anyhow::{bail, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use photo_archive::{catalog, load_file, Subject};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <seed.json> [key-query]", program_name(&args));
    }

    let seed = load_file(&args[1])?;
    let catalog = catalog();
    seed.register_into(catalog)?;

    let subjects = match args.get(2) {
        Some(query) => catalog.search(Some(query.as_str())),
        None => catalog.all(),
    };

    for subject in &subjects {
        println!("{}", subject.summary());
    }
    println!("{} of {} subjects", subjects.len(), catalog.size());

    Ok(())
}

/// argv[0], or the binary's own name when the OS passed an empty argv
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("photo-archive")
}
