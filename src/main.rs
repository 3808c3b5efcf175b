//! Wheelfield entry point
//!
//! Thin CLI glue around the generation core: parse canvas size and an
//! optional seed, run one regenerate pass, and write the layout as JSON on
//! stdout for an external renderer to consume.
//!
//! Usage: wheelfield [width] [height] [seed]

use std::error::Error;

use wheelfield::Layout;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: f32 = match args.next() {
        Some(s) => s.parse()?,
        None => 900.0,
    };
    let height: f32 = match args.next() {
        Some(s) => s.parse()?,
        None => 600.0,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => fresh_seed(),
    };

    log::info!("Generating {width}x{height} layout with seed {seed}");
    let layout = Layout::generate(seed, width, height);

    let json = serde_json::to_string_pretty(&layout)?;
    println!("{json}");
    Ok(())
}

/// Entropy for a fresh composition: wall clock mixed with a random draw.
fn fresh_seed() -> u64 {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    millis ^ rand::random::<u64>()
}
