//! Dump golden reference buffers.
//!
//! Runs the simulation from a fixed seed and writes `chars`/`attrs` at each
//! checkpoint frame as raw little-endian `u32` files.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use fire::config::FireConfig;
use fire::golden::{self, BufferKind, CHECKPOINT_FRAMES};
use fire::Fire;

#[derive(Parser, Debug)]
#[command(about = "Generate golden reference dumps for the fire simulation")]
struct Args {
    /// TOML file with `cols`, `rows` and `seed`; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    cols: Option<i32>,

    #[arg(long)]
    rows: Option<i32>,

    #[arg(long)]
    seed: Option<u32>,

    /// Checkpoint frames, ascending.
    #[arg(long, value_delimiter = ',', default_values_t = CHECKPOINT_FRAMES)]
    frames: Vec<u32>,

    /// Output directory, created if missing.
    #[arg(long, default_value = "tests/golden")]
    out: PathBuf,
}

impl Args {
    fn resolve_config(&self) -> Result<FireConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => FireConfig::from_toml_str(&fs::read_to_string(path)?)?,
            None => FireConfig::default(),
        };
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    let mut frames = args.frames.clone();
    frames.sort_unstable();
    frames.dedup();

    fs::create_dir_all(&args.out)?;
    let mut fire = Fire::from_config(&config)?;
    let size = fire.chars()?.len();

    println!(
        "Generating golden reference: {}x{} canvas, seed={}",
        fire.width()?,
        fire.height()?,
        config.seed
    );

    let mut frame = 0;
    for checkpoint in frames {
        while frame < checkpoint {
            fire.step()?;
            frame += 1;
        }
        golden::write(
            &golden::path_for(&args.out, frame, BufferKind::Chars),
            fire.chars()?,
        )?;
        golden::write(
            &golden::path_for(&args.out, frame, BufferKind::Attrs),
            fire.attrs()?,
        )?;
        println!("  Frame {frame:3}: dumped {size} uint32 values");
    }

    println!("Done. Golden files in {}", args.out.display());
    Ok(())
}
