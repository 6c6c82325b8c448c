use std::path::PathBuf;

use anyhow::{Context, Result};
use dotboy_core::{SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: dotboy <rom_path> <out_rgb24_path> [frames]";
const DEFAULT_FRAMES: u32 = 120;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("dotboy: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let out_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let frames = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'"))?,
        None => DEFAULT_FRAMES,
    };
    let boot_path = std::env::var_os("DOTBOY_BOOT_ROM").map(PathBuf::from);

    let mut gb = dotboy::load_cartridge_file(&rom_path, boot_path.as_deref())?;
    dotboy::run_frames(&mut gb, frames)?;

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    dotboy::framebuffer_to_rgb24(gb.framebuffer(), &mut buffer);
    std::fs::write(&out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}
