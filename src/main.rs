//! FFTOcean - Tessendorf ocean surface synthesis
//!
//! Evolves a Phillips-spectrum ocean over time and writes every frame's
//! height grid as a grayscale PNG.

mod cli;

use std::time::Instant;

use clap::Parser;

use cli::Args;
use fftocean::export::{auto_range, save_height_image};
use fftocean::{Error, Ocean};

fn run(args: &Args) -> Result<(), Error> {
    let params = args.ocean_params()?;

    if args.dump_config {
        println!("{}", params.to_ron_string()?);
        return Ok(());
    }

    let export = args.export_config()?;
    let mut ocean = Ocean::new(params)?;
    let range = auto_range(&ocean);

    std::fs::create_dir_all(export.frames_dir()).map_err(Error::OutputDir)?;

    let total_frames = export.total_frames();
    log::info!(
        "Writing {} frames at {} fps to {}",
        total_frames,
        export.fps,
        export.frames_dir().display()
    );

    let start = Instant::now();
    for frame in 0..total_frames {
        ocean.advance(export.frame_time(frame));
        save_height_image(&ocean, range, &export.frame_path(frame))?;
        log::debug!(
            "Frame {}/{} (t = {:.3}s, peak {:.3}m)",
            frame + 1,
            total_frames,
            ocean.time(),
            ocean.peak_height()
        );
    }

    let elapsed = start.elapsed();
    log::info!(
        "Done in {:.2}ms ({:.2}ms per frame)",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / total_frames.max(1) as f64
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
