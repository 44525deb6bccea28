//! Generate a four-quadrant UV gradient map.

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
struct Opts {
    /// Output image filename
    filename: PathBuf,
    /// Output image resolution in pixels
    resolution: u32,
    /// Number of grid cells per side
    n_grids: u32,
}

fn main() {
    simple_logger::init().unwrap();

    let opts = Opts::parse();
    if let Err(err) = texgen::write_uv_map(&opts.filename, opts.resolution, opts.n_grids) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
