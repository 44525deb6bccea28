use std::path::Path;

use crate::{Canvas, Error, GridSpec};

/// Four-quadrant UV diagnostic map.
///
/// Every cell carries the product of its normalized offsets within its
/// quadrant, brightest at the outer corners of the grid and fading toward
/// the center. The quadrant picks the channels: red left of the vertical
/// midline, green in the top-right quadrant, blue in the bottom half. The
/// bottom-left quadrant therefore ramps in red and blue at once; this
/// matches the reference pattern and is kept as-is.
pub fn uv_map(spec: &GridSpec) -> Result<Canvas, Error> {
    let n = spec.n_grids();
    if n < 2 {
        return Err(Error::InvalidGridSpec(format!(
            "a UV map needs at least 2 grids per side, got {n}"
        )));
    }
    spec.warn_if_inexact();

    let res = spec.resolution() as usize;
    let gr = spec.grid_res() as usize;
    let half = n / 2;

    // u indexes column strips, v the cells within one strip.
    let columns: Vec<Canvas> = (0..n)
        .map(|u| {
            let cells: Vec<Canvas> = (0..n).map(|v| cell(u, v, half, gr)).collect();
            Canvas::vconcat(&cells)
        })
        .collect();

    Ok(Canvas::hconcat(&columns).cropped(res, res).scaled(255.0))
}

/// One flat-colored grid cell, keyed off the quadrant of `(u, v)`.
fn cell(u: u32, v: u32, half: u32, gr: usize) -> Canvas {
    let su = u >= half;
    let sv = v >= half;

    // Offset within the quadrant, largest at the outer edge of the grid.
    let lu = if su { u - half + 1 } else { half - u };
    let lv = if sv { v - half + 1 } else { half - v };
    let uf = lu as f64 / half as f64;
    let vf = lv as f64 / half as f64;
    let ramp = uf * vf;

    let r = if !su { ramp } else { 0.0 };
    let g = if su && !sv { ramp } else { 0.0 };
    let b = if sv { ramp } else { 0.0 };
    Canvas::splat(gr, gr, &[r, g, b])
}

/// Generate a UV map and encode it to `filename`.
pub fn write_uv_map(filename: &Path, resolution: u32, n_grids: u32) -> Result<(), Error> {
    let spec = GridSpec::new(resolution, n_grids)?;
    uv_map(&spec)?.save(filename)
}
