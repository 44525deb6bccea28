use std::path::Path;

use crate::{Canvas, Error, GridSpec};

/// Binary chessboard: alternating black/white cells, black at the origin.
///
/// Builds one 2x2-cell super-tile, replicates it far enough to cover the
/// canvas and crops to the requested resolution, so the alternation stays
/// consistent across any truncated edge cells.
pub fn chessboard(spec: &GridSpec) -> Canvas {
    spec.warn_if_inexact();

    let res = spec.resolution() as usize;
    let gr = spec.grid_res() as usize;

    let black = Canvas::filled(gr, gr, 1, 0.0);
    let white = Canvas::filled(gr, gr, 1, 1.0);
    let tile = Canvas::hconcat(&[
        Canvas::vconcat(&[black.clone(), white.clone()]),
        Canvas::vconcat(&[white, black]),
    ]);

    let n_units = res.div_ceil(2 * gr);
    tile.tiled(n_units, n_units).cropped(res, res).scaled(255.0)
}

/// Generate a chessboard and encode it to `filename`.
pub fn write_chessboard(filename: &Path, resolution: u32, n_grids: u32) -> Result<(), Error> {
    let spec = GridSpec::new(resolution, n_grids)?;
    chessboard(&spec).save(filename)
}
