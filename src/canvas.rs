use std::path::Path;

use crate::Error;

/// Floating-point image buffer, row-major with interleaved channels.
///
/// Pattern generators compose cells in normalized [0,1] intensity and scale
/// to [0,255] as a final pass; `save` rounds and saturates to 8 bits.
#[derive(Clone)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: Vec<f64>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<f64>) -> Self {
        assert!(channels == 1 || channels == 3, "grayscale or RGB only");
        assert_eq!(data.len(), width * height * channels);
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Canvas with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: f64) -> Self {
        Self::new(width, height, channels, vec![value; width * height * channels])
    }

    /// Canvas with every pixel set to `color`, one sample per channel.
    pub fn splat(width: usize, height: usize, color: &[f64]) -> Self {
        let mut data = Vec::with_capacity(width * height * color.len());
        for _ in 0..width * height {
            data.extend_from_slice(color);
        }
        Self::new(width, height, color.len(), data)
    }

    /// Samples of the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> &[f64] {
        let i = (y * self.width + x) * self.channels;
        &self.data[i..i + self.channels]
    }

    fn row(&self, y: usize) -> &[f64] {
        let w = self.width * self.channels;
        &self.data[y * w..(y + 1) * w]
    }

    /// Stack canvases top to bottom. Widths and channel counts must match.
    pub fn vconcat(parts: &[Canvas]) -> Canvas {
        let first = &parts[0];
        let mut data = Vec::with_capacity(parts.iter().map(|p| p.data.len()).sum());
        for part in parts {
            assert_eq!(part.width, first.width);
            assert_eq!(part.channels, first.channels);
            data.extend_from_slice(&part.data);
        }
        let height = parts.iter().map(|p| p.height).sum();
        Canvas::new(first.width, height, first.channels, data)
    }

    /// Join canvases left to right. Heights and channel counts must match.
    pub fn hconcat(parts: &[Canvas]) -> Canvas {
        let first = &parts[0];
        for part in parts {
            assert_eq!(part.height, first.height);
            assert_eq!(part.channels, first.channels);
        }
        let width = parts.iter().map(|p| p.width).sum();
        let mut data = Vec::with_capacity(width * first.height * first.channels);
        for y in 0..first.height {
            for part in parts {
                data.extend_from_slice(part.row(y));
            }
        }
        Canvas::new(width, first.height, first.channels, data)
    }

    /// Repeat the canvas `nx` times across and `ny` times down.
    pub fn tiled(&self, nx: usize, ny: usize) -> Canvas {
        let mut data = Vec::with_capacity(self.data.len() * nx * ny);
        for _ in 0..ny {
            for y in 0..self.height {
                for _ in 0..nx {
                    data.extend_from_slice(self.row(y));
                }
            }
        }
        Canvas::new(self.width * nx, self.height * ny, self.channels, data)
    }

    /// Top-left sub-block: the first `height` rows of the first `width` columns.
    pub fn cropped(&self, width: usize, height: usize) -> Canvas {
        assert!(width <= self.width && height <= self.height);
        let mut data = Vec::with_capacity(width * height * self.channels);
        for y in 0..height {
            data.extend_from_slice(&self.row(y)[..width * self.channels]);
        }
        Canvas::new(width, height, self.channels, data)
    }

    /// Multiply every sample by `factor`.
    pub fn scaled(mut self, factor: f64) -> Canvas {
        for v in &mut self.data {
            *v *= factor;
        }
        self
    }

    /// Encode to `path`; the output format is picked from the file extension.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let w = self.width as u32;
        let h = self.height as u32;
        match self.channels {
            1 => {
                let img = image::GrayImage::from_fn(w, h, |x, y| {
                    image::Luma([self.get(x as usize, y as usize)[0].round() as u8])
                });
                img.save(path)?;
            }
            3 => {
                let img = image::RgbImage::from_fn(w, h, |x, y| {
                    let px = self.get(x as usize, y as usize);
                    image::Rgb([
                        px[0].round() as u8,
                        px[1].round() as u8,
                        px[2].round() as u8,
                    ])
                });
                img.save(path)?;
            }
            _ => unreachable!(),
        }
        Ok(())
    }
}
