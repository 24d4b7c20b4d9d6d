use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use anyhow::bail;
use gif::Encoder;
use gif::Repeat;
use image::Rgba;
use image::RgbaImage;
use tracing::debug;
use tracing::info;

use crate::grid::Grid;

/// Playback rate of recorded movies
pub const FPS: u32 = 30;

/// Side length, in pixels, of one cell in a recorded frame
pub const CELL_PIXELS: u32 = 8;

/// GIF delays are in hundredths of a second, so 30 fps rounds to 3 (33 ms per frame)
const FRAME_DELAY: u16 = (100 / FPS) as u16;

/// Quantization speed handed to the GIF encoder, in `1..=30`. Frames only have two colors.
const QUANTIZE_SPEED: i32 = 10;

const DEAD_COLOR: Rgba<u8> = Rgba([68, 1, 84, 255]);
const ALIVE_COLOR: Rgba<u8> = Rgba([253, 231, 37, 255]);

/// Draw `grid` as an image with each cell a `scale x scale` square. Rows go down the image.
pub fn frame_image(grid: &Grid, scale: u32) -> RgbaImage {
    let side = grid.size() as u32 * scale;

    RgbaImage::from_fn(side, side, |px, py| {
        let (x, y) = ((py / scale) as usize, (px / scale) as usize);

        if grid.get(x, y).is_alive() {
            ALIVE_COLOR
        } else {
            DEAD_COLOR
        }
    })
}

/// Records generations of an `n x n` grid to a looping animated GIF, up to a fixed number of
/// frames.
pub struct Recorder<W: Write> {
    encoder: Encoder<W>,

    /// Side length of every frame, in pixels
    side: u16,

    /// Frames written so far
    recorded: usize,

    /// Frames past this are dropped
    cap: usize,
}

impl Recorder<BufWriter<File>> {
    /// Create (or truncate) the movie at `path`
    pub fn create(path: &Path, n: usize, cap: usize) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create movie file {}", path.display()))?;

        info!(path = %path.display(), cap, fps = FPS, "Recording movie");

        Self::new(BufWriter::new(file), n, cap)
    }
}

impl<W: Write> Recorder<W> {
    /// Write the GIF header for `n x n` grids to `writer`
    pub fn new(writer: W, n: usize, cap: usize) -> anyhow::Result<Self> {
        let Some(side) = (n as u64)
            .checked_mul(CELL_PIXELS as u64)
            .and_then(|side| u16::try_from(side).ok())
        else {
            bail!("A {n}x{n} grid is too large to record")
        };

        let mut encoder =
            Encoder::new(writer, side, side, &[]).context("Failed to write movie header")?;
        encoder
            .set_repeat(Repeat::Infinite)
            .context("Failed to write movie header")?;

        Ok(Self {
            encoder,
            side,
            recorded: 0,
            cap,
        })
    }

    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn is_full(&self) -> bool {
        self.recorded >= self.cap
    }

    /// Append `grid` as the next frame. Returns whether the frame was written, which it isn't once
    /// the recorder is full.
    ///
    /// # Panics
    /// If `grid` is not the size the recorder was created for.
    pub fn push(&mut self, grid: &Grid) -> anyhow::Result<bool> {
        if self.is_full() {
            return Ok(false);
        }

        let mut pixels = frame_image(grid, CELL_PIXELS).into_raw();
        assert_eq!(
            pixels.len(),
            4 * self.side as usize * self.side as usize,
            "grid size differs from the recorder's"
        );

        let mut frame =
            gif::Frame::from_rgba_speed(self.side, self.side, &mut pixels, QUANTIZE_SPEED);
        frame.delay = FRAME_DELAY;

        self.encoder
            .write_frame(&frame)
            .with_context(|| format!("Failed to encode frame {}", self.recorded))?;
        self.recorded += 1;

        debug!(frame = self.recorded, cap = self.cap, "Recorded frame");
        if self.is_full() {
            debug!(frames = self.recorded, "Movie frame cap reached");
        }

        Ok(true)
    }

    /// Write the GIF trailer and flush the writer
    pub fn finish(self) -> anyhow::Result<()> {
        let frames = self.recorded;

        let mut writer = self
            .encoder
            .into_inner()
            .context("Failed to write movie trailer")?;
        writer.flush().context("Failed to flush movie")?;

        info!(frames, "Movie finished");

        Ok(())
    }
}
