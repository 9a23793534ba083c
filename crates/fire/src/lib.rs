//! Deterministic fire effect engine.
//!
//! A heat-diffusion cellular automaton rendered onto a character-cell
//! canvas. Given the same seed and canvas size, native and WASM builds
//! produce byte-identical `chars`/`attrs` on every frame.

pub mod canvas;
pub mod config;
pub mod dither;
pub mod error;
pub mod golden;
pub mod heat;
pub mod palette;
pub mod passes;
pub mod rng;
pub mod table;
pub mod wasm;

use canvas::Canvas;
use config::FireConfig;
use dither::Dither;
use error::FireError;
use heat::{HeatBuffer, SimulationClock};
use rng::{Xorshift32, DEFAULT_SEED};
use table::CoolingTable;

/// Everything rebuilt by init/resize.
#[derive(Debug)]
struct Frame {
    heat: HeatBuffer,
    table: CoolingTable,
    clock: SimulationClock,
    canvas: Canvas,
    dither: Dither,
}

impl Frame {
    fn new(cols: i32, rows: i32) -> Result<Self, FireError> {
        let heat = HeatBuffer::new(cols, rows)?;
        let table = CoolingTable::build(heat.ysiz() as u32);
        let canvas = Canvas::new(cols as usize, rows as usize)?;
        let dither = Dither::new(heat.xsiz(), heat.visible_rows(), heat.xsiz());
        Ok(Self {
            heat,
            table,
            clock: SimulationClock::default(),
            canvas,
            dither,
        })
    }
}

/// Frame controller. `Uninitialized` until `init`, back to it on `teardown`.
///
/// Owns the generator, heat buffer, cooling table, counters and canvas;
/// nothing is shared between instances.
#[derive(Debug, Default)]
pub struct Fire {
    rng: Xorshift32,
    frame: Option<Frame>,
}

impl Fire {
    /// An uninitialized instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// As [`Fire::init_seeded`].
    pub fn from_config(config: &FireConfig) -> Result<Self, FireError> {
        let mut fire = Self::new();
        fire.init_seeded(config.cols, config.rows, config.seed)?;
        Ok(fire)
    }

    /// [`Fire::init_seeded`] with the default seed.
    ///
    /// # Errors
    /// As [`Fire::init_seeded`].
    pub fn init(&mut self, cols: i32, rows: i32) -> Result<(), FireError> {
        self.init_seeded(cols, rows, DEFAULT_SEED)
    }

    /// Seed the generator and build a fresh, cold frame.
    ///
    /// # Errors
    /// `InvalidDimensions` or `AllocationFailure`; the instance is unchanged.
    pub fn init_seeded(&mut self, cols: i32, rows: i32, seed: u32) -> Result<(), FireError> {
        let frame = Frame::new(cols, rows)?;
        self.rng.seed(seed);
        self.frame = Some(frame);
        log::debug!("fire initialized at {cols}x{rows}, seed {seed}");
        Ok(())
    }

    /// Rebuild for a new canvas size. The heat buffer and counters reset;
    /// the generator stream carries on where it was.
    ///
    /// # Errors
    /// `NotInitialized`, `InvalidDimensions` or `AllocationFailure`; the
    /// instance is unchanged.
    pub fn resize(&mut self, cols: i32, rows: i32) -> Result<(), FireError> {
        if self.frame.is_none() {
            return Err(FireError::NotInitialized);
        }
        let frame = Frame::new(cols, rows)?;
        self.frame = Some(frame);
        log::debug!(
            "fire resized to {cols}x{rows}, generator state {:#010x}",
            self.rng.state()
        );
        Ok(())
    }

    /// Drop the frame. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.frame.take().is_some() {
            log::debug!("fire torn down");
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.frame.is_some()
    }

    /// Advance one frame: ignition, diffusion, then render to the canvas.
    ///
    /// # Errors
    /// `NotInitialized` only.
    pub fn step(&mut self) -> Result<(), FireError> {
        let Frame {
            heat,
            table,
            clock,
            canvas,
            dither,
        } = self.frame.as_mut().ok_or(FireError::NotInitialized)?;

        passes::ignite(heat, clock, &mut self.rng);
        passes::diffuse(heat, table);
        dither.render(canvas, heat.visible());
        Ok(())
    }

    fn frame(&self) -> Result<&Frame, FireError> {
        self.frame.as_ref().ok_or(FireError::NotInitialized)
    }

    /// Canvas width in cells.
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn width(&self) -> Result<i32, FireError> {
        Ok(self.frame()?.canvas.width() as i32)
    }

    /// Canvas height in cells.
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn height(&self) -> Result<i32, FireError> {
        Ok(self.frame()?.canvas.height() as i32)
    }

    /// One glyph code per cell, row-major, `width * height` long.
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn chars(&self) -> Result<&[u32], FireError> {
        Ok(self.frame()?.canvas.chars())
    }

    /// One attribute word per cell, row-major, `width * height` long.
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn attrs(&self) -> Result<&[u32], FireError> {
        Ok(self.frame()?.canvas.attrs())
    }

    /// # Errors
    /// `NotInitialized` or `InvalidColor`.
    pub fn set_color(&mut self, fg: u8, bg: u8) -> Result<(), FireError> {
        self.frame
            .as_mut()
            .ok_or(FireError::NotInitialized)?
            .canvas
            .set_color_ansi(fg, bg)
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn current_attr(&self) -> Result<u32, FireError> {
        Ok(self.frame()?.canvas.current_attr())
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn heat(&self) -> Result<&HeatBuffer, FireError> {
        Ok(&self.frame()?.heat)
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn table(&self) -> Result<&CoolingTable, FireError> {
        Ok(&self.frame()?.table)
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn clock(&self) -> Result<SimulationClock, FireError> {
        Ok(self.frame()?.clock)
    }

    /// Current generator state. Survives resize and teardown.
    #[must_use]
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
