//! Heat bitmap to canvas cells.
//!
//! Each cell covers a block of heat pixels. The block's average palette
//! colour picks a dark background, the nearest other colour as foreground,
//! and a density glyph for where the average sits between the two.
//! Integer arithmetic only, so native and WASM agree byte for byte.

use crate::canvas::{encode_attr, AnsiColor, Canvas};
use crate::palette::{self, Rgba};

/// Glyphs from empty to full coverage.
const DENSITY: &[u8; 10] = b" .:;t%S8X@";
const STEPS: i64 = DENSITY.len() as i64 - 1;

/// Background candidates: the eight non-bright colours.
const BG_CANDIDATES: usize = 8;

/// Renders an 8-bit paletted bitmap onto a [`Canvas`].
#[derive(Clone, Debug)]
pub struct Dither {
    width: usize,
    height: usize,
    pitch: usize,
    palette: [Rgba; 256],
}

impl Dither {
    /// A `width x height` bitmap whose rows are `pitch` bytes apart.
    #[must_use]
    pub fn new(width: usize, height: usize, pitch: usize) -> Self {
        Self {
            width,
            height,
            pitch,
            palette: palette::scaled(),
        }
    }

    /// Fill the whole canvas from `bitmap`. Restores the canvas's current
    /// colour afterwards.
    pub fn render(&self, canvas: &mut Canvas, bitmap: &[u8]) {
        let saved = canvas.current_attr();
        let (w, h) = (canvas.width(), canvas.height());

        for y in 0..h {
            let (y0, y1) = span(y, h, self.height);
            for x in 0..w {
                let (x0, x1) = span(x, w, self.width);
                let avg = self.average(bitmap, x0, x1, y0, y1);
                let (fg, bg, glyph) = pick_cell(avg);
                canvas.set_attr(encode_attr(fg as u8, bg as u8));
                canvas.put_char(x, y, u32::from(glyph));
            }
        }

        canvas.set_attr(saved);
    }

    /// Mean 12-bit colour of a block; black for an empty block.
    fn average(&self, bitmap: &[u8], x0: usize, x1: usize, y0: usize, y1: usize) -> [i64; 3] {
        let mut sum = [0i64; 3];
        let mut count = 0i64;
        for row in y0..y1 {
            let line = &bitmap[row * self.pitch..];
            for &heat in &line[x0..x1] {
                let c = self.palette[usize::from(heat)];
                sum[0] += i64::from(c.r);
                sum[1] += i64::from(c.g);
                sum[2] += i64::from(c.b);
                count += 1;
            }
        }
        if count == 0 {
            return [0; 3];
        }
        sum.map(|s| s / count)
    }
}

/// Pixel range `[from, to)` covered by cell `i` of `cells`, at least one
/// pixel wide when the bitmap has any, and clamped to it.
fn span(i: usize, cells: usize, pixels: usize) -> (usize, usize) {
    // Widened so `i * pixels` cannot wrap on 32-bit targets.
    let at = |k: usize| (k as u64 * pixels as u64 / cells as u64) as usize;
    let from = at(i).min(pixels);
    let to = at(i + 1).max(from + 1).min(pixels);
    (from, to)
}

fn distance2(a: [i64; 3], b: [i64; 3]) -> i64 {
    (0..3).map(|i| (a[i] - b[i]) * (a[i] - b[i])).sum()
}

fn rgb(color: AnsiColor) -> [i64; 3] {
    color.rgb12().map(i64::from)
}

/// `(fg, bg, glyph)` for an average colour.
fn pick_cell(avg: [i64; 3]) -> (AnsiColor, AnsiColor, u8) {
    let nearest = |candidates: &mut dyn Iterator<Item = AnsiColor>| {
        let mut best = AnsiColor::Black;
        let mut best_d = i64::MAX;
        for color in candidates {
            let d = distance2(avg, rgb(color));
            if d < best_d {
                best = color;
                best_d = d;
            }
        }
        best
    };

    let bg = nearest(&mut AnsiColor::ALL[..BG_CANDIDATES].iter().copied());
    let fg = nearest(&mut AnsiColor::ALL.iter().copied().filter(|&c| c != bg));

    let (b, f) = (rgb(bg), rgb(fg));
    let dir = [f[0] - b[0], f[1] - b[1], f[2] - b[2]];
    let len2 = distance2(f, b);
    let dot: i64 = (0..3).map(|i| (avg[i] - b[i]) * dir[i]).sum();

    let k = if dot <= 0 {
        0
    } else {
        ((STEPS * dot + len2 / 2) / len2).min(STEPS)
    };
    (fg, bg, DENSITY[k as usize])
}
