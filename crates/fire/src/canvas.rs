//! Character-cell canvas: one glyph and one attribute word per cell.
//!
//! Attributes pack an ANSI foreground/background pair as
//! `((bg | 0x40) << 18) | ((fg | 0x40) << 4)`. The browser host decodes
//! the same layout, so do not change it.

use std::fmt;

use crate::error::FireError;

/// Terminal default colour, as a colour code.
pub const DEFAULT: u8 = 0x10;
/// Transparent colour, as a colour code.
pub const TRANSPARENT: u8 = 0x20;
/// Glyph every cell starts with.
pub const BLANK: u32 = b' ' as u32;

/// The 16 ANSI colours. Discriminants are the colour codes.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AnsiColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

/// `0xfRGB` per colour, 4 bits per channel.
const ANSI_TAB16: [u16; 16] = [
    0xf000, 0xf00a, 0xf0a0, 0xf0aa, 0xfa00, 0xfa0a, 0xfa50, 0xfaaa, 0xf555, 0xf55f, 0xf5f5,
    0xf5ff, 0xff55, 0xff5f, 0xfff5, 0xffff,
];

impl AnsiColor {
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Brown,
        Self::LightGray,
        Self::DarkGray,
        Self::LightBlue,
        Self::LightGreen,
        Self::LightCyan,
        Self::LightRed,
        Self::LightMagenta,
        Self::Yellow,
        Self::White,
    ];

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Channels in the 12-bit range (`0x5` becomes `0x555`).
    #[must_use]
    pub fn rgb12(self) -> [u32; 3] {
        let v = u32::from(ANSI_TAB16[self as usize]);
        let widen = |nibble: u32| nibble * 0x111;
        [widen((v >> 8) & 0xf), widen((v >> 4) & 0xf), widen(v & 0xf)]
    }

    /// `#rrggbb`, as the host paints it.
    #[must_use]
    pub fn css_hex(self) -> String {
        let v = u32::from(ANSI_TAB16[self as usize]);
        let byte = |nibble: u32| nibble * 0x11;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte((v >> 8) & 0xf),
            byte((v >> 4) & 0xf),
            byte(v & 0xf)
        )
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Brown => "Brown",
            Self::LightGray => "LightGray",
            Self::DarkGray => "DarkGray",
            Self::LightBlue => "LightBlue",
            Self::LightGreen => "LightGreen",
            Self::LightCyan => "LightCyan",
            Self::LightRed => "LightRed",
            Self::LightMagenta => "LightMagenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
        };
        write!(f, "{name}")
    }
}

/// Codes above `TRANSPARENT` are rejected; everything up to it is stored
/// as given.
fn valid_code(code: u8) -> bool {
    code <= TRANSPARENT
}

#[must_use]
pub fn encode_attr(fg: u8, bg: u8) -> u32 {
    (u32::from(bg | 0x40) << 18) | (u32::from(fg | 0x40) << 4)
}

#[must_use]
pub fn attr_fg(attr: u32) -> u32 {
    ((attr >> 4) & 0x3fff) ^ 0x40
}

#[must_use]
pub fn attr_bg(attr: u32) -> u32 {
    ((attr >> 18) & 0x3fff) ^ 0x40
}

fn filled(len: usize, value: u32) -> Result<Vec<u32>, FireError> {
    let bytes = len
        .checked_mul(std::mem::size_of::<u32>())
        .ok_or(FireError::AllocationFailure { bytes: usize::MAX })?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| FireError::AllocationFailure { bytes })?;
    cells.resize(len, value);
    Ok(cells)
}

/// `width x height` cells with a current drawing colour.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    chars: Vec<u32>,
    attrs: Vec<u32>,
    cur_attr: u32,
}

impl Canvas {
    /// Blank canvas in the default colour.
    ///
    /// # Errors
    /// `AllocationFailure` when the cell count overflows or the host
    /// refuses either buffer.
    pub fn new(width: usize, height: usize) -> Result<Self, FireError> {
        let cur_attr = encode_attr(DEFAULT, TRANSPARENT);
        let cells = width
            .checked_mul(height)
            .ok_or(FireError::AllocationFailure { bytes: usize::MAX })?;
        Ok(Self {
            width,
            height,
            chars: filled(cells, BLANK)?,
            attrs: filled(cells, cur_attr)?,
            cur_attr,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn chars(&self) -> &[u32] {
        &self.chars
    }

    #[must_use]
    pub fn attrs(&self) -> &[u32] {
        &self.attrs
    }

    #[must_use]
    pub fn current_attr(&self) -> u32 {
        self.cur_attr
    }

    /// Set the colour used by subsequent [`Canvas::put_char`] calls.
    ///
    /// # Errors
    /// `InvalidColor` if either code is above `TRANSPARENT`. The current
    /// colour is left unchanged.
    pub fn set_color_ansi(&mut self, fg: u8, bg: u8) -> Result<(), FireError> {
        if !valid_code(fg) || !valid_code(bg) {
            return Err(FireError::InvalidColor { fg, bg });
        }
        self.cur_attr = encode_attr(fg, bg);
        Ok(())
    }

    pub(crate) fn set_attr(&mut self, attr: u32) {
        self.cur_attr = attr;
    }

    /// Write a glyph with the current colour. Out-of-bounds writes are no-ops.
    pub fn put_char(&mut self, x: usize, y: usize, ch: u32) {
        if x < self.width && y < self.height {
            let i = y * self.width + x;
            self.chars[i] = ch;
            self.attrs[i] = self.cur_attr;
        }
    }
}
