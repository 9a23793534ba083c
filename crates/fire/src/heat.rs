//! Heat buffer layout and simulation counters.
//!
//! The buffer is `2*cols` wide and `2*rows - 4 + 2` rows tall. Row `ysiz`
//! is the ignition row and row `ysiz + 1` sits below it. Past the nominal
//! area there is one more spill row plus a byte: ignition's bookkeeping
//! write lands up to two rows below the ignition row, and the last
//! diffusion offsets read into it. The spill bytes persist between frames.

use crate::error::FireError;

/// Widest buffer whose ignition edge distance, `4 * XSIZ + 1`, fits a `u32`.
pub const MAX_XSIZ: i64 = 0x3fff_ffff;

/// Heat grid for one canvas size. Zeroed on creation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeatBuffer {
    xsiz: usize,
    ysiz: usize,
    cells: Vec<u8>,
}

impl HeatBuffer {
    /// Allocate for a `cols x rows` canvas.
    ///
    /// # Errors
    /// `InvalidDimensions` when `cols <= 0`, `rows <= 0`, `2*rows - 4 <= 0`
    /// or `2*cols > MAX_XSIZ`;
    /// `AllocationFailure` when the size overflows or the host refuses it.
    pub fn new(cols: i32, rows: i32) -> Result<Self, FireError> {
        let (xsiz, ysiz) = Self::dimensions(cols, rows)?;
        let len = xsiz
            .checked_mul(ysiz + 3)
            .and_then(|n| n.checked_add(1))
            .ok_or(FireError::AllocationFailure { bytes: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| FireError::AllocationFailure { bytes: len })?;
        cells.resize(len, 0);

        Ok(Self { xsiz, ysiz, cells })
    }

    /// `(XSIZ, YSIZ)` for a canvas, validated.
    ///
    /// # Errors
    /// `InvalidDimensions` as for [`HeatBuffer::new`].
    pub fn dimensions(cols: i32, rows: i32) -> Result<(usize, usize), FireError> {
        let invalid = FireError::InvalidDimensions { cols, rows };
        if cols <= 0 || rows <= 0 {
            return Err(invalid);
        }
        let xsiz = i64::from(cols) * 2;
        let ysiz = i64::from(rows) * 2 - 4;
        if ysiz <= 0 || xsiz > MAX_XSIZ {
            return Err(invalid);
        }
        let xsiz = usize::try_from(xsiz).map_err(|_| invalid.clone())?;
        let ysiz = usize::try_from(ysiz).map_err(|_| invalid)?;
        Ok((xsiz, ysiz))
    }

    /// Buffer width, `XSIZ`.
    #[must_use]
    pub fn xsiz(&self) -> usize {
        self.xsiz
    }

    /// Ignition row index, `YSIZ`.
    #[must_use]
    pub fn ysiz(&self) -> usize {
        self.ysiz
    }

    /// Rows handed to the renderer.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.ysiz - 2
    }

    /// Nominal `XSIZ * (YSIZ + 2)` area, without the spill row.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells[..self.xsiz * (self.ysiz + 2)]
    }

    /// The rendered region: the first `YSIZ - 2` rows.
    #[must_use]
    pub fn visible(&self) -> &[u8] {
        &self.cells[..self.xsiz * self.visible_rows()]
    }

    #[cfg(test)]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.xsiz..(y + 1) * self.xsiz]
    }

    /// Whole backing store including the spill row. Passes index it with
    /// flat offsets.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &[u8] {
        &self.cells
    }
}

/// Frame counters that shape ignition. Reset on init/resize.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SimulationClock {
    /// Frames since the last init/resize. Caps ignition intensity early on.
    pub height_counter: u32,
    /// Countdown to the next burst re-roll.
    pub loop_countdown: i32,
    /// Number of re-rolls so far.
    pub burst_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn layout_for_80x32() {
        let heat = HeatBuffer::new(80, 32).unwrap();
        assert_eq!(heat.xsiz(), 160);
        assert_eq!(heat.ysiz(), 60);
        assert_eq!(heat.as_slice().len(), 160 * 62);
        assert_eq!(heat.visible().len(), 160 * 58);
        assert_eq!(heat.raw().len(), 160 * 63 + 1);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (cols, rows) in [(0, 10), (-3, 10), (10, 0), (10, -1), (10, 1), (10, 2)] {
            assert_eq!(
                HeatBuffer::new(cols, rows),
                Err(FireError::InvalidDimensions { cols, rows }),
                "{cols}x{rows}"
            );
        }
    }

    #[test]
    fn rejects_width_past_ignition_range() {
        assert_eq!(
            HeatBuffer::dimensions(536_870_911, 3),
            Ok((1_073_741_822, 2))
        );
        assert_eq!(
            HeatBuffer::new(536_870_912, 10),
            Err(FireError::InvalidDimensions { cols: 536_870_912, rows: 10 })
        );
        assert_eq!(
            HeatBuffer::dimensions(i32::MAX, 10),
            Err(FireError::InvalidDimensions { cols: i32::MAX, rows: 10 })
        );
    }

    #[test]
    fn smallest_valid_canvas() {
        let heat = HeatBuffer::new(1, 3).unwrap();
        assert_eq!((heat.xsiz(), heat.ysiz()), (2, 2));
        assert!(heat.visible().is_empty());
    }

    #[test]
    fn row_slices_follow_pitch() {
        let mut heat = HeatBuffer::new(4, 5).unwrap();
        let xsiz = heat.xsiz();
        heat.raw_mut()[2 * xsiz + 3] = 9;
        assert_eq!(heat.row(2)[3], 9);
        assert_eq!(heat.row(2).len(), xsiz);
    }

    #[test]
    fn clock_defaults_to_zero() {
        let clock = SimulationClock::default();
        assert_eq!(clock.height_counter, 0);
        assert_eq!(clock.loop_countdown, 0);
        assert_eq!(clock.burst_count, 0);
    }

    proptest! {
        #[test]
        fn prop_new_buffer_is_zeroed(cols in 1i32..64, rows in 3i32..64) {
            let heat = HeatBuffer::new(cols, rows).unwrap();
            prop_assert_eq!(heat.xsiz(), cols as usize * 2);
            prop_assert_eq!(heat.ysiz(), rows as usize * 2 - 4);
            prop_assert!(heat.raw().iter().all(|&b| b == 0));
        }
    }
}
