//! Cooling lookup: summed neighbour heat to next heat.

/// Five neighbours, each at most 255.
pub const TABLE_SIZE: usize = 256 * 5;

/// Heat budget spread over the buffer height; shorter buffers cool faster.
const COOLING_BUDGET: u32 = 800;

/// Precomputed `sum -> heat` mapping. Rebuilt on every init/resize.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CoolingTable {
    entries: [u32; TABLE_SIZE],
}

impl CoolingTable {
    /// Build the table for a heat buffer of `height` rows (`YSIZ`).
    ///
    /// `height` must be non-zero; dimension validation happens upstream.
    #[must_use]
    pub fn build(height: u32) -> Self {
        let minus = (COOLING_BUDGET / height).max(1);
        let mut entries = [0u32; TABLE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            let i = i as u32;
            if i > minus {
                *entry = (i - minus) / 5;
            }
        }
        Self { entries }
    }

    /// Next heat for a five-neighbour sum. Always fits in a byte.
    #[must_use]
    #[inline]
    pub fn lookup(&self, sum: usize) -> u8 {
        self.entries[sum] as u8
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.entries
    }
}
