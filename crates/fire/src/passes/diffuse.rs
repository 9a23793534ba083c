//! Diffusion: one forward in-place sweep through the cooling table.
//!
//! Each cell becomes `table[sum]` of five neighbours from the two rows
//! below it. The sweep is in place, so the heat it reads is partly this
//! frame's output; that skew is part of the look. The sweep runs to
//! `XSIZ * YSIZ` inclusive and leans on the spill row for its last reads.

use crate::heat::HeatBuffer;
use crate::table::CoolingTable;

pub fn diffuse(heat: &mut HeatBuffer, table: &CoolingTable) {
    let xsiz = heat.xsiz();
    let end = xsiz * heat.ysiz();
    let cells = heat.raw_mut();

    for p in 0..=end {
        let below = p + xsiz;
        let below2 = p + 2 * xsiz;
        let sum = usize::from(cells[below - 1])
            + usize::from(cells[below + 1])
            + usize::from(cells[below])
            + usize::from(cells[below2 - 1])
            + usize::from(cells[below2 + 1]);
        cells[p] = table.lookup(sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cold_buffer_stays_cold() {
        let mut heat = HeatBuffer::new(10, 8).unwrap();
        let table = CoolingTable::build(heat.ysiz() as u32);
        diffuse(&mut heat, &table);
        assert!(heat.raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn hot_spot_reaches_two_rows_up() {
        let mut heat = HeatBuffer::new(5, 6).unwrap();
        let xsiz = heat.xsiz();
        let ysiz = heat.ysiz();
        let table = CoolingTable::build(ysiz as u32);
        let hot = (ysiz + 1) * xsiz + 4;
        heat.raw_mut()[hot] = 200;

        diffuse(&mut heat, &table);

        // Diagonal neighbours two rows up see it; the sweep never reaches it.
        assert_eq!(heat.raw()[(ysiz - 1) * xsiz + 3], table.lookup(200));
        assert_eq!(heat.raw()[(ysiz - 1) * xsiz + 5], table.lookup(200));
        assert_eq!(heat.raw()[(ysiz - 1) * xsiz + 4], 0);
        assert_eq!(heat.raw()[hot], 200);
    }

    #[test]
    fn sweep_includes_first_ignition_cell() {
        let mut heat = HeatBuffer::new(6, 8).unwrap();
        let xsiz = heat.xsiz();
        let ysiz = heat.ysiz();
        let table = CoolingTable::build(ysiz as u32);
        for x in 0..xsiz {
            heat.raw_mut()[ysiz * xsiz + x] = 255;
        }

        diffuse(&mut heat, &table);

        // Offset XSIZ*YSIZ only sees the last ignition cell through `below - 1`.
        assert_eq!(heat.raw()[ysiz * xsiz], table.lookup(255));
        assert_eq!(heat.raw()[ysiz * xsiz + 1], 255);
    }

    proptest! {
        #[test]
        fn prop_heat_never_increases_past_table_max(
            seed_row in proptest::collection::vec(any::<u8>(), 20),
        ) {
            let mut heat = HeatBuffer::new(10, 6).unwrap();
            let xsiz = heat.xsiz();
            let ysiz = heat.ysiz();
            let table = CoolingTable::build(ysiz as u32);
            for (x, v) in seed_row.iter().enumerate() {
                heat.raw_mut()[ysiz * xsiz + x] = *v;
            }
            let max_before = *seed_row.iter().max().unwrap();
            diffuse(&mut heat, &table);
            for &v in heat.visible() {
                prop_assert!(v <= max_before);
            }
        }
    }
}
