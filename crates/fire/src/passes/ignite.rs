//! Ignition: seeds new heat along the bottom of the buffer.
//!
//! Walks the ignition row left to right in bursts. Each burst draws a base
//! intensity capped by the distance to the nearest edge (scaled by 4) and by
//! the frame count, so flames start in the middle and grow in over the
//! first frames. Intensity jitters by `[-2, 3]` per written cell.

use crate::heat::{HeatBuffer, SimulationClock};
use crate::rng::Xorshift32;

/// Upper bound (exclusive) on the burst length draw.
const BURST_CHOICES: u32 = 6;
/// Upper bound (exclusive) on the countdown re-roll.
const LOOP_CHOICES: u32 = 3;

/// Random step in `[-2, 3]`.
fn jitter(rng: &mut Xorshift32) -> i32 {
    rng.next_bounded(6) as i32 - 2
}

pub fn ignite(heat: &mut HeatBuffer, clock: &mut SimulationClock, rng: &mut Xorshift32) {
    clock.height_counter = clock.height_counter.wrapping_add(1);
    clock.loop_countdown -= 1;
    if clock.loop_countdown < 0 {
        clock.loop_countdown = rng.next_bounded(LOOP_CHOICES) as i32;
        clock.burst_count = clock.burst_count.wrapping_add(1);
        log::trace!(
            "burst countdown re-rolled to {} (re-roll #{})",
            clock.loop_countdown,
            clock.burst_count
        );
    }

    let xsiz = heat.xsiz();
    let row_start = xsiz * heat.ysiz();
    let row_end = row_start + xsiz;
    let cells = heat.raw_mut();

    let mut p = row_start;
    let mut i1: u32 = 1;
    // `HeatBuffer::dimensions` bounds `xsiz` so this fits.
    let mut i2 = (4 * xsiz + 1) as u32;

    while p < row_end {
        // Zero only once the frame counter wraps.
        let cap = i1.min(i2).min(clock.height_counter).max(1);
        let mut last1 = rng.next_bounded(cap);
        let mut burst = rng.next_bounded(BURST_CHOICES);

        while p < row_end && burst != 0 {
            cells[p] = last1 as u8;
            last1 = last1.wrapping_add_signed(jitter(rng));
            cells[p + xsiz] = last1 as u8;
            last1 = last1.wrapping_add_signed(jitter(rng));

            p += 1;
            burst -= 1;
            i1 += 4;
            i2 = i2.wrapping_sub(4);
        }

        // Lands in the spill row; the trailing draw still advances the stream.
        cells[p + 2 * xsiz] = last1 as u8;
        let _ = jitter(rng);

        p += 1;
        i1 += 4;
        i2 = i2.wrapping_sub(4);
    }
}
