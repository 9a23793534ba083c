//! Browser-facing bindings.
//!
//! The host steps the simulation once per animation frame and paints
//! `chars`/`attrs` itself, either from the copies or straight out of
//! linear memory through the `*_ptr` views. Pointers go stale on resize.

use wasm_bindgen::prelude::*;

use crate::canvas;
use crate::rng::DEFAULT_SEED;
use crate::Fire;

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct FireSim {
    inner: Fire,
}

#[wasm_bindgen]
impl FireSim {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: i32, rows: i32) -> Result<FireSim, JsError> {
        Self::new_seeded(cols, rows, DEFAULT_SEED)
    }

    #[wasm_bindgen(js_name = newSeeded)]
    pub fn new_seeded(cols: i32, rows: i32, seed: u32) -> Result<FireSim, JsError> {
        install_panic_hook();
        let mut inner = Fire::new();
        inner.init_seeded(cols, rows, seed)?;
        Ok(Self { inner })
    }

    pub fn step(&mut self) -> Result<(), JsError> {
        Ok(self.inner.step()?)
    }

    pub fn resize(&mut self, cols: i32, rows: i32) -> Result<(), JsError> {
        Ok(self.inner.resize(cols, rows)?)
    }

    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    pub fn width(&self) -> Result<i32, JsError> {
        Ok(self.inner.width()?)
    }

    pub fn height(&self) -> Result<i32, JsError> {
        Ok(self.inner.height()?)
    }

    pub fn chars(&self) -> Result<Vec<u32>, JsError> {
        Ok(self.inner.chars()?.to_vec())
    }

    pub fn attrs(&self) -> Result<Vec<u32>, JsError> {
        Ok(self.inner.attrs()?.to_vec())
    }

    #[wasm_bindgen(js_name = charsPtr)]
    pub fn chars_ptr(&self) -> Result<*const u32, JsError> {
        Ok(self.inner.chars()?.as_ptr())
    }

    #[wasm_bindgen(js_name = attrsPtr)]
    pub fn attrs_ptr(&self) -> Result<*const u32, JsError> {
        Ok(self.inner.attrs()?.as_ptr())
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, fg: u8, bg: u8) -> Result<(), JsError> {
        Ok(self.inner.set_color(fg, bg)?)
    }

    #[wasm_bindgen(js_name = currentAttr)]
    pub fn current_attr(&self) -> Result<u32, JsError> {
        Ok(self.inner.current_attr()?)
    }
}

/// Foreground colour code of an attribute word.
#[wasm_bindgen(js_name = attrFg)]
#[must_use]
pub fn attr_fg(attr: u32) -> u32 {
    canvas::attr_fg(attr)
}

/// Background colour code of an attribute word.
#[wasm_bindgen(js_name = attrBg)]
#[must_use]
pub fn attr_bg(attr: u32) -> u32 {
    canvas::attr_bg(attr)
}

/// `#rrggbb` for an ANSI colour code, or `undefined` past the 16 colours.
#[wasm_bindgen(js_name = ansiHex)]
#[must_use]
pub fn ansi_hex(code: u32) -> Option<String> {
    u8::try_from(code)
        .ok()
        .and_then(canvas::AnsiColor::from_code)
        .map(canvas::AnsiColor::css_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only success paths here: building a `JsError` needs a JS host.

    #[test]
    fn steps_like_the_core() {
        let mut sim = FireSim::new_seeded(24, 10, 7).unwrap();
        let mut core = Fire::new();
        core.init_seeded(24, 10, 7).unwrap();
        for _ in 0..12 {
            sim.step().unwrap();
            core.step().unwrap();
        }
        assert_eq!(sim.chars().unwrap(), core.chars().unwrap());
        assert_eq!(sim.attrs().unwrap(), core.attrs().unwrap());
    }

    #[test]
    fn pointers_view_the_canvas() {
        let sim = FireSim::new(8, 4).unwrap();
        assert_eq!(sim.width().unwrap(), 8);
        assert_eq!(sim.height().unwrap(), 4);
        assert_eq!(sim.chars_ptr().unwrap(), sim.inner.chars().unwrap().as_ptr());
        assert_eq!(sim.attrs_ptr().unwrap(), sim.inner.attrs().unwrap().as_ptr());
    }

    #[test]
    fn colour_round_trip_through_exports() {
        let mut sim = FireSim::new(4, 4).unwrap();
        for fg in 0..16 {
            for bg in 0..16 {
                sim.set_color(fg, bg).unwrap();
                let attr = sim.current_attr().unwrap();
                assert_eq!(attr_fg(attr), u32::from(fg));
                assert_eq!(attr_bg(attr), u32::from(bg));
            }
        }
    }

    #[test]
    fn decoded_attrs_map_to_host_colours() {
        let mut sim = FireSim::new(4, 4).unwrap();
        sim.set_color(14, 4).unwrap();
        let attr = sim.current_attr().unwrap();
        assert_eq!(ansi_hex(attr_fg(attr)).as_deref(), Some("#ffff55"));
        assert_eq!(ansi_hex(attr_bg(attr)).as_deref(), Some("#aa0000"));
        assert_eq!(ansi_hex(0x10), None);
        assert_eq!(ansi_hex(0x140), None);
    }

    #[test]
    fn resize_then_teardown() {
        let mut sim = FireSim::new(8, 4).unwrap();
        sim.step().unwrap();
        sim.resize(16, 6).unwrap();
        assert_eq!(sim.chars().unwrap().len(), 96);
        sim.teardown();
        sim.teardown();
        assert!(!sim.inner.is_initialized());
    }
}
