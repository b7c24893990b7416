//! Bitmap editor WASM bindings.
//!
//! `JsBitmapEditor` wraps one engine for the lifetime of an editing session.
//! Every edit returns the new display frame and also delivers it to the
//! callbacks registered with `on_change`.
//!
//! # Example
//!
//! ```typescript
//! const editor = JsBitmapEditor.with_config(bytes, { geometry: "conventional" });
//! const id = editor.on_change((frame) => paint(frame));
//! editor.rotate_clockwise();
//! editor.off_change(id);
//! ```

use crate::types::JsFrame;
use hueshift_core::{BitmapEngine, BusyHook, EngineConfig, Operation, SubscriptionId};
use wasm_bindgen::prelude::*;

/// An editing session over one decoded bitmap.
#[wasm_bindgen]
pub struct JsBitmapEditor {
    engine: BitmapEngine,
}

#[wasm_bindgen]
impl JsBitmapEditor {
    /// Decode bitmap bytes with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a decodable 24-bit bitmap.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<JsBitmapEditor, JsValue> {
        Self::open(bytes, &EngineConfig::default())
    }

    /// Decode bitmap bytes with a configuration object.
    ///
    /// `config` has the same shape as the TOML configuration, e.g.
    /// `{ geometry: "conventional", initial_adjustment: { saturation: 50 } }`.
    /// `undefined` or `null` selects the defaults.
    pub fn with_config(bytes: &[u8], config: JsValue) -> Result<JsBitmapEditor, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::open(bytes, &config)
    }

    /// Get the current width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.engine.dimensions().width
    }

    /// Get the current height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.engine.dimensions().height
    }

    /// Current dial values as `{ hue, saturation, lightness }`.
    pub fn adjustment(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.engine.adjustment()).map_err(JsValue::from)
    }

    /// The most recent display frame.
    pub fn display(&self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.display())
    }

    /// Recolor relative to the structural image.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue rotation in degrees (wrapped into 0..360)
    /// * `saturation` - Saturation offset in percent (-100 to 100)
    /// * `lightness` - Lightness offset in percent (-100 to 100)
    pub fn recolor(&mut self, hue: i32, saturation: i32, lightness: i32) -> JsFrame {
        JsFrame::from_bitmap(self.engine.recolor(hue, saturation, lightness))
    }

    /// Invert all colors.
    pub fn invert(&mut self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.invert())
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_clockwise(&mut self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.rotate_clockwise())
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_counter_clockwise(&mut self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.rotate_counter_clockwise())
    }

    pub fn flip_horizontal(&mut self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.flip_horizontal())
    }

    pub fn flip_vertical(&mut self) -> JsFrame {
        JsFrame::from_bitmap(self.engine.flip_vertical())
    }

    /// Register `callback(frame)` for every new display frame.
    ///
    /// Returns an id for `off_change`. Exceptions thrown by the callback are
    /// logged to the console and do not stop other callbacks.
    pub fn on_change(&mut self, callback: js_sys::Function) -> u32 {
        let id = self.engine.subscribe(move |frame| {
            let frame = JsValue::from(JsFrame::from_bitmap(frame));
            if let Err(err) = callback.call1(&JsValue::NULL, &frame) {
                web_sys::console::error_1(&err);
            }
        });
        u32::from(id)
    }

    /// Remove a callback registered with `on_change`.
    pub fn off_change(&mut self, id: u32) -> bool {
        self.engine.unsubscribe(SubscriptionId::from(id))
    }

    /// Register `callback(operation, busy)`, called with `busy = true` before
    /// each edit and `busy = false` once its frame has been delivered.
    pub fn on_busy(&mut self, callback: js_sys::Function) {
        self.engine.set_busy_hook(JsBusyHook { callback });
    }

    pub fn clear_busy(&mut self) {
        self.engine.clear_busy_hook();
    }
}

impl JsBitmapEditor {
    fn open(bytes: &[u8], config: &EngineConfig) -> Result<JsBitmapEditor, JsValue> {
        BitmapEngine::from_bytes(bytes, config)
            .map(Self::from_engine)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub(crate) fn from_engine(engine: BitmapEngine) -> Self {
        Self { engine }
    }
}

/// Forwards busy state to a JavaScript callback.
struct JsBusyHook {
    callback: js_sys::Function,
}

impl JsBusyHook {
    fn emit(&self, operation: Operation, busy: bool) {
        let name = JsValue::from_str(operation.as_str());
        if let Err(err) = self
            .callback
            .call2(&JsValue::NULL, &name, &JsValue::from_bool(busy))
        {
            web_sys::console::error_1(&err);
        }
    }
}

impl BusyHook for JsBusyHook {
    fn begin(&mut self, operation: Operation) {
        self.emit(operation, true);
    }

    fn end(&mut self, operation: Operation) {
        self.emit(operation, false);
    }
}

/// Tests for editor bindings.
///
/// Constructors and callbacks go through `JsValue`, which only works on
/// wasm32 targets; these tests build the editor from a core engine instead.
#[cfg(test)]
mod tests {
    use super::*;

    /// Build a bitmap file: headers followed by `pixel_data` verbatim.
    pub(crate) fn bmp_bytes(width: i32, height: i32, pixel_data: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; 54];
        bytes[0..2].copy_from_slice(b"BM");
        bytes[2..6].copy_from_slice(&((54 + pixel_data.len()) as u32).to_le_bytes());
        bytes[10..14].copy_from_slice(&54u32.to_le_bytes());
        bytes[14..18].copy_from_slice(&40u32.to_le_bytes());
        bytes[18..22].copy_from_slice(&width.to_le_bytes());
        bytes[22..26].copy_from_slice(&height.to_le_bytes());
        bytes[26..28].copy_from_slice(&1u16.to_le_bytes());
        bytes[28..30].copy_from_slice(&24u16.to_le_bytes());
        bytes.extend_from_slice(pixel_data);
        bytes
    }

    fn editor(width: i32, height: i32, pixel_data: &[u8]) -> JsBitmapEditor {
        let bytes = bmp_bytes(width, height, pixel_data);
        JsBitmapEditor::from_engine(
            BitmapEngine::from_bytes(&bytes, &EngineConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_dimensions() {
        let editor = editor(2, 3, &[0u8; 18]);
        assert_eq!(editor.width(), 2);
        assert_eq!(editor.height(), 3);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let mut editor = editor(2, 3, &[0u8; 18]);
        let frame = editor.rotate_clockwise();
        assert_eq!((frame.width(), frame.height()), (3, 2));
        assert_eq!((editor.width(), editor.height()), (3, 2));

        let frame = editor.rotate_counter_clockwise();
        assert_eq!((frame.width(), frame.height()), (2, 3));
    }

    #[test]
    fn test_invert_black_pixel() {
        let mut editor = editor(1, 1, &[0, 0, 0]);
        assert_eq!(editor.recolor(0, 0, 0).rgb_pixels(), vec![0, 0, 0]);
        assert_eq!(editor.invert().rgb_pixels(), vec![255, 255, 255]);
        assert_eq!(editor.display().rgb_pixels(), vec![255, 255, 255]);
    }

    #[test]
    fn test_flips_keep_dimensions() {
        let mut editor = editor(2, 3, &[0u8; 18]);
        assert_eq!(editor.flip_horizontal().width(), 2);
        assert_eq!(editor.flip_vertical().height(), 3);
    }

    #[test]
    fn test_off_change_unknown_id() {
        let mut editor = editor(1, 1, &[0, 0, 0]);
        assert!(!editor.off_change(42));
    }
}
