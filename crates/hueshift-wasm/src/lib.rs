//! Hueshift WASM - WebAssembly bindings for Hueshift
//!
//! This crate exposes the hueshift-core bitmap editor to JavaScript so a
//! browser front end can drive it and paint the frames it emits.
//!
//! # Module Structure
//!
//! - `editor` - `JsBitmapEditor`, one editing session over a decoded bitmap
//! - `types` - `JsFrame`, a display frame handed to JavaScript
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmapEditor } from '@hueshift/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const editor = new JsBitmapEditor(bytes);
//! editor.on_change((frame) => paint(frame.width, frame.height, frame.rgba_pixels()));
//! editor.on_busy((operation, busy) => setWaitCursor(busy));
//! editor.recolor(120, 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod types;

pub use editor::JsBitmapEditor;
pub use types::JsFrame;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
