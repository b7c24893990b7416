//! The bitmap editing engine.
//!
//! ## State
//!
//! - `baseline`: the structural image. Invert, rotate and flip replace it.
//! - `adjustment`: the current recolor request. Recolor replaces it and
//!   never touches the baseline.
//! - `display`: `adjustment` applied to `baseline`. Recomputed after every
//!   operation and pushed to subscribers; never used as input to an edit.
//!
//! Every operation runs to completion before returning and costs one pass
//! over the image.

use std::path::Path;

use tracing::debug;

use crate::adjustments::apply_color_adjustment;
use crate::config::{EngineConfig, Geometry};
use crate::decode::{decode_bitmap_with, read_bitmap, DecodeError};
use crate::notify::{BusyHook, Notifier, Operation, SubscriptionId};
use crate::transform::{invert_pixels, plan, remap, GeometricOp};
use crate::{Bitmap, ColorAdjustment, Dimensions};

pub struct BitmapEngine {
    baseline: Bitmap,
    display: Bitmap,
    adjustment: ColorAdjustment,
    geometry: Geometry,
    notifier: Notifier,
    busy_hook: Option<Box<dyn BusyHook>>,
}

impl BitmapEngine {
    /// Create an engine from a decoded bitmap.
    ///
    /// Until the first operation the display frame is the bitmap as decoded,
    /// without `adjustment` applied. The adjustment's hue is wrapped into
    /// `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDimensions` or `PixelCountMismatch` if the bitmap's
    /// pixel buffer does not hold exactly `width * height` pixels.
    pub fn from_bitmap(bitmap: Bitmap, adjustment: ColorAdjustment) -> Result<Self, DecodeError> {
        bitmap.validate()?;
        Ok(Self {
            display: bitmap.clone(),
            baseline: bitmap,
            adjustment: ColorAdjustment::new(
                adjustment.hue,
                adjustment.saturation,
                adjustment.lightness,
            ),
            geometry: Geometry::default(),
            notifier: Notifier::new(),
            busy_hook: None,
        })
    }

    /// Decode bitmap bytes into a new engine.
    pub fn from_bytes(bytes: &[u8], config: &EngineConfig) -> Result<Self, DecodeError> {
        let bitmap = decode_bitmap_with(bytes, &config.decode)?;
        Ok(Self::from_bitmap(bitmap, config.initial_adjustment)?.with_geometry(config.geometry))
    }

    /// Read a bitmap file into a new engine.
    pub fn open(path: impl AsRef<Path>, config: &EngineConfig) -> Result<Self, DecodeError> {
        let bitmap = read_bitmap(path, &config.decode)?;
        Ok(Self::from_bitmap(bitmap, config.initial_adjustment)?.with_geometry(config.geometry))
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        self.baseline.dimensions
    }

    /// The current recolor request (the dial values).
    pub fn adjustment(&self) -> ColorAdjustment {
        self.adjustment
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn baseline(&self) -> &Bitmap {
        &self.baseline
    }

    /// The most recently computed display frame.
    pub fn display(&self) -> &Bitmap {
        &self.display
    }

    /// Register an observer for new display frames.
    pub fn subscribe(&mut self, observer: impl FnMut(&Bitmap) + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Install the hook run around every operation, replacing any previous one.
    pub fn set_busy_hook(&mut self, hook: impl BusyHook + 'static) {
        self.busy_hook = Some(Box::new(hook));
    }

    pub fn clear_busy_hook(&mut self) {
        self.busy_hook = None;
    }

    /// Replace the adjustment and recolor the baseline with it.
    ///
    /// `hue` is wrapped into `[0, 360)`.
    pub fn recolor(&mut self, hue: i32, saturation: i32, lightness: i32) -> &Bitmap {
        let adjustment = ColorAdjustment::new(hue, saturation, lightness);
        self.run(Operation::Recolor, |engine| engine.adjustment = adjustment)
    }

    /// Invert every channel of the baseline.
    pub fn invert(&mut self) -> &Bitmap {
        self.run(Operation::Invert, |engine| {
            let pixels = invert_pixels(&engine.baseline.pixels);
            engine.baseline = Bitmap::new(engine.baseline.dimensions, pixels);
        })
    }

    pub fn rotate_clockwise(&mut self) -> &Bitmap {
        self.run_geometric(Operation::RotateClockwise, GeometricOp::RotateClockwise)
    }

    pub fn rotate_counter_clockwise(&mut self) -> &Bitmap {
        self.run_geometric(
            Operation::RotateCounterClockwise,
            GeometricOp::RotateCounterClockwise,
        )
    }

    pub fn flip_horizontal(&mut self) -> &Bitmap {
        self.run_geometric(Operation::FlipHorizontal, GeometricOp::FlipHorizontal)
    }

    pub fn flip_vertical(&mut self) -> &Bitmap {
        self.run_geometric(Operation::FlipVertical, GeometricOp::FlipVertical)
    }

    fn run_geometric(&mut self, operation: Operation, op: GeometricOp) -> &Bitmap {
        let (formula, swap) = plan(op, self.geometry);
        self.run(operation, |engine| {
            engine.baseline = remap(&engine.baseline, formula, swap);
        })
    }

    /// Apply `mutate`, rebuild the display frame and notify subscribers,
    /// all inside the busy hook.
    fn run(&mut self, operation: Operation, mutate: impl FnOnce(&mut Self)) -> &Bitmap {
        if let Some(hook) = self.busy_hook.as_mut() {
            hook.begin(operation);
        }

        mutate(self);

        let dims = self.baseline.dimensions;
        debug!(
            operation = operation.as_str(),
            width = dims.width,
            height = dims.height,
            hue = self.adjustment.hue,
            saturation = self.adjustment.saturation,
            lightness = self.adjustment.lightness,
            "engine operation"
        );
        self.refresh();

        if let Some(hook) = self.busy_hook.as_mut() {
            hook.end(operation);
        }
        &self.display
    }

    fn refresh(&mut self) {
        let pixels = apply_color_adjustment(&self.baseline.pixels, &self.adjustment);
        self.display = Bitmap::new(self.baseline.dimensions, pixels);
        self.notifier.notify(&self.display);
    }
}

impl std::fmt::Debug for BitmapEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapEngine")
            .field("dimensions", &self.baseline.dimensions)
            .field("adjustment", &self.adjustment)
            .field("geometry", &self.geometry)
            .field("notifier", &self.notifier)
            .field("busy_hook", &self.busy_hook.is_some())
            .finish()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
