//! Change notification and busy signalling.
//!
//! Observers registered with [`Notifier::subscribe`] receive every new
//! display frame in registration order. A [`BusyHook`] brackets each engine
//! operation so a front end can show a wait cursor while it runs.

use crate::Bitmap;

/// Engine operations, as reported to a [`BusyHook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Recolor,
    Invert,
    RotateClockwise,
    RotateCounterClockwise,
    FlipHorizontal,
    FlipVertical,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Recolor => "recolor",
            Operation::Invert => "invert",
            Operation::RotateClockwise => "rotate_clockwise",
            Operation::RotateCounterClockwise => "rotate_counter_clockwise",
            Operation::FlipHorizontal => "flip_horizontal",
            Operation::FlipVertical => "flip_vertical",
        }
    }
}

/// Called before and after every engine operation.
pub trait BusyHook {
    fn begin(&mut self, operation: Operation);
    fn end(&mut self, operation: Operation);
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

impl From<SubscriptionId> for u32 {
    fn from(id: SubscriptionId) -> Self {
        id.0
    }
}

impl From<u32> for SubscriptionId {
    fn from(raw: u32) -> Self {
        SubscriptionId(raw)
    }
}

type Observer = Box<dyn FnMut(&Bitmap)>;

/// Ordered list of frame observers.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u32,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Bitmap) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, frame: &Bitmap) {
        for (_, observer) in &mut self.observers {
            observer(frame);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
