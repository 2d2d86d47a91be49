use std::cell::Cell;
use std::rc::Rc;

use crate::frame::FrameInfo;

type FrameCallback<C> = Box<dyn FnMut(&mut C, &FrameInfo)>;

struct Slot<C> {
    live: Rc<Cell<bool>>,
    callback: FrameCallback<C>,
}

/// Per-frame update event hub.
///
/// Callbacks receive a mutable context and the frame being delivered. A
/// callback stays registered only as long as its [`Subscription`] lives.
pub struct FrameEvents<C> {
    slots: Vec<Slot<C>>,
}

impl<C> FrameEvents<C> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&mut C, &FrameInfo) + 'static,
    {
        let live = Rc::new(Cell::new(true));
        self.slots.push(Slot {
            live: Rc::clone(&live),
            callback: Box::new(callback),
        });
        Subscription { live }
    }

    /// Deliver a frame to live subscribers in subscription order.
    /// Returns how many callbacks ran.
    pub fn publish(&mut self, context: &mut C, frame: &FrameInfo) -> usize {
        self.slots.retain(|slot| slot.live.get());
        for slot in &mut self.slots {
            (slot.callback)(context, frame);
        }
        self.slots.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.live.get()).count()
    }
}

impl<C> Default for FrameEvents<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration handle. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    live: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.set(false);
    }
}
