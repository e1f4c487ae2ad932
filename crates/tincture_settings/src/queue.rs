//! Render-thread queue for deferred color updates.
//!
//! ```text
//! Settings thread ──▶ UpdateSender ──▶ [ channel ] ──▶ UpdateQueue::drain ──▶ SharedColor::set
//!                                                       (render thread, once per frame)
//! ```
//!
//! Confining `set` to the render thread means a frame never draws with a
//! color that changed halfway through it.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tincture_color::{ColorInput, SharedColor};

/// A pending update: which color, and what to set it to.
#[derive(Debug, Clone)]
pub struct ColorUpdate {
    /// Color to update.
    pub color: SharedColor,
    /// New value.
    pub input: ColorInput,
}

/// Queue drained by the render thread.
#[derive(Debug)]
pub struct UpdateQueue {
    sender: Sender<ColorUpdate>,
    receiver: Receiver<ColorUpdate>,
}

impl UpdateQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Returns a sender for another thread.
    #[must_use]
    pub fn sender(&self) -> UpdateSender {
        UpdateSender {
            sender: self.sender.clone(),
        }
    }

    /// Number of updates waiting to be applied.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Applies every update queued so far, in arrival order.
    ///
    /// Updates sent while draining wait for the next call. Never blocks.
    pub fn drain(&self) -> usize {
        let pending = self.receiver.len();
        let mut applied = 0;
        for update in self.receiver.try_iter().take(pending) {
            update.color.set(update.input);
            applied += 1;
        }
        applied
    }
}

impl Default for UpdateQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of an [`UpdateQueue`].
#[derive(Debug, Clone)]
pub struct UpdateSender {
    sender: Sender<ColorUpdate>,
}

impl UpdateSender {
    /// Queues `color.set(input)` for the render thread.
    ///
    /// Returns `false` if the queue has been dropped.
    pub fn send(&self, color: SharedColor, input: ColorInput) -> bool {
        self.sender.send(ColorUpdate { color, input }).is_ok()
    }
}
