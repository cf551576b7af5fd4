use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Drives a step function once per display refresh. The step receives the
/// frame timestamp and returns whether it wants another frame.
#[derive(Clone, Default)]
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F>(&self, step: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        schedule(self.pending.clone(), Rc::new(RefCell::new(step)));
    }

    /// Cancels the queued frame, if any.
    pub fn stop(&self) {
        if self.pending.borrow_mut().take().is_some() {
            log::debug!("Frame loop cancelled");
        }
    }
}

fn schedule<F>(pending: Rc<RefCell<Option<AnimationFrame>>>, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot = pending.clone();
    let frame = request_animation_frame(move |timestamp| {
        let again = (step.borrow_mut())(timestamp);
        if again {
            schedule(slot, step);
        } else {
            // Releases the handle of the frame that just ran
            slot.borrow_mut().take();
        }
    });
    *pending.borrow_mut() = Some(frame);
}
