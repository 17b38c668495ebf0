//! Self-rescheduling per-frame loop.
//!
//! The loop keeps exactly one pending frame. The handle for that frame is
//! the only thing keeping the loop alive: once `stop` drops it, the loop and
//! everything its tick closure captured are released.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Source of animation frames. Dropping a handle must cancel its frame.
pub trait Scheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct FrameLoop<S: Scheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    stopped: Cell<bool>,
    frames: Cell<u64>,
    tick: RefCell<Box<dyn FnMut()>>,
}

impl<S: Scheduler + 'static> FrameLoop<S> {
    pub fn start(scheduler: S, tick: impl FnMut() + 'static) -> Rc<Self> {
        let frame_loop = Rc::new(Self {
            scheduler,
            pending: RefCell::new(None),
            stopped: Cell::new(false),
            frames: Cell::new(0),
            tick: RefCell::new(Box::new(tick)),
        });
        frame_loop.schedule();
        frame_loop
    }

    fn schedule(self: &Rc<Self>) {
        if self.stopped.get() {
            return;
        }
        let frame_loop = Rc::clone(self);
        let handle = self.scheduler.request(Box::new(move || {
            frame_loop.pending.borrow_mut().take();
            if frame_loop.stopped.get() {
                return;
            }
            (*frame_loop.tick.borrow_mut())();
            frame_loop.frames.set(frame_loop.frames.get() + 1);
            frame_loop.schedule();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        self.pending.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Queue = Rc<RefCell<Vec<(u64, Box<dyn FnOnce()>)>>>;

    /// Frames run only when the test says so.
    #[derive(Default)]
    struct ManualFrames {
        queue: Queue,
        next_id: Cell<u64>,
    }

    struct QueuedFrame {
        id: u64,
        queue: Queue,
    }

    impl Drop for QueuedFrame {
        fn drop(&mut self) {
            self.queue.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl Scheduler for ManualFrames {
        type Handle = QueuedFrame;

        fn request(&self, callback: Box<dyn FnOnce()>) -> QueuedFrame {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            QueuedFrame {
                id,
                queue: Rc::clone(&self.queue),
            }
        }
    }

    fn run_next(queue: &Queue) -> bool {
        let next = {
            let mut queue = queue.borrow_mut();
            (!queue.is_empty()).then(|| queue.remove(0).1)
        };
        match next {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    fn counting_loop() -> (Rc<FrameLoop<ManualFrames>>, Queue, Rc<Cell<u32>>) {
        let scheduler = ManualFrames::default();
        let queue = Rc::clone(&scheduler.queue);
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let frame_loop = FrameLoop::start(scheduler, move || counter.set(counter.get() + 1));
        (frame_loop, queue, ticks)
    }

    #[test]
    fn keeps_one_frame_pending() {
        let (frame_loop, queue, ticks) = counting_loop();
        assert_eq!(queue.borrow().len(), 1);
        assert_eq!(ticks.get(), 0);

        for _ in 0..3 {
            assert!(run_next(&queue));
            assert_eq!(queue.borrow().len(), 1);
        }
        assert_eq!(ticks.get(), 3);
        assert_eq!(frame_loop.frames(), 3);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let (frame_loop, queue, ticks) = counting_loop();
        run_next(&queue);
        frame_loop.stop();

        assert!(queue.borrow().is_empty());
        assert!(!run_next(&queue));
        assert_eq!(ticks.get(), 1);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn stop_releases_the_loop() {
        let (frame_loop, _queue, _ticks) = counting_loop();
        assert_eq!(Rc::strong_count(&frame_loop), 2);
        frame_loop.stop();
        assert_eq!(Rc::strong_count(&frame_loop), 1);
    }

    #[test]
    fn stop_from_inside_a_tick_ends_the_loop() {
        let scheduler = ManualFrames::default();
        let queue = Rc::clone(&scheduler.queue);
        let slot: Rc<RefCell<Option<Rc<FrameLoop<ManualFrames>>>>> = Rc::default();
        let inner = Rc::clone(&slot);
        let frame_loop = FrameLoop::start(scheduler, move || {
            if let Some(frame_loop) = inner.borrow().as_ref() {
                frame_loop.stop();
            }
        });
        *slot.borrow_mut() = Some(Rc::clone(&frame_loop));

        assert!(run_next(&queue));
        assert!(queue.borrow().is_empty());
        assert!(!frame_loop.is_running());
        slot.borrow_mut().take();
    }
}
