//! Page scroll lock shared by every overlay.
//!
//! Each open overlay holds a [`ScrollLockGuard`]. The body stops scrolling
//! when the first guard is taken and scrolls again once the last one is
//! dropped, so overlapping overlays can't unlock the page early.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::window;

pub trait OverflowTarget {
    fn lock(&self);
    fn unlock(&self);
}

/// `document.body.style.overflow`.
pub struct BodyOverflow;

impl BodyOverflow {
    fn set(value: &str) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            warn!("No document body, cannot set overflow to {}", value);
            return;
        };
        if body.style().set_property("overflow", value).is_err() {
            warn!("Failed to set body overflow to {}", value);
        }
    }
}

impl OverflowTarget for BodyOverflow {
    fn lock(&self) {
        Self::set("hidden");
    }

    fn unlock(&self) {
        Self::set("unset");
    }
}

struct LockState {
    holders: usize,
    target: Box<dyn OverflowTarget>,
}

#[derive(Clone)]
pub struct ScrollLock {
    state: Rc<RefCell<LockState>>,
}

impl ScrollLock {
    pub fn new(target: impl OverflowTarget + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(LockState {
                holders: 0,
                target: Box::new(target),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        state.holders += 1;
        if state.holders == 1 {
            state.target.lock();
        }
        ScrollLockGuard {
            state: self.state.clone(),
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

/// Releases its hold on drop.
pub struct ScrollLockGuard {
    state: Rc<RefCell<LockState>>,
}

impl ScrollLockGuard {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.target.unlock();
        }
    }
}

thread_local! {
    static PAGE_LOCK: ScrollLock = ScrollLock::new(BodyOverflow);
}

/// Locks page scrolling until the returned guard is dropped.
pub fn acquire() -> ScrollLockGuard {
    PAGE_LOCK.with(|lock| lock.acquire())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl OverflowTarget for Recorder {
        fn lock(&self) {
            self.calls.borrow_mut().push("hidden");
        }

        fn unlock(&self) {
            self.calls.borrow_mut().push("unset");
        }
    }

    #[test]
    fn single_overlay_locks_and_unlocks() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(recorder.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        guard.release();

        assert!(!lock.is_locked());
        assert_eq!(*recorder.calls.borrow(), vec!["hidden", "unset"]);
    }

    #[test]
    fn overlapping_overlays_keep_the_page_locked() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(recorder.clone());

        let contact = lock.acquire();
        let service = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(contact);
        assert!(lock.is_locked());
        assert_eq!(*recorder.calls.borrow(), vec!["hidden"]);

        drop(service);
        assert!(!lock.is_locked());
        assert_eq!(*recorder.calls.borrow(), vec!["hidden", "unset"]);
    }

    #[test]
    fn relocking_after_release_touches_the_target_again() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(recorder.clone());

        drop(lock.acquire());
        drop(lock.acquire());

        assert_eq!(
            *recorder.calls.borrow(),
            vec!["hidden", "unset", "hidden", "unset"]
        );
    }
}
