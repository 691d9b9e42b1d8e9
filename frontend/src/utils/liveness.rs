use std::cell::Cell;
use std::rc::Rc;

/// Owned by a component for as long as it is mounted. Futures get a
/// [`LivenessProbe`] and check it before handing results back.
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

#[derive(Clone)]
pub struct LivenessProbe {
    alive: Rc<Cell<bool>>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn probe(&self) -> LivenessProbe {
        LivenessProbe {
            alive: self.alive.clone(),
        }
    }

    pub fn revoke(&self) {
        self.alive.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.revoke();
    }
}

impl LivenessProbe {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_follows_owner() {
        let liveness = Liveness::new();
        let probe = liveness.probe();
        assert!(probe.is_alive());

        liveness.revoke();
        assert!(!probe.is_alive());
    }

    #[test]
    fn dropping_the_owner_kills_probes() {
        let liveness = Liveness::new();
        let first = liveness.probe();
        let second = first.clone();

        drop(liveness);
        assert!(!first.is_alive());
        assert!(!second.is_alive());
    }
}
