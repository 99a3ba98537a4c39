use glam::IVec2;
use rand::Rng;

/// Pool of dead-end tiles handed out as spawn points, each at most once.
#[derive(Debug, Clone, Default)]
pub struct EndpointPool {
    remaining: Vec<IVec2>,
}

impl EndpointPool {
    pub fn new(endpoints: Vec<IVec2>) -> Self {
        Self { remaining: endpoints }
    }

    /// Remove and return a uniformly random endpoint. Returns `None` without
    /// touching the pool once it is empty.
    pub fn pop_random(&mut self, rng: &mut impl Rng) -> Option<IVec2> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
