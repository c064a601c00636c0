//! Fixed-capacity reusable-instance pool.
//!
//! Instances are created eagerly at pool construction and are never
//! destroyed; firing a weapon or spawning an enemy acquires a free slot
//! and releases it back when done, so the hot paths allocate nothing.
//! Exhaustion (`acquire` returning `None`) is a normal runtime
//! condition — rapid fire saturating the projectile pool simply skips
//! the shot. Releasing a slot that is not live is a bookkeeping bug and
//! is surfaced as an error rather than ignored.

use std::fmt;

/// Handle to a slot in an [`InstancePool`]. Only meaningful for the
/// pool that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    index: usize,
}

impl PoolHandle {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Pool bookkeeping misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The handle does not belong to this pool.
    HandleOutOfRange { index: usize, capacity: usize },
    /// The slot was already free — a double release.
    NotLive { index: usize },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::HandleOutOfRange { index, capacity } => {
                write!(f, "pool handle {index} out of range (capacity {capacity})")
            }
            PoolError::NotLive { index } => {
                write!(f, "double release of pool slot {index}")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Fixed-capacity registry of pre-built, activatable instances.
///
/// At most `capacity` instances are live at any time. Released
/// instances keep their internal state; clearing it on reuse is the
/// instance's own responsibility.
#[derive(Debug, Clone)]
pub struct InstancePool<T> {
    instances: Vec<T>,
    live: Vec<bool>,
    live_count: usize,
}

impl<T: Clone> InstancePool<T> {
    /// Build a pool of `capacity` clones of `prototype`. A zero
    /// capacity is a configuration error and fails fast.
    pub fn new(capacity: usize, prototype: T) -> Self {
        Self::with_init(capacity, prototype, |_, _| {})
    }

    /// Build a pool and run `init(&mut instance, slot_index)` exactly
    /// once per instance, in slot order. This is where instances bind
    /// one-time resources (e.g. a backing world entity).
    pub fn with_init(capacity: usize, prototype: T, mut init: impl FnMut(&mut T, usize)) -> Self {
        assert!(capacity > 0, "pool capacity must be positive");
        let mut instances = vec![prototype; capacity];
        for (index, instance) in instances.iter_mut().enumerate() {
            init(instance, index);
        }
        Self {
            instances,
            live: vec![false; capacity],
            live_count: 0,
        }
    }
}

impl<T> InstancePool<T> {
    /// Mark the first free slot live and return its handle, or `None`
    /// if every slot is in use.
    pub fn acquire(&mut self) -> Option<PoolHandle> {
        let index = self.live.iter().position(|live| !live)?;
        self.live[index] = true;
        self.live_count += 1;
        Some(PoolHandle { index })
    }

    /// Return a live slot to the pool. Double releases and foreign
    /// handles are reported, not swallowed.
    pub fn release(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        let index = handle.index;
        if index >= self.live.len() {
            return Err(PoolError::HandleOutOfRange {
                index,
                capacity: self.live.len(),
            });
        }
        if !self.live[index] {
            return Err(PoolError::NotLive { index });
        }
        self.live[index] = false;
        self.live_count -= 1;
        Ok(())
    }

    /// Release every live slot. Used by scene resets; instance state is
    /// left as-is.
    pub fn release_all(&mut self) {
        self.live.iter_mut().for_each(|live| *live = false);
        self.live_count = 0;
    }

    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        self.instances.get(handle.index)
    }

    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        self.instances.get_mut(handle.index)
    }

    pub fn is_live(&self, handle: PoolHandle) -> bool {
        self.live.get(handle.index).copied().unwrap_or(false)
    }

    /// Iterate over live instances with their handles.
    pub fn iter_live(&self) -> impl Iterator<Item = (PoolHandle, &T)> {
        self.instances
            .iter()
            .enumerate()
            .filter(|(index, _)| self.live[*index])
            .map(|(index, instance)| (PoolHandle { index }, instance))
    }

    /// Iterate mutably over live instances with their handles.
    pub fn iter_live_mut(&mut self) -> impl Iterator<Item = (PoolHandle, &mut T)> {
        let live = &self.live;
        self.instances
            .iter_mut()
            .enumerate()
            .filter(move |(index, _)| live[*index])
            .map(|(index, instance)| (PoolHandle { index }, instance))
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn capacity(&self) -> usize {
        self.instances.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.live_count == self.instances.len()
    }
}
