use alloc::{collections::TryReserveError, vec::Vec};

/// Accumulates the unique elements of one in-progress parse.
///
/// Storage is not allocated until the first append, so every allocation the
/// buffer ever performs goes through the fallible reserve below. Elements are
/// unique but in insertion order; callers sort after finalization.
#[derive(Debug)]
pub(crate) struct ElementBuffer {
    initial: usize,
    data: Vec<i32>,
}

impl ElementBuffer {
    pub(crate) fn new(initial: usize) -> Self {
        Self {
            initial,
            data: Vec::new(),
        }
    }

    /// Appends `value` unless it is already present.
    ///
    /// Growth doubles the capacity (first growth reserves the initial
    /// capacity) and is the only fallible step. A duplicate never grows the
    /// buffer.
    pub(crate) fn push(&mut self, value: i32) -> Result<(), TryReserveError> {
        if self.data.contains(&value) {
            return Ok(());
        }
        if self.data.len() == self.data.capacity() {
            let additional = if self.data.capacity() == 0 {
                self.initial
            } else {
                self.data.capacity()
            };
            self.data.try_reserve_exact(additional)?;
        }
        self.data.push(value);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transfers the backing storage out, consuming the buffer.
    pub(crate) fn into_elements(self) -> Vec<i32> {
        self.data
    }
}
