// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drop accounting for tests.

use std::{cell::RefCell, rc::Rc, vec::Vec};

/// Records the ids of [`Tracked`] values in the order they are dropped.
#[derive(Default)]
pub(crate) struct DropLog {
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl DropLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            log: Rc::clone(&self.dropped),
        }
    }

    pub(crate) fn record(&self, id: u32) {
        self.dropped.borrow_mut().push(id);
    }

    pub(crate) fn dropped(&self) -> Vec<u32> {
        self.dropped.borrow().clone()
    }
}

/// A value that logs its id when dropped. Clones share the id.
#[derive(Debug, Clone)]
pub(crate) struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Tracked {
    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}
