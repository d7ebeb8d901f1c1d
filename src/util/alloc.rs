use std::cell::Cell;
use std::rc::Rc;

/// A shared counter, incremented every time one of the [`CountedDrop`] values it produced is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Wraps `value` so that dropping it (or any clone of it) is recorded by this counter.
    pub fn track<T>(&self, value: T) -> CountedDrop<T> {
        CountedDrop {
            value,
            counter: self.clone(),
        }
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// A value that reports its own drop to a [`DropCounter`].
#[derive(Debug, Clone)]
pub struct CountedDrop<T> {
    pub value: T,
    counter: DropCounter,
}

impl<T> Drop for CountedDrop<T> {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
