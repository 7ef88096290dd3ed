//! Deliberately unsynchronized shared storage.

use std::cell::UnsafeCell;
use std::fmt;

/// A shared cell whose accesses are not synchronized by the cell itself.
///
/// Scenarios store the memory locations they race on in `RacyCell`s.
/// Whether a given access is ordered is decided entirely by the
/// surrounding scenario code, which is exactly what the detector under
/// calibration is supposed to judge. Accesses are volatile so they stay
/// in the compiled binary for the detector's instrumentation to see.
///
/// The cell is `repr(transparent)`, so the address reported by
/// `annotate::race_address(&cell)` is the address of the payload.
#[repr(transparent)]
pub struct RacyCell<T>(UnsafeCell<T>);

// Scenarios hand &RacyCell to several threads at once. The absence of
// internal synchronization is the entire point of the type.
unsafe impl<T: Send> Sync for RacyCell<T> {}

impl<T> RacyCell<T> {
    pub const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }

    /// Raw pointer to the payload, for callers that need the location
    /// itself rather than a value.
    pub fn as_ptr(&self) -> *mut T {
        self.0.get()
    }
}

impl<T: Copy> RacyCell<T> {
    /// Read the current value without any ordering.
    pub fn read(&self) -> T {
        // Safety: the pointer is valid and the payload is always an
        // initialized T. Concurrent writers make the value unordered,
        // which the calling scenario has opted into.
        unsafe { self.0.get().read_volatile() }
    }

    /// Overwrite the value without any ordering.
    pub fn write(&self, value: T) {
        // Safety: same as `read`.
        unsafe { self.0.get().write_volatile(value) }
    }

    /// Non-atomic read-modify-write.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.write(f(self.read()));
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RacyCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RacyCell").field(&self.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_update_round_trip() {
        let cell = RacyCell::new(1);
        assert_eq!(cell.read(), 1);
        cell.write(5);
        assert_eq!(cell.read(), 5);
        cell.update(|v| v + 2);
        assert_eq!(cell.read(), 7);
    }

    #[test]
    fn address_is_the_payload_address() {
        let cell = RacyCell::new(0u64);
        assert_eq!(&cell as *const _ as usize, cell.as_ptr() as usize);
    }
}
