//! Lazily evaluated, read-only properties.
//!
//! A [`LazyProperty`] is a type-level descriptor: it names a computation over
//! an owner and knows where in the owner the result is cached. The cache
//! itself is a [`LazySlot`] field embedded in every owner instance, so each
//! instance computes its own value independently.
//!
//! # Examples
//!
//! ```rust
//! use pptx_util::common::{LazyProperty, LazySlot, Length, Pt};
//!
//! struct Run {
//!     size_pt: f64,
//!     size: LazySlot<Length>,
//! }
//!
//! impl Run {
//!     const SIZE: LazyProperty<Run, Length> =
//!         LazyProperty::new("size", Run::size_slot, Run::compute_size);
//!
//!     fn size_slot(&self) -> &LazySlot<Length> {
//!         &self.size
//!     }
//!
//!     fn compute_size(&self) -> Length {
//!         Pt(self.size_pt).into()
//!     }
//!
//!     pub fn size(&self) -> &Length {
//!         Self::SIZE.get(self)
//!     }
//! }
//!
//! let run = Run { size_pt: 18.0, size: LazySlot::new() };
//! assert_eq!(run.size().centipoints(), 1800);
//! assert!(Run::SIZE.set(&run, Length::ZERO).is_err());
//! ```

use std::fmt;

use once_cell::sync::OnceCell;

use crate::{Error, Result};

/// Per-instance storage for a lazily computed value.
///
/// Backed by a thread-safe `OnceCell`: when several threads race on the first
/// access, one runs the initializer and the others block until it finishes,
/// so the computation happens at most once.
pub struct LazySlot<T> {
    cell: OnceCell<T>,
}

impl<T> LazySlot<T> {
    /// Create an empty slot.
    #[inline]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Get the cached value without computing it.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether a value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Get the cached value, computing it with `f` on first access.
    ///
    /// `f` must not access this same slot; reentrant initialization blocks
    /// forever.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(f)
    }

    /// Fallible variant of [`LazySlot::get_or_init`].
    ///
    /// An error leaves the slot empty, so the next access tries again.
    #[inline]
    pub fn get_or_try_init<F, E>(&self, f: F) -> std::result::Result<&T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        self.cell.get_or_try_init(f)
    }
}

impl<T> Default for LazySlot<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LazySlot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("LazySlot").field(value).finish(),
            None => f.write_str("LazySlot(<unevaluated>)"),
        }
    }
}

/// Read-only property evaluated on first access and cached per owner.
///
/// Declared as an associated `const` on the owner type. Referring to the
/// constant at the type level yields this descriptor without evaluating
/// anything; [`LazyProperty::get`] evaluates through an instance.
pub struct LazyProperty<O: ?Sized, T> {
    name: &'static str,
    slot: fn(&O) -> &LazySlot<T>,
    fget: fn(&O) -> T,
}

impl<O: ?Sized, T> LazyProperty<O, T> {
    /// Create a descriptor.
    ///
    /// `slot` locates the owner's cache field and `fget` computes the value.
    #[inline]
    pub const fn new(name: &'static str, slot: fn(&O) -> &LazySlot<T>, fget: fn(&O) -> T) -> Self {
        Self { name, slot, fget }
    }

    /// Name of the property.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the value for `owner`, computing it on first access.
    ///
    /// Later accesses return the cached value even when the state `fget`
    /// read has changed since.
    pub fn get<'a>(&self, owner: &'a O) -> &'a T {
        (self.slot)(owner).get_or_init(|| {
            tracing::trace!(property = self.name, "evaluating lazy property");
            (self.fget)(owner)
        })
    }

    /// Whether `owner` already holds a computed value.
    #[inline]
    pub fn is_cached(&self, owner: &O) -> bool {
        (self.slot)(owner).is_initialized()
    }

    /// Always fails: a lazy property cannot be assigned, before or after it
    /// has been read.
    pub fn set(&self, _owner: &O, _value: T) -> Result<()> {
        tracing::debug!(property = self.name, "rejected assignment to lazy property");
        Err(Error::ReadOnlyAttribute(self.name))
    }
}

impl<O: ?Sized, T> Clone for LazyProperty<O, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized, T> Copy for LazyProperty<O, T> {}

impl<O: ?Sized, T> fmt::Debug for LazyProperty<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyProperty")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Frame {
        calls: Cell<u32>,
        source: Cell<i64>,
        extent: LazySlot<i64>,
    }

    impl Frame {
        const EXTENT: LazyProperty<Frame, i64> =
            LazyProperty::new("extent", Frame::extent_slot, Frame::compute_extent);

        fn new(source: i64) -> Self {
            Self {
                calls: Cell::new(0),
                source: Cell::new(source),
                extent: LazySlot::new(),
            }
        }

        fn extent_slot(&self) -> &LazySlot<i64> {
            &self.extent
        }

        fn compute_extent(&self) -> i64 {
            self.calls.set(self.calls.get() + 1);
            self.source.get() * 2
        }

        fn extent(&self) -> i64 {
            *Self::EXTENT.get(self)
        }
    }

    #[test]
    fn test_computes_once_per_instance() {
        let frame = Frame::new(21);
        assert_eq!(frame.extent(), 42);
        frame.source.set(100);
        assert_eq!(frame.extent(), 42);
        assert_eq!(frame.extent(), 42);
        assert_eq!(frame.calls.get(), 1);
    }

    #[test]
    fn test_returns_identical_cached_value() {
        let frame = Frame::new(1);
        let first: *const i64 = Frame::EXTENT.get(&frame);
        let second: *const i64 = Frame::EXTENT.get(&frame);
        assert_eq!(first, second);
    }

    #[test]
    fn test_instances_cache_independently() {
        let a = Frame::new(1);
        let b = Frame::new(5);
        assert_eq!(a.extent(), 2);
        assert!(!Frame::EXTENT.is_cached(&b));
        assert_eq!(b.extent(), 10);
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn test_set_is_rejected_read_or_unread() {
        let frame = Frame::new(3);
        assert_eq!(
            Frame::EXTENT.set(&frame, 7),
            Err(Error::ReadOnlyAttribute("extent"))
        );
        assert!(!Frame::EXTENT.is_cached(&frame));

        assert_eq!(frame.extent(), 6);
        assert_eq!(
            Frame::EXTENT.set(&frame, 7),
            Err(Error::ReadOnlyAttribute("extent"))
        );
        assert_eq!(frame.extent(), 6);
        assert_eq!(frame.calls.get(), 1);
    }

    #[test]
    fn test_type_level_access_does_not_evaluate() {
        let descriptor = Frame::EXTENT;
        assert_eq!(descriptor.name(), "extent");
        let frame = Frame::new(4);
        assert_eq!(frame.calls.get(), 0);
        assert_eq!(*descriptor.get(&frame), 8);
    }

    #[test]
    fn test_slot_try_init_retries_after_error() {
        let slot: LazySlot<u8> = LazySlot::default();
        let failed: std::result::Result<&u8, &str> = slot.get_or_try_init(|| Err("not yet"));
        assert!(failed.is_err());
        assert!(!slot.is_initialized());
        assert_eq!(slot.get_or_try_init::<_, &str>(|| Ok(9)), Ok(&9));
        assert_eq!(slot.get(), Some(&9));
        assert_eq!(format!("{:?}", slot), "LazySlot(9)");
    }

    struct Shared {
        calls: AtomicUsize,
        value: LazySlot<String>,
    }

    impl Shared {
        const VALUE: LazyProperty<Shared, String> =
            LazyProperty::new("value", Shared::value_slot, Shared::compute_value);

        fn value_slot(&self) -> &LazySlot<String> {
            &self.value
        }

        fn compute_value(&self) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(5));
            "computed".to_string()
        }
    }

    #[test]
    fn test_concurrent_first_access_computes_once() {
        let shared = Shared {
            calls: AtomicUsize::new(0),
            value: LazySlot::new(),
        };
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(Shared::VALUE.get(&shared), "computed");
                });
            }
        });
        assert_eq!(shared.calls.load(Ordering::SeqCst), 1);
    }
}
