/// Lock guarding an [`Mcp23008`][crate::Mcp23008] shared between [`Pin`][crate::Pin] objects.
///
/// [`Mcp23008`][crate::Mcp23008] never locks by itself.  After
/// [`SharedMcp23008::split()`][crate::SharedMcp23008::split], every pin runs its register access
/// inside [`lock()`](PortMutex::lock), so one read-modify-write cycle cannot interleave with
/// another pin's.  Supported locks:
///
/// | Mutex | Feature Name | Notes |
/// | --- | --- | --- |
/// | [`core::cell::RefCell`] | _always available_ | For sharing within a single execution context. |
/// | [`std::sync::Mutex`][mutex-std] | `std` | For platforms where `std` is available. |
/// | [`critical_section::Mutex`][mutex-cs] | `critical-section` | Wrapping a `RefCell`, for sharing with interrupt handlers. |
///
/// [mutex-std]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
/// [mutex-cs]: https://docs.rs/critical-section/latest/critical_section/struct.Mutex.html
///
/// Any other lock works through a newtype, for example a write-locked `RwLock`:
///
/// ```
/// struct ExpanderLock<T>(std::sync::RwLock<T>);
///
/// impl<T> mcp23008::PortMutex for ExpanderLock<T> {
///     type Port = T;
///
///     fn create(expander: T) -> Self {
///         Self(std::sync::RwLock::new(expander))
///     }
///
///     fn lock<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
///         let mut expander = self.0.write().unwrap();
///         f(&mut expander)
///     }
/// }
/// ```
pub trait PortMutex {
    /// Usually an [`Mcp23008`][crate::Mcp23008].
    type Port;

    fn create(port: Self::Port) -> Self;

    /// Run `f` with exclusive access to the wrapped port.
    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R;
}

impl<T> PortMutex for core::cell::RefCell<T> {
    type Port = T;

    fn create(v: Self::Port) -> Self {
        core::cell::RefCell::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        let mut v = self.borrow_mut();
        f(&mut v)
    }
}

#[cfg(any(test, feature = "std"))]
impl<T> PortMutex for std::sync::Mutex<T> {
    type Port = T;

    fn create(v: Self::Port) -> Self {
        std::sync::Mutex::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        // ignore poisoning
        let mut v = match self.lock() {
            Ok(v) => v,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut v)
    }
}

#[cfg(feature = "critical-section")]
impl<T> PortMutex for critical_section::Mutex<core::cell::RefCell<T>> {
    type Port = T;

    fn create(v: Self::Port) -> Self {
        critical_section::Mutex::new(core::cell::RefCell::new(v))
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut v = self.borrow_ref_mut(cs);
            f(&mut v)
        })
    }
}
