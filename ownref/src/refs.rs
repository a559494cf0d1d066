//! Non-owning views derived from an owning handle.

use core::fmt;
use core::ops;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use crate::own::Own;

/// A non-owning read-write view of a `T` owned elsewhere.
///
/// A `RefMut` lets a function be given write access without being given
/// destruction rights: the referent stays owned by the handle the view was
/// derived from, and the view cannot outlive that handle.
///
/// A `RefMut` is not copyable; to hand it to a callee and keep using it
/// afterwards, [`reborrow`](RefMut::reborrow) it:
///
/// ```
/// use ownref::{Own, RefMut};
///
/// fn add_one(mut view: RefMut<u32>) {
///     *view += 1;
/// }
///
/// let mut owner = Own::new(1u32);
/// let mut view = owner.view_mut();
/// add_one(view.reborrow());
/// add_one(view.reborrow());
/// assert_eq!(*view, 3);
/// ```
pub struct RefMut<'a, T> {
    inner: &'a mut T,
}

/// A non-owning read-only view of a `T` owned elsewhere.
///
/// A function taking `Ref` asserts in its own signature that it will not
/// mutate the argument. The only access a `Ref` grants is `Deref`, so
/// mutation through it is a type error:
///
/// ```compile_fail
/// use ownref::Own;
///
/// let owner = Own::new(1u8);
/// let view = owner.view();
/// *view = 2; // no write access through a read-only view
/// ```
///
/// `Ref` is freely copyable; copying duplicates the view, never the
/// referent.
///
/// ```
/// use ownref::Own;
///
/// let owner = Own::new(7u8);
/// let a = owner.view();
/// let b = a;
/// assert_eq!(*a, *b);
/// ```
pub struct Ref<'a, T> {
    inner: &'a T,
}

assert_impl_all!(Ref<'static, u8>: Copy);
assert_not_impl_any!(Ref<'static, u8>: ops::DerefMut);
assert_not_impl_any!(RefMut<'static, u8>: Clone, Copy);

impl<'a, T> RefMut<'a, T> {
    #[inline]
    pub(crate) fn new(inner: &'a mut T) -> Self {
        Self { inner }
    }

    /// Reborrows the view for a shorter extent.
    ///
    /// The original view is unusable until the reborrow ends, preserving
    /// exclusive write access.
    #[inline]
    pub fn reborrow(&mut self) -> RefMut<'_, T> {
        RefMut {
            inner: &mut *self.inner,
        }
    }

    /// Derives a read-only view of the same referent.
    #[inline]
    pub fn view(&self) -> Ref<'_, T> {
        Ref { inner: &*self.inner }
    }

    /// Consumes the view, demoting it to read-only for its full extent.
    #[inline]
    pub fn into_ref(self) -> Ref<'a, T> {
        Ref { inner: self.inner }
    }
}

impl<'a, T> Ref<'a, T> {
    #[inline]
    pub(crate) fn new(inner: &'a T) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Ref<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ref<'_, T> {}

impl<T> ops::Deref for RefMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.inner
    }
}

impl<T> ops::DerefMut for RefMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.inner
    }
}

impl<T> ops::Deref for Ref<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.inner
    }
}

impl<'a, T> From<&'a mut Own<T>> for RefMut<'a, T> {
    fn from(src: &'a mut Own<T>) -> Self {
        src.view_mut()
    }
}

impl<'a, T> From<&'a Own<T>> for Ref<'a, T> {
    fn from(src: &'a Own<T>) -> Self {
        src.view()
    }
}

impl<'a, T> From<&'a RefMut<'_, T>> for Ref<'a, T> {
    fn from(src: &'a RefMut<'_, T>) -> Self {
        src.view()
    }
}

impl<'a, T> From<RefMut<'a, T>> for Ref<'a, T> {
    fn from(src: RefMut<'a, T>) -> Self {
        src.into_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for RefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for RefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_visible_through_the_owner() {
        let mut owner = Own::new(1u32);

        let mut view = owner.view_mut();
        *view += 1;

        assert_eq!(*owner, 2);
    }

    #[test]
    fn read_only_copies_observe_the_same_referent() {
        let owner = Own::new(7u8);

        let a = owner.view();
        let b = a;
        let c = b;

        assert_eq!(*a, 7);
        assert_eq!(*b, 7);
        assert_eq!(*c, 7);
    }

    #[test]
    fn demoting_a_mutable_view() {
        let mut owner = Own::new(5u8);

        let view = owner.view_mut();
        let read_only = view.into_ref();
        assert_eq!(*read_only, 5);

        let mut view = owner.view_mut();
        *view = 6;
        assert_eq!(*view.view(), 6);
    }

    #[test]
    fn reborrow_restores_the_original_view() {
        fn double(mut view: RefMut<u32>) {
            *view *= 2;
        }

        let mut owner = Own::new(3u32);
        let mut view = owner.view_mut();

        double(view.reborrow());
        double(view.reborrow());

        assert_eq!(*view, 12);
    }

    #[test]
    fn conversions_from_sources() {
        let mut owner = Own::new(9u8);

        {
            let view = RefMut::from(&mut owner);
            let read_only = Ref::from(&view);
            assert_eq!(*read_only, 9);
        }

        let read_only = Ref::from(&owner);
        assert_eq!(*read_only, 9);
    }
}
