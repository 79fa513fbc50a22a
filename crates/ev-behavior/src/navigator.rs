//! The navigation service an avoider issues destinations to.

use ev_core::Vec3;

/// "Move the agent toward this point."
///
/// Implementations own the actual routing (navmesh, steering, …).  The
/// avoider calls `set_destination` at most once per tick and never reads a
/// result back.
pub trait Navigator {
    fn set_destination(&mut self, destination: Vec3);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    #[inline]
    fn set_destination(&mut self, destination: Vec3) {
        (**self).set_destination(destination)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    #[inline]
    fn set_destination(&mut self, destination: Vec3) {
        (**self).set_destination(destination)
    }
}
