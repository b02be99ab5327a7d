use std::ops::Add;

/// An opaque position within the virtual concatenation of every file
/// registered in a [`FileSet`](crate::FileSet).
///
/// Values are only meaningful relative to the `FileSet` that produced them.
/// [`Pos::NONE`] (zero) is the sentinel for "no position"; every valid `Pos`
/// is strictly greater than zero because the first file's base is `1`.
///
/// Use [`FileSet::position()`](crate::FileSet::position) or
/// [`File::position()`](crate::File::position) to resolve a `Pos` into a
/// human-readable [`Position`](crate::Position).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl Pos {
    /// The "no position" sentinel.
    pub const NONE: Pos = Pos(0);

    pub(crate) const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns `true` unless this is [`Pos::NONE`].
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns the raw integer value of this position.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Add<usize> for Pos {
    type Output = Pos;

    fn add(self, rhs: usize) -> Pos {
        Pos(self.0 + rhs)
    }
}
