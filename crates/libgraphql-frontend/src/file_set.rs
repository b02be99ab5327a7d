use crate::File;
use crate::Pos;
use crate::Position;

/// A registry of source [`File`]s that allocates each one a distinct,
/// non-overlapping range of [`Pos`] values.
///
/// A single `FileSet` can span many parses, which lets diagnostics from
/// every file in a session share one position space. The set only grows;
/// files are never removed.
///
/// `FileSet` performs no internal locking. Callers registering files from
/// multiple threads must synchronize externally.
#[derive(Clone, Debug)]
pub struct FileSet {
    /// Next available base. Starts at `1` so that `Pos::NONE` (zero) never
    /// belongs to a file.
    base: usize,
    files: Vec<File>,
}

impl FileSet {
    /// Creates an empty set whose first file will start at base `1`.
    pub fn new() -> Self {
        Self {
            base: 1,
            files: Vec::new(),
        }
    }

    /// Returns the base that the next registered file will receive.
    pub fn base(&self) -> Pos {
        Pos::new(self.base)
    }

    /// Registers a new file of `size` bytes and returns it.
    ///
    /// The file receives the `Pos` range `[base, base + size]`; the next
    /// file starts at `base + size + 1` so that each file has its own
    /// end-of-file position.
    ///
    /// # Panics
    ///
    /// Panics if the position space would overflow.
    pub fn add_file(&mut self, name: impl Into<String>, size: usize) -> &mut File {
        let name = name.into();
        let base = self.base;
        self.base = base
            .checked_add(size)
            .and_then(|b| b.checked_add(1))
            .unwrap_or_else(|| panic!("position space overflow registering {name:?}"));
        log::debug!("Registered file {name:?} ({size} bytes) at base {base}.");
        self.files.push(File::new(name, base, size));
        let idx = self.files.len() - 1;
        &mut self.files[idx]
    }

    /// Returns the file that owns `pos`, if any.
    pub fn file(&self, pos: Pos) -> Option<&File> {
        if !pos.is_valid() {
            return None;
        }
        // Index of the first file whose base is beyond `pos`; the owner, if
        // any, is the one just before it.
        let idx = self.files.partition_point(|f| f.base() <= pos);
        let file = self.files.get(idx.checked_sub(1)?)?;
        file.contains(pos).then_some(file)
    }

    /// Returns every registered file in registration order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Resolves `pos` into a [`Position`].
    ///
    /// Returns `None` for [`Pos::NONE`] and for positions that belong to no
    /// registered file.
    pub fn position(&self, pos: Pos) -> Option<Position> {
        self.file(pos).map(|f| f.position(pos))
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}
