use crate::Pos;
use crate::Position;

/// A single source unit registered in a [`FileSet`](crate::FileSet).
///
/// A `File` owns the `Pos` range `[base, base + size]` (inclusive of one
/// extra position for end-of-file) and an ordered table of line-start byte
/// offsets. The table always begins with `0` (the start of line 1) and is
/// grown by [`add_line()`](File::add_line) as the lexer encounters newlines.
#[derive(Clone, Debug)]
pub struct File {
    name: String,
    base: usize,
    size: usize,
    /// Byte offsets of each line start. Strictly increasing; `lines[0] == 0`.
    lines: Vec<usize>,
}

impl File {
    pub(crate) fn new(name: String, base: usize, size: usize) -> Self {
        Self {
            name,
            base,
            size,
            lines: vec![0],
        }
    }

    /// Returns the file name given at registration (possibly empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first `Pos` value belonging to this file.
    pub fn base(&self) -> Pos {
        Pos::new(self.base)
    }

    /// Returns the size of this file in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of lines recorded so far.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the byte offset at which the 1-based `line` begins, if that
    /// line has been recorded.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|idx| self.lines.get(idx).copied())
    }

    /// Records `offset` as the start of a new line.
    ///
    /// The offset is accepted only if it is strictly greater than the last
    /// recorded line start and strictly less than the file size; any other
    /// offset is silently ignored. This makes repeated or out-of-order calls
    /// harmless.
    pub fn add_line(&mut self, offset: usize) {
        let last = self.lines.last().copied().unwrap_or(0);
        if offset > last && offset < self.size {
            self.lines.push(offset);
        }
    }

    /// Returns the `Pos` for a byte `offset` within this file.
    ///
    /// # Panics
    ///
    /// Panics if `offset > size`. `offset == size` is the end-of-file
    /// position and is permitted.
    pub fn pos(&self, offset: usize) -> Pos {
        assert!(
            offset <= self.size,
            "offset {offset} out of range for file {:?} of size {}",
            self.name,
            self.size,
        );
        Pos::new(self.base + offset)
    }

    /// Returns the byte offset within this file for `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not belong to this file.
    pub fn offset(&self, pos: Pos) -> usize {
        let raw = pos.get();
        assert!(
            raw >= self.base && raw <= self.base + self.size,
            "pos {raw} out of range for file {:?} (base {}, size {})",
            self.name,
            self.base,
            self.size,
        );
        raw - self.base
    }

    /// Returns `true` if `pos` lies within this file's `Pos` range
    /// (including the end-of-file position).
    pub fn contains(&self, pos: Pos) -> bool {
        let raw = pos.get();
        raw >= self.base && raw <= self.base + self.size
    }

    /// Resolves `pos` (which must belong to this file) into a [`Position`].
    ///
    /// The line is the number of recorded line starts `<= offset`; the
    /// column is `offset - line_start + 1`.
    pub fn position(&self, pos: Pos) -> Position {
        if !pos.is_valid() {
            return Position::default();
        }
        let offset = self.offset(pos);
        let line = self.lines.partition_point(|&start| start <= offset);
        let column = offset - self.lines[line - 1] + 1;
        Position {
            filename: self.name.clone(),
            offset,
            line,
            column,
        }
    }
}
