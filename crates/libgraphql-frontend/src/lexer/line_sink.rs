use crate::File;

/// Receiver for the line-start offsets a [`Lexer`](crate::lexer::Lexer)
/// discovers while scanning.
///
/// The lexer reports the byte offset just past every `\n` it consumes.
/// Implementations must tolerate duplicate and out-of-range offsets.
pub trait LineSink {
    fn add_line(&mut self, offset: usize);
}

/// Discards all line information.
impl LineSink for () {
    fn add_line(&mut self, _offset: usize) {}
}

/// Collects line starts in the order reported, skipping duplicates.
impl LineSink for Vec<usize> {
    fn add_line(&mut self, offset: usize) {
        if self.last().is_none_or(|&last| offset > last) {
            self.push(offset);
        }
    }
}

impl LineSink for File {
    fn add_line(&mut self, offset: usize) {
        File::add_line(self, offset)
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn add_line(&mut self, offset: usize) {
        (**self).add_line(offset)
    }
}
