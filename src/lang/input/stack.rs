// This file is part of ras65, a macro-assembler for 6502-family processors.
// Copyright 2022 Jeffrey Sharp
//
// SPDX-License-Identifier: GPL-3.0-or-later
//
// ras65 is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// ras65 is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ras65.  If not, see <http://www.gnu.org/licenses/>.

//! Input frame stack.

use std::path::Path;
use std::rc::Rc;

use crate::error::ScanError;
use crate::util::{FilePos, Location};
use super::{classify, Buffer, Frame, LogicalChar};

/// Maximum count of simultaneously active input frames.
pub const MAX_INPUT_FILES: usize = 254;

/// Stack of input frames.  Bytes are read from the top frame only.
#[derive(Debug, Default)]
pub struct InputStack<'a> {
    frames: Vec<Frame<'a>>,
    last:   FilePos,
}

impl<'a> InputStack<'a> {
    pub fn new() -> Self {
        Self { frames: Vec::with_capacity(8), last: FilePos::default() }
    }

    /// Creates a stack holding the single frame `frame`.
    pub fn with_frame(frame: Frame<'a>) -> Self {
        tracing::debug!(name = %frame.name(), file = frame.is_file(), depth = 1, "enter input");
        let mut input = Self::new();
        input.frames.push(frame);
        input
    }

    /// Returns the count of active frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the top frame, if any.
    #[inline]
    pub fn current(&self) -> Option<&Frame<'a>> {
        self.frames.last()
    }

    /// Pushes a frame.
    pub fn push(&mut self, frame: Frame<'a>) -> Result<(), ScanError> {
        if self.frames.len() >= MAX_INPUT_FILES {
            return Err(ScanError::nesting_too_deep());
        }

        tracing::debug!(name = %frame.name(), file = frame.is_file(), depth = self.frames.len() + 1, "enter input");
        self.frames.push(frame);
        Ok(())
    }

    /// Opens the file at `path` and pushes it as a frame.
    pub fn push_file(&mut self, path: &Path) -> Result<(), ScanError> {
        // Check before opening so that a refused file is never opened.
        if self.frames.len() >= MAX_INPUT_FILES {
            return Err(ScanError::nesting_too_deep());
        }

        let frame = Frame::open(path)
            .map_err(|e| ScanError::io(path.to_string_lossy(), e))?;

        self.push(frame)
    }

    /// Pushes in-memory text as a frame.  Without a `name`, the frame takes
    /// the name and current location of the top frame.
    pub fn push_data(&mut self, name: Option<Rc<str>>, buf: Buffer<'a>) -> Result<(), ScanError> {
        let (name, loc) = match (name, self.current()) {
            (Some(name), _)     => (name, Location::BOF),
            (None, Some(frame)) => (frame.name().clone(), frame.location()),
            (None, None)        => (self.last.name.clone(), self.last.loc),
        };

        self.push(Frame::data(name, loc, buf))
    }

    /// Pops the top frame, releasing its file or owned buffer.  Returns
    /// `false` if there was no frame to pop.
    pub fn pop(&mut self) -> bool {
        match self.frames.pop() {
            Some(frame) => {
                tracing::debug!(name = %frame.name(), depth = self.frames.len(), "leave input");
                self.last = frame.pos();
                true
            },
            None => false,
        }
    }

    /// Pops every frame.
    pub fn clear(&mut self) {
        while self.pop() { }
    }

    /// Returns the byte at the current position of the top frame, or `None`
    /// at the end of the top frame or when no frame is active.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.frames.last().and_then(Frame::peek)
    }

    /// Advances the top frame past its current byte.  Never pops.
    #[inline(always)]
    pub fn bump(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bump()
        }
    }

    /// Classifies the byte at the current position as some logical character
    /// of type `C` using the given character `map`.
    #[inline(always)]
    pub fn classify<C: LogicalChar>(&self, map: &[C; 128]) -> (C, u8) {
        classify(self.peek(), map)
    }

    /// Returns the named position of the current byte.
    pub fn pos(&self) -> FilePos {
        match self.current() {
            Some(frame) => frame.pos(),
            None        => self.last.clone(),
        }
    }

    /// Takes the read error that ended the top frame, if any.
    pub fn take_error(&mut self) -> Option<ScanError> {
        let frame = self.frames.last_mut()?;
        let error = frame.take_error()?;
        Some(ScanError::io(&**frame.name(), error))
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::error::ScanError;
    use super::*;

    fn read_all(input: &mut InputStack) -> Vec<u8> {
        let mut bytes = vec![];
        while let Some(b) = input.peek() {
            bytes.push(b);
            input.bump();
        }
        bytes
    }

    #[test]
    fn empty_stack() {
        let mut input = InputStack::new();

        assert_eq!( input.depth(), 0    );
        assert_eq!( input.peek(),  None );
        assert!( !input.pop() );
        input.bump();
    }

    #[test]
    fn data_frames_nest() {
        let mut input = InputStack::new();

        input.push_data(Some("a.s".into()), "one".into()).unwrap();
        input.bump();
        input.push_data(None, "two".into()).unwrap();

        assert_eq!( input.depth(), 2 );
        assert_eq!( &*input.pos().name, "a.s" );
        assert_eq!( input.pos().loc, Location::new(1, 2) );
        assert_eq!( read_all(&mut input), b"two" );

        // The exhausted frame stays until popped explicitly.
        assert_eq!( input.depth(), 2 );
        assert!( input.pop() );
        assert_eq!( read_all(&mut input), b"ne" );
        assert!( input.pop() );
        assert!( input.is_empty() );
    }

    #[test]
    fn with_frame() {
        let mut input = InputStack::with_frame(Frame::data("a.s".into(), Location::BOF, "ab".into()));

        assert_eq!( input.depth(),        1          );
        assert_eq!( read_all(&mut input), b"ab"      );
        assert!( input.pop() );
        assert!( input.is_empty() );
    }

    #[test]
    fn pos_survives_last_pop() {
        let mut input = InputStack::new();

        input.push_data(Some("a.s".into()), "x".into()).unwrap();
        input.bump();
        input.pop();

        assert_eq!( input.pos().to_string(), "a.s:1:2" );
    }

    #[test]
    fn nesting_limit() {
        let mut input = InputStack::new();

        for _ in 0..MAX_INPUT_FILES {
            input.push_data(Some("m".into()), "".into()).unwrap();
        }

        let result = input.push_data(None, "".into());

        assert!( matches!(result, Err(ScanError::NestingTooDeep { max: MAX_INPUT_FILES })) );
        assert_eq!( input.depth(), MAX_INPUT_FILES );
    }

    #[test]
    fn file_frames() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"inc").unwrap();

        let mut input = InputStack::new();
        input.push_file(file.path()).unwrap();

        assert!( input.current().unwrap().is_file() );
        assert_eq!( read_all(&mut input), b"inc" );
        assert!( input.take_error().is_none() );
        assert!( input.pop() );
    }

    #[test]
    fn file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = InputStack::new();

        let result = input.push_file(&dir.path().join("missing.s"));

        assert!( matches!(result, Err(ScanError::Io { .. })) );
        assert_eq!( input.depth(), 0 );
    }
}
