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

//! Input frames.

use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Bytes, Read};
use std::path::Path;
use std::rc::Rc;

use crate::util::{FilePos, Location};

// ----------------------------------------------------------------------------

/// In-memory input text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Buffer<'a> {
    /// Text owned by the frame and released when the frame is popped.
    Owned(Vec<u8>),

    /// Text owned by the caller, which must outlive the frame.
    Borrowed(&'a [u8]),
}

impl Buffer<'_> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Buffer::Owned(v)    => v,
            Buffer::Borrowed(s) => s,
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }
}

impl From<Vec<u8>> for Buffer<'_> {
    fn from(v: Vec<u8>) -> Self {
        Buffer::Owned(v)
    }
}

impl From<String> for Buffer<'_> {
    fn from(s: String) -> Self {
        Buffer::Owned(s.into_bytes())
    }
}

impl<'a> From<&'a [u8]> for Buffer<'a> {
    fn from(s: &'a [u8]) -> Self {
        Buffer::Borrowed(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Buffer<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Buffer::Borrowed(s)
    }
}

impl<'a> From<&'a str> for Buffer<'a> {
    fn from(s: &'a str) -> Self {
        Buffer::Borrowed(s.as_bytes())
    }
}

// ----------------------------------------------------------------------------

enum Source<'a> {
    File(Bytes<BufReader<File>>),
    Data(Buffer<'a>, usize),
}

/// One input source with a one-byte lookahead.
///
/// A frame never advances past its end; the byte at the current position is
/// `None` once the source is exhausted or a read fails.  A read failure is
/// kept until taken with [`Frame::take_error`].
pub struct Frame<'a> {
    name:   Rc<str>,
    loc:    Location,
    cur:    Option<u8>,
    source: Source<'a>,
    error:  Option<io::Error>,
}

impl<'a> Frame<'a> {
    /// Opens the file at `path` as a new frame.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file   = File::open(path)?;
        let name   = Rc::<str>::from(&*path.to_string_lossy());
        let source = Source::File(BufReader::new(file).bytes());
        Ok(Self::new(name, Location::BOF, source))
    }

    /// Creates a frame over in-memory text.  Positions within the frame begin
    /// at `loc`.
    pub fn data(name: Rc<str>, loc: Location, buf: Buffer<'a>) -> Self {
        Self::new(name, loc, Source::Data(buf, 0))
    }

    fn new(name: Rc<str>, loc: Location, source: Source<'a>) -> Self {
        let mut frame = Self { name, loc, cur: None, source, error: None };
        frame.cur = frame.read();
        frame
    }

    fn read(&mut self) -> Option<u8> {
        match &mut self.source {
            Source::Data(buf, pos) => {
                let byte = buf.as_bytes().get(*pos).copied();
                *pos += byte.is_some() as usize;
                byte
            },
            Source::File(bytes) => match bytes.next()? {
                Ok(byte) => Some(byte),
                Err(e)   => { self.error = Some(e); None },
            },
        }
    }

    /// Returns the name of the frame.
    #[inline]
    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    /// Returns the location of the byte at the current position.
    #[inline]
    pub fn location(&self) -> Location {
        self.loc
    }

    /// Returns the named position of the byte at the current position.
    pub fn pos(&self) -> FilePos {
        FilePos::new(self.name.clone(), self.loc)
    }

    /// Returns whether the frame reads from a file.
    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self.source, Source::File(_))
    }

    /// Returns the byte at the current position, or `None` at the end of the
    /// frame.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.cur
    }

    /// Advances past the byte at the current position.  Does nothing at the
    /// end of the frame.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(byte) = self.cur {
            self.loc.advance(byte);
            self.cur = self.read();
        }
    }

    /// Takes the error that ended the frame, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl Debug for Frame<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Frame")
            .field("name", &self.name)
            .field("loc",  &self.loc)
            .field("cur",  &self.cur)
            .field("file", &self.is_file())
            .finish()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn frame(text: &str) -> Frame<'_> {
        Frame::data("t.s".into(), Location::BOF, text.into())
    }

    #[test]
    fn data_peek_bump() {
        let mut f = frame("a\nb");

        assert_eq!( f.peek(),     Some(b'a')            );
        assert_eq!( f.location(), Location::new(1, 1)   );
        f.bump();
        assert_eq!( f.peek(),     Some(b'\n')           );
        assert_eq!( f.location(), Location::new(1, 2)   );
        f.bump();
        assert_eq!( f.peek(),     Some(b'b')            );
        assert_eq!( f.location(), Location::new(2, 1)   );
        f.bump();
        assert_eq!( f.peek(),     None                  );
        f.bump();
        assert_eq!( f.peek(),     None                  );
        assert_eq!( f.location(), Location::new(2, 2)   );
    }

    #[test]
    fn data_empty() {
        let f = frame("");

        assert_eq!( f.peek(), None );
        assert!( !f.is_file() );
    }

    #[test]
    fn buffer_ownership() {
        assert!(  Buffer::from(vec![1u8, 2]).is_owned() );
        assert!( !Buffer::from("xy").is_owned()         );
        assert_eq!( Buffer::from(b"xy").as_bytes(), b"xy" );
    }

    #[test]
    fn file_frame() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"lda").unwrap();

        let mut f = Frame::open(file.path()).unwrap();

        assert!( f.is_file() );
        assert_eq!( &*f.pos().name, &*file.path().to_string_lossy() );
        assert_eq!( f.peek(), Some(b'l') );
        f.bump();
        f.bump();
        assert_eq!( f.peek(), Some(b'a') );
        f.bump();
        assert_eq!( f.peek(), None );
        assert!( f.take_error().is_none() );
    }

    #[test]
    fn file_missing() {
        let dir = tempfile::tempdir().unwrap();

        assert!( Frame::open(&dir.path().join("nope.s")).is_err() );
    }
}
