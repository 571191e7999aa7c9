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

//! Source positions.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A source code location.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Location {
    /// The 1-based line number, or `0` to indicate an unknown line.
    pub line: u32,

    /// The 1-based column number, or `0` to indicate an unknown column.
    pub column: u32,
}

impl Location {
    pub const UNKNOWN: Self = Self::new(0, 0);
    pub const BOF:     Self = Self::new(1, 1);

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Advances the location past the given byte.
    #[inline]
    pub fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line  += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.line, self.column) {
            (0, 0) => Ok(()),
            (l, 0) => write!(f, "{}",    l   ),
            (l, c) => write!(f, "{}:{}", l, c),
        }
    }
}

// ----------------------------------------------------------------------------

/// A named source position: the source name plus a [`Location`] within it.
///
/// The name is shared between every position taken from the same input
/// frame, so cloning a `FilePos` never copies the name.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct FilePos {
    /// Name of the source, usually a file path.
    pub name: Rc<str>,

    /// Location within the source.
    pub loc: Location,
}

impl FilePos {
    pub fn new(name: Rc<str>, loc: Location) -> Self {
        Self { name, loc }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.loc.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.loc.column
    }
}

impl Display for FilePos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.loc {
            Location::UNKNOWN => write!(f, "{}",     self.name),
            loc               => write!(f, "{}:{}", self.name, loc),
        }
    }
}
