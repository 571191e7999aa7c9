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

//! Hard failures of input frame operations.

use std::io;

use thiserror::Error;

use crate::lang::input::MAX_INPUT_FILES;

/// An error that stops scanning of the current input.
///
/// Frame operations return `ScanError` to their caller.  The scanner also
/// records each one as a fatal diagnostic and forces end of input.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A source could not be opened or read.
    #[error("cannot read '{name}': {source}")]
    Io {
        name:   String,
        #[source]
        source: io::Error,
    },

    /// Pushing a frame would exceed the input nesting limit.
    #[error("too many nested input sources (limit is {max})")]
    NestingTooDeep {
        max: usize,
    },
}

impl ScanError {
    pub fn io(name: impl Into<String>, source: io::Error) -> Self {
        Self::Io { name: name.into(), source }
    }

    pub fn nesting_too_deep() -> Self {
        Self::NestingTooDeep { max: MAX_INPUT_FILES }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_display() {
        let err = ScanError::io("foo.s", io::Error::new(io::ErrorKind::NotFound, "not found"));

        assert_eq!( err.to_string(), "cannot read 'foo.s': not found" );
    }

    #[test]
    fn nesting_display() {
        assert_eq!(
            ScanError::nesting_too_deep().to_string(),
            "too many nested input sources (limit is 254)"
        );
    }
}
