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

//! Input sources and logical character set trait.

mod frame;
mod stack;

pub use self::frame::{Buffer, Frame};
pub use self::stack::{InputStack, MAX_INPUT_FILES};

// ----------------------------------------------------------------------------

/// Trait for logical characters yielded by [`InputStack::classify`].
///
/// A 'logical character' in ras65 is effectively a character equivalence
/// class: a value that represents a set of input values which receive
/// identical treatment at some point during lexical analysis.  A 'logical
/// character set' is a set that contains sufficient logical characters to
/// represent all byte values plus an additional logical character to indicate
/// the end of the current input frame.
///
pub trait LogicalChar: Copy + Eq {
    /// Logical character that represents a byte beyond the 7-bit ASCII range.
    const NON_ASCII: Self;

    /// Logical character that represents the end of the current frame.
    const EOF: Self;
}

/// Classifies an optional byte as some logical character of type `C` using
/// the given character `map`.
#[inline(always)]
pub fn classify<C: LogicalChar>(byte: Option<u8>, map: &[C; 128]) -> (C, u8) {
    match byte {
        Some(b) if b < 128 => (map[b as usize], b),
        Some(b)            => (C::NON_ASCII,    b),
        None               => (C::EOF,          0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Char::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Char { Lc, Uc, Etc, Non, Eof }

    impl LogicalChar for Char {
        const NON_ASCII: Self = Non;
        const EOF:       Self = Eof;
    }

    /// Mapping of 7-bit ASCII to logical characters.
    static CHARS: [Char; 128] = {
        const __: Char = Etc;
    [
    //  x0  x1  x2  x3  x4  x5  x6  x7
    //  x8  x9  xA  xB  xC  xD  xE  xF
        __, __, __, __, __, __, __, __, // 0x │········│
        __, __, __, __, __, __, __, __, // 0x │·tnvfr··│
        __, __, __, __, __, __, __, __, // 1x │········│
        __, __, __, __, __, __, __, __, // 1x │········│
        __, __, __, __, __, __, __, __, // 2x │ !"#$%&'│
        __, __, __, __, __, __, __, __, // 2x │()*+,-./│
        __, __, __, __, __, __, __, __, // 3x │01234567│
        __, __, __, __, __, __, __, __, // 3x │89:;<=>?│
        __, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 4x │@ABCDEFG│
        Uc, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 4x │HIJKLMNO│
        Uc, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 5x │PQRSTUVW│
        Uc, Uc, Uc, __, __, __, __, __, // 5x │XYZ[\]^_│
        __, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 6x │`abcdefg│
        Lc, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 6x │hijklmno│
        Lc, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 7x │pqrstuvw│
        Lc, Lc, Lc, __, __, __, __, __, // 7x │xyz{|}~░│
    ]};

    #[test]
    fn classify_use() {
        let mut input = InputStack::new();
        input.push(Frame::data("t.s".into(), Default::default(), Buffer::from("Hi!\u{ED}"))).unwrap();

        assert_eq!( input.classify(&CHARS), (Uc,  b'H') );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Lc,  b'i') );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Etc, b'!') );
        assert_eq!( input.classify(&CHARS), (Etc, b'!') );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Non, 0xC3) );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Non, 0xAD) );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Eof, 0)    );
        input.bump();
        assert_eq!( input.classify(&CHARS), (Eof, 0)    );
    }
}

/*
Template for logical character set tables:
//  x0      x1      x2      x3      x4      x5      x6      x7
//  x8      x9      xA      xB      xC      xD      xE      xF
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │·tnvfr··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │ !"#$%&'│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │()*+,-./│
    __,     __,     __,     __,     __,     __,     __,     __,     // 3x │01234567│
    __,     __,     __,     __,     __,     __,     __,     __,     // 3x │89:;<=>?│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │@ABCDEFG│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │HIJKLMNO│
    __,     __,     __,     __,     __,     __,     __,     __,     // 5x │PQRSTUVW│
    __,     __,     __,     __,     __,     __,     __,     __,     // 5x │XYZ[\]^_│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │`abcdefg│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │hijklmno│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │pqrstuvw│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │xyz{|}~░│
*/
