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

//! Number support.

use std::fmt::Write;

/// Largest value representable by an integer literal.
pub const MAX_INT_LITERAL: u64 = 0xFFFF_FFFF;

/// Numeric bases.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Base {
    /// Binary.
    Bin,

    /// Octal.
    Oct,

    /// Decimal.
    Dec,

    /// Hexadecimal.
    Hex,
}

impl Base {
    /// All bases, in ascending radix order.
    pub const ALL: [Base; 4] = [Base::Bin, Base::Oct, Base::Dec, Base::Hex];

    /// Returns the count of digits used to represent numbers in the base.
    #[inline]
    pub const fn radix(self) -> u8 {
        use Base::*;

        match self {
            Bin =>  2,
            Oct =>  8,
            Dec => 10,
            Hex => 16,
        }
    }

    /// Returns the canonical source prefix of a literal in the base.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        use Base::*;

        match self {
            Bin => "%",
            Oct => "0o",
            Dec => "",
            Hex => "$",
        }
    }

    /// Formats `value` as a source literal in the base, using the canonical
    /// prefix.
    pub fn format(self, value: u64) -> String {
        let mut s = String::from(self.prefix());
        let _ = match self {
            Base::Bin => write!(s, "{:b}", value),
            Base::Oct => write!(s, "{:o}", value),
            Base::Dec => write!(s, "{}",   value),
            Base::Hex => write!(s, "{:X}", value),
        };
        s
    }
}

impl Default for Base {
    #[inline]
    fn default() -> Self {
        Base::Dec
    }
}

/// Returns the value of the given byte as a hexadecimal digit, or `None` if
/// the byte is not a hexadecimal digit.
#[inline]
pub fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _           => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_radix() {
        assert_eq!( Base::Bin.radix(),  2 );
        assert_eq!( Base::Oct.radix(),  8 );
        assert_eq!( Base::Dec.radix(), 10 );
        assert_eq!( Base::Hex.radix(), 16 );
    }

    #[test]
    fn base_format() {
        assert_eq!( Base::Bin.format(5),    "%101" );
        assert_eq!( Base::Oct.format(8),    "0o10" );
        assert_eq!( Base::Dec.format(42),   "42"   );
        assert_eq!( Base::Hex.format(0xAB), "$AB"  );
    }

    #[test]
    fn digit_values() {
        assert_eq!( digit_value(b'0'), Some(0)  );
        assert_eq!( digit_value(b'9'), Some(9)  );
        assert_eq!( digit_value(b'a'), Some(10) );
        assert_eq!( digit_value(b'F'), Some(15) );
        assert_eq!( digit_value(b'g'), None     );
        assert_eq!( digit_value(b'_'), None     );
    }
}
