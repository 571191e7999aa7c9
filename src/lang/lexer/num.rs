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

//! Numeric literal sublexer.
//!
//! ### Number formats:
//!
//! ```text
//! Base  Prefix   Suffix  Example
//! ────  ───────  ──────  ───────
//! 2     %                %0101
//! 8     0o                0o17
//! 10                      1234
//! 16    $                 $FFD2
//! 16    0x                0xFFD2
//! 16             h        0FFD2h
//! ```
//!
//! With the `underline_in_numbers` feature, `_` may appear between digits
//! and is ignored.  Values are limited to 32 bits.

use crate::lang::input::LogicalChar;
use crate::num::{digit_value, Base, MAX_INT_LITERAL};
use super::*;

// ----------------------------------------------------------------------------

/// Logical characters recognized by the numeric literal sublexer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    Dig, // 0-9 A-F a-f
    Sep, // _
    Etc, // everything else
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Etc;
    const EOF:       Self = Self::Etc;
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Etc;
[
//  x0      x1      x2      x3      x4      x5      x6      x7
//  x8      x9      xA      xB      xC      xD      xE      xF
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │·tnvfr··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │ !"#$%&'│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │()*+,-./│
    Dig,    Dig,    Dig,    Dig,    Dig,    Dig,    Dig,    Dig,    // 3x │01234567│
    Dig,    Dig,    __,     __,     __,     __,     __,     __,     // 3x │89:;<=>?│
    __,     Dig,    Dig,    Dig,    Dig,    Dig,    Dig,    __,     // 4x │@ABCDEFG│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │HIJKLMNO│
    __,     __,     __,     __,     __,     __,     __,     __,     // 5x │PQRSTUVW│
    __,     __,     __,     __,     __,     __,     __,     Sep,    // 5x │XYZ[\]^_│
    __,     Dig,    Dig,    Dig,    Dig,    Dig,    Dig,    __,     // 6x │`abcdefg│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │hijklmno│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │pqrstuvw│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

/// Reasons a digit run has no value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum NumError {
    /// The run contains no digits.
    Empty,

    /// The run contains a digit not valid in the base.
    InvalidDigit,

    /// The value exceeds [`MAX_INT_LITERAL`].
    Overflow,
}

/// Evaluates a run of digits in the given base, ignoring `_`.
pub(crate) fn eval_digits(digits: &[u8], base: Base) -> Result<u64, NumError> {
    let radix = base.radix() as u64;

    let mut value    = 0u64;
    let mut any      = false;
    let mut overflow = false;

    for &byte in digits {
        if byte == b'_' {
            continue;
        }

        let digit = match digit_value(byte) {
            Some(d) if (d as u64) < radix => d as u64,
            _                             => return Err(NumError::InvalidDigit),
        };

        any   = true;
        value = value * radix + digit;

        // Saturate so that further digits cannot overflow u64.
        if value > MAX_INT_LITERAL {
            overflow = true;
            value    = MAX_INT_LITERAL + 1;
        }
    }

    match (any, overflow) {
        (false, _)    => Err(NumError::Empty),
        (true, true)  => Err(NumError::Overflow),
        (true, false) => Ok(value),
    }
}

impl<'a> Scanner<'a> {
    /// Scans a number that begins with a decimal digit.
    pub(super) fn scan_dec(&mut self) -> Token {
        let mut digits = Vec::with_capacity(16);
        self.read_digits(&mut digits);

        let is_zero = digits == b"0";

        match self.input.peek() {
            Some(b'h' | b'H') => {
                self.input.bump();
                self.finish_num(&digits, Base::Hex)
            },
            Some(b'x' | b'X') if is_zero => {
                self.input.bump();
                self.scan_num(Base::Hex)
            },
            Some(b'o' | b'O') if is_zero => {
                self.input.bump();
                self.scan_num(Base::Oct)
            },
            _ => self.finish_num(&digits, Base::Dec),
        }
    }

    /// Scans the digits of a number whose base prefix has been consumed.
    pub(super) fn scan_num(&mut self, base: Base) -> Token {
        let mut digits = Vec::with_capacity(16);
        self.read_digits(&mut digits);
        self.finish_num(&digits, base)
    }

    /// Appends a run of hexadecimal digits to `digits`.
    fn read_digits(&mut self, digits: &mut Vec<u8>) {
        let underline = self.config.features.underline_in_numbers;

        loop {
            let (kind, byte) = self.input.classify(&CHARS);

            match kind {
                Char::Dig              => digits.push(byte),
                Char::Sep if underline => digits.push(byte),
                _                      => break,
            }

            self.input.bump();
        }
    }

    /// Evaluates `digits` and yields an integer constant.  An invalid number
    /// is reported and yields the value `0`.
    fn finish_num(&mut self, digits: &[u8], base: Base) -> Token {
        let value = match eval_digits(digits, base) {
            Ok(value) => value,
            Err(NumError::Overflow) => {
                self.error_here(ErrorKind::IntegerOverflow, "integer constant too large");
                0
            },
            Err(_) => {
                let message = format!("invalid digits in base-{} number", base.radix());
                self.error_here(ErrorKind::InvalidNumber, message);
                0
            },
        };

        self.attr = Attr::Int(value as i64);
        Token::IntCon
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn eval_bases() {
        assert_eq!( eval_digits(b"1010",     Base::Bin), Ok(10)         );
        assert_eq!( eval_digits(b"17",       Base::Oct), Ok(15)         );
        assert_eq!( eval_digits(b"1234",     Base::Dec), Ok(1234)       );
        assert_eq!( eval_digits(b"FfD2",     Base::Hex), Ok(0xFFD2)     );
        assert_eq!( eval_digits(b"FFFFFFFF", Base::Hex), Ok(0xFFFFFFFF) );
    }

    #[test]
    fn eval_underscores() {
        assert_eq!( eval_digits(b"1_000", Base::Dec), Ok(1000)               );
        assert_eq!( eval_digits(b"_",     Base::Dec), Err(NumError::Empty)   );
    }

    #[test]
    fn eval_invalid() {
        assert_eq!( eval_digits(b"102", Base::Bin), Err(NumError::InvalidDigit) );
        assert_eq!( eval_digits(b"8",   Base::Oct), Err(NumError::InvalidDigit) );
        assert_eq!( eval_digits(b"1A",  Base::Dec), Err(NumError::InvalidDigit) );
        assert_eq!( eval_digits(b"",    Base::Hex), Err(NumError::Empty)        );
    }

    #[test]
    fn eval_overflow() {
        assert_eq!( eval_digits(b"100000000",  Base::Hex), Err(NumError::Overflow) );
        assert_eq!( eval_digits(b"4294967296", Base::Dec), Err(NumError::Overflow) );
        assert_eq!( eval_digits(b"4294967295", Base::Dec), Ok(0xFFFF_FFFF)         );

        let long = [b'9'; 64];
        assert_eq!( eval_digits(&long, Base::Dec), Err(NumError::Overflow) );
    }

    proptest! {
        #[test]
        fn round_trip(value in 0..=MAX_INT_LITERAL, base in prop::sample::select(Base::ALL.to_vec())) {
            let text   = base.format(value);
            let digits = &text.as_bytes()[base.prefix().len()..];

            prop_assert_eq!( eval_digits(digits, base), Ok(value) );
        }

        #[test]
        fn out_of_range_overflows(value in (MAX_INT_LITERAL + 1)..=u64::MAX, base in prop::sample::select(Base::ALL.to_vec())) {
            let text   = base.format(value);
            let digits = &text.as_bytes()[base.prefix().len()..];

            prop_assert_eq!( eval_digits(digits, base), Err(NumError::Overflow) );
        }
    }
}
