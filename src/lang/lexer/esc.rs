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

//! Escape sequence sublexer.
//!
//! ### Escape Sequences
//!
//! Sequence | Byte    | Name  | Description
//! ---------|---------|:------|:-----------
//! `\0`     | `00`    | `NUL` | null character
//! `\a`     | `07`    | `BEL` | bell, alert
//! `\b`     | `08`    | `BS`  | backspace
//! `\t`     | `09`    | `HT`  | horizontal tab
//! `\n`     | `0A`    | `LF`  | line feed, newline
//! `\v`     | `0B`    | `VT`  | vertical tab
//! `\f`     | `0C`    | `FF`  | form feed
//! `\r`     | `0D`    | `CR`  | carriage return
//! `\e`     | `1B`    | `ESC` | escape
//! `\"`     | `22`    | `"`   | double quote
//! `\'`     | `27`    | `'`   | single quote
//! `\\`     | `5C`    | `\`   | backslash
//! `\xHH`   | `HH`    |       | byte with the given hexadecimal value
//!
//! Escapes are decoded only with the `string_escapes` feature.  Character
//! constants translate the decoded byte through the character map.

use crate::num::digit_value;
use super::*;

/// Result of scanning an escape sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Esc {
    /// A valid escape; the decoded byte.
    Byte(u8),

    /// An unknown escape; the byte following the backslash, which is kept
    /// along with the backslash.
    Verbatim(u8),

    /// A backslash at the end of the line.
    Lone,
}

impl<'a> Scanner<'a> {
    /// Scans the rest of an escape sequence whose backslash has been
    /// consumed.
    pub(super) fn scan_esc(&mut self) -> Esc {
        let pos = self.input.pos();

        let byte = match self.input.peek() {
            None | Some(b'\n' | b'\r') => return Esc::Lone,
            Some(byte)                 => byte,
        };

        self.input.bump();

        let value = match byte {
            b'0'        => 0x00,
            b'a'        => 0x07,
            b'b'        => 0x08,
            b't'        => 0x09,
            b'n'        => 0x0A,
            b'v'        => 0x0B,
            b'f'        => 0x0C,
            b'r'        => 0x0D,
            b'e'        => 0x1B,
            b'"'        => b'"',
            b'\''       => b'\'',
            b'\\'       => b'\\',
            b'x' | b'X' => return self.scan_esc_hex(pos),
            _           => {
                let message = format!("invalid escape sequence '\\{}'", byte as char);
                self.error(ErrorKind::InvalidCharacter, pos, message);
                return Esc::Verbatim(byte);
            },
        };

        Esc::Byte(value)
    }

    /// Scans the one or two hexadecimal digits of a `\x` escape.
    fn scan_esc_hex(&mut self, pos: FilePos) -> Esc {
        let mut value = 0u8;
        let mut count = 0;

        while count < 2 {
            match self.input.peek().and_then(digit_value) {
                Some(digit) => value = value << 4 | digit,
                None        => break,
            }
            self.input.bump();
            count += 1;
        }

        if count == 0 {
            self.error(ErrorKind::InvalidCharacter, pos, "'\\x' escape requires hexadecimal digits");
            return Esc::Verbatim(b'x');
        }

        Esc::Byte(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::lang::token::Token;
    use crate::message::ErrorKind;
    use crate::lang::lexer::Scanner;

    fn scan_str(text: &str) -> (Vec<u8>, Vec<ErrorKind>) {
        let mut scanner = Scanner::with_data(Config::default(), "t.s", text);
        assert_eq!( scanner.next_raw_token(), Token::StrCon );
        let bytes = scanner.str_value().as_bytes().to_vec();
        (bytes, scanner.teardown().kinds())
    }

    #[test]
    fn simple_escapes() {
        assert_eq!( scan_str(r#""\0\a\b\t\n\v\f\r\e""#).0, b"\x00\x07\x08\x09\x0A\x0B\x0C\x0D\x1B" );
        assert_eq!( scan_str(r#""\"\'\\""#).0,             b"\"'\\" );
    }

    #[test]
    fn hex_escapes() {
        assert_eq!( scan_str(r#""\x41\x7g""#).0, b"A\x07g" );
    }

    #[test]
    fn hex_escape_without_digits() {
        let (bytes, errors) = scan_str(r#""\xg""#);

        assert_eq!( bytes,  b"\\xg" );
        assert_eq!( errors, vec![ErrorKind::InvalidCharacter] );
    }

    #[test]
    fn unknown_escape_kept_verbatim() {
        let (bytes, errors) = scan_str(r#""a\qb""#);

        assert_eq!( bytes,  b"a\\qb" );
        assert_eq!( errors, vec![ErrorKind::InvalidCharacter] );
    }

    #[test]
    fn escapes_disabled() {
        let mut config = Config::default();
        config.features.string_escapes = false;

        let mut scanner = Scanner::with_data(config, "t.s", r#""a\nb""#);

        assert_eq!( scanner.next_raw_token(), Token::StrCon );
        assert_eq!( scanner.str_value(), r"a\nb" );
    }
}
