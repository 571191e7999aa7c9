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

//! Quoted literal sublexer.

use crate::lang::input::LogicalChar;
use super::esc::Esc;
use super::*;

// ----------------------------------------------------------------------------

/// Logical characters recognized by the quoted literal sublexer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    Text,   // other
    BSlash, // \
    End,    // \r \n EOF
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Text;
    const EOF:       Self = Self::End;
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Text;
[
//  x0      x1      x2      x3      x4      x5      x6      x7
//  x8      x9      xA      xB      xC      xD      xE      xF
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │········│
    __,     __,     End,    __,     __,     End,    __,     __,     // 0x │·tnvfr··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │ !"#$%&'│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │()*+,-./│
    __,     __,     __,     __,     __,     __,     __,     __,     // 3x │01234567│
    __,     __,     __,     __,     __,     __,     __,     __,     // 3x │89:;<=>?│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │@ABCDEFG│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │HIJKLMNO│
    __,     __,     __,     __,     __,     __,     __,     __,     // 5x │PQRSTUVW│
    __,     __,     __,     __,     BSlash, __,     __,     __,     // 5x │XYZ[\]^_│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │`abcdefg│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │hijklmno│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │pqrstuvw│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

/// Content of a scanned quoted literal.
struct Quoted {
    text:       StrVal,
    terminated: bool,
}

impl<'a> Scanner<'a> {
    /// Scans a string constant.
    pub(super) fn scan_str(&mut self) -> Token {
        let quoted = self.scan_quoted(b'"');
        self.attr  = Attr::Str(quoted.text);
        Token::StrCon
    }

    /// Scans a character constant.  With the `loose_string_term` feature, a
    /// single-quoted literal of several characters is a string constant.
    pub(super) fn scan_char(&mut self) -> Token {
        let Quoted { text, terminated } = self.scan_quoted(b'\'');

        let byte = text.as_bytes().first().copied().unwrap_or(0);

        match text.len() {
            1 => (),
            0 => if terminated {
                self.error_here(ErrorKind::InvalidCharConstant, "empty character constant");
            },
            _ if self.config.features.loose_string_term => {
                self.attr = Attr::Str(text);
                return Token::StrCon;
            },
            _ => {
                self.error_here(ErrorKind::InvalidCharConstant, "character constant holds more than one character");
            },
        }

        self.attr = Attr::Int(self.charmap.translate(byte) as i64);
        Token::CharCon
    }

    /// Scans a quoted literal ending with `end_byte`, up to the end of the
    /// line.
    fn scan_quoted(&mut self, end_byte: u8) -> Quoted {
        // Consume the beginning quote
        self.input.bump();

        let escapes      = self.config.features.string_escapes;
        let mut text     = StrVal::new();
        let mut too_long = false;

        let terminated = loop {
            let (kind, byte) = self.input.classify(&CHARS);

            match kind {
                Char::Text if byte == end_byte => {
                    // Consume the ending quote
                    self.input.bump();
                    break true;
                },
                Char::Text => {
                    self.input.bump();
                    too_long |= !text.push(byte);
                },
                Char::BSlash if escapes => {
                    self.input.bump();
                    match self.scan_esc() {
                        Esc::Byte(b) => {
                            too_long |= !text.push(b);
                        },
                        Esc::Verbatim(b) => {
                            too_long |= !text.push(b'\\');
                            too_long |= !text.push(b);
                        },
                        Esc::Lone => {
                            too_long |= !text.push(b'\\');
                        },
                    }
                },
                Char::BSlash => {
                    self.input.bump();
                    too_long |= !text.push(byte);
                },
                Char::End => break false,
            }
        };

        if too_long {
            self.error_here(ErrorKind::LiteralTooLong, "string constant too long");
        }

        if !terminated {
            self.error_here(ErrorKind::UnterminatedLiteral, "unterminated string constant");
        }

        Quoted { text, terminated }
    }
}
