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

//! Identifier sublexer.

use crate::cpu::is_mnemonic;
use crate::lang::input::LogicalChar;
use crate::lang::keyword::{lookup_dot, lookup_override, lookup_register};
use super::*;

// ----------------------------------------------------------------------------

/// Logical characters recognized by the identifier sublexer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    Start,  // A-Z a-z _
    Digit,  // 0-9
    At,     // @
    Dollar, // $
    Other,
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Other;
    const EOF:       Self = Self::Other;
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Other;
[
//  x0      x1      x2      x3      x4      x5      x6      x7
//  x8      x9      xA      xB      xC      xD      xE      xF
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │·tnvfr··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     Dollar, __,     __,     __,     // 2x │ !"#$%&'│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │()*+,-./│
    Digit,  Digit,  Digit,  Digit,  Digit,  Digit,  Digit,  Digit,  // 3x │01234567│
    Digit,  Digit,  __,     __,     __,     __,     __,     __,     // 3x │89:;<=>?│
    At,     Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 4x │@ABCDEFG│
    Start,  Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 4x │HIJKLMNO│
    Start,  Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 5x │PQRSTUVW│
    Start,  Start,  Start,  __,     __,     __,     __,     Start,  // 5x │XYZ[\]^_│
    __,     Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 6x │`abcdefg│
    Start,  Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 6x │hijklmno│
    Start,  Start,  Start,  Start,  Start,  Start,  Start,  Start,  // 7x │pqrstuvw│
    Start,  Start,  Start,  __,     __,     __,     __,     __,     // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

impl<'a> Scanner<'a> {
    /// Scans an identifier, register, address size override, or mnemonic.
    pub(super) fn scan_ident(&mut self) -> Token {
        let mut name = StrVal::new();
        self.read_ident(&mut name);

        // Classification never changes the spelling kept in the attribute.
        let upper = name.to_ascii_uppercase();

        if let &[letter] = upper.as_bytes() {
            if self.input.peek() == Some(b':') {
                if let Some(token) = lookup_override(letter) {
                    self.input.bump();
                    return token;
                }
            }
            if let Some(token) = lookup_register(upper.as_bytes()) {
                return token;
            }
        }

        let token = match is_mnemonic(self.config.cpu, upper.as_bytes()) {
            true  => Token::Mnemo,
            false => Token::Ident,
        };

        self.attr = Attr::Str(name);
        token
    }

    /// Scans a dot keyword, or a lone `.`.  Returns `None` if the keyword is
    /// unknown and reported as an error.
    pub(super) fn scan_dot(&mut self) -> Option<Token> {
        self.input.bump();

        if self.input.classify(&CHARS).0 != Char::Start {
            return Some(Token::Dot);
        }

        let mut name = StrVal::new();
        name.push(b'.');
        self.read_ident(&mut name);

        if let Some(token) = lookup_dot(name.to_ascii_uppercase().as_bytes()) {
            return Some(token);
        }

        if self.config.features.leading_dot_in_identifiers {
            self.attr = Attr::Str(name);
            return Some(Token::Ident);
        }

        self.error_here(ErrorKind::InvalidDirective, format!("unknown directive '{}'", name));
        None
    }

    /// Scans a cheap local label such as `@loop`.  Returns `None` if the local
    /// label character is not followed by a name.
    pub(super) fn scan_local(&mut self) -> Option<Token> {
        let mut name = StrVal::new();
        name.push(self.config.local_char());
        self.input.bump();

        if self.input.classify(&CHARS).0 != Char::Start {
            let message = format!("'{}' must be followed by a label name", self.config.local_char() as char);
            self.error_here(ErrorKind::InvalidCharacter, message);
            return None;
        }

        self.read_ident(&mut name);
        self.attr = Attr::Str(name);
        Some(Token::Ident)
    }

    /// Appends identifier characters to `name` until a non-identifier
    /// character.  Characters beyond the maximum length are dropped and
    /// reported once.
    fn read_ident(&mut self, name: &mut StrVal) {
        use Char::*;

        let at     = self.config.features.at_in_identifiers;
        let dollar = self.config.features.dollar_in_identifiers;

        let mut too_long = false;

        loop {
            let (kind, byte) = self.input.classify(&CHARS);

            let accept = match kind {
                Start | Digit => true,
                At            => at,
                Dollar        => dollar,
                Other         => false,
            };

            if !accept {
                break;
            }

            too_long |= !name.push(byte);
            self.input.bump();
        }

        if too_long {
            self.error_here(ErrorKind::LiteralTooLong, "identifier too long");
        }
    }
}
