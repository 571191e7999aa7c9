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

//! Main lexer.

use crate::lang::input::{Frame, LogicalChar};
use crate::num::{digit_value, Base};
use super::*;

// ----------------------------------------------------------------------------

/// Logical characters recognized by the main lexer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    // space, line endings
    Space,      // \s \t \v \f \r
    Lf,         // \n
    Semi,       // ;
    BSlash,     // \
    // identifiers, numbers
    Letter,     // A-Z a-z _
    Digit,      // 0-9
    Dot,        // .
    Dollar,     // $
    Percent,    // %
    // quotes
    DQuote,     // "
    SQuote,     // '
    // operators, possibly of two characters
    Colon,      // :
    Lt,         // <
    Gt,         // >
    Amp,        // &
    Pipe,       // |
    // isolated characters
    Comma,      // ,
    Hash,       // #
    Equal,      // =
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Bang,       // !
    Caret,      // ^
    Tilde,      // ~
    LParen,     // (
    RParen,     // )
    LSquare,    // [
    RSquare,    // ]
    // rare
    Eof,        // end of frame
    Other,      // everything else
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Other;
    const EOF:       Self = Self::Eof;
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Other;
[
//  x0       x1       x2       x3       x4       x5       x6       x7
//  x8       x9       xA       xB       xC       xD       xE       xF
    __,      __,      __,      __,      __,      __,      __,      __,      // 0x │········│
    __,      Space,   Lf,      Space,   Space,   Space,   __,      __,      // 0x │·tnvfr··│
    __,      __,      __,      __,      __,      __,      __,      __,      // 1x │········│
    __,      __,      __,      __,      __,      __,      __,      __,      // 1x │········│
    Space,   Bang,    DQuote,  Hash,    Dollar,  Percent, Amp,     SQuote,  // 2x │ !"#$%&'│
    LParen,  RParen,  Star,    Plus,    Comma,   Minus,   Dot,     Slash,   // 2x │()*+,-./│
    Digit,   Digit,   Digit,   Digit,   Digit,   Digit,   Digit,   Digit,   // 3x │01234567│
    Digit,   Digit,   Colon,   Semi,    Lt,      Equal,   Gt,      __,      // 3x │89:;<=>?│
    __,      Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 4x │@ABCDEFG│
    Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 4x │HIJKLMNO│
    Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 5x │PQRSTUVW│
    Letter,  Letter,  Letter,  LSquare, BSlash,  RSquare, Caret,   Letter,  // 5x │XYZ[\]^_│
    __,      Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 6x │`abcdefg│
    Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 6x │hijklmno│
    Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  Letter,  // 7x │pqrstuvw│
    Letter,  Letter,  Letter,  __,      Pipe,    __,      Tilde,   __,      // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

impl<'a> Scanner<'a> {
    /// Advances to the next token and returns it.
    pub fn next_raw_token(&mut self) -> Token {
        let token  = self.scan_main();
        self.token = token;
        token
    }

    fn scan_main(&mut self) -> Token {
        self.ws   = false;
        self.attr = Attr::None;

        loop {
            if self.forced_end {
                self.pos = self.input.pos();
                return Token::Eof;
            }

            let (kind, byte) = self.input.classify(&CHARS);

            if kind != Char::Eof && byte == self.config.local_char() {
                self.pos = self.input.pos();
                match self.scan_local() {
                    Some(token) => return token,
                    None        => continue,
                }
            }

            match kind {
                Char::Space => {
                    self.input.bump();
                    self.ws = true;
                },
                Char::Semi => {
                    self.skip_comment();
                    self.ws = true;
                },
                Char::BSlash if self.config.features.line_cont => {
                    self.skip_line_cont();
                    self.ws = true;
                },
                Char::Lf => {
                    self.pos = self.input.pos();
                    self.input.bump();

                    // Blank lines yield no separators.
                    if self.token == Token::Sep || self.token == Token::None {
                        self.ws = true;
                        continue;
                    }
                    return Token::Sep;
                },
                Char::Eof => {
                    if let Some(token) = self.scan_end() {
                        return token;
                    }
                },
                _ => {
                    self.pos = self.input.pos();
                    if let Some(token) = self.scan_token(kind, byte) {
                        return token;
                    }
                },
            }
        }
    }

    /// Handles the end of the current frame.  Returns `None` if scanning
    /// should continue in the uncovered frame.
    fn scan_end(&mut self) -> Option<Token> {
        self.pos = self.input.pos();

        if let Some(err) = self.input.take_error() {
            let pos = self.pos.clone();
            self.fatal(err, pos);
            return Some(Token::Eof);
        }

        if self.input.depth() <= 1 {
            return Some(Token::Eof);
        }

        let was_file = self.input.current().map_or(false, Frame::is_file);
        self.input.pop();

        // An included file ends its last line even without a newline.
        if was_file && self.token != Token::Sep && self.token != Token::None {
            return Some(Token::Sep);
        }

        None
    }

    /// Scans a token that begins with something other than whitespace.
    /// Returns `None` if the token was invalid and scanning should continue.
    fn scan_token(&mut self, kind: Char, byte: u8) -> Option<Token> {
        use Char as C;
        use Token as T;

        let token = match kind {
            C::Letter  => return Some(self.scan_ident()),
            C::Digit   => return Some(self.scan_dec()),
            C::Dot     => return self.scan_dot(),
            C::Dollar  => return self.scan_dollar(),
            C::Percent => return Some(self.scan_percent()),
            C::DQuote  => return Some(self.scan_str()),
            C::SQuote  => return Some(self.scan_char()),
            C::Colon   => return Some(self.scan_colon()),
            C::Lt      => return Some(self.scan_pair(T::Lt,  &[(b'=', T::Le), (b'>', T::Ne), (b'<', T::Shl)])),
            C::Gt      => return Some(self.scan_pair(T::Gt,  &[(b'=', T::Ge), (b'>', T::Shr)])),
            C::Amp     => return Some(self.scan_pair(T::And, &[(b'&', T::BoolAnd)])),
            C::Pipe    => return Some(self.scan_pair(T::Or,  &[(b'|', T::BoolOr)])),
            C::Comma   => T::Comma,
            C::Hash    => T::Hash,
            C::Equal   => T::Eq,
            C::Plus    => T::Plus,
            C::Minus   => T::Minus,
            C::Star    => T::Mul,
            C::Slash   => T::Div,
            C::Bang    => T::Mod,
            C::Caret   => T::Xor,
            C::Tilde   => T::Not,
            C::LParen  => T::LParen,
            C::RParen  => T::RParen,
            C::LSquare => T::LBrack,
            C::RSquare => T::RBrack,
            _          => {
                self.input.bump();
                self.error_here(ErrorKind::InvalidCharacter, invalid_char_message(byte));
                return None;
            },
        };

        self.input.bump();
        Some(token)
    }

    /// Scans a one-character operator that may be followed by a second
    /// character forming a longer operator.
    fn scan_pair(&mut self, single: Token, pairs: &[(u8, Token)]) -> Token {
        self.input.bump();

        let next = self.input.peek();

        for &(byte, token) in pairs {
            if next == Some(byte) {
                self.input.bump();
                return token;
            }
        }

        single
    }

    /// Scans `:`, `::`, `:=`, or an unnamed label reference like `:++`.
    fn scan_colon(&mut self) -> Token {
        self.input.bump();

        match self.input.peek() {
            Some(b':') => { self.input.bump(); Token::Namespace },
            Some(b'=') => { self.input.bump(); Token::Assign    },
            Some(sign @ (b'+' | b'-')) => {
                let mut count = 0i64;
                while self.input.peek() == Some(sign) {
                    self.input.bump();
                    count += 1;
                }
                self.attr = Attr::Int(if sign == b'+' { count } else { -count });
                Token::ULabel
            },
            _ => Token::Colon,
        }
    }

    /// Scans a hexadecimal number introduced by `$`, or a lone `$`.
    fn scan_dollar(&mut self) -> Option<Token> {
        self.input.bump();

        if self.input.peek().and_then(digit_value).is_some() {
            return Some(self.scan_num(Base::Hex));
        }

        if self.config.features.dollar_is_pc {
            return Some(Token::Pc);
        }

        self.error_here(ErrorKind::InvalidCharacter, invalid_char_message(b'$'));
        None
    }

    /// Scans a binary number introduced by `%`, or the `%` operator.
    fn scan_percent(&mut self) -> Token {
        self.input.bump();

        match self.input.peek() {
            Some(b'0' | b'1') => self.scan_num(Base::Bin),
            _                 => Token::Mod,
        }
    }

    /// Skips a comment up to, but not including, the end of the line.
    fn skip_comment(&mut self) {
        while let Some(byte) = self.input.peek() {
            if byte == b'\n' {
                break;
            }
            self.input.bump();
        }
    }

    /// Skips a `\` that joins the current line with the next.
    fn skip_line_cont(&mut self) {
        let pos = self.input.pos();
        self.input.bump();

        let cr = self.input.peek() == Some(b'\r');
        if cr {
            self.input.bump();
        }

        match self.input.peek() {
            Some(b'\n') => self.input.bump(),
            _ if cr     => (),
            _           => self.error(ErrorKind::InvalidCharacter, pos, invalid_char_message(b'\\')),
        }
    }
}

/// Returns the message for an unexpected input byte.
fn invalid_char_message(byte: u8) -> String {
    match byte {
        0x21..=0x7E => format!("invalid input character '{}'", byte as char),
        _           => format!("invalid input character 0x{:02X}", byte),
    }
}
