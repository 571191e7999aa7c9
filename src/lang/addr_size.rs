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

//! Address size specifiers.

use std::fmt::{self, Display, Formatter};

use crate::lang::lexer::Scanner;
use crate::lang::token::Token;
use crate::message::ErrorKind;

/// Address sizes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum AddrSize {
    /// No explicit size; the assembler infers one.
    #[default]
    Default = 0,

    /// 8-bit zero page (direct page) address.
    Zp = 1,

    /// 16-bit absolute address.
    Abs = 2,

    /// 24-bit far address.
    Far = 3,

    /// 32-bit address.
    Long = 4,
}

impl AddrSize {
    /// Returns the size in bytes of an address of this size, or `0` for
    /// [`AddrSize::Default`].
    pub const fn bytes(self) -> u8 {
        self as u8
    }

    /// Returns the canonical name of the size.
    pub const fn name(self) -> &'static str {
        match self {
            AddrSize::Default => "default",
            AddrSize::Zp      => "zeropage",
            AddrSize::Abs     => "absolute",
            AddrSize::Far     => "far",
            AddrSize::Long    => "long",
        }
    }
}

impl Display for AddrSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address size keywords, sorted, upper case.  Indexes match
/// [`ADDR_SIZE_VALUES`].
pub const ADDR_SIZE_KEYS: [&str; 9] = [
    "ABS",
    "ABSOLUTE",
    "DIRECT",
    "DWORD",
    "FAR",
    "LONG",
    "NEAR",
    "ZEROPAGE",
    "ZP",
];

/// Address sizes named by [`ADDR_SIZE_KEYS`].
pub const ADDR_SIZE_VALUES: [AddrSize; 9] = {
    use AddrSize::*;
    [Abs, Abs, Zp, Long, Far, Far, Abs, Zp, Zp]
};

impl Scanner<'_> {
    /// Interprets the current token as an address size specifier.
    ///
    /// Accepts the override prefixes `z:`, `a:`, `f:` and the keywords of
    /// [`ADDR_SIZE_KEYS`] in any case.  Anything else is reported and yields
    /// [`AddrSize::Default`].  The current token is not consumed.
    pub fn parse_addr_size(&mut self) -> AddrSize {
        let size = match self.token() {
            Token::OverrideZp  => Some(AddrSize::Zp),
            Token::OverrideAbs => Some(AddrSize::Abs),
            Token::OverrideFar => Some(AddrSize::Far),
            _ => self.find_subkey(&ADDR_SIZE_KEYS).map(|i| ADDR_SIZE_VALUES[i]),
        };

        size.unwrap_or_else(|| {
            self.error_here(ErrorKind::InvalidAddressSize, "address size specifier expected");
            AddrSize::Default
        })
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::config::Config;
    use super::*;

    fn parse(text: &str) -> (AddrSize, Vec<ErrorKind>) {
        let mut scanner = Scanner::with_data(Config::default(), "test.s", text);
        scanner.next_raw_token();
        let size = scanner.parse_addr_size();
        (size, scanner.teardown().kinds())
    }

    #[test]
    fn keys_sorted() {
        assert!( ADDR_SIZE_KEYS.windows(2).all(|w| w[0] < w[1]) );
    }

    #[rstest]
    #[case("abs",      AddrSize::Abs )]
    #[case("Absolute", AddrSize::Abs )]
    #[case("near",     AddrSize::Abs )]
    #[case("direct",   AddrSize::Zp  )]
    #[case("zp",       AddrSize::Zp  )]
    #[case("ZEROPAGE", AddrSize::Zp  )]
    #[case("far",      AddrSize::Far )]
    #[case("long",     AddrSize::Far )]
    #[case("dword",    AddrSize::Long)]
    fn keywords(#[case] text: &str, #[case] size: AddrSize) {
        assert_eq!( parse(text), (size, vec![]) );
    }

    #[rstest]
    #[case("z:", AddrSize::Zp )]
    #[case("a:", AddrSize::Abs)]
    #[case("f:", AddrSize::Far)]
    fn overrides(#[case] text: &str, #[case] size: AddrSize) {
        assert_eq!( parse(text), (size, vec![]) );
    }

    #[rstest]
    #[case("huge")]
    #[case("42")]
    #[case("\"zp\"")]
    fn invalid(#[case] text: &str) {
        assert_eq!( parse(text), (AddrSize::Default, vec![ErrorKind::InvalidAddressSize]) );
    }

    #[test]
    fn token_not_consumed() {
        let mut scanner = Scanner::with_data(Config::default(), "test.s", "zp 1");

        scanner.next_raw_token();
        scanner.parse_addr_size();

        assert_eq!( scanner.token(),          Token::Ident  );
        assert_eq!( scanner.next_raw_token(), Token::IntCon );
    }

    #[test]
    fn sizes() {
        assert_eq!( AddrSize::Zp.bytes(),   1          );
        assert_eq!( AddrSize::Far.bytes(),  3          );
        assert_eq!( AddrSize::Long.to_string(), "long" );
    }
}
