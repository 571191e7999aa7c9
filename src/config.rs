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

//! Scanner configuration.
//!
//! A [`Config`] holds every option that changes how source text is scanned.
//! The defaults match a plain 6502 assembly with escapes enabled in quoted
//! literals.  Directive handlers (`.FEATURE`, `.SETCPU`, `.LOCALCHAR`) and the
//! command line modify the configuration through [`Feature`] and [`Cpu`].

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::lang::keyword::search;

// ----------------------------------------------------------------------------

/// Scanner configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Target processor.  Selects the mnemonic table.
    pub cpu: Cpu,

    /// Optional syntax features.
    pub features: Features,

    /// Character that introduces a cheap local label.  Either `@` or `?`.
    local_char: u8,

    /// Whether diagnostics are echoed to standard error as they are reported.
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cpu:        Cpu::default(),
            features:   Features::default(),
            local_char: b'@',
            echo:       false,
        }
    }
}

impl Config {
    /// Characters accepted as the cheap local label prefix.
    pub const LOCAL_CHARS: [char; 2] = ['@', '?'];

    /// Returns the character that introduces a cheap local label.
    #[inline]
    pub fn local_char(&self) -> u8 {
        self.local_char
    }

    /// Sets the character that introduces a cheap local label.  Only the
    /// characters of [`Self::LOCAL_CHARS`] are accepted; any other would
    /// shadow a token such as `.`, `$`, or `"`.
    pub fn set_local_char(&mut self, c: char) -> Result<(), InvalidLocalChar> {
        if !Self::LOCAL_CHARS.contains(&c) {
            return Err(InvalidLocalChar(c));
        }
        self.local_char = c as u8;
        Ok(())
    }
}

/// Error returned for a cheap local label prefix other than `@` or `?`.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("invalid local label character '{0}' (expected '@' or '?')")]
pub struct InvalidLocalChar(pub char);

// ----------------------------------------------------------------------------

/// Optional syntax features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    /// A lone `$` is the program counter.
    pub dollar_is_pc: bool,

    /// `@` is allowed within identifiers.
    pub at_in_identifiers: bool,

    /// `$` is allowed within identifiers.
    pub dollar_in_identifiers: bool,

    /// Unknown `.name` words are identifiers rather than errors.
    pub leading_dot_in_identifiers: bool,

    /// Single-quoted literals of several characters are strings.
    pub loose_string_term: bool,

    /// `_` is ignored between the digits of a number.
    pub underline_in_numbers: bool,

    /// Backslash escapes are decoded in quoted literals.
    pub string_escapes: bool,

    /// A `\` at the end of a line joins it with the next.
    pub line_cont: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            dollar_is_pc:               false,
            at_in_identifiers:          false,
            dollar_in_identifiers:      false,
            leading_dot_in_identifiers: false,
            loose_string_term:          false,
            underline_in_numbers:       false,
            string_escapes:             true,
            line_cont:                  false,
        }
    }
}

impl Features {
    /// Enables or disables the given feature.
    pub fn set(&mut self, feature: Feature, on: bool) {
        use Feature::*;

        let flag = match feature {
            AtInIdentifiers         => &mut self.at_in_identifiers,
            DollarInIdentifiers     => &mut self.dollar_in_identifiers,
            DollarIsPc              => &mut self.dollar_is_pc,
            LeadingDotInIdentifiers => &mut self.leading_dot_in_identifiers,
            LineCont                => &mut self.line_cont,
            LooseStringTerm         => &mut self.loose_string_term,
            StringEscapes           => &mut self.string_escapes,
            UnderlineInNumbers      => &mut self.underline_in_numbers,
        };

        *flag = on;
    }

    /// Returns whether the given feature is enabled.
    pub fn get(&self, feature: Feature) -> bool {
        use Feature::*;

        match feature {
            AtInIdentifiers         => self.at_in_identifiers,
            DollarInIdentifiers     => self.dollar_in_identifiers,
            DollarIsPc              => self.dollar_is_pc,
            LeadingDotInIdentifiers => self.leading_dot_in_identifiers,
            LineCont                => self.line_cont,
            LooseStringTerm         => self.loose_string_term,
            StringEscapes           => self.string_escapes,
            UnderlineInNumbers      => self.underline_in_numbers,
        }
    }
}

// ----------------------------------------------------------------------------

/// Named syntax features, as accepted by `.FEATURE` and `--feature`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Feature {
    AtInIdentifiers,
    DollarInIdentifiers,
    DollarIsPc,
    LeadingDotInIdentifiers,
    LineCont,
    LooseStringTerm,
    StringEscapes,
    UnderlineInNumbers,
}

impl Feature {
    /// Feature names, sorted, upper case.  Indexes match [`Self::ALL`].
    pub const NAMES: [&'static str; 8] = [
        "AT_IN_IDENTIFIERS",
        "DOLLAR_IN_IDENTIFIERS",
        "DOLLAR_IS_PC",
        "LEADING_DOT_IN_IDENTIFIERS",
        "LINE_CONT",
        "LOOSE_STRING_TERM",
        "STRING_ESCAPES",
        "UNDERLINE_IN_NUMBERS",
    ];

    /// All features, in name order.
    pub const ALL: [Feature; 8] = {
        use Feature::*;
        [
            AtInIdentifiers,
            DollarInIdentifiers,
            DollarIsPc,
            LeadingDotInIdentifiers,
            LineCont,
            LooseStringTerm,
            StringEscapes,
            UnderlineInNumbers,
        ]
    };

    /// Looks up a feature by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_uppercase();
        search(&Self::NAMES, name.as_bytes()).map(|i| Self::ALL[i])
    }

    /// Returns the canonical (lower case) name of the feature.
    pub fn name(self) -> String {
        Self::NAMES[self as usize].to_ascii_lowercase()
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.name())
    }
}

// ----------------------------------------------------------------------------

/// Target processors.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Cpu {
    /// MOS 6502.
    #[default]
    Mos6502,

    /// GTE/Rockwell 65SC02.
    Wdc65sc02,

    /// WDC 65C02 with the Rockwell bit instructions.
    Wdc65c02,

    /// WDC 65816.
    Wdc65816,
}

impl Cpu {
    /// Processor names, sorted, upper case.  Indexes match [`Self::ALL`].
    pub const NAMES: [&'static str; 4] = ["6502", "65816", "65C02", "65SC02"];

    /// All processors, in name order.
    pub const ALL: [Cpu; 4] = [Cpu::Mos6502, Cpu::Wdc65816, Cpu::Wdc65c02, Cpu::Wdc65sc02];

    /// Looks up a processor by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_uppercase();
        search(&Self::NAMES, name.as_bytes()).map(|i| Self::ALL[i])
    }

    /// Returns the name of the processor.
    pub fn name(self) -> &'static str {
        match self {
            Cpu::Mos6502   => "6502",
            Cpu::Wdc65sc02 => "65SC02",
            Cpu::Wdc65c02  => "65C02",
            Cpu::Wdc65816  => "65816",
        }
    }
}

impl Display for Cpu {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = Config::default();

        assert_eq!( config.cpu,        Cpu::Mos6502 );
        assert_eq!( config.local_char(), b'@'       );
        assert!( config.features.string_escapes );
        assert!(!config.features.dollar_is_pc   );
    }

    #[test]
    fn local_char_accepted() {
        let mut config = Config::default();

        assert_eq!( config.set_local_char('?'), Ok(()) );
        assert_eq!( config.local_char(),        b'?'   );
        assert_eq!( config.set_local_char('@'), Ok(()) );
        assert_eq!( config.local_char(),        b'@'   );
    }

    #[test]
    fn local_char_rejected() {
        let mut config = Config::default();

        for c in ['.', '$', '"', '\'', '%', ':', 'a', '1', ' ', '\u{E9}'] {
            assert_eq!( config.set_local_char(c), Err(InvalidLocalChar(c)), "{:?}", c );
        }

        assert_eq!( config.local_char(), b'@' );
    }

    #[test]
    fn local_char_error_message() {
        assert_eq!(
            InvalidLocalChar('.').to_string(),
            "invalid local label character '.' (expected '@' or '?')"
        );
    }

    #[test]
    fn feature_names_sorted() {
        assert!( Feature::NAMES.windows(2).all(|w| w[0] < w[1]) );
    }

    #[test]
    fn feature_from_name() {
        assert_eq!( Feature::from_name("dollar_is_pc"),  Some(Feature::DollarIsPc)  );
        assert_eq!( Feature::from_name("Line_Cont"),     Some(Feature::LineCont)    );
        assert_eq!( Feature::from_name("no_such_thing"), None                       );
    }

    #[test]
    fn feature_set_get() {
        let mut features = Features::default();

        for feature in Feature::ALL {
            features.set(feature, true);
            assert!( features.get(feature) );
            features.set(feature, false);
            assert!( !features.get(feature) );
        }
    }

    #[test]
    fn feature_display() {
        assert_eq!( Feature::UnderlineInNumbers.to_string(), "underline_in_numbers" );
    }

    #[test]
    fn cpu_names_sorted() {
        assert!( Cpu::NAMES.windows(2).all(|w| w[0] < w[1]) );
    }

    #[test]
    fn cpu_from_name() {
        assert_eq!( Cpu::from_name("6502"),   Some(Cpu::Mos6502)   );
        assert_eq!( Cpu::from_name("65sc02"), Some(Cpu::Wdc65sc02) );
        assert_eq!( Cpu::from_name("65C02"),  Some(Cpu::Wdc65c02)  );
        assert_eq!( Cpu::from_name("65816"),  Some(Cpu::Wdc65816)  );
        assert_eq!( Cpu::from_name("z80"),    None                 );
    }

    #[test]
    fn cpu_name_round_trip() {
        for cpu in Cpu::ALL {
            assert_eq!( Cpu::from_name(cpu.name()), Some(cpu) );
        }
    }
}
