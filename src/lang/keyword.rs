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

//! Keyword classification.
//!
//! Keywords are found by binary search of tables sorted in byte order.  All
//! table entries are upper case; callers upcase a working copy of the name
//! before searching.

use crate::lang::token::Token;

// ----------------------------------------------------------------------------

/// Searches the sorted table `keys` for `key`, returning its index.
#[inline]
pub fn search<K: AsRef<[u8]>>(keys: &[K], key: &[u8]) -> Option<usize> {
    keys.binary_search_by(|k| k.as_ref().cmp(key)).ok()
}

/// Looks up a dot keyword.  `name` must include the leading `.` and be upper
/// case.
pub fn lookup_dot(name: &[u8]) -> Option<Token> {
    DOT_KEYWORDS
        .binary_search_by(|(k, _)| k.as_bytes().cmp(name))
        .ok()
        .map(|i| DOT_KEYWORDS[i].1)
}

/// Classifies a single-letter identifier as a register.  `name` must be
/// upper case.
#[inline]
pub fn lookup_register(name: &[u8]) -> Option<Token> {
    match name {
        b"A" => Some(Token::A),
        b"S" => Some(Token::S),
        b"X" => Some(Token::X),
        b"Y" => Some(Token::Y),
        _    => None,
    }
}

/// Classifies the letter of an address-size override prefix such as `z:`.
/// `letter` must be upper case.
#[inline]
pub fn lookup_override(letter: u8) -> Option<Token> {
    match letter {
        b'A' => Some(Token::OverrideAbs),
        b'F' => Some(Token::OverrideFar),
        b'Z' => Some(Token::OverrideZp),
        _    => None,
    }
}

// ----------------------------------------------------------------------------

/// Dot keywords: directives, operator keywords, and their aliases.
pub static DOT_KEYWORDS: [(&str, Token); 131] = {
    use Token as T;
[
    (".A16",         T::A16),
    (".A8",          T::A8),
    (".ADDR",        T::Addr),
    (".ALIGN",       T::Align),
    (".AND",         T::BoolAnd),
    (".ASCIIZ",      T::Asciiz),
    (".ASSERT",      T::Assert),
    (".AUTOIMPORT",  T::Autoimport),
    (".BITAND",      T::And),
    (".BITNOT",      T::Not),
    (".BITOR",       T::Or),
    (".BITXOR",      T::Xor),
    (".BLANK",       T::Blank),
    (".BSS",         T::Bss),
    (".BYT",         T::Byte),
    (".BYTE",        T::Byte),
    (".CASE",        T::Case),
    (".CHARMAP",     T::Charmap),
    (".CODE",        T::Code),
    (".CONCAT",      T::Concat),
    (".CONDES",      T::Condes),
    (".CONST",       T::Const),
    (".CONSTRUCTOR", T::Constructor),
    (".CPU",         T::Cpu),
    (".DATA",        T::Data),
    (".DBG",         T::Dbg),
    (".DBYT",        T::Dbyt),
    (".DEBUGINFO",   T::Debuginfo),
    (".DEF",         T::Defined),
    (".DEFINE",      T::Define),
    (".DEFINED",     T::Defined),
    (".DESTRUCTOR",  T::Destructor),
    (".DWORD",       T::Dword),
    (".ELSE",        T::Else),
    (".ELSEIF",      T::Elseif),
    (".END",         T::End),
    (".ENDIF",       T::Endif),
    (".ENDMAC",      T::Endmacro),
    (".ENDMACRO",    T::Endmacro),
    (".ENDPROC",     T::Endproc),
    (".ENDREP",      T::Endrep),
    (".ENDREPEAT",   T::Endrep),
    (".ENDSCOPE",    T::Endscope),
    (".ENDSTRUCT",   T::Endstruct),
    (".ERROR",       T::Error),
    (".EXITMAC",     T::Exitmacro),
    (".EXITMACRO",   T::Exitmacro),
    (".EXPORT",      T::Export),
    (".EXPORTZP",    T::Exportzp),
    (".FARADDR",     T::Faraddr),
    (".FEATURE",     T::Feature),
    (".FILEOPT",     T::Fileopt),
    (".FOPT",        T::Fileopt),
    (".FORCEIMPORT", T::Forceimport),
    (".FORCEWORD",   T::Forceword),
    (".GLOBAL",      T::Global),
    (".GLOBALZP",    T::Globalzp),
    (".I16",         T::I16),
    (".I8",          T::I8),
    (".IF",          T::If),
    (".IFBLANK",     T::Ifblank),
    (".IFCONST",     T::Ifconst),
    (".IFDEF",       T::Ifdef),
    (".IFNBLANK",    T::Ifnblank),
    (".IFNCONST",    T::Ifnconst),
    (".IFNDEF",      T::Ifndef),
    (".IFNREF",      T::Ifnref),
    (".IFP02",       T::Ifp02),
    (".IFP816",      T::Ifp816),
    (".IFPC02",      T::Ifpc02),
    (".IFPSC02",     T::Ifpsc02),
    (".IFREF",       T::Ifref),
    (".IMPORT",      T::Import),
    (".IMPORTZP",    T::Importzp),
    (".INCBIN",      T::Incbin),
    (".INCLUDE",     T::Include),
    (".LEFT",        T::Left),
    (".LINECONT",    T::Linecont),
    (".LIST",        T::List),
    (".LISTBYTES",   T::Listbytes),
    (".LOCAL",       T::Local),
    (".LOCALCHAR",   T::Localchar),
    (".MAC",         T::Macro),
    (".MACPACK",     T::Macpack),
    (".MACRO",       T::Macro),
    (".MATCH",       T::Match),
    (".MID",         T::Mid),
    (".MOD",         T::Mod),
    (".NOT",         T::BoolNot),
    (".NULL",        T::Null),
    (".OR",          T::BoolOr),
    (".ORG",         T::Org),
    (".OUT",         T::Out),
    (".P02",         T::P02),
    (".P816",        T::P816),
    (".PAGELEN",     T::Pagelength),
    (".PAGELENGTH",  T::Pagelength),
    (".PARAMCOUNT",  T::Paramcount),
    (".PC02",        T::Pc02),
    (".POPSEG",      T::Popseg),
    (".PROC",        T::Proc),
    (".PSC02",       T::Psc02),
    (".PUSHSEG",     T::Pushseg),
    (".REF",         T::Referenced),
    (".REFERENCED",  T::Referenced),
    (".RELOC",       T::Reloc),
    (".REPEAT",      T::Repeat),
    (".RES",         T::Res),
    (".RIGHT",       T::Right),
    (".RODATA",      T::Rodata),
    (".SCOPE",       T::Scope),
    (".SEGMENT",     T::Segment),
    (".SETCPU",      T::Setcpu),
    (".SHL",         T::Shl),
    (".SHR",         T::Shr),
    (".SMART",       T::Smart),
    (".STRAT",       T::Strat),
    (".STRING",      T::String),
    (".STRLEN",      T::Strlen),
    (".STRUCT",      T::Struct),
    (".SUNPLUS",     T::Sunplus),
    (".TAG",         T::Tag),
    (".TCOUNT",      T::Tcount),
    (".TIME",        T::Time),
    (".UNION",       T::Union),
    (".VERSION",     T::Version),
    (".WARNING",     T::Warning),
    (".WORD",        T::Word),
    (".XMATCH",      T::Xmatch),
    (".XOR",         T::BoolXor),
    (".ZEROPAGE",    T::Zeropage),
]};

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn dot_keywords_sorted() {
        assert!( DOT_KEYWORDS.windows(2).all(|w| w[0].0 < w[1].0) );
    }

    #[test]
    fn dot_keywords_upper_case() {
        for (name, _) in DOT_KEYWORDS {
            assert!( name.starts_with('.') );
            assert_eq!( name.to_ascii_uppercase(), name );
        }
    }

    #[test]
    fn every_directive_has_its_name() {
        for token in Token::ALL.into_iter().filter(|t| t.is_pseudo()) {
            assert_eq!( lookup_dot(token.name().as_bytes()), Some(token) );
        }
    }

    #[rstest]
    #[case(".AND",       Token::BoolAnd)]
    #[case(".OR",        Token::BoolOr)]
    #[case(".XOR",       Token::BoolXor)]
    #[case(".NOT",       Token::BoolNot)]
    #[case(".MOD",       Token::Mod)]
    #[case(".BITAND",    Token::And)]
    #[case(".BITOR",     Token::Or)]
    #[case(".BITXOR",    Token::Xor)]
    #[case(".BITNOT",    Token::Not)]
    #[case(".SHL",       Token::Shl)]
    #[case(".SHR",       Token::Shr)]
    #[case(".BYT",       Token::Byte)]
    #[case(".MAC",       Token::Macro)]
    #[case(".ENDMAC",    Token::Endmacro)]
    #[case(".ENDREPEAT", Token::Endrep)]
    #[case(".EXITMAC",   Token::Exitmacro)]
    #[case(".FOPT",      Token::Fileopt)]
    #[case(".PAGELEN",   Token::Pagelength)]
    #[case(".REF",       Token::Referenced)]
    #[case(".DEF",       Token::Defined)]
    fn aliases(#[case] name: &str, #[case] token: Token) {
        assert_eq!( lookup_dot(name.as_bytes()), Some(token) );
    }

    #[rstest]
    #[case(".align")]
    #[case(".NOPE")]
    #[case("ALIGN")]
    #[case(".")]
    fn not_found(#[case] name: &str) {
        assert_eq!( lookup_dot(name.as_bytes()), None );
    }

    #[test]
    fn search_sorted_table() {
        let keys = ["ABS", "FAR", "ZP"];

        assert_eq!( search(&keys, b"ABS"), Some(0) );
        assert_eq!( search(&keys, b"ZP"),  Some(2) );
        assert_eq!( search(&keys, b"zp"),  None    );
        assert_eq!( search(&keys, b"LONG"), None   );
    }

    #[test]
    fn registers() {
        assert_eq!( lookup_register(b"A"),  Some(Token::A) );
        assert_eq!( lookup_register(b"S"),  Some(Token::S) );
        assert_eq!( lookup_register(b"X"),  Some(Token::X) );
        assert_eq!( lookup_register(b"Y"),  Some(Token::Y) );
        assert_eq!( lookup_register(b"B"),  None           );
        assert_eq!( lookup_register(b"AX"), None           );
    }
}
