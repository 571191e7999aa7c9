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

//! Lexical tokens and token attributes.

use std::fmt::{self, Display, Formatter};

// ----------------------------------------------------------------------------

/// Maximum length in bytes of a string attribute.
pub const MAX_STR_LEN: usize = 255;

// ----------------------------------------------------------------------------

/// Lexical tokens.
///
/// Directive tokens occupy the contiguous range
/// [`Token::FIRST_PSEUDO`]`..=`[`Token::LAST_PSEUDO`], in name order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Token {
    // === Structural ===

    /// No token.  Initial value, never produced by scanning.
    None,

    /// End of input.
    Eof,

    /// Separator: end of a line.
    Sep,


    // === Identifiers & Literals ===

    /// Identifier.
    Ident,

    /// Instruction mnemonic of the selected processor.
    Mnemo,

    /// Integer constant.
    IntCon,

    /// Character constant.
    CharCon,

    /// String constant.
    StrCon,


    // === Registers ===

    /// `A` - accumulator.
    A,

    /// `X` - X index register.
    X,

    /// `Y` - Y index register.
    Y,

    /// `S` - stack pointer.
    S,

    /// `$` - program counter, when enabled.
    Pc,


    // === Operators & Punctuation ===

    /// `:=` - assignment.
    Assign,

    /// `:+`, `:--` ... - unnamed label reference.
    ULabel,

    /// `=` - equality, assignment.
    Eq,

    /// `<>` - inequality.
    Ne,

    /// `<` - less than, low byte.
    Lt,

    /// `>` - greater than, high byte.
    Gt,

    /// `<=` - less than or equal.
    Le,

    /// `>=` - greater than or equal.
    Ge,

    /// `.AND`, `&&` - logical AND.
    BoolAnd,

    /// `.OR`, `||` - logical OR.
    BoolOr,

    /// `.XOR` - logical XOR.
    BoolXor,

    /// `.NOT` - logical NOT.
    BoolNot,

    /// `+` - addition.
    Plus,

    /// `-` - subtraction, negation.
    Minus,

    /// `*` - multiplication, current location.
    Mul,

    /// `/` - division.
    Div,

    /// `!`, `.MOD` - modulo.
    Mod,

    /// `|`, `.BITOR` - bitwise OR.
    Or,

    /// `^`, `.BITXOR` - bitwise XOR, bank byte.
    Xor,

    /// `&`, `.BITAND` - bitwise AND.
    And,

    /// `<<`, `.SHL` - left shift.
    Shl,

    /// `>>`, `.SHR` - right shift.
    Shr,

    /// `~`, `.BITNOT` - bitwise NOT.
    Not,

    /// `::` - scope resolution.
    Namespace,

    /// `.`
    Dot,

    /// `,`
    Comma,

    /// `#` - immediate mode.
    Hash,

    /// `:` - label terminator.
    Colon,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `[`
    LBrack,

    /// `]`
    RBrack,

    /// `z:` - zero page address override.
    OverrideZp,

    /// `a:` - absolute address override.
    OverrideAbs,

    /// `f:` - far address override.
    OverrideFar,


    // === Synthetic ===

    /// Macro parameter.  Inserted by macro expansion, never scanned.
    MacParam,

    /// Repeat counter.  Inserted by repeat expansion, never scanned.
    RepCounter,

    // === Directives ===

    A16,            // .A16
    A8,             // .A8
    Addr,           // .ADDR
    Align,          // .ALIGN
    Asciiz,         // .ASCIIZ
    Assert,         // .ASSERT
    Autoimport,     // .AUTOIMPORT
    Blank,          // .BLANK
    Bss,            // .BSS
    Byte,           // .BYTE
    Case,           // .CASE
    Charmap,        // .CHARMAP
    Code,           // .CODE
    Concat,         // .CONCAT
    Condes,         // .CONDES
    Const,          // .CONST
    Constructor,    // .CONSTRUCTOR
    Cpu,            // .CPU
    Data,           // .DATA
    Dbg,            // .DBG
    Dbyt,           // .DBYT
    Debuginfo,      // .DEBUGINFO
    Define,         // .DEFINE
    Defined,        // .DEFINED
    Destructor,     // .DESTRUCTOR
    Dword,          // .DWORD
    Else,           // .ELSE
    Elseif,         // .ELSEIF
    End,            // .END
    Endif,          // .ENDIF
    Endmacro,       // .ENDMACRO
    Endproc,        // .ENDPROC
    Endrep,         // .ENDREP
    Endscope,       // .ENDSCOPE
    Endstruct,      // .ENDSTRUCT
    Error,          // .ERROR
    Exitmacro,      // .EXITMACRO
    Export,         // .EXPORT
    Exportzp,       // .EXPORTZP
    Faraddr,        // .FARADDR
    Feature,        // .FEATURE
    Fileopt,        // .FILEOPT
    Forceimport,    // .FORCEIMPORT
    Forceword,      // .FORCEWORD
    Global,         // .GLOBAL
    Globalzp,       // .GLOBALZP
    I16,            // .I16
    I8,             // .I8
    If,             // .IF
    Ifblank,        // .IFBLANK
    Ifconst,        // .IFCONST
    Ifdef,          // .IFDEF
    Ifnblank,       // .IFNBLANK
    Ifnconst,       // .IFNCONST
    Ifndef,         // .IFNDEF
    Ifnref,         // .IFNREF
    Ifp02,          // .IFP02
    Ifp816,         // .IFP816
    Ifpc02,         // .IFPC02
    Ifpsc02,        // .IFPSC02
    Ifref,          // .IFREF
    Import,         // .IMPORT
    Importzp,       // .IMPORTZP
    Incbin,         // .INCBIN
    Include,        // .INCLUDE
    Left,           // .LEFT
    Linecont,       // .LINECONT
    List,           // .LIST
    Listbytes,      // .LISTBYTES
    Local,          // .LOCAL
    Localchar,      // .LOCALCHAR
    Macpack,        // .MACPACK
    Macro,          // .MACRO
    Match,          // .MATCH
    Mid,            // .MID
    Null,           // .NULL
    Org,            // .ORG
    Out,            // .OUT
    P02,            // .P02
    P816,           // .P816
    Pagelength,     // .PAGELENGTH
    Paramcount,     // .PARAMCOUNT
    Pc02,           // .PC02
    Popseg,         // .POPSEG
    Proc,           // .PROC
    Psc02,          // .PSC02
    Pushseg,        // .PUSHSEG
    Referenced,     // .REFERENCED
    Reloc,          // .RELOC
    Repeat,         // .REPEAT
    Res,            // .RES
    Right,          // .RIGHT
    Rodata,         // .RODATA
    Scope,          // .SCOPE
    Segment,        // .SEGMENT
    Setcpu,         // .SETCPU
    Smart,          // .SMART
    Strat,          // .STRAT
    String,         // .STRING
    Strlen,         // .STRLEN
    Struct,         // .STRUCT
    Sunplus,        // .SUNPLUS
    Tag,            // .TAG
    Tcount,         // .TCOUNT
    Time,           // .TIME
    Union,          // .UNION
    Version,        // .VERSION
    Warning,        // .WARNING
    Word,           // .WORD
    Xmatch,         // .XMATCH
    Zeropage,       // .ZEROPAGE
}

impl Token {
    /// First directive token.
    pub const FIRST_PSEUDO: Self = Self::A16;

    /// Last directive token.
    pub const LAST_PSEUDO: Self = Self::Zeropage;

    /// Alias of [`Token::Mul`] when used as the current location.
    pub const STAR: Self = Self::Mul;

    /// Alias of [`Token::Xor`] when used as the bank byte operator.
    pub const BANK: Self = Self::Xor;

    /// Count of tokens.
    pub const COUNT: usize = Self::LAST_PSEUDO as usize + 1;

    /// All tokens, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = {
        use Token as T;
        [
            T::None, T::Eof, T::Sep, T::Ident, T::Mnemo, T::IntCon,
            T::CharCon, T::StrCon, T::A, T::X, T::Y, T::S,
            T::Pc, T::Assign, T::ULabel, T::Eq, T::Ne, T::Lt,
            T::Gt, T::Le, T::Ge, T::BoolAnd, T::BoolOr, T::BoolXor,
            T::BoolNot, T::Plus, T::Minus, T::Mul, T::Div, T::Mod,
            T::Or, T::Xor, T::And, T::Shl, T::Shr, T::Not,
            T::Namespace, T::Dot, T::Comma, T::Hash, T::Colon, T::LParen,
            T::RParen, T::LBrack, T::RBrack, T::OverrideZp, T::OverrideAbs, T::OverrideFar,
            T::MacParam, T::RepCounter, T::A16, T::A8, T::Addr, T::Align,
            T::Asciiz, T::Assert, T::Autoimport, T::Blank, T::Bss, T::Byte,
            T::Case, T::Charmap, T::Code, T::Concat, T::Condes, T::Const,
            T::Constructor, T::Cpu, T::Data, T::Dbg, T::Dbyt, T::Debuginfo,
            T::Define, T::Defined, T::Destructor, T::Dword, T::Else, T::Elseif,
            T::End, T::Endif, T::Endmacro, T::Endproc, T::Endrep, T::Endscope,
            T::Endstruct, T::Error, T::Exitmacro, T::Export, T::Exportzp, T::Faraddr,
            T::Feature, T::Fileopt, T::Forceimport, T::Forceword, T::Global, T::Globalzp,
            T::I16, T::I8, T::If, T::Ifblank, T::Ifconst, T::Ifdef,
            T::Ifnblank, T::Ifnconst, T::Ifndef, T::Ifnref, T::Ifp02, T::Ifp816,
            T::Ifpc02, T::Ifpsc02, T::Ifref, T::Import, T::Importzp, T::Incbin,
            T::Include, T::Left, T::Linecont, T::List, T::Listbytes, T::Local,
            T::Localchar, T::Macpack, T::Macro, T::Match, T::Mid, T::Null,
            T::Org, T::Out, T::P02, T::P816, T::Pagelength, T::Paramcount,
            T::Pc02, T::Popseg, T::Proc, T::Psc02, T::Pushseg, T::Referenced,
            T::Reloc, T::Repeat, T::Res, T::Right, T::Rodata, T::Scope,
            T::Segment, T::Setcpu, T::Smart, T::Strat, T::String, T::Strlen,
            T::Struct, T::Sunplus, T::Tag, T::Tcount, T::Time, T::Union,
            T::Version, T::Warning, T::Word, T::Xmatch, T::Zeropage,
        ]
    };

    /// Returns whether the token is a directive.
    #[inline]
    pub fn is_pseudo(self) -> bool {
        (Self::FIRST_PSEUDO as u8 ..= Self::LAST_PSEUDO as u8).contains(&(self as u8))
    }

    /// Returns whether the token ends a statement.
    #[inline]
    pub fn is_sep(self) -> bool {
        matches!(self, Self::Sep | Self::Eof)
    }

    /// Returns whether the token is a register name.
    #[inline]
    pub fn is_register(self) -> bool {
        matches!(self, Self::A | Self::X | Self::Y | Self::S)
    }

    /// Returns whether the token carries an integer attribute.
    #[inline]
    pub fn has_int_attr(self) -> bool {
        use Token as T;
        matches!(self, T::IntCon | T::CharCon | T::ULabel | T::MacParam | T::RepCounter)
    }

    /// Returns whether the token carries a string attribute.
    #[inline]
    pub fn has_str_attr(self) -> bool {
        matches!(self, Self::Ident | Self::Mnemo | Self::StrCon)
    }

    /// Returns the display name of the token.  For a directive, this is the
    /// directive name including the leading dot.
    pub fn name(self) -> &'static str {
        use Token as T;

        if self.is_pseudo() {
            return PSEUDO_NAMES[(self as u8 - Self::FIRST_PSEUDO as u8) as usize];
        }

        match self {
            T::None        => "none",
            T::Eof         => "EOF",
            T::Sep         => "SEP",
            T::Ident       => "ident",
            T::Mnemo       => "mnemo",
            T::IntCon      => "intcon",
            T::CharCon     => "charcon",
            T::StrCon      => "strcon",
            T::A           => "A",
            T::X           => "X",
            T::Y           => "Y",
            T::S           => "S",
            T::Pc          => "$",
            T::Assign      => ":=",
            T::ULabel      => ":+-",
            T::Eq          => "=",
            T::Ne          => "<>",
            T::Lt          => "<",
            T::Gt          => ">",
            T::Le          => "<=",
            T::Ge          => ">=",
            T::BoolAnd     => "&&",
            T::BoolOr      => "||",
            T::BoolXor     => ".XOR",
            T::BoolNot     => ".NOT",
            T::Plus        => "+",
            T::Minus       => "-",
            T::Mul         => "*",
            T::Div         => "/",
            T::Mod         => "!",
            T::Or          => "|",
            T::Xor         => "^",
            T::And         => "&",
            T::Shl         => "<<",
            T::Shr         => ">>",
            T::Not         => "~",
            T::Namespace   => "::",
            T::Dot         => ".",
            T::Comma       => ",",
            T::Hash        => "#",
            T::Colon       => ":",
            T::LParen      => "(",
            T::RParen      => ")",
            T::LBrack      => "[",
            T::RBrack      => "]",
            T::OverrideZp  => "z:",
            T::OverrideAbs => "a:",
            T::OverrideFar => "f:",
            T::MacParam    => "macparam",
            T::RepCounter  => "repcounter",
            _               => "?",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directive names, in token order.
static PSEUDO_NAMES: [&str; 111] = [
    ".A16", ".A8", ".ADDR", ".ALIGN", ".ASCIIZ", ".ASSERT",
    ".AUTOIMPORT", ".BLANK", ".BSS", ".BYTE", ".CASE", ".CHARMAP",
    ".CODE", ".CONCAT", ".CONDES", ".CONST", ".CONSTRUCTOR", ".CPU",
    ".DATA", ".DBG", ".DBYT", ".DEBUGINFO", ".DEFINE", ".DEFINED",
    ".DESTRUCTOR", ".DWORD", ".ELSE", ".ELSEIF", ".END", ".ENDIF",
    ".ENDMACRO", ".ENDPROC", ".ENDREP", ".ENDSCOPE", ".ENDSTRUCT", ".ERROR",
    ".EXITMACRO", ".EXPORT", ".EXPORTZP", ".FARADDR", ".FEATURE", ".FILEOPT",
    ".FORCEIMPORT", ".FORCEWORD", ".GLOBAL", ".GLOBALZP", ".I16", ".I8",
    ".IF", ".IFBLANK", ".IFCONST", ".IFDEF", ".IFNBLANK", ".IFNCONST",
    ".IFNDEF", ".IFNREF", ".IFP02", ".IFP816", ".IFPC02", ".IFPSC02",
    ".IFREF", ".IMPORT", ".IMPORTZP", ".INCBIN", ".INCLUDE", ".LEFT",
    ".LINECONT", ".LIST", ".LISTBYTES", ".LOCAL", ".LOCALCHAR", ".MACPACK",
    ".MACRO", ".MATCH", ".MID", ".NULL", ".ORG", ".OUT",
    ".P02", ".P816", ".PAGELENGTH", ".PARAMCOUNT", ".PC02", ".POPSEG",
    ".PROC", ".PSC02", ".PUSHSEG", ".REFERENCED", ".RELOC", ".REPEAT",
    ".RES", ".RIGHT", ".RODATA", ".SCOPE", ".SEGMENT", ".SETCPU",
    ".SMART", ".STRAT", ".STRING", ".STRLEN", ".STRUCT", ".SUNPLUS",
    ".TAG", ".TCOUNT", ".TIME", ".UNION", ".VERSION", ".WARNING",
    ".WORD", ".XMATCH", ".ZEROPAGE",
];

// ----------------------------------------------------------------------------

/// Attribute of the current token.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum Attr {
    /// No attribute.
    #[default]
    None,

    /// Integer attribute.
    Int(i64),

    /// String attribute.
    Str(StrVal),
}

impl Attr {
    /// Returns the integer attribute, if any.
    #[inline]
    pub fn int(&self) -> Option<i64> {
        match *self {
            Attr::Int(v) => Some(v),
            _            => None,
        }
    }

    /// Returns the string attribute, if any.
    #[inline]
    pub fn str(&self) -> Option<&StrVal> {
        match self {
            Attr::Str(s) => Some(s),
            _            => None,
        }
    }
}

impl Display for Attr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Attr::None   => Ok(()),
            Attr::Int(v) => v.fmt(f),
            Attr::Str(s) => s.fmt(f),
        }
    }
}

// ----------------------------------------------------------------------------

/// The empty string.
pub static EMPTY_STR: StrVal = StrVal { bytes: Vec::new() };

/// A byte string of at most [`MAX_STR_LEN`] bytes.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StrVal {
    bytes: Vec<u8>,
}

impl StrVal {
    #[inline]
    pub fn new() -> Self {
        Self { bytes: Vec::with_capacity(16) }
    }

    /// Creates a string from the given bytes, or returns `None` if there are
    /// more than [`MAX_STR_LEN`] of them.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_STR_LEN {
            return None;
        }
        Some(Self { bytes: bytes.to_vec() })
    }

    /// Appends a byte.  Returns `false` and leaves the string unchanged if it
    /// is already full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes.push(byte);
        true
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= MAX_STR_LEN
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn make_ascii_uppercase(&mut self) {
        self.bytes.make_ascii_uppercase()
    }

    pub fn make_ascii_lowercase(&mut self) {
        self.bytes.make_ascii_lowercase()
    }

    /// Returns an upper-case copy of the string.
    pub fn to_ascii_uppercase(&self) -> Self {
        Self { bytes: self.bytes.to_ascii_uppercase() }
    }
}

impl PartialEq<str> for StrVal {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StrVal {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

// Bytes above 0x7F display as Latin-1.
impl Display for StrVal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s: String = self.bytes.iter().map(|&b| b as char).collect();
        f.pad(&s)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_table() {
        for (i, token) in Token::ALL.iter().enumerate() {
            assert_eq!( *token as usize, i, "{:?}", token );
        }
    }

    #[test]
    fn pseudo_range_is_exactly_directives() {
        for token in Token::ALL {
            assert_eq!( token.is_pseudo(), token > Token::RepCounter, "{:?}", token );
        }

        let count = Token::ALL.iter().filter(|t| t.is_pseudo()).count();

        assert_eq!( count,                    PSEUDO_NAMES.len() );
        assert_eq!( Token::FIRST_PSEUDO.name(), ".A16"           );
        assert_eq!( Token::LAST_PSEUDO .name(), ".ZEROPAGE"      );
    }

    #[test]
    fn pseudo_names_sorted() {
        assert!( PSEUDO_NAMES.windows(2).all(|w| w[0] < w[1]) );
    }

    #[test]
    fn no_token_has_both_attrs() {
        for token in Token::ALL {
            assert!( !(token.has_int_attr() && token.has_str_attr()), "{:?}", token );
        }
    }

    #[test]
    fn attr_kinds() {
        assert!( Token::IntCon  .has_int_attr() );
        assert!( Token::CharCon .has_int_attr() );
        assert!( Token::ULabel  .has_int_attr() );
        assert!( Token::Ident   .has_str_attr() );
        assert!( Token::Mnemo   .has_str_attr() );
        assert!( Token::StrCon  .has_str_attr() );
        assert!( !Token::Align  .has_int_attr() );
        assert!( !Token::Align  .has_str_attr() );
    }

    #[test]
    fn registers() {
        let registers: Vec<Token> = Token::ALL.iter().copied().filter(|t| t.is_register()).collect();

        assert_eq!( registers, vec![Token::A, Token::X, Token::Y, Token::S] );
        assert!( !Token::Pc.is_register() );
    }

    #[test]
    fn separators() {
        assert!(  Token::Sep   .is_sep() );
        assert!(  Token::Eof   .is_sep() );
        assert!( !Token::Colon .is_sep() );
    }

    #[test]
    fn aliases() {
        assert_eq!( Token::STAR, Token::Mul );
        assert_eq!( Token::BANK, Token::Xor );
    }

    #[test]
    fn display() {
        assert_eq!( Token::Align    .to_string(), ".ALIGN"    );
        assert_eq!( Token::A16      .to_string(), ".A16"      );
        assert_eq!( Token::Zeropage .to_string(), ".ZEROPAGE" );
        assert_eq!( Token::Ne       .to_string(), "<>"        );
        assert_eq!( Token::Ident    .to_string(), "ident"     );
    }

    #[test]
    fn str_val_bounded() {
        let mut s = StrVal::new();

        for _ in 0..MAX_STR_LEN {
            assert!( s.push(b'x') );
        }

        assert!( s.is_full() );
        assert!( !s.push(b'x') );
        assert_eq!( s.len(), MAX_STR_LEN );

        assert!( StrVal::from_bytes(&[b'y'; MAX_STR_LEN    ]).is_some() );
        assert!( StrVal::from_bytes(&[b'y'; MAX_STR_LEN + 1]).is_none() );
    }

    #[test]
    fn str_val_case() {
        let mut s = StrVal::from_bytes(b"Lda_1").unwrap();

        assert_eq!( s.to_ascii_uppercase(), "LDA_1" );
        assert_eq!( s, "Lda_1" );

        s.make_ascii_lowercase();
        assert_eq!( s, "lda_1" );

        s.make_ascii_uppercase();
        assert_eq!( s, "LDA_1" );
    }

    #[test]
    fn str_val_display_latin1() {
        let s = StrVal::from_bytes(b"caf\xE9").unwrap();

        assert_eq!( s.to_string(), "caf\u{E9}" );
    }

    #[test]
    fn attr_accessors() {
        assert_eq!( Attr::Int(-2).int(), Some(-2) );
        assert_eq!( Attr::None.int(),    None );
        assert_eq!( Attr::Int(1).str(),  None );
        assert_eq!( Attr::Str(StrVal::from_bytes(b"ab").unwrap()).to_string(), "ab" );
    }
}
