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

//! Assembler messages.

use std::fmt::{self, Display, Formatter};
use std::slice;

use colored::{ColoredString, Colorize};

use crate::util::FilePos;

// ----------------------------------------------------------------------------

/// An assembler message.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    /// Severity of the message.
    pub severity: Severity,

    /// Classification of the problem reported by the message.
    pub kind: ErrorKind,

    /// Source position related to the message.
    pub pos: FilePos,

    /// Message content.
    pub text: String,
}

impl Message {
    /// Creates a `Message` of the given kind, with the kind's default
    /// severity, related to the given source position.
    pub fn new(kind: ErrorKind, pos: FilePos, text: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            pos,
            text: text.into(),
        }
    }

    /// Returns the message formatted for a terminal, with the severity in
    /// colour.
    pub fn painted(&self) -> String {
        format!("{}: {}{}", self.pos, self.severity.painted(), self.text)
    }
}

// Display is used when a Message is printed as output.
impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}{}", self.pos, self.severity, self.text)
    }
}

// ----------------------------------------------------------------------------

/// Message severity levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    /// For informational messages.
    Normal,

    /// For potential problems that do not prevent complete assembly.
    /// Assembly continues, and the assembler will produce output.
    Warning,

    /// For problems that prevent complete assembly.
    /// Scanning continues so that further problems can be reported.
    Error,

    /// For severe, unrecoverable problems.
    /// The scanner stops reading input as if it had reached the end.
    Fatal,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Normal  => "",
            Severity::Warning => "warning: ",
            Severity::Error   => "error: ",
            Severity::Fatal   => "fatal: ",
        }
    }

    /// Returns the severity label in colour.
    pub fn painted(self) -> ColoredString {
        let label = self.label();
        match self {
            Severity::Normal  => label.normal(),
            Severity::Warning => label.yellow().bold(),
            Severity::Error   => label.red().bold(),
            Severity::Fatal   => label.bright_red().bold(),
        }
    }
}

// Display is used when a Severity is printed in an assembler message.
impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ----------------------------------------------------------------------------

/// Kinds of problems reported by the scanner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// A source cannot be opened or read.
    IoError,

    /// Too many input sources are nested.
    NestingTooDeep,

    /// A character that cannot begin any token, or an unknown escape.
    InvalidCharacter,

    /// A line or source ends inside a quoted literal.
    UnterminatedLiteral,

    /// A string or identifier exceeds the maximum length.
    LiteralTooLong,

    /// An integer literal exceeds the representable range.
    IntegerOverflow,

    /// An address size was expected but not found.
    InvalidAddressSize,

    /// A `.name` that is not a known directive.
    InvalidDirective,

    /// A digit that is not valid in the base of its number.
    InvalidNumber,

    /// A character constant that does not hold exactly one character.
    InvalidCharConstant,
}

impl ErrorKind {
    /// Returns the severity with which problems of this kind are reported.
    pub fn severity(self) -> Severity {
        match self {
            ErrorKind::IoError | ErrorKind::NestingTooDeep => Severity::Fatal,
            _                                              => Severity::Error,
        }
    }
}

// ----------------------------------------------------------------------------

/// Ordered collection of the messages reported during a scan.
#[derive(Clone, Default, Debug)]
pub struct Diagnostics {
    messages: Vec<Message>,
    errors:   usize,
    echo:     bool,
}

impl Diagnostics {
    /// Creates an empty collection.  If `echo` is true, each message is also
    /// written to standard error as it is reported.
    pub fn new(echo: bool) -> Self {
        Self { messages: vec![], errors: 0, echo }
    }

    /// Records a message of the given kind at the given position.
    pub fn report(&mut self, kind: ErrorKind, pos: FilePos, text: impl Into<String>) {
        self.push(Message::new(kind, pos, text))
    }

    /// Records a message.
    pub fn push(&mut self, message: Message) {
        match message.severity {
            Severity::Fatal => tracing::error!(kind = ?message.kind, pos = %message.pos, "{}", message.text),
            Severity::Error => tracing::debug!(kind = ?message.kind, pos = %message.pos, "{}", message.text),
            _               => tracing::trace!(kind = ?message.kind, pos = %message.pos, "{}", message.text),
        }

        if message.severity >= Severity::Error {
            self.errors += 1;
        }

        if self.echo {
            eprintln!("{}", message.painted());
        }

        self.messages.push(message);
    }

    /// Returns the count of messages with severity [`Severity::Error`] or
    /// higher.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Returns whether any fatal message has been reported.
    pub fn has_fatal(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Fatal)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns the kinds of the reported messages, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.messages.iter().map(|m| m.kind).collect()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Message> {
        self.messages
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item     = &'a Message;
    type IntoIter = slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::util::Location;
    use super::*;

    fn pos(line: u32, column: u32) -> FilePos {
        FilePos::new(Rc::from("foo.s"), Location::new(line, column))
    }

    #[test]
    fn message_display() {
        assert_eq!(
            format!("{}", Message::new(ErrorKind::InvalidCharacter, pos(3, 5), "invalid character '`'")),
            "foo.s:3:5: error: invalid character '`'"
        )
    }

    #[test]
    fn message_display_fatal() {
        assert_eq!(
            format!("{}", Message::new(ErrorKind::IoError, pos(0, 0), "file not found")),
            "foo.s: fatal: file not found"
        )
    }

    #[test]
    fn kind_severity() {
        assert_eq!( ErrorKind::IoError         .severity(), Severity::Fatal );
        assert_eq!( ErrorKind::NestingTooDeep  .severity(), Severity::Fatal );
        assert_eq!( ErrorKind::IntegerOverflow .severity(), Severity::Error );
        assert_eq!( ErrorKind::LiteralTooLong  .severity(), Severity::Error );
    }

    #[test]
    fn diagnostics_accumulate_in_order() {
        let mut diags = Diagnostics::new(false);

        diags.report(ErrorKind::InvalidCharacter,    pos(1, 1), "a");
        diags.report(ErrorKind::UnterminatedLiteral, pos(2, 1), "b");
        diags.push(Message { severity: Severity::Warning, ..Message::new(ErrorKind::InvalidNumber, pos(3, 1), "c") });

        assert_eq!( diags.len(),         3 );
        assert_eq!( diags.error_count(), 2 );
        assert!( !diags.has_fatal() );
        assert_eq!(
            diags.kinds(),
            vec![ErrorKind::InvalidCharacter, ErrorKind::UnterminatedLiteral, ErrorKind::InvalidNumber]
        );
    }

    #[test]
    fn diagnostics_fatal() {
        let mut diags = Diagnostics::new(false);

        diags.report(ErrorKind::NestingTooDeep, pos(9, 1), "too deep");

        assert!( diags.has_fatal() );
        assert_eq!( diags.error_count(), 1 );
    }
}
