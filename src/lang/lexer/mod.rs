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

//! Lexical analyzer.
//!
//! A [`Scanner`] owns all state of one scanning run: the input frame stack,
//! the current token and its attribute, the configuration, the character map,
//! and the collected diagnostics.  The parser drives it by calling
//! [`Scanner::next_raw_token`] and inspecting the current token.

use std::path::Path;
use std::rc::Rc;

use crate::config::Config;
use crate::error::ScanError;
use crate::lang::charmap::Charmap;
use crate::lang::input::{Buffer, Frame, InputStack};
use crate::lang::keyword::search;
use crate::lang::token::{Attr, StrVal, Token, EMPTY_STR};
use crate::message::{Diagnostics, ErrorKind};
use crate::util::{FilePos, Location};

mod esc;
mod ident;
mod main;
mod num;
mod quoted;


// ----------------------------------------------------------------------------

/// Lexical analyzer.  Reads input frames and yields a stream of tokens.
#[derive(Debug)]
pub struct Scanner<'a> {
    input:      InputStack<'a>,
    token:      Token,
    ws:         bool,
    attr:       Attr,
    pos:        FilePos,
    forced_end: bool,
    config:     Config,
    charmap:    Charmap,
    diags:      Diagnostics,
}

impl Scanner<'static> {
    /// Creates a scanner that reads the file at `path`.
    pub fn init(config: Config, path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let mut scanner = Self::new(config, InputStack::new());

        scanner.input.push_file(path)?;
        scanner.pos = scanner.input.pos();

        tracing::debug!(path = %path.display(), "scanner initialized");
        Ok(scanner)
    }
}

impl<'a> Scanner<'a> {
    fn new(config: Config, input: InputStack<'a>) -> Self {
        Self {
            input,
            token:      Token::None,
            ws:         false,
            attr:       Attr::None,
            pos:        FilePos::default(),
            forced_end: false,
            diags:      Diagnostics::new(config.echo),
            charmap:    Charmap::default(),
            config,
        }
    }

    /// Creates a scanner that reads the given in-memory text, reporting
    /// positions under `name`.
    pub fn with_data(config: Config, name: &str, buf: impl Into<Buffer<'a>>) -> Self {
        let frame       = Frame::data(Rc::from(name), Location::BOF, buf.into());
        let mut scanner = Self::new(config, InputStack::with_frame(frame));
        scanner.pos     = scanner.input.pos();

        tracing::debug!(name, "scanner initialized");
        scanner
    }

    /// Ends the scanning run, releasing all input frames, and returns the
    /// collected diagnostics.
    pub fn teardown(mut self) -> Diagnostics {
        self.input.clear();
        tracing::debug!(errors = self.diags.error_count(), "scanner teardown");
        self.diags
    }

    // ------------------------------------------------------------------------
    // Input frames

    /// Opens the file at `path` and continues scanning there.  Once the file
    /// is exhausted, scanning resumes in the current frame.
    pub fn enter_file(&mut self, path: impl AsRef<Path>) -> Result<(), ScanError> {
        let pos = self.pos.clone();
        self.input.push_file(path.as_ref()).map_err(|e| self.fatal(e, pos))
    }

    /// Continues scanning in the given in-memory text.  The frame takes the
    /// name and position of the current frame.
    pub fn enter_data(&mut self, buf: impl Into<Buffer<'a>>) -> Result<(), ScanError> {
        let pos = self.pos.clone();
        self.input.push_data(None, buf.into()).map_err(|e| self.fatal(e, pos))
    }

    /// Continues scanning in the given in-memory text, reporting positions
    /// under `name`.
    pub fn enter_named_data(&mut self, name: &str, buf: impl Into<Buffer<'a>>) -> Result<(), ScanError> {
        let pos = self.pos.clone();
        self.input.push_data(Some(Rc::from(name)), buf.into()).map_err(|e| self.fatal(e, pos))
    }

    /// Abandons the current frame.  Returns `false` if no frame was active.
    pub fn leave_current(&mut self) -> bool {
        self.input.pop()
    }

    /// Returns the count of active input frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.input.depth()
    }

    /// Makes every subsequent token [`Token::Eof`].
    pub fn force_end(&mut self) {
        if !self.forced_end {
            tracing::debug!(pos = %self.pos, "forced end");
        }
        self.forced_end = true;
    }

    #[inline]
    pub fn is_forced_end(&self) -> bool {
        self.forced_end
    }

    // ------------------------------------------------------------------------
    // Current token

    /// Returns the current token.
    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Returns whether whitespace preceded the current token.
    #[inline]
    pub fn ws_before(&self) -> bool {
        self.ws
    }

    /// Returns the attribute of the current token.
    #[inline]
    pub fn attr(&self) -> &Attr {
        &self.attr
    }

    /// Returns the integer attribute of the current token, or `0` if it has
    /// none.
    #[inline]
    pub fn int_value(&self) -> i64 {
        self.attr.int().unwrap_or(0)
    }

    /// Returns the string attribute of the current token, or an empty string
    /// if it has none.
    #[inline]
    pub fn str_value(&self) -> &StrVal {
        self.attr.str().unwrap_or(&EMPTY_STR)
    }

    /// Returns the position of the first byte of the current token.
    #[inline]
    pub fn pos(&self) -> &FilePos {
        &self.pos
    }

    /// Converts the string attribute of the current token to upper case.
    pub fn to_uppercase(&mut self) {
        if let Attr::Str(s) = &mut self.attr {
            s.make_ascii_uppercase()
        }
    }

    /// Converts the string attribute of the current token to lower case.
    pub fn to_lowercase(&mut self) {
        if let Attr::Str(s) = &mut self.attr {
            s.make_ascii_lowercase()
        }
    }

    /// Searches `keys` for the current identifier.
    ///
    /// The current token must be [`Token::Ident`], and `keys` must be sorted
    /// and upper case.  The identifier is converted to upper case in the
    /// process.  Returns the index of the key, or `None` if the current token
    /// is not an identifier or no key matches.
    pub fn find_subkey(&mut self, keys: &[&str]) -> Option<usize> {
        if self.token != Token::Ident {
            return None;
        }
        self.to_uppercase();
        search(keys, self.str_value().as_bytes())
    }

    // ------------------------------------------------------------------------
    // Configuration and diagnostics

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    pub fn charmap(&self) -> &Charmap {
        &self.charmap
    }

    #[inline]
    pub fn charmap_mut(&mut self) -> &mut Charmap {
        &mut self.charmap
    }

    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diags
    }

    /// Returns the count of errors reported so far.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.diags.error_count()
    }

    /// Reports a problem at the given position.
    pub(crate) fn error(&mut self, kind: ErrorKind, pos: FilePos, text: impl Into<String>) {
        self.diags.report(kind, pos, text)
    }

    /// Reports a problem at the start of the current token.
    pub(crate) fn error_here(&mut self, kind: ErrorKind, text: impl Into<String>) {
        let pos = self.pos.clone();
        self.error(kind, pos, text)
    }

    /// Reports a hard failure and forces end of input.
    fn fatal(&mut self, err: ScanError, pos: FilePos) -> ScanError {
        let kind = match err {
            ScanError::Io             { .. } => ErrorKind::IoError,
            ScanError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        };
        self.error(kind, pos, err.to_string());
        self.force_end();
        err
    }
}
