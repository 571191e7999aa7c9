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

//! Source scanner for the ca65 dialect of 6502-family assembly.
//!
//! The [`Scanner`] turns a stack of input sources (files and in-memory text)
//! into a stream of tokens with attributes and positions.  Problems are
//! collected as [`Message`]s rather than aborting the scan, except for input
//! failures, which end the scan early.

use std::sync::Once;

pub mod config;
pub mod cpu;
pub mod error;
pub mod lang;
pub mod message;
pub mod num;
pub mod util;

pub use self::config::{Config, Cpu, Feature, Features};
pub use self::error::ScanError;
pub use self::lang::addr_size::AddrSize;
pub use self::lang::charmap::Charmap;
pub use self::lang::input::{Buffer, MAX_INPUT_FILES};
pub use self::lang::lexer::Scanner;
pub use self::lang::token::{Attr, StrVal, Token};
pub use self::message::{Diagnostics, ErrorKind, Message, Severity};
pub use self::util::{FilePos, Location};

static TRACING_INIT: Once = Once::new();

/// Installs a tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set.  Only the first call has effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_some() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
