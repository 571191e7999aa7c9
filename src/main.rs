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

//! Program entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use ras65::{Charmap, Config, Cpu, Feature, Scanner, Token};

/// Scans 6502-family assembly source files and prints their tokens.
#[derive(Parser, Debug)]
#[command(name = "ras65", version, about)]
struct Args {
    /// Target processor: 6502, 65sc02, 65c02, or 65816.
    #[arg(long, default_value = "6502", value_parser = parse_cpu)]
    cpu: Cpu,

    /// Enable a syntax feature, such as `dollar_is_pc`.  May be repeated.
    #[arg(short = 'f', long = "feature", value_parser = parse_feature)]
    features: Vec<Feature>,

    /// Character map for character constants: identity or petscii.
    #[arg(long, value_parser = parse_charmap)]
    charmap: Option<Charmap>,

    /// Character that introduces a cheap local label: @ or ?.
    #[arg(long, default_value_t = '@')]
    local_char: char,

    /// Print diagnostics only.
    #[arg(short, long)]
    quiet: bool,

    /// Source files.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config, String> {
        let mut config = Config::default();
        config.cpu  = self.cpu;
        config.echo = true;

        config.set_local_char(self.local_char).map_err(|e| e.to_string())?;

        for &feature in &self.features {
            config.features.set(feature, true);
        }

        Ok(config)
    }
}

fn parse_cpu(name: &str) -> Result<Cpu, String> {
    Cpu::from_name(name).ok_or_else(|| format!("unknown processor '{}'", name))
}

fn parse_feature(name: &str) -> Result<Feature, String> {
    Feature::from_name(name).ok_or_else(|| format!("unknown feature '{}'", name))
}

fn parse_charmap(name: &str) -> Result<Charmap, String> {
    Charmap::from_name(name).ok_or_else(|| format!("unknown character map '{}'", name))
}

fn main() -> ExitCode {
    ras65::init_tracing();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e)     => {
            eprintln!("{}{}", "error: ".red().bold(), e);
            return ExitCode::from(2);
        },
    };

    let mut failed = false;

    for path in &args.files {
        let mut scanner = match Scanner::init(config.clone(), path) {
            Ok(scanner) => scanner,
            Err(e)      => {
                eprintln!("{}{}", "fatal: ".bright_red().bold(), e);
                failed = true;
                continue;
            },
        };

        if let Some(charmap) = &args.charmap {
            *scanner.charmap_mut() = charmap.clone();
        }

        if args.quiet {
            while scanner.next_raw_token() != Token::Eof { }
        } else {
            println!("[{}]", path.display());
            print_tokens(&mut scanner);
        }

        failed |= scanner.teardown().error_count() > 0;
    }

    match failed {
        true  => ExitCode::FAILURE,
        false => ExitCode::SUCCESS,
    }
}

fn print_tokens(scanner: &mut Scanner) {
    //        0         1         2         3         4         5         6
    //        0 2 4 6 8 0 2 4 6 8 0 2 4 6 8 0 2 4 6 8 0 2 4 6 8 0 2 4 6 8 0
    println!("╭──────┬─────┬────────────┬────┬──────────────────────╮");
    println!("│ {} │ {} │ {} │ {} │ {} │",
        "LINE".bold(), " COL".bold(), "TOKEN     ".bold(), "WS".bold(), "VALUE               ".bold());
    println!("╞══════╪═════╪════════════╪════╪══════════════════════╡");

    loop {
        let token = scanner.next_raw_token();
        let pos   = scanner.pos();

        println!(
            "│ {:4} │ {:3} │ {:<10} │ {:2} │ {:<20.20} │",
            pos.line(),
            pos.column(),
            token.name(),
            if scanner.ws_before() { "ws" } else { "" },
            scanner.attr().to_string(),
        );

        if token == Token::Eof { break; }
    }

    println!("╰──────┴─────┴────────────┴────┴──────────────────────╯");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn args_config() {
        let args   = Args::parse_from(["ras65", "--cpu", "65c02", "-f", "dollar_is_pc", "--local-char", "?", "a.s"]);
        let config = args.config().unwrap();

        assert_eq!( config.cpu,        Cpu::Wdc65c02 );
        assert_eq!( config.local_char(), b'?'        );
        assert!( config.features.dollar_is_pc );
        assert!( config.echo );
    }

    #[test]
    fn args_rejects_unknown_names() {
        assert!( Args::try_parse_from(["ras65", "--cpu", "z80", "a.s"]).is_err() );
        assert!( Args::try_parse_from(["ras65", "-f", "nope", "a.s"]).is_err() );
        assert!( Args::try_parse_from(["ras65", "--charmap", "ebcdic", "a.s"]).is_err() );
    }

    #[test]
    fn args_rejects_bad_local_char() {
        for c in ["x", ".", "$", "\""] {
            let args = Args::parse_from(["ras65", "--local-char", c, "a.s"]);
            assert!( args.config().is_err(), "{}", c );
        }
    }
}
