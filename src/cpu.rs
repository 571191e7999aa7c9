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

//! Instruction sets.
//!
//! Each supported processor has a sorted table of instruction mnemonics.  The
//! scanner consults the table of the configured processor to tell mnemonics
//! from ordinary identifiers.

use crate::config::Cpu;
use crate::lang::keyword::search;

// ----------------------------------------------------------------------------

/// Returns the mnemonics of the given processor, sorted, upper case.
pub fn mnemonics(cpu: Cpu) -> &'static [&'static str] {
    match cpu {
        Cpu::Mos6502   => &MOS_6502,
        Cpu::Wdc65sc02 => &WDC_65SC02,
        Cpu::Wdc65c02  => &WDC_65C02,
        Cpu::Wdc65816  => &WDC_65816,
    }
}

/// Returns whether `name` is an instruction of the given processor.
///
/// `name` must already be upper case.
#[inline]
pub fn is_mnemonic(cpu: Cpu, name: &[u8]) -> bool {
    // Every mnemonic is three or four letters.
    (3..=4).contains(&name.len()) && search(mnemonics(cpu), name).is_some()
}

// ----------------------------------------------------------------------------

/// MOS 6502 instructions.
static MOS_6502: [&str; 56] = [
    "ADC", "AND", "ASL", "BCC", "BCS", "BEQ", "BIT", "BMI",
    "BNE", "BPL", "BRK", "BVC", "BVS", "CLC", "CLD", "CLI",
    "CLV", "CMP", "CPX", "CPY", "DEC", "DEX", "DEY", "EOR",
    "INC", "INX", "INY", "JMP", "JSR", "LDA", "LDX", "LDY",
    "LSR", "NOP", "ORA", "PHA", "PHP", "PLA", "PLP", "ROL",
    "ROR", "RTI", "RTS", "SBC", "SEC", "SED", "SEI", "STA",
    "STX", "STY", "TAX", "TAY", "TSX", "TXA", "TXS", "TYA",
];

/// 65SC02 instructions.
static WDC_65SC02: [&str; 64] = [
    "ADC", "AND", "ASL", "BCC", "BCS", "BEQ", "BIT", "BMI",
    "BNE", "BPL", "BRA", "BRK", "BVC", "BVS", "CLC", "CLD",
    "CLI", "CLV", "CMP", "CPX", "CPY", "DEC", "DEX", "DEY",
    "EOR", "INC", "INX", "INY", "JMP", "JSR", "LDA", "LDX",
    "LDY", "LSR", "NOP", "ORA", "PHA", "PHP", "PHX", "PHY",
    "PLA", "PLP", "PLX", "PLY", "ROL", "ROR", "RTI", "RTS",
    "SBC", "SEC", "SED", "SEI", "STA", "STX", "STY", "STZ",
    "TAX", "TAY", "TRB", "TSB", "TSX", "TXA", "TXS", "TYA",
];

/// 65C02 instructions, including the Rockwell bit instructions.
static WDC_65C02: [&str; 96] = [
    "ADC", "AND", "ASL", "BBR0", "BBR1", "BBR2", "BBR3", "BBR4",
    "BBR5", "BBR6", "BBR7", "BBS0", "BBS1", "BBS2", "BBS3", "BBS4",
    "BBS5", "BBS6", "BBS7", "BCC", "BCS", "BEQ", "BIT", "BMI",
    "BNE", "BPL", "BRA", "BRK", "BVC", "BVS", "CLC", "CLD",
    "CLI", "CLV", "CMP", "CPX", "CPY", "DEC", "DEX", "DEY",
    "EOR", "INC", "INX", "INY", "JMP", "JSR", "LDA", "LDX",
    "LDY", "LSR", "NOP", "ORA", "PHA", "PHP", "PHX", "PHY",
    "PLA", "PLP", "PLX", "PLY", "RMB0", "RMB1", "RMB2", "RMB3",
    "RMB4", "RMB5", "RMB6", "RMB7", "ROL", "ROR", "RTI", "RTS",
    "SBC", "SEC", "SED", "SEI", "SMB0", "SMB1", "SMB2", "SMB3",
    "SMB4", "SMB5", "SMB6", "SMB7", "STA", "STX", "STY", "STZ",
    "TAX", "TAY", "TRB", "TSB", "TSX", "TXA", "TXS", "TYA",
];

/// 65816 instructions.
static WDC_65816: [&str; 92] = [
    "ADC", "AND", "ASL", "BCC", "BCS", "BEQ", "BIT", "BMI",
    "BNE", "BPL", "BRA", "BRK", "BRL", "BVC", "BVS", "CLC",
    "CLD", "CLI", "CLV", "CMP", "COP", "CPX", "CPY", "DEC",
    "DEX", "DEY", "EOR", "INC", "INX", "INY", "JML", "JMP",
    "JSL", "JSR", "LDA", "LDX", "LDY", "LSR", "MVN", "MVP",
    "NOP", "ORA", "PEA", "PEI", "PER", "PHA", "PHB", "PHD",
    "PHK", "PHP", "PHX", "PHY", "PLA", "PLB", "PLD", "PLP",
    "PLX", "PLY", "REP", "ROL", "ROR", "RTI", "RTL", "RTS",
    "SBC", "SEC", "SED", "SEI", "SEP", "STA", "STP", "STX",
    "STY", "STZ", "TAX", "TAY", "TCD", "TCS", "TDC", "TRB",
    "TSB", "TSC", "TSX", "TXA", "TXS", "TXY", "TYA", "TYX",
    "WAI", "WDM", "XBA", "XCE",
];

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sorted() {
        for cpu in Cpu::ALL {
            let table = mnemonics(cpu);
            assert!( table.windows(2).all(|w| w[0] < w[1]), "{} table unsorted", cpu );
        }
    }

    #[test]
    fn tables_extend_6502() {
        for cpu in Cpu::ALL {
            for name in MOS_6502 {
                assert!( is_mnemonic(cpu, name.as_bytes()), "{} lacks {}", cpu, name );
            }
        }
    }

    #[test]
    fn mnemonic_by_cpu() {
        assert!( !is_mnemonic(Cpu::Mos6502,   b"BRA") );
        assert!(  is_mnemonic(Cpu::Wdc65sc02, b"BRA") );
        assert!(  is_mnemonic(Cpu::Wdc65c02,  b"BRA") );
        assert!(  is_mnemonic(Cpu::Wdc65816,  b"BRA") );

        assert!( !is_mnemonic(Cpu::Wdc65sc02, b"BBR3") );
        assert!(  is_mnemonic(Cpu::Wdc65c02,  b"BBR3") );
        assert!( !is_mnemonic(Cpu::Wdc65816,  b"BBR3") );

        assert!( !is_mnemonic(Cpu::Wdc65c02,  b"XCE") );
        assert!(  is_mnemonic(Cpu::Wdc65816,  b"XCE") );
    }

    #[test]
    fn mnemonic_requires_upper_case() {
        assert!( !is_mnemonic(Cpu::Mos6502, b"lda")  );
        assert!(  is_mnemonic(Cpu::Mos6502, b"LDA")  );
        assert!( !is_mnemonic(Cpu::Mos6502, b"LDAX") );
        assert!( !is_mnemonic(Cpu::Mos6502, b"")     );
    }
}
