//! Canonical listing formatter: program records → listing text.

use stacksim_common::Program;

/// Render a program as canonical listing text.
///
/// One record per line, uppercase mnemonics, decimal operands. An address
/// marker is emitted exactly where a record's address breaks the running
/// sequence (the first record gets one unless it loads at 0). Text produced
/// here reassembles to an identical program.
pub fn format_listing(program: &Program) -> String {
    let mut out = String::new();
    let mut next = 0usize;

    for entry in &program.entries {
        if entry.address != next {
            out.push_str(&format!("{}: ", entry.address));
        }
        out.push_str(entry.opcode.mnemonic());
        if let Some(operand) = entry.operand {
            out.push_str(&format!(" {operand}"));
        }
        out.push('\n');
        next = entry.address + 1;
    }

    out
}
