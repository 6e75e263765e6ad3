//! Bytecode disassembler for debug output.

use crate::value::Value;

use super::chunk::Chunk;
use super::opcode::Op;

/// Disassemble a whole chunk to a human-readable listing.
pub fn disassemble(chunk: &Chunk, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", name));
    let mut offset = 0;
    while offset < chunk.len() {
        let (text, next) = disassemble_instruction(chunk, offset);
        out.push_str(&text);
        out.push('\n');
        offset = next;
    }
    out
}

/// Disassemble the instruction at `offset`; returns the rendered line and
/// the offset of the next instruction.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> (String, usize) {
    let line = chunk.line_at(offset);
    let line_str = if offset > 0 && chunk.line_at(offset - 1) == line {
        "   |".to_string()
    } else {
        format!("{:4}", line)
    };
    let mut out = format!("{:04} {} ", offset, line_str);

    let byte = chunk.code[offset];
    let Some(op) = Op::from_byte(byte) else {
        out.push_str(&format!("UNKNOWN      {:#04x}", byte));
        return (out, offset + 1);
    };

    match op {
        Op::Constant => {
            let idx = chunk.code[offset + 1];
            out.push_str(&format!(
                "CONSTANT     {:>5} ({})",
                idx,
                format_constant(chunk.constants.get(idx as usize))
            ));
        }
        Op::DefineGlobal => {
            let idx = chunk.code[offset + 1];
            out.push_str(&format!(
                "DEF_GLOBAL   {:>5} ({})",
                idx,
                format_constant(chunk.constants.get(idx as usize))
            ));
        }
        Op::GetGlobal => {
            let idx = chunk.code[offset + 1];
            out.push_str(&format!(
                "GET_GLOBAL   {:>5} ({})",
                idx,
                format_constant(chunk.constants.get(idx as usize))
            ));
        }
        Op::SetGlobal => {
            let idx = chunk.code[offset + 1];
            out.push_str(&format!(
                "SET_GLOBAL   {:>5} ({})",
                idx,
                format_constant(chunk.constants.get(idx as usize))
            ));
        }
        Op::Nil => out.push_str("NIL"),
        Op::True => out.push_str("TRUE"),
        Op::False => out.push_str("FALSE"),
        Op::Pop => out.push_str("POP"),
        Op::Equal => out.push_str("EQUAL"),
        Op::Greater => out.push_str("GREATER"),
        Op::Less => out.push_str("LESS"),
        Op::Add => out.push_str("ADD"),
        Op::Subtract => out.push_str("SUBTRACT"),
        Op::Multiply => out.push_str("MULTIPLY"),
        Op::Divide => out.push_str("DIVIDE"),
        Op::Not => out.push_str("NOT"),
        Op::Negate => out.push_str("NEGATE"),
        Op::Print => out.push_str("PRINT"),
        Op::Return => out.push_str("RETURN"),
    }

    (out, offset + 1 + op.operand_len())
}

fn format_constant(value: Option<&Value>) -> String {
    match value {
        Some(Value::Str(s)) => format!("\"{}\"", s),
        Some(value) => format!("{}", value),
        None => "???".to_string(),
    }
}
