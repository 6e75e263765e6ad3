//! Vesper VM: a stack-based bytecode virtual machine for a small
//! dynamically-typed scripting language.
//!
//! The front-end (lexer, parser, bytecode emitter) lives outside this crate
//! and is consumed through the [`vm::Compiler`] trait; this crate owns the
//! runtime: tagged [`value::Value`]s, the bytecode [`vm::Chunk`], the
//! open-addressing [`vm::Table`] backing globals and string interning, and
//! the dispatch loop in [`vm::Vm`].

pub mod error;
pub mod value;
pub mod vm;

use error::VesperError;

pub use value::{ObjString, Value};
pub use vm::{Chunk, Compiler, Op, StringPool, Table, Vm};

/// Compile and run `source` on a fresh VM.
///
/// The VM (globals, intern pool, and every heap string created during the
/// run) is torn down when this returns. Hosts that want state to survive
/// across inputs (a REPL keeps its globals) hold a [`Vm`] themselves and
/// call [`Vm::interpret`] per input.
pub fn interpret(source: &str, compiler: &mut dyn Compiler) -> Result<(), VesperError> {
    let mut vm = Vm::new();
    vm.interpret(source, compiler)
}
