//! Error types for compilation and execution.

use thiserror::Error;

/// Errors reported by the bytecode front-end.
///
/// The VM never inspects these beyond reporting them; the front-end owns
/// their production and wording.
#[derive(Debug, Error)]
#[error("{message} [line {line}]")]
pub struct CompileError {
    pub message: String,
    pub line: usize,
}

impl CompileError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Runtime errors raised by the dispatch loop.
///
/// Each variant carries the source line of the instruction that raised it,
/// recovered from the chunk's run-length line map.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{message}")]
    TypeError { message: String, line: usize },

    #[error("Division by zero")]
    DivisionByZero { line: usize },

    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String, line: usize },
}

impl RuntimeError {
    pub fn type_error(message: impl Into<String>, line: usize) -> Self {
        Self::TypeError {
            message: message.into(),
            line,
        }
    }

    pub fn division_by_zero(line: usize) -> Self {
        Self::DivisionByZero { line }
    }

    pub fn undefined_variable(name: impl Into<String>, line: usize) -> Self {
        Self::UndefinedVariable {
            name: name.into(),
            line,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::TypeError { line, .. } => *line,
            Self::DivisionByZero { line } => *line,
            Self::UndefinedVariable { line, .. } => *line,
        }
    }

    /// Render the error the way the runtime reports it on the error channel.
    pub fn render(&self) -> String {
        format!("{}\n[line {}] in script", self, self.line())
    }
}

/// A unified error type for all phases.
#[derive(Debug, Error)]
pub enum VesperError {
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
