//! # Code Generation
//!
//! Lowers a validated expression tree into flat three-address instructions.
//!
//! Registers are numbered post-order and never reused: a leaf writes the
//! register it is handed, an operator writes one past the highest register
//! its operands used. A subtree therefore consumes exactly as many registers
//! as it has nodes. The target evaluator sizes its register file for this
//! scheme; a liveness-based allocator would be a separate, deliberate change
//! to that contract.
//!
//! Emission is only defined for trees that passed validation; emitting an
//! unvalidated tree is a programming error.

use crate::ast::{Ast, Call, Expr};
use tracing::debug;
use voxir_spec::{InstructionSink, OpTable, Opcode, Reg, LOOP_SENTINEL};

impl Call {
    /// Emit this call's single instruction into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if the name does not resolve in the table; validation
    /// establishes that it does.
    pub(crate) fn emit<S: InstructionSink>(&self, table: &OpTable, dst: Reg, sink: &mut S) {
        let opcode = table
            .lookup(self.name())
            .expect("emit called on an unvalidated call");

        let mut operands = Vec::with_capacity(1 + self.args().len());
        operands.push(dst);
        operands.extend_from_slice(self.args().values());
        sink.append(opcode, &operands);
    }
}

impl Expr {
    /// Emit this subtree, numbering registers from `start`.
    ///
    /// Returns the register holding the subtree's result. Leaves return
    /// `start` itself; operators return one past their operands' registers.
    pub fn emit<S: InstructionSink>(&self, table: &OpTable, start: Reg, sink: &mut S) -> Reg {
        match self {
            Expr::Call(call) => {
                call.emit(table, start, sink);
                start
            }

            Expr::Complement(child) => {
                let a = child.emit(table, start, sink);
                let dst = a + 1;
                sink.append(Opcode::Not, &[dst, a]);
                dst
            }

            Expr::Intersect(lhs, rhs) => emit_binary(Opcode::And, lhs, rhs, table, start, sink),
            Expr::Union(lhs, rhs) => emit_binary(Opcode::Or, lhs, rhs, table, start, sink),
        }
    }
}

fn emit_binary<S: InstructionSink>(
    opcode: Opcode,
    lhs: &Expr,
    rhs: &Expr,
    table: &OpTable,
    start: Reg,
    sink: &mut S,
) -> Reg {
    let a = lhs.emit(table, start, sink);
    let b = rhs.emit(table, a + 1, sink);
    let dst = b + 1;
    sink.append(opcode, &[dst, a, b]);
    dst
}

impl Ast {
    /// Emit the complete program: loop prologue, expression body, draw,
    /// and the jump back to the start.
    pub fn emit<S: InstructionSink>(&self, table: &OpTable, sink: &mut S) {
        let extent = self.extent();
        sink.append(
            Opcode::Loop,
            &[LOOP_SENTINEL, 0, 0, 0, extent, extent, extent],
        );

        let result = self.root().emit(table, 0, sink);
        debug!(result, extent, "scene lowered");

        sink.append(Opcode::Draw, &[result]);
        sink.append(Opcode::Jump, &[0]);
    }
}
