//! Error taxonomy for the vector front end.
//!
//! This module defines the error conditions the front end can report. It covers:
//! 1. **Decode Errors:** Invalid encodings, register-group alignment violations,
//!    unsupported element widths, and decode attempted under an invalid `vtype`.
//! 2. **Address Generation Errors:** Misaligned scalar addresses that abort a
//!    memory request.
//! 3. **Backend Errors:** Errors reported by the execution backend on completion,
//!    surfaced verbatim to the upstream caller.
//!
//! Invalid *configuration* is deliberately absent: a malformed `vtype` is
//! recovered locally by forcing `vill=1, vl=0` and never propagates as an error.

use thiserror::Error;

/// Errors reported by the decoder and the address generator.
///
/// No component retries after an error; recovery is always "reject this
/// instruction, preserve state consistency, continue with the next".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The instruction encoding is invalid for the current configuration.
    ///
    /// Covers unknown opcode/function encodings, register indices that violate
    /// the group-multiplier alignment constraint, element widths beyond the
    /// supported maximum or the floating-point capability set, and any
    /// non-configuration instruction issued while `vtype.vill` is set.
    /// The payload is the instruction encoding.
    #[error("illegal vector instruction {0:#010x}")]
    IllegalInstruction(u32),

    /// A scalar base or per-element address is not aligned to the element
    /// width for an addressing mode that requires natural alignment.
    ///
    /// Fatal to the instruction: address generation aborts and the engine
    /// returns to idle. The payload is the faulting address.
    #[error("misaligned address {0:#x}")]
    MisalignedAddress(u64),

    /// The execution backend reported an error for a completed operation.
    #[error("backend reported an execution error")]
    Backend,

    /// A memory request is malformed in a way decode cannot produce, such as
    /// an indexed request whose offset vector does not match its element
    /// count. The payload is the offending request tag.
    #[error("malformed memory request (tag {0})")]
    MalformedRequest(u8),
}
