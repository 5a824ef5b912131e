/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Per-call diagnostics routed through the `log` facade.
//!
//! Without an installed logger the facade drops every record, so the
//! arithmetic stays side effect free unless the host opts in.
//! Building without the `trace` feature removes the calls entirely.
use crate::err::DomainViolation;
use crate::operation::Operation;
use std::fmt::Display;

/// Log target of every record this crate emits.
pub const TARGET: &str = "scalarmath";

#[inline(always)]
pub(crate) fn unary<T: Display>(op: Operation, x: T) {
    #[cfg(feature = "trace")]
    log::debug!(target: TARGET, "{}({:.2})", op, x);
    #[cfg(not(feature = "trace"))]
    let _ = (op, x);
}

#[inline(always)]
pub(crate) fn binary<T: Display>(op: Operation, a: T, b: T) {
    #[cfg(feature = "trace")]
    log::debug!(target: TARGET, "{}({:.2}, {:.2})", op, a, b);
    #[cfg(not(feature = "trace"))]
    let _ = (op, a, b);
}

#[inline(always)]
pub(crate) fn violation(violation: DomainViolation) {
    #[cfg(feature = "trace")]
    log::warn!(target: TARGET, "{}", violation.note());
    #[cfg(not(feature = "trace"))]
    let _ = violation;
}
