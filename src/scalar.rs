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
use crate::err::DomainViolation;
use crate::operation::Operation;
use crate::trace;
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating point type the arithmetic core is instantiated for.
///
/// The C boundary is `f32` only, `f64` is available to Rust callers.
pub trait ScalarFloat: Float + Display + Debug + Send + Sync + 'static {
    /// `self` raised to `exponent` with IEEE `pow` semantics.
    fn pow_ieee(self, exponent: Self) -> Self;
}

impl ScalarFloat for f32 {
    #[inline]
    fn pow_ieee(self, exponent: Self) -> Self {
        pxfm::f_powf(self, exponent)
    }
}

impl ScalarFloat for f64 {
    #[inline]
    fn pow_ieee(self, exponent: Self) -> Self {
        pxfm::f_pow(self, exponent)
    }
}

#[inline]
pub fn add<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Add, a, b);
    a + b
}

#[inline]
pub fn subtract<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Subtract, a, b);
    a - b
}

#[inline]
pub fn multiply<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Multiply, a, b);
    a * b
}

/// Divides `a` by `b`, rejecting a zero divisor of either sign.
#[inline]
pub fn checked_divide<T: ScalarFloat>(a: T, b: T) -> Result<T, DomainViolation> {
    if b == T::zero() {
        return Err(DomainViolation::DivisionByZero);
    }
    Ok(a / b)
}

/// Divides `a` by `b`.
///
/// Returns NaN when `b` is exactly zero, whatever `a` is.
#[inline]
pub fn divide<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Divide, a, b);
    checked_divide(a, b).unwrap_or_else(sentinel)
}

/// Principal square root, rejecting operands below zero.
///
/// `-0.0` is not below zero and yields `-0.0`, NaN passes through.
#[inline]
pub fn checked_sqrt<T: ScalarFloat>(x: T) -> Result<T, DomainViolation> {
    if x < T::zero() {
        return Err(DomainViolation::NegativeSquareRoot);
    }
    Ok(x.sqrt())
}

/// Principal square root, NaN for any operand below zero.
#[inline]
pub fn sqrt<T: ScalarFloat>(x: T) -> T {
    trace::unary(Operation::Sqrt, x);
    checked_sqrt(x).unwrap_or_else(sentinel)
}

/// Power function for given value.
///
/// Negative bases with non integral exponents give NaN, overflow gives infinity.
/// A zero base with a negative odd integral exponent keeps the sign of the zero.
#[inline]
pub fn power<T: ScalarFloat>(base: T, exponent: T) -> T {
    trace::binary(Operation::Power, base, exponent);
    if base == T::zero() && exponent < T::zero() && is_odd_integer(exponent) {
        return T::infinity().copysign(base);
    }
    base.pow_ieee(exponent)
}

#[inline]
fn is_odd_integer<T: ScalarFloat>(y: T) -> bool {
    let two = T::one() + T::one();
    y.is_finite() && y.trunc() == y && (y / two).trunc() != y / two
}

#[inline]
pub fn abs<T: ScalarFloat>(x: T) -> T {
    trace::unary(Operation::Abs, x);
    x.abs()
}

/// Greater of `a` and `b`. A NaN operand is ignored in favour of the other one.
#[inline]
pub fn max<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Max, a, b);
    a.max(b)
}

/// Lesser of `a` and `b`. A NaN operand is ignored in favour of the other one.
#[inline]
pub fn min<T: ScalarFloat>(a: T, b: T) -> T {
    trace::binary(Operation::Min, a, b);
    a.min(b)
}

#[cold]
fn sentinel<T: ScalarFloat>(violation: DomainViolation) -> T {
    trace::violation(violation);
    T::nan()
}
