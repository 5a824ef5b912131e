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
use crate::err::UnknownOperation;
use crate::scalar::{self, ScalarFloat};
use std::fmt::Display;
use std::str::FromStr;

/// Operations exposed over the C boundary.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Power,
    Abs,
    Max,
    Min,
}

impl Operation {
    /// Every operation, in export order.
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sqrt,
        Operation::Power,
        Operation::Abs,
        Operation::Max,
        Operation::Min,
    ];

    /// Name of the operation on the call boundary, without symbol prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sqrt => "sqrt",
            Operation::Power => "power",
            Operation::Abs => "abs",
            Operation::Max => "max",
            Operation::Min => "min",
        }
    }

    /// Number of operands the operation consumes.
    pub const fn arity(self) -> usize {
        match self {
            Operation::Sqrt | Operation::Abs => 1,
            _ => 2,
        }
    }

    /// Evaluates the operation.
    ///
    /// Unary operations read `a` only, `b` is ignored.
    #[inline]
    pub fn apply<T: ScalarFloat>(self, a: T, b: T) -> T {
        match self {
            Operation::Add => scalar::add(a, b),
            Operation::Subtract => scalar::subtract(a, b),
            Operation::Multiply => scalar::multiply(a, b),
            Operation::Divide => scalar::divide(a, b),
            Operation::Sqrt => scalar::sqrt(a),
            Operation::Power => scalar::power(a, b),
            Operation::Abs => scalar::abs(a),
            Operation::Max => scalar::max(a, b),
            Operation::Min => scalar::min(a, b),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_back() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string(), op.name());
        }
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(UnknownOperation("modulo".to_string()))
        );
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn arity() {
        let unary: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| op.arity() == 1)
            .collect();
        assert_eq!(unary, vec![Operation::Sqrt, Operation::Abs]);
    }

    #[test]
    fn reference_scenario() {
        let cases: [(Operation, f32, f32, f32); 9] = [
            (Operation::Add, 10., 5., 15.),
            (Operation::Subtract, 10., 5., 5.),
            (Operation::Multiply, 10., 5., 50.),
            (Operation::Divide, 10., 5., 2.),
            (Operation::Sqrt, 25., 0., 5.),
            (Operation::Power, 2., 3., 8.),
            (Operation::Abs, -15.5, 0., 15.5),
            (Operation::Max, 10., 20., 20.),
            (Operation::Min, 10., 20., 10.),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(op.apply(a, b), expected, "{op}({a}, {b})");
        }
    }

    #[test]
    fn unary_ignores_second_operand() {
        assert_eq!(Operation::Sqrt.apply(16f32, f32::NAN), 4f32);
        assert_eq!(Operation::Abs.apply(-2f64, -100f64), 2f64);
    }
}
