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
//! C ABI of the library, declared in `include/scalarmath.h`.
//!
//! Symbols carry the `scalarmath_` prefix so they do not shadow the C
//! math library. None of these functions can fault: a zero divisor or a
//! negative square root operand yields NaN.
use crate::scalar;
use crate::sink;

#[unsafe(export_name = "scalarmath_add")]
pub extern "C" fn add(a: f32, b: f32) -> f32 {
    scalar::add(a, b)
}

#[unsafe(export_name = "scalarmath_subtract")]
pub extern "C" fn subtract(a: f32, b: f32) -> f32 {
    scalar::subtract(a, b)
}

#[unsafe(export_name = "scalarmath_multiply")]
pub extern "C" fn multiply(a: f32, b: f32) -> f32 {
    scalar::multiply(a, b)
}

#[unsafe(export_name = "scalarmath_divide")]
pub extern "C" fn divide(a: f32, b: f32) -> f32 {
    scalar::divide(a, b)
}

#[unsafe(export_name = "scalarmath_sqrt")]
pub extern "C" fn sqrt(x: f32) -> f32 {
    scalar::sqrt(x)
}

#[unsafe(export_name = "scalarmath_power")]
pub extern "C" fn power(base: f32, exponent: f32) -> f32 {
    scalar::power(base, exponent)
}

#[unsafe(export_name = "scalarmath_abs")]
pub extern "C" fn abs(x: f32) -> f32 {
    scalar::abs(x)
}

#[unsafe(export_name = "scalarmath_max")]
pub extern "C" fn max(a: f32, b: f32) -> f32 {
    scalar::max(a, b)
}

#[unsafe(export_name = "scalarmath_min")]
pub extern "C" fn min(a: f32, b: f32) -> f32 {
    scalar::min(a, b)
}

/// Optional. Installs the stderr trace sink and logs one startup line,
/// may be called any number of times.
#[unsafe(export_name = "scalarmath_init")]
pub extern "C" fn init() {
    sink::init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn reference_program() {
        assert_eq!(add(10.0, 5.0), 15.0);
        assert_eq!(subtract(10.0, 5.0), 5.0);
        assert_eq!(multiply(10.0, 5.0), 50.0);
        assert_eq!(divide(10.0, 5.0), 2.0);
        assert_eq!(sqrt(25.0), 5.0);
        assert_eq!(power(2.0, 3.0), 8.0);
        assert_eq!(abs(-15.5), 15.5);
        assert_eq!(max(10.0, 20.0), 20.0);
        assert_eq!(min(10.0, 20.0), 10.0);
    }

    #[test]
    fn invalid_domain_gives_nan() {
        assert!(divide(10.0, 0.0).is_nan());
        assert!(divide(0.0, 0.0).is_nan());
        assert!(sqrt(-1.0).is_nan());
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(power(2.0, 0.0), 1.0);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn init_is_idempotent() {
        // Keeps the rest of the suite quiet once the sink is installed.
        sink::init_with(sink::TraceOptions {
            max_level: log::LevelFilter::Off,
            timestamps: false,
        });
        init();
        init();
        assert_eq!(log::max_level(), log::LevelFilter::Off);
        assert_eq!(add(1.0, 2.0), 3.0);
    }

    #[test]
    fn concurrent_calls_agree() {
        let mut rng = rand::rng();
        let inputs: Vec<(f32, f32)> = (0..512)
            .map(|_| (rng.random_range(-1e4..1e4), rng.random_range(-1e4..1e4)))
            .collect();
        let table: [extern "C" fn(f32, f32) -> f32; 7] =
            [add, subtract, multiply, divide, power, max, min];
        let evaluate = |inputs: &[(f32, f32)]| -> Vec<u32> {
            let mut out = Vec::with_capacity(inputs.len() * 9);
            for &(a, b) in inputs {
                for f in table {
                    out.push(f(a, b).to_bits());
                }
                out.push(sqrt(a).to_bits());
                out.push(abs(a).to_bits());
            }
            out
        };
        let expected = evaluate(&inputs);
        let (evaluate, inputs) = (&evaluate, &inputs);
        std::thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|_| s.spawn(move || evaluate(inputs)))
                .collect();
            for worker in workers {
                assert_eq!(worker.join().unwrap(), expected);
            }
        });
    }
}
