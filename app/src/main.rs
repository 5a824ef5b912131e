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
use scalarmath::ffi;

fn main() {
    ffi::init();

    println!("Testing scalarmath from Rust");
    println!("============================");

    println!("add(10.0, 5.0) = {:.2}", ffi::add(10.0, 5.0));
    println!("subtract(10.0, 5.0) = {:.2}", ffi::subtract(10.0, 5.0));
    println!("multiply(10.0, 5.0) = {:.2}", ffi::multiply(10.0, 5.0));
    println!("divide(10.0, 5.0) = {:.2}", ffi::divide(10.0, 5.0));
    println!("sqrt(25.0) = {:.2}", ffi::sqrt(25.0));
    println!("power(2.0, 3.0) = {:.2}", ffi::power(2.0, 3.0));
    println!("abs(-15.5) = {:.2}", ffi::abs(-15.5));
    println!("max(10.0, 20.0) = {:.2}", ffi::max(10.0, 20.0));
    println!("min(10.0, 20.0) = {:.2}", ffi::min(10.0, 20.0));
}
