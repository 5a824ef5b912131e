#![no_main]

use libfuzzer_sys::fuzz_target;
use scalarmath::{Operation, checked_divide, checked_sqrt, ffi};

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let a = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let b = f32::from_bits(u32::from_ne_bytes([lo[4], lo[5], lo[6], lo[7]]));

    if b == 0. {
        assert!(ffi::divide(a, b).is_nan());
        assert!(checked_divide(a, b).is_err());
    } else {
        assert_eq!(ffi::divide(a, b).to_bits(), (a / b).to_bits());
    }
    if a < 0. {
        assert!(ffi::sqrt(a).is_nan());
        assert!(checked_sqrt(a).is_err());
    } else {
        assert_eq!(ffi::sqrt(a).to_bits(), a.sqrt().to_bits());
    }
    assert_eq!(ffi::add(a, b).to_bits(), (a + b).to_bits());
    assert_eq!(ffi::subtract(a, b).to_bits(), (a - b).to_bits());
    assert_eq!(ffi::multiply(a, b).to_bits(), (a * b).to_bits());
    assert_eq!(ffi::abs(a).to_bits(), a.abs().to_bits());

    for op in Operation::ALL {
        assert_eq!(op.apply(a, b).to_bits(), op.apply(a, b).to_bits());
    }
    let p = ffi::power(a, b);
    let system = a.powf(b);
    let special = |v: f32| v == 0. || v.is_infinite() || v.is_nan();
    if special(a) || special(b) {
        if system.is_nan() {
            assert!(p.is_nan());
        } else {
            assert_eq!(p.to_bits(), system.to_bits());
        }
    }
    if !(a.is_nan() && b.is_nan()) {
        assert_eq!(ffi::max(a, b).to_bits(), a.max(b).to_bits());
        assert_eq!(ffi::min(a, b).to_bits(), a.min(b).to_bits());
    }
});
