#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use num_traits::Zero;
use uint256::U256;

fuzz_target!(|data: [[u8; 32]; 3]| {
    let a = U256::from_be_bytes(data[0]);
    let b = U256::from_be_bytes(data[1]);
    let m = U256::from_be_bytes(data[2]);
    let mb = BigUint::from(m);
    if mb.is_zero() {
        assert_eq!(a.mul_mod(b, m), U256::ZERO);
        assert_eq!(a.add_mod(b, m), U256::ZERO);
        return;
    }
    let (ab, bb) = (BigUint::from(a), BigUint::from(b));
    assert_eq!(BigUint::from(a.mul_mod(b, m)), (&ab * &bb) % &mb);
    assert_eq!(BigUint::from(a.add_mod(b, m)), (&ab + &bb) % &mb);
});
