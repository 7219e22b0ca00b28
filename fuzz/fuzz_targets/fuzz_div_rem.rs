#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use uint256::U256;

fuzz_target!(|data: [[u8; 32]; 2]| {
    let a = U256::from_be_bytes(data[0]);
    let b = U256::from_be_bytes(data[1]);
    let (q, r) = a.div_rem(b);
    let (ab, bb) = (BigUint::from(a), BigUint::from(b));
    if bb.is_zero() {
        assert_eq!((q, r), (U256::ZERO, U256::ZERO));
        return;
    }
    assert_eq!(BigUint::from(q), &ab / &bb);
    assert_eq!(BigUint::from(r), &ab % &bb);

    let (sa, sb): (BigInt, BigInt) = (a.to_signed_big_int(), b.to_signed_big_int());
    assert_eq!(a.sdiv(b), U256::from_big_int_wrapping(&(&sa / &sb)).value);
    assert_eq!(a.smod(b), U256::from_big_int_wrapping(&(&sa % &sb)).value);
});
