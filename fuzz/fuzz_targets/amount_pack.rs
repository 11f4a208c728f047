#![no_main]

use libfuzzer_sys::fuzz_target;
use zksync_transfer::util::fuzz_utils::fuzz_amount_pack;

fuzz_target!(|data: &[u8]| {
    assert!(fuzz_amount_pack(data));
});
