#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use rcs380::protocol::{checksum, dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(3), 0xfd);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(checksum(&[0x03, 0x00]), 0xfd);

    assert_eq!(dcs(&[0xd6, 0x2a, 0x01]), 0xff);
    assert_eq!(dcs(&[0xd6, 0x06, 0x00]), 0x24);
    assert_eq!(dcs(&[]), 0x00);
}

proptest! {
    #[test]
    fn reapplying_checksum_yields_zero(bytes in prop::collection::vec(any::<u8>(), 1..256)) {
        let c = checksum(&bytes);
        let mut appended = bytes.clone();
        appended.push(c);
        prop_assert_eq!(checksum(&appended), 0);
        // checksum of a checksum is its negation
        prop_assert_eq!(checksum(&[c]), c.wrapping_neg());
    }
}
