// SPDX short identifier: Unlicense

use rct_bulletproofs::{
    common::*,
    pedersen::{PedersenGens, LEDGER_PEDERSEN_GENS, DEFAULT_PEDERSEN_GENS},
    rangeproof::BulletproofGens
};

#[test]
fn bulletproof_gens_vectors_test() {
    let gens = BulletproofGens::new(64, 2);

    let g0: Vec<String> = gens.share(0).G(2).map(point_to_hex).collect();
    assert_eq!(g0, vec![
        "fc3b25801422672a6a8d3adb5d8457d4301fe92324b4fc56ae934c8713ddfe2d",
        "ae817fdef62f713dd169dc8a26406f68be0bd3cd53652614636b0801567c4264"
    ]);
    let h1: Vec<String> = gens.share(1).H(1).map(point_to_hex).collect();
    assert_eq!(h1, vec!["c4d0c6aa6c07db20798b35906c8a8940fa8a1e2f6bf699ee13aaf3eb1f636d24"]);

    //the aggregated view is party-major
    let aggregated: Vec<RistrettoPoint> = gens.G(64, 2).copied().collect();
    assert_eq!(aggregated.len(), 128);
    assert_eq!(point_to_hex(&aggregated[0]), g0[0]);
    assert_eq!(point_to_hex(&aggregated[1]), g0[1]);
    let share_1: Vec<RistrettoPoint> = gens.share(1).G(64).copied().collect();
    assert_eq!(aggregated[64..], share_1[..]);
}

#[test]
fn increase_capacity_test() {
    let mut grown = BulletproofGens::new(32, 4);
    grown.increase_capacity(128);
    let fresh = BulletproofGens::new(128, 4);

    assert_eq!(grown.gens_capacity, 128);
    assert!(grown.G(128, 4).eq(fresh.G(128, 4)));
    assert!(grown.H(128, 4).eq(fresh.H(128, 4)));

    //shrinking is a no-op
    grown.increase_capacity(8);
    assert_eq!(grown.gens_capacity, 128);
}

#[test]
fn share_is_truncated_test() {
    let gens = BulletproofGens::new(16, 1);
    assert_eq!(gens.share(0).G(64).count(), 16);
    assert_eq!(gens.G(16, 1).size_hint(), (16, Some(16)));
}

#[test]
fn exhausted_aggregated_gens_test() {
    let gens = BulletproofGens::new(4, 2);

    //zero generators per party yields nothing, even though party 1 has generators
    let mut empty = gens.G(0, 2);
    assert_eq!(empty.size_hint(), (0, Some(0)));
    for _ in 0..4 {
        assert!(empty.next().is_none());
        assert_eq!(empty.size_hint(), (0, Some(0)));
    }
    assert_eq!(gens.H(0, 2).count(), 0);

    let mut iter = gens.G(2, 1);
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.by_ref().count(), 2);
    for _ in 0..4 {
        assert!(iter.next().is_none());
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    //the hint tracks the remaining length across the party boundary
    let mut iter = gens.H(2, 2);
    for remaining in (0..4).rev() {
        assert!(iter.next().is_some());
        assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
    }
    assert!(iter.next().is_none());
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn pedersen_gens_test() {
    let default = PedersenGens::default();
    assert_eq!(point_to_hex(&default.B), "e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76");
    assert_eq!(point_to_hex(&default.B_blinding), "8c9240b456a9e6dc65c377a1048d745f94a08cdb7f44cbcd7b46f34048871134");
    assert_eq!(*DEFAULT_PEDERSEN_GENS, default);

    let ledger = PedersenGens::ledger();
    assert_eq!(point_to_hex(&ledger.B), "806024d8f41f25e280a0ca45fa2fa28c0529f7b0cbaf182dc195fa23cc58c82b");
    assert_eq!(ledger.B_blinding, G_POINT);
    assert_eq!(*LEDGER_PEDERSEN_GENS, ledger);

    let expected_ledger = [
        (1u64, "786a794f27bc869f694346b0fb7cf8ae8c2f5e1ca06ae9761dd3692194494811"),
        (3, "a0020d671e51c3eb233dfc937add83e793d5cff1b90abf250203e1c6f1bf780e"),
        (4, "1e0d3e04ea4ce3d86824c8417615ea7901409c3cb50d9947f333b1f4389a733d"),
        (5, "96eb59a8fc3bf82375e2bef8cb6f07ef0893dc7c826e5668a506207eefe18f47")
    ];
    for (value, expected) in expected_ledger {
        assert_eq!(Commitment::commit(value, Scalar::from(value)).to_hex(), expected);
    }
}

#[test]
fn commitment_balance_test() {
    let a = Commitment::commit(10, Scalar::from(3u64));
    let b = Commitment::commit(4, Scalar::from(1u64));
    let c = Commitment::commit(5, Scalar::from(2u64));

    assert!(Commitment::is_balanced(&[a], &[b, c], 1));
    assert!(!Commitment::is_balanced(&[a], &[b, c], 2));
    assert!(!Commitment::is_balanced(&[a], &[b], 6));

    assert_eq!(Commitment::from_hex(&a.to_hex()).unwrap(), a);
    assert!(Commitment::from_hex("zz").is_err());
}
