// SPDX short identifier: Unlicense

#![allow(non_snake_case)]

mod common;

use merlin::Transcript;
use rand::Rng;

use rct_bulletproofs::{
    common::*,
    constants::BULLETPROOF_DOMAIN_TAG,
    hashes::hash_to_point,
    pedersen::{PedersenGens, LEDGER_PEDERSEN_GENS, DEFAULT_PEDERSEN_GENS},
    rangeproof::{
        self,
        BulletproofGens,
        InnerProductProof,
        RangeProof,
        dealer::Dealer,
        party::Party,
        MAX_VALUE,
        BP_GENS
    }
};

use common::seeded_rng;

const AGGREGATION_SIZES: [usize; 4] = [1, 2, 4, 8];
const BIT_SIZES: [usize; 4] = [8, 16, 32, 64];

#[test]
fn aggregated_vector_test() {
    let mut rng = seeded_rng(1);
    let bp_gens = BulletproofGens::new(64, 4);
    let pc_gens = PedersenGens::default();

    let values = [1u64, 3, 4, 5];
    let blindings: Vec<Scalar> = values.iter().map(|&v| Scalar::from(v)).collect();

    let (proof, commitments) = RangeProof::prove_multiple_with_rng(
        &bp_gens, &pc_gens, Transcript::new(b"AggregatedRangeProofTest"), &values, &blindings, 64, &mut rng
    ).unwrap();

    let hexes: Vec<String> = commitments.iter().map(point_to_hex).collect();
    assert_eq!(hexes, vec![
        "b8180a6778aba0f7bd121a403e09146d274edf702241a67c67689dc9bd87dd10",
        "988fa4005165f042c820b20277c979594d9acc48024b510a50d89a97c2440a55",
        "64e98945a8ee92ff97a16c82f360350b67c78c308a30e4437fb11cc38bd7c531",
        "54b407bccf9aac093bebc3133039f60bf4b8205f75bbdc9e26904b366f486738"
    ]);

    //7 elements, then log2(64 * 4) = 8 (L, R) pairs and a, b
    assert_eq!(proof.serialized_size(), 800);
    assert_eq!(proof.to_bytes().len(), 800);

    let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
    assert!(proof.verify_multiple_with_rng(&bp_gens, &pc_gens, &mut transcript, &commitments, 64, &mut rng).is_ok());
}

#[test]
fn transaction_helper_vector_test() {
    let values = [1u64, 3, 4, 5];
    let blindings: Vec<Scalar> = values.iter().map(|&v| Scalar::from(v)).collect();

    let (proof, commitments) = rangeproof::generate_range_proofs_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, &values, &blindings, &mut seeded_rng(9)
    ).unwrap();

    let hexes: Vec<String> = commitments.iter().map(Commitment::to_hex).collect();
    assert_eq!(hexes, vec![
        "b8180a6778aba0f7bd121a403e09146d274edf702241a67c67689dc9bd87dd10",
        "988fa4005165f042c820b20277c979594d9acc48024b510a50d89a97c2440a55",
        "64e98945a8ee92ff97a16c82f360350b67c78c308a30e4437fb11cc38bd7c531",
        "54b407bccf9aac093bebc3133039f60bf4b8205f75bbdc9e26904b366f486738"
    ]);
    assert_eq!(proof.to_bytes().len(), 800);

    //the helper is a 64 bit aggregated proof over the domain tag transcript
    let points: Vec<RistrettoPoint> = commitments.iter().map(|c| c.to_point()).collect();
    let (direct, direct_commitments) = RangeProof::prove_multiple_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, Transcript::new(BULLETPROOF_DOMAIN_TAG),
        &values, &blindings, 64, &mut seeded_rng(9)
    ).unwrap();
    assert_eq!(direct_commitments, points);
    assert_eq!(hex::encode(direct.to_bytes()), hex::encode(proof.to_bytes()));

    //same seed, same bytes
    let (again, _) = rangeproof::generate_range_proofs_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, &values, &blindings, &mut seeded_rng(9)
    ).unwrap();
    assert_eq!(again.to_bytes(), proof.to_bytes());

    //fresh randomness changes the proof but not the commitments
    let (other, other_commitments) = rangeproof::generate_range_proofs_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, &values, &blindings, &mut seeded_rng(10)
    ).unwrap();
    assert_eq!(other_commitments, commitments);
    assert_ne!(other.to_bytes(), proof.to_bytes());

    let mut rng = seeded_rng(11);
    assert!(rangeproof::check_range_proofs_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, &proof, &commitments, &mut rng).is_ok());
    assert!(rangeproof::check_range_proofs_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, &other, &commitments, &mut rng).is_ok());

    //proofs bound to any other transcript label are rejected
    let (foreign, _) = RangeProof::prove_multiple_with_rng(
        &BP_GENS, &DEFAULT_PEDERSEN_GENS, Transcript::new(b"AggregatedRangeProofTest"),
        &values, &blindings, 64, &mut seeded_rng(9)
    ).unwrap();
    assert_eq!(
        rangeproof::check_range_proofs_with_rng(&BP_GENS, &DEFAULT_PEDERSEN_GENS, &foreign, &commitments, &mut rng),
        Err(RangeProofError::VerificationError)
    );
}

#[test]
fn every_byte_mutation_test() {
    let mut rng = seeded_rng(12);
    let values = [1u64, 3, 4, 5];
    let blindings: Vec<Scalar> = values.iter().map(|&v| Scalar::from(v)).collect();

    let (proof, commitments) = rangeproof::generate_range_proofs_with_rng(
        &BP_GENS, &LEDGER_PEDERSEN_GENS, &values, &blindings, &mut rng
    ).unwrap();
    let bytes = proof.to_bytes();
    assert!(rangeproof::check_range_proofs_with_rng(
        &BP_GENS, &LEDGER_PEDERSEN_GENS, &proof, &commitments, &mut rng).is_ok());

    //flip one bit of every byte, cycling through bit positions
    for i in 0..bytes.len() {
        let mut mutated = bytes.clone();
        mutated[i] ^= 1 << (i % 8);

        let result = RangeProof::from_bytes(&mutated).and_then(|p| rangeproof::check_range_proofs_with_rng(
            &BP_GENS, &LEDGER_PEDERSEN_GENS, &p, &commitments, &mut rng
        ));
        assert!(result.is_err(), "mutated byte {} was accepted", i);
    }
}

#[test]
fn prove_and_verify_test() {
    let mut rng = seeded_rng(2);
    let bp_gens = BulletproofGens::new(64, 8);
    let pc_gens = PedersenGens::default();

    for n in BIT_SIZES {
        for m in AGGREGATION_SIZES {
            let values: Vec<u64> = (0..m)
                .map(|_| if n == 64 { rng.gen::<u64>() } else { rng.gen_range(0..(1u64 << n)) })
                .collect();
            let blindings: Vec<Scalar> = (0..m).map(|_| random_scalar_with_rng(&mut rng)).collect();

            let (proof, commitments) = RangeProof::prove_multiple_with_rng(
                &bp_gens, &pc_gens, Transcript::new(b"test"), &values, &blindings, n, &mut rng
            ).unwrap();

            //serialize
            let bytes = proof.to_bytes();
            assert_eq!(bytes.len(), proof.serialized_size());
            let deserialized = RangeProof::from_bytes(&bytes).unwrap();
            assert_eq!(deserialized, proof);

            //verify
            let mut transcript = Transcript::new(b"test");
            assert!(deserialized.verify_multiple_with_rng(
                &bp_gens, &pc_gens, &mut transcript, &commitments, n, &mut rng).is_ok());

            //the transcript label is bound into the proof
            let mut transcript = Transcript::new(b"other");
            assert!(deserialized.verify_multiple_with_rng(
                &bp_gens, &pc_gens, &mut transcript, &commitments, n, &mut rng).is_err());
        }
    }
}

#[test]
fn tampered_proof_test() {
    let mut rng = seeded_rng(3);
    let bp_gens = BulletproofGens::new(64, 2);
    let pc_gens = PedersenGens::default();

    let values = [10u64, 20];
    let blindings = [random_scalar_with_rng(&mut rng), random_scalar_with_rng(&mut rng)];
    let (proof, commitments) = RangeProof::prove_multiple_with_rng(
        &bp_gens, &pc_gens, Transcript::new(b"test"), &values, &blindings, 32, &mut rng
    ).unwrap();

    //flip the low bit of t_x
    let mut bytes = proof.to_bytes();
    bytes[4 * 32] ^= 1;
    let tampered = RangeProof::from_bytes(&bytes).unwrap();
    let mut transcript = Transcript::new(b"test");
    assert_eq!(
        tampered.verify_multiple_with_rng(&bp_gens, &pc_gens, &mut transcript, &commitments, 32, &mut rng),
        Err(RangeProofError::VerificationError)
    );

    //wrong commitments
    let swapped = [commitments[1], commitments[0]];
    let mut transcript = Transcript::new(b"test");
    assert!(proof.verify_multiple_with_rng(&bp_gens, &pc_gens, &mut transcript, &swapped, 32, &mut rng).is_err());

    //truncated and misaligned encodings
    assert_eq!(RangeProof::from_bytes(&bytes[..bytes.len() - 32]), Err(RangeProofError::FormatError));
    assert_eq!(RangeProof::from_bytes(&bytes[..bytes.len() - 1]), Err(RangeProofError::FormatError));
    assert_eq!(RangeProof::from_bytes(&[]), Err(RangeProofError::FormatError));
}

#[test]
fn invalid_parameters_test() {
    let mut rng = seeded_rng(4);
    let bp_gens = BulletproofGens::new(64, 4);
    let pc_gens = PedersenGens::default();
    let blinding = [Scalar::one()];

    assert_eq!(
        RangeProof::prove_multiple_with_rng(&bp_gens, &pc_gens, Transcript::new(b"test"), &[1], &blinding, 48, &mut rng),
        Err(RangeProofError::InvalidBitsize(48))
    );
    assert_eq!(
        RangeProof::prove_multiple_with_rng(&bp_gens, &pc_gens, Transcript::new(b"test"), &[256], &blinding, 8, &mut rng),
        Err(RangeProofError::OutOfRange { value: 256, bits: 8 })
    );
    assert_eq!(
        RangeProof::prove_multiple_with_rng(&bp_gens, &pc_gens, Transcript::new(b"test"), &[1, 2, 3], &[Scalar::one(); 3], 64, &mut rng),
        Err(RangeProofError::InvalidAggregation(3))
    );
    assert_eq!(
        RangeProof::prove_multiple_with_rng(&bp_gens, &pc_gens, Transcript::new(b"test"), &[1; 8], &[Scalar::one(); 8], 64, &mut rng),
        Err(RangeProofError::InvalidGeneratorsLength { required: 8, capacity: 4 })
    );
    assert_eq!(
        RangeProof::prove_multiple_with_rng(&bp_gens, &pc_gens, Transcript::new(b"test"), &[1, 2], &blinding, 64, &mut rng),
        Err(RangeProofError::WrongNumBlindingFactors { values: 2, blindings: 1 })
    );
    assert!(Dealer::new(&bp_gens, &pc_gens, Transcript::new(b"test"), 64, 0).is_err());
}

#[test]
fn dealer_and_parties_test() {
    let mut rng = seeded_rng(5);
    let bp_gens = BulletproofGens::new(32, 4);
    let pc_gens = PedersenGens::default();
    let n = 32;

    let values = [0u64, 1, u32::MAX as u64, 12345];
    let blindings: Vec<Scalar> = values.iter().map(|_| random_scalar_with_rng(&mut rng)).collect();

    let dealer = Dealer::new(&bp_gens, &pc_gens, Transcript::new(b"multiparty"), n, 4).unwrap();

    let mut parties = Vec::new();
    let mut bit_commitments = Vec::new();
    for (j, (v, v_blinding)) in values.iter().zip(blindings.iter()).enumerate() {
        let party = Party::new(&bp_gens, &pc_gens, *v, *v_blinding, n).unwrap();
        let (party, bit_commitment) = party.assign_position_with_rng(j, &mut rng).unwrap();
        parties.push(party);
        bit_commitments.push(bit_commitment);
    }
    let commitments: Vec<RistrettoPoint> = bit_commitments.iter().map(|c| c.value_commitment()).collect();

    //the dealer waits for every party
    let short = Dealer::new(&bp_gens, &pc_gens, Transcript::new(b"multiparty"), n, 4).unwrap();
    assert_eq!(
        short.receive_bit_commitments(bit_commitments[..3].to_vec()).err(),
        Some(RangeProofError::WrongNumBitCommitments { expected: 4, actual: 3 })
    );

    let (dealer, bit_challenge) = dealer.receive_bit_commitments(bit_commitments).unwrap();

    let mut polys = Vec::new();
    let mut poly_parties = Vec::new();
    for party in parties {
        let (party, poly_commitment) = party.apply_challenge_with_rng(&bit_challenge, &mut rng);
        poly_parties.push(party);
        polys.push(poly_commitment);
    }

    let (dealer, poly_challenge) = dealer.receive_poly_commitments(polys).unwrap();

    let shares = poly_parties.into_iter()
        .map(|party| party.apply_challenge(&poly_challenge))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let proof = dealer.receive_shares_with_rng(&shares, &mut rng).unwrap();

    let mut transcript = Transcript::new(b"multiparty");
    assert!(proof.verify_multiple_with_rng(&bp_gens, &pc_gens, &mut transcript, &commitments, n, &mut rng).is_ok());
}

#[test]
fn malformed_shares_test() {
    let mut rng = seeded_rng(6);
    let bp_gens = BulletproofGens::new(16, 2);
    let pc_gens = PedersenGens::default();
    let n = 16;

    let dealer = Dealer::new(&bp_gens, &pc_gens, Transcript::new(b"multiparty"), n, 2).unwrap();
    let party_0 = Party::new(&bp_gens, &pc_gens, 7, random_scalar_with_rng(&mut rng), n).unwrap();
    let party_1 = Party::new(&bp_gens, &pc_gens, 9, random_scalar_with_rng(&mut rng), n).unwrap();

    let (party_0, bit_0) = party_0.assign_position_with_rng(0, &mut rng).unwrap();
    let (party_1, bit_1) = party_1.assign_position_with_rng(1, &mut rng).unwrap();
    let (dealer, bit_challenge) = dealer.receive_bit_commitments(vec![bit_0, bit_1]).unwrap();

    let (party_0, poly_0) = party_0.apply_challenge_with_rng(&bit_challenge, &mut rng);
    let (party_1, poly_1) = party_1.apply_challenge_with_rng(&bit_challenge, &mut rng);
    let (dealer, poly_challenge) = dealer.receive_poly_commitments(vec![poly_0, poly_1]).unwrap();

    let share_0 = party_0.apply_challenge(&poly_challenge).unwrap();
    let share_1 = party_1.apply_challenge(&poly_challenge).unwrap();

    //out of order shares fail to audit against both parties' commitments
    assert_eq!(
        dealer.receive_shares_with_rng(&[share_1, share_0], &mut rng),
        Err(RangeProofError::MalformedProofShares { bad_shares: vec![0, 1] })
    );
}

#[test]
fn inner_product_test() {
    let mut rng = seeded_rng(7);
    let n = 16;
    let bp_gens = BulletproofGens::new(n, 1);
    let gens_G: Vec<RistrettoPoint> = bp_gens.share(0).G(n).copied().collect();
    let gens_H: Vec<RistrettoPoint> = bp_gens.share(0).H(n).copied().collect();
    let Q = hash_to_point(&G_POINT);

    let a: Vec<Scalar> = (0..n).map(|_| random_scalar_with_rng(&mut rng)).collect();
    let b: Vec<Scalar> = (0..n).map(|_| random_scalar_with_rng(&mut rng)).collect();
    let c: Scalar = a.iter().zip(b.iter()).map(|(a_i, b_i)| a_i * b_i).sum();
    let ones = vec![Scalar::one(); n];

    //P = <a, G> + <b, H> + <a, b> Q
    let P = RistrettoPoint::multiscalar_mul(
        a.iter().chain(b.iter()).chain(std::iter::once(&c)),
        gens_G.iter().chain(gens_H.iter()).chain(std::iter::once(&Q))
    );

    let mut transcript = Transcript::new(b"innerproducttest");
    let proof = InnerProductProof::create(
        &mut transcript, &Q, &ones, &ones, gens_G.clone(), gens_H.clone(), a.clone(), b.clone()
    ).unwrap();
    assert_eq!(proof.L_vec.len(), 4);
    assert_eq!(proof.R_vec.len(), 4);

    let mut transcript = Transcript::new(b"innerproducttest");
    assert!(proof.verify(n, &mut transcript, &ones, &ones, &P, &Q, &gens_G, &gens_H).is_ok());

    let deserialized = InnerProductProof::from_bytes(&proof.to_bytes()).unwrap();
    assert_eq!(deserialized.serialized_size(), (2 * 4 + 2) * 32);
    let mut transcript = Transcript::new(b"innerproducttest");
    assert!(deserialized.verify(n, &mut transcript, &ones, &ones, &(P + G_POINT), &Q, &gens_G, &gens_H).is_err());

    //non power-of-two inputs
    let mut transcript = Transcript::new(b"innerproducttest");
    assert_eq!(
        InnerProductProof::create(
            &mut transcript, &Q, &ones[..3], &ones[..3], gens_G[..3].to_vec(), gens_H[..3].to_vec(), a[..3].to_vec(), b[..3].to_vec()
        ),
        Err(RangeProofError::InvalidInnerProductInput(3))
    );
}

#[test]
fn transaction_range_proofs_test() {
    let mut rng = seeded_rng(8);
    let values = [5u64, MAX_VALUE, 0];
    let blindings: Vec<Scalar> = values.iter().map(|_| random_scalar_with_rng(&mut rng)).collect();

    let (proof, commitments) = rangeproof::generate_range_proofs_with_rng(
        &BP_GENS, &LEDGER_PEDERSEN_GENS, &values, &blindings, &mut rng
    ).unwrap();

    //padded to 4 by repeating the last value
    assert_eq!(commitments.len(), 4);
    assert_eq!(commitments[0], Commitment::commit(5, blindings[0]));
    assert_eq!(commitments[3], commitments[2]);

    //the verifier pads the unpadded commitments the same way
    assert!(rangeproof::check_range_proofs_with_rng(
        &BP_GENS, &LEDGER_PEDERSEN_GENS, &proof, &commitments[..3], &mut rng).is_ok());
    assert!(rangeproof::check_range_proofs(&proof, &commitments).is_ok());

    let wrong = [commitments[0], commitments[1], Commitment::commit(1, blindings[2])];
    assert!(rangeproof::check_range_proofs(&proof, &wrong).is_err());

    assert_eq!(
        rangeproof::generate_range_proofs(&[], &[]).err(),
        Some(RangeProofError::EmptyAggregation)
    );
    assert_eq!(rangeproof::pad_to_power_of_two(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 5, 5, 5]);
    assert!(rangeproof::pad_to_power_of_two::<u64>(&[]).is_empty());
}
