// SPDX short identifier: Unlicense

use merlin::Transcript;
use rct_bulletproofs::{
    curve::random_scalar,
    pedersen::PedersenGens,
    rangeproof::{self, BulletproofGens, RangeProof}
};

fn main() {
    //values of the Pedersen commitments, in atomic units
    let values = vec!(123456789, 2222222, 8);
    //blinding factors of the Pedersen commitments
    let blindings = vec!(random_scalar(), random_scalar(), random_scalar());

    //Create an aggregated rangeproof over the ledger generators,
    //proving that all of the given values are valid 64-bit integers (between 0 and 2^64 - 1).
    //The values are padded to a power of two by repeating the last one.
    let (proof, commitments) = rangeproof::generate_range_proofs(&values, &blindings)
        .expect("Real software should have proper error handling.");

    //Verify the rangeproof
    rangeproof::check_range_proofs(&proof, &commitments)
        .expect("Real software should have proper error handling.");


    //The protocol also runs with custom generators, bit widths and transcripts
    let bp_gens = BulletproofGens::new(32, 2);
    let pc_gens = PedersenGens::default();
    let (proof, commitments) = RangeProof::prove_multiple(
        &bp_gens,
        &pc_gens,
        Transcript::new(b"my protocol"),
        &[42, 4_000_000_000],
        &[random_scalar(), random_scalar()],
        32
    ).expect("Real software should have proper error handling.");

    proof.verify_multiple(&bp_gens, &pc_gens, &mut Transcript::new(b"my protocol"), &commitments, 32)
        .expect("Real software should have proper error handling.");
    println!("32-bit proof over 2 values: {} bytes", proof.serialized_size());
}
