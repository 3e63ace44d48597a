/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Aggregated Bulletproofs rangeproofs, which demonstrate that the amounts committed to in pedersen commitments are non-negative.
//!
//! The proof is built by a dealer and one party per value (see `dealer` and `party`),
//! which `RangeProof::prove_multiple` runs locally.

mod util;
mod generators;
mod inner_product;
mod messages;
mod proof;
pub mod dealer;
pub mod party;

use merlin::Transcript;
use rand::{thread_rng, RngCore, CryptoRng};
use tracing::debug;

use crate::internal_common::*;
pub use crate::constants::BIT_RANGE;
pub use generators::{BulletproofGens, BulletproofGensShare};
pub use inner_product::InnerProductProof;
pub use messages::{BitCommitment, BitChallenge, PolyCommitment, PolyChallenge, ProofShare};
pub use proof::RangeProof;

///Maximum commitment value (in atomic units) allowed for a rangeproof: 2<sup>`BIT_RANGE`</sup> - 1
pub const MAX_VALUE: u64 = ((1u128 << BIT_RANGE) - 1) as u64;

lazy_static! {
    ///Generators shared by every transaction rangeproof.
    pub static ref BP_GENS: BulletproofGens = BulletproofGens::new(GENS_CAPACITY, PARTY_CAPACITY);
}

///Extend `items` to the next power of two by repeating its last element.
///An empty slice stays empty.
pub fn pad_to_power_of_two<T: Copy>(items: &[T]) -> Vec<T> {
    let mut padded = items.to_vec();
    if let Some(&last) = items.last() {
        padded.resize(items.len().next_power_of_two(), last);
    }
    return padded
}

///Create the aggregated rangeproof of a transaction over the ledger generators.
///
///`values` and `blindings` are padded to a power of two by repeating their last element.
///Returns the proof and the commitments to the padded values.
pub fn generate_range_proofs(
    values: &[u64],
    blindings: &[Scalar]
) -> Result<(RangeProof, Vec<Commitment>), RangeProofError> {
    return generate_range_proofs_with_rng(&BP_GENS, &LEDGER_PEDERSEN_GENS, values, blindings, &mut thread_rng())
}

///`generate_range_proofs` with explicit generators and randomness.
pub fn generate_range_proofs_with_rng<R: RngCore + CryptoRng>(
    bp_gens: &BulletproofGens,
    pc_gens: &PedersenGens,
    values: &[u64],
    blindings: &[Scalar],
    rng: &mut R
) -> Result<(RangeProof, Vec<Commitment>), RangeProofError> {
    if values.len() != blindings.len() {
        return Err(RangeProofError::WrongNumBlindingFactors {
            values: values.len(),
            blindings: blindings.len()
        })
    }
    if values.is_empty() {
        return Err(RangeProofError::EmptyAggregation)
    }

    let values_padded = pad_to_power_of_two(values);
    let blindings_padded = pad_to_power_of_two(blindings);
    debug!(values = values.len(), padded = values_padded.len(), "generating range proofs");

    let transcript = Transcript::new(BULLETPROOF_DOMAIN_TAG);
    let (proof, commitments) = RangeProof::prove_multiple_with_rng(
        bp_gens,
        pc_gens,
        transcript,
        &values_padded,
        &blindings_padded,
        BIT_RANGE,
        rng
    )?;

    return Ok((proof, commitments.into_iter().map(Commitment).collect()))
}

///Verify a transaction rangeproof over `commitments`, which are padded as the prover padded them.
pub fn check_range_proofs(
    proof: &RangeProof,
    commitments: &[Commitment]
) -> Result<(), RangeProofError> {
    return check_range_proofs_with_rng(&BP_GENS, &LEDGER_PEDERSEN_GENS, proof, commitments, &mut thread_rng())
}

///`check_range_proofs` with explicit generators and randomness.
pub fn check_range_proofs_with_rng<R: RngCore + CryptoRng>(
    bp_gens: &BulletproofGens,
    pc_gens: &PedersenGens,
    proof: &RangeProof,
    commitments: &[Commitment],
    rng: &mut R
) -> Result<(), RangeProofError> {
    let points: Vec<RistrettoPoint> = commitments.iter().map(|c| c.to_point()).collect();
    let points_padded = pad_to_power_of_two(&points);

    let mut transcript = Transcript::new(BULLETPROOF_DOMAIN_TAG);
    return proof.verify_multiple_with_rng(bp_gens, pc_gens, &mut transcript, &points_padded, BIT_RANGE, rng)
}
