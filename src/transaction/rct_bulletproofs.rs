/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The signature of a whole transaction: one aggregated rangeproof over every
//! pseudo-output and output, and one ring signature per input.

use std::collections::HashSet;

use rand::{thread_rng, RngCore, CryptoRng};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::internal_common::*;
use crate::rangeproof::{self, RangeProof, BP_GENS};
use crate::signature::{RingMLSAG, MlsagSignParams};

///The secrets of the output spent by one input.
#[derive(Debug, Clone, Zeroize)]
pub struct InputSecret {
    pub onetime_private_key: Scalar,
    pub value: u64,
    pub blinding: Scalar

} impl Drop for InputSecret {
    fn drop(&mut self) {
        self.zeroize()
    }
}

///A transaction signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureRctBulletproofs {
    ///Serialized aggregated rangeproof over `pseudo_output_commitments || output commitments`, padded.
    #[serde(with = "hex::serde")]
    pub range_proof_bytes: Vec<u8>,
    ///One pseudo-output per input, committing to the input's value under a fresh blinding.
    pub pseudo_output_commitments: Vec<Commitment>,
    ///One ring signature per input.
    pub ring_signatures: Vec<RingMLSAG>

} impl SignatureRctBulletproofs {
    ///Sign a transaction.
    ///
    ///`rings[i]` is the canonically ordered ring of input `i`, whose real output is at `real_input_indices[i]`
    ///and is opened by `input_secrets[i]`.
    pub fn sign(
        message: &[u8],
        rings: &[Vec<ReducedTxOut>],
        real_input_indices: &[usize],
        input_secrets: &[InputSecret],
        output_values_and_blindings: &[(u64, Scalar)],
        fee: u64
    ) -> Result<Self, TransactionError> {
        return Self::sign_with_rng(
            message,
            rings,
            real_input_indices,
            input_secrets,
            output_values_and_blindings,
            fee,
            &mut thread_rng()
        )
    }

    ///`sign`, drawing every random scalar from `rng`.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        message: &[u8],
        rings: &[Vec<ReducedTxOut>],
        real_input_indices: &[usize],
        input_secrets: &[InputSecret],
        output_values_and_blindings: &[(u64, Scalar)],
        fee: u64,
        rng: &mut R
    ) -> Result<Self, TransactionError> {
        if rings.is_empty() {
            return Err(TransactionError::NoInputs)
        }
        if output_values_and_blindings.is_empty() {
            return Err(TransactionError::NoOutputs)
        }
        if rings.len() > MAX_INPUTS {
            return Err(TransactionError::TooManyInputs(rings.len()))
        }
        if real_input_indices.len() != rings.len() {
            return Err(TransactionError::LengthMismatch {
                expected: rings.len(),
                actual: real_input_indices.len()
            })
        }
        if input_secrets.len() != rings.len() {
            return Err(TransactionError::LengthMismatch {
                expected: rings.len(),
                actual: input_secrets.len()
            })
        }

        let input_total: u128 = input_secrets.iter().map(|secret| secret.value as u128).sum();
        let output_total: u128 = output_values_and_blindings.iter().map(|(value, _)| *value as u128).sum();
        if input_total != output_total + fee as u128 {
            warn!("inputs do not equal outputs plus fee");
            return Err(TransactionError::ValueNotConserved)
        }
        debug!(inputs = rings.len(), outputs = output_values_and_blindings.len(), "signing transaction");

        //all pseudo-output blindings but the last are random,
        //the last makes them sum to the output blindings
        let mut pseudo_output_blindings: Vec<Scalar> = (0..rings.len() - 1)
            .map(|_| random_scalar_with_rng(rng))
            .collect();
        let sum_of_output_blindings: Scalar = output_values_and_blindings.iter().map(|(_, blinding)| blinding).sum();
        let sum_of_pseudo_output_blindings: Scalar = pseudo_output_blindings.iter().sum();
        pseudo_output_blindings.push(sum_of_output_blindings - sum_of_pseudo_output_blindings);

        let values: Vec<u64> = input_secrets.iter().map(|secret| secret.value)
            .chain(output_values_and_blindings.iter().map(|(value, _)| *value))
            .collect();
        let mut blindings: Vec<Scalar> = pseudo_output_blindings.iter().copied()
            .chain(output_values_and_blindings.iter().map(|(_, blinding)| *blinding))
            .collect();

        let (range_proof, commitments) = rangeproof::generate_range_proofs_with_rng(
            &BP_GENS,
            &LEDGER_PEDERSEN_GENS,
            &values,
            &blindings,
            rng
        )?;
        blindings.zeroize();

        let pseudo_output_commitments: Vec<Commitment> = commitments[..rings.len()].to_vec();
        let range_proof_bytes = range_proof.to_bytes();

        let extended_message = extend_message(message, &pseudo_output_commitments, &range_proof_bytes);

        let mut ring_signatures: Vec<RingMLSAG> = Vec::with_capacity(rings.len());
        for (i, ring) in rings.iter().enumerate() {
            let secret = &input_secrets[i];
            let params = MlsagSignParams {
                message: &extended_message,
                ring,
                real_index: real_input_indices[i],
                onetime_private_key: &secret.onetime_private_key,
                value: secret.value,
                blinding: &secret.blinding,
                pseudo_output_blinding: &pseudo_output_blindings[i],
                pseudo_output_commitment: &pseudo_output_commitments[i]
            };
            ring_signatures.push(RingMLSAG::sign_with_rng(&params, rng)?);
        }
        pseudo_output_blindings.zeroize();
        debug!(proof_bytes = range_proof_bytes.len(), "transaction signed");

        return Ok(Self {
            range_proof_bytes,
            pseudo_output_commitments,
            ring_signatures
        })
    }

    ///Verify this signature over `message`, the transaction's rings, its output commitments and its fee.
    pub fn verify(
        &self,
        message: &[u8],
        rings: &[Vec<ReducedTxOut>],
        output_commitments: &[Commitment],
        fee: u64
    ) -> Result<(), TransactionError> {
        return self.verify_with_rng(message, rings, output_commitments, fee, &mut thread_rng())
    }

    ///`verify`, drawing the rangeproof batching weight from `rng`.
    pub fn verify_with_rng<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        rings: &[Vec<ReducedTxOut>],
        output_commitments: &[Commitment],
        fee: u64,
        rng: &mut R
    ) -> Result<(), TransactionError> {
        if rings.len() != self.ring_signatures.len() {
            return Err(TransactionError::LengthMismatch {
                expected: rings.len(),
                actual: self.ring_signatures.len()
            })
        }
        if rings.len() != self.pseudo_output_commitments.len() {
            return Err(TransactionError::LengthMismatch {
                expected: rings.len(),
                actual: self.pseudo_output_commitments.len()
            })
        }

        let mut seen = HashSet::with_capacity(self.ring_signatures.len());
        if !self.key_images().iter().all(|image| seen.insert(encode_point(image))) {
            return Err(TransactionError::DuplicateKeyImage)
        }

        let commitments: Vec<Commitment> = self.pseudo_output_commitments.iter()
            .chain(output_commitments.iter())
            .copied()
            .collect();
        let range_proof = RangeProof::from_bytes(&self.range_proof_bytes)?;
        rangeproof::check_range_proofs_with_rng(&BP_GENS, &LEDGER_PEDERSEN_GENS, &range_proof, &commitments, rng)?;

        if !Commitment::is_balanced(&self.pseudo_output_commitments, output_commitments, fee) {
            return Err(TransactionError::ValueNotConserved)
        }

        let extended_message = extend_message(message, &self.pseudo_output_commitments, &self.range_proof_bytes);
        for (i, ring) in rings.iter().enumerate() {
            self.ring_signatures[i].verify(&extended_message, ring, &self.pseudo_output_commitments[i])?;
        }

        return Ok(())
    }

    ///Key images spent by this signature, one per input.
    pub fn key_images(&self) -> Vec<RistrettoPoint> {
        return self.ring_signatures.iter().map(|signature| signature.key_image).collect()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SignatureRctBulletproofs {}

///`message || pseudo_output_commitments || range_proof_bytes`
fn extend_message(message: &[u8], pseudo_output_commitments: &[Commitment], range_proof_bytes: &[u8]) -> Vec<u8> {
    let mut extended_message = Vec::with_capacity(
        message.len() + pseudo_output_commitments.len() * 32 + range_proof_bytes.len()
    );
    extended_message.extend_from_slice(message);
    for commitment in pseudo_output_commitments {
        extended_message.extend_from_slice(&encode_point(&commitment.to_point()));
    }
    extended_message.extend_from_slice(range_proof_bytes);
    return extended_message
}
