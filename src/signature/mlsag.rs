/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(non_snake_case)]

use rand::{thread_rng, RngCore, CryptoRng};
use tracing::{trace, warn};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///Everything needed to sign one transaction input.
///
///The ring must already be in its canonical order, with the real output at `real_index`.
#[derive(Debug, Clone, Copy)]
pub struct MlsagSignParams<'a> {
    ///Message to be signed.
    pub message: &'a [u8],
    ///Ring of candidate outputs.
    pub ring: &'a [ReducedTxOut],
    ///Index of the real output in `ring`.
    pub real_index: usize,
    ///One-time private key of the real output.
    pub onetime_private_key: &'a Scalar,
    ///Value of the real output.
    pub value: u64,
    ///Blinding factor of the real output.
    pub blinding: &'a Scalar,
    ///Blinding factor of this input's pseudo-output.
    pub pseudo_output_blinding: &'a Scalar,
    ///The published pseudo-output commitment of this input.
    pub pseudo_output_commitment: &'a Commitment
}

///A RingCT ring signature for one input.
///
///MLSAG stands for "Multilayered Linkable Spontaneous Anonymous Group (signature)".
///It proves knowledge of the one-time private key of one ring member,
///and that the pseudo-output commits to the same value as that member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingMLSAG {
    ///Challenge at ring position 0.
    pub c_zero: Scalar,
    ///Two responses per ring member: `r_{0,0}, r_{0,1}, r_{1,0}, ...`
    pub responses: Vec<Scalar>,
    pub key_image: RistrettoPoint

} impl RingMLSAG {
    ///Sign with `params`.
    pub fn sign(params: &MlsagSignParams) -> Result<Self, SignatureError> {
        return Self::sign_with_rng(params, &mut thread_rng())
    }

    ///Sign with `params`, drawing every random scalar from `rng`.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        params: &MlsagSignParams,
        rng: &mut R
    ) -> Result<Self, SignatureError> {
        let ring = params.ring;
        let ring_size = ring.len();
        let real_index = params.real_index;

        if ring_size == 0 {
            return Err(SignatureError::EmptyRing)
        }
        if real_index >= ring_size {
            return Err(SignatureError::IndexOutOfBounds { index: real_index, ring_size })
        }

        //the pseudo-output must commit to the real value under the given blinding
        if Commitment::commit(params.value, *params.pseudo_output_blinding) != *params.pseudo_output_commitment {
            warn!(real_index, "pseudo-output does not open to the real value");
            return Err(SignatureError::ValueNotConserved)
        }

        let x = params.onetime_private_key;
        let I = key_image(x);
        let pseudo_output = params.pseudo_output_commitment.to_point();

        //random responses for the decoys, zero at the real index
        let mut r: Vec<Scalar> = vec![Scalar::zero(); 2 * ring_size];
        for i in 0..ring_size {
            if i == real_index {
                continue
            }
            r[2 * i] = random_scalar_with_rng(rng);
            r[2 * i + 1] = random_scalar_with_rng(rng);
        }
        let mut alpha_0 = random_scalar_with_rng(rng);
        let mut alpha_1 = random_scalar_with_rng(rng);

        //walk the ring starting at the real index
        let mut c: Vec<Scalar> = vec![Scalar::zero(); ring_size];
        for n in 0..ring_size {
            let i = (real_index + n) % ring_size;
            let tx_out = &ring[i];
            let P_i = tx_out.target_key;
            let input_commitment = tx_out.commitment.to_point();

            let (L0, R0, L1) = if i == real_index {
                (
                    &alpha_0 * G,
                    alpha_0 * hash_to_point(&P_i),
                    &alpha_1 * G
                )
            } else {
                (
                    RistrettoPoint::multiscalar_mul(&[r[2 * i], c[i]], &[G_POINT, P_i]),
                    RistrettoPoint::multiscalar_mul(&[r[2 * i], c[i]], &[hash_to_point(&P_i), I]),
                    RistrettoPoint::multiscalar_mul(&[r[2 * i + 1], c[i]], &[G_POINT, pseudo_output - input_commitment])
                )
            };

            c[(i + 1) % ring_size] = challenge(params.message, &I, &L0, &R0, &L1);
        }

        //close the loop at the real index
        let mut commitment_key = params.pseudo_output_blinding - params.blinding;
        r[2 * real_index] = alpha_0 - c[real_index] * x;
        r[2 * real_index + 1] = alpha_1 - c[real_index] * commitment_key;

        //the difference of the two commitments must be a multiple of the blinding base
        let difference = pseudo_output - ring[real_index].commitment.to_point();
        let conserved = difference == &commitment_key * G;

        alpha_0.zeroize();
        alpha_1.zeroize();
        commitment_key.zeroize();

        if !conserved {
            warn!(real_index, "commitment difference is not a multiple of the blinding base");
            return Err(SignatureError::ValueNotConserved)
        }
        trace!(ring_size, "ring signature created");

        return Ok(Self {
            c_zero: c[0],
            responses: r,
            key_image: I
        })
    }

    ///Verify this signature over `message`, `ring` and the pseudo-output commitment of its input.
    pub fn verify(
        &self,
        message: &[u8],
        ring: &[ReducedTxOut],
        pseudo_output_commitment: &Commitment
    ) -> Result<(), SignatureError> {
        let ring_size = ring.len();
        if ring_size == 0 {
            return Err(SignatureError::EmptyRing)
        }
        if self.responses.len() != 2 * ring_size {
            return Err(SignatureError::LengthMismatch {
                expected: 2 * ring_size,
                actual: self.responses.len()
            })
        }
        if self.key_image.is_identity() {
            return Err(SignatureError::InvalidKeyImage)
        }

        let r = &self.responses;
        let I = self.key_image;
        let pseudo_output = pseudo_output_commitment.to_point();

        let mut recomputed_c = self.c_zero;
        for i in 0..ring_size {
            let P_i = ring[i].target_key;
            let input_commitment = ring[i].commitment.to_point();

            let L0 = RistrettoPoint::vartime_multiscalar_mul(&[r[2 * i], recomputed_c], &[G_POINT, P_i]);
            let R0 = RistrettoPoint::vartime_multiscalar_mul(&[r[2 * i], recomputed_c], &[hash_to_point(&P_i), I]);
            let L1 = RistrettoPoint::vartime_multiscalar_mul(
                &[r[2 * i + 1], recomputed_c],
                &[G_POINT, pseudo_output - input_commitment]
            );

            recomputed_c = challenge(message, &I, &L0, &R0, &L1);
        }

        return match recomputed_c == self.c_zero {
            true => Ok(()),
            false => Err(SignatureError::Invalid)
        }
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingMLSAG {}
