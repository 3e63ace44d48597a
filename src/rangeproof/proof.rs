/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Aggregated range proofs: proving, verifying and the proof encoding.

#![allow(non_snake_case)]

use std::iter;

use merlin::Transcript;
use rand::{thread_rng, RngCore, CryptoRng, SeedableRng, rngs::StdRng};
use tracing::trace;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::RangeProofError;
use crate::pedersen::PedersenGens;
use crate::transcript::TranscriptProtocol;
use super::dealer::Dealer;
use super::generators::BulletproofGens;
use super::inner_product::InnerProductProof;
use super::party::Party;
use super::util;

///An aggregated range proof that `m` committed values are each in `[0, 2^n)`.
///
///Serializes as `A | S | T_1 | T_2 | t_x | t_x_blinding | e_blinding | ipp_proof`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeProof {
    pub(super) A: RistrettoPoint,
    pub(super) S: RistrettoPoint,
    pub(super) T_1: RistrettoPoint,
    pub(super) T_2: RistrettoPoint,
    pub(super) t_x: Scalar,
    pub(super) t_x_blinding: Scalar,
    pub(super) e_blinding: Scalar,
    pub(super) ipp_proof: InnerProductProof

} impl RangeProof {
    ///Prove that each of `values` is in `[0, 2^n)`, with the given blinding factors.
    ///
    ///The number of values must be a power of two.
    ///Returns the proof and the value commitments, in input order.
    pub fn prove_multiple(
        bp_gens: &BulletproofGens,
        pc_gens: &PedersenGens,
        transcript: Transcript,
        values: &[u64],
        blindings: &[Scalar],
        n: usize
    ) -> Result<(RangeProof, Vec<RistrettoPoint>), RangeProofError> {
        return Self::prove_multiple_with_rng(bp_gens, pc_gens, transcript, values, blindings, n, &mut thread_rng())
    }

    ///`prove_multiple`, drawing every party's randomness from `rng`.
    ///
    ///Each party gets its own generator seeded from `rng` in party order,
    ///so the proof does not depend on whether the `parallel` feature is enabled.
    pub fn prove_multiple_with_rng<R: RngCore + CryptoRng>(
        bp_gens: &BulletproofGens,
        pc_gens: &PedersenGens,
        transcript: Transcript,
        values: &[u64],
        blindings: &[Scalar],
        n: usize,
        rng: &mut R
    ) -> Result<(RangeProof, Vec<RistrettoPoint>), RangeProofError> {
        if values.len() != blindings.len() {
            return Err(RangeProofError::WrongNumBlindingFactors {
                values: values.len(),
                blindings: blindings.len()
            })
        }

        let dealer = Dealer::new(bp_gens, pc_gens, transcript, n, values.len())?;

        let parties = values.iter()
            .zip(blindings.iter())
            .map(|(&v, &v_blinding)| Party::new(bp_gens, pc_gens, v, v_blinding, n))
            .collect::<Result<Vec<_>, _>>()?;

        let party_rngs: Vec<StdRng> = (0..parties.len())
            .map(|_| {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            })
            .collect();

        let (parties, bit_commitments): (Vec<_>, Vec<_>) = each_party(
            parties.into_iter().zip(party_rngs).enumerate().collect(),
            |(j, (party, mut party_rng))| {
                party.assign_position_with_rng(j, &mut party_rng)
                    .map(|(party, commitment)| ((party, party_rng), commitment))
            }
        )
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        let value_commitments: Vec<RistrettoPoint> = bit_commitments.iter()
            .map(|c| c.value_commitment())
            .collect();

        let (dealer, bit_challenge) = dealer.receive_bit_commitments(bit_commitments)?;

        let (parties, poly_commitments): (Vec<_>, Vec<_>) = each_party(
            parties,
            |(party, mut party_rng)| party.apply_challenge_with_rng(&bit_challenge, &mut party_rng)
        )
            .into_iter()
            .unzip();

        let (dealer, poly_challenge) = dealer.receive_poly_commitments(poly_commitments)?;

        let proof_shares = each_party(parties, |party| party.apply_challenge(&poly_challenge))
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let proof = dealer.receive_trusted_shares(&proof_shares)?;

        return Ok((proof, value_commitments))
    }

    ///Verify the proof against `value_commitments`, each an `n`-bit range.
    ///
    ///`transcript` must be in the same state the prover's was.
    pub fn verify_multiple(
        &self,
        bp_gens: &BulletproofGens,
        pc_gens: &PedersenGens,
        transcript: &mut Transcript,
        value_commitments: &[RistrettoPoint],
        n: usize
    ) -> Result<(), RangeProofError> {
        return self.verify_multiple_with_rng(bp_gens, pc_gens, transcript, value_commitments, n, &mut thread_rng())
    }

    ///`verify_multiple`, drawing the batching weight from `rng`.
    pub fn verify_multiple_with_rng<R: RngCore + CryptoRng>(
        &self,
        bp_gens: &BulletproofGens,
        pc_gens: &PedersenGens,
        transcript: &mut Transcript,
        value_commitments: &[RistrettoPoint],
        n: usize,
        rng: &mut R
    ) -> Result<(), RangeProofError> {
        let m = value_commitments.len();

        if !(n == 8 || n == 16 || n == 32 || n == 64) {
            return Err(RangeProofError::InvalidBitsize(n))
        }
        if m == 0 {
            return Err(RangeProofError::EmptyAggregation)
        }
        if !m.is_power_of_two() {
            return Err(RangeProofError::InvalidAggregation(m))
        }
        if bp_gens.gens_capacity < n {
            return Err(RangeProofError::InvalidGeneratorsLength {
                required: n,
                capacity: bp_gens.gens_capacity
            })
        }
        if bp_gens.party_capacity < m {
            return Err(RangeProofError::InvalidGeneratorsLength {
                required: m,
                capacity: bp_gens.party_capacity
            })
        }

        transcript.rangeproof_domain_sep(n as u64, m as u64);

        for V in value_commitments.iter() {
            transcript.append_point(b"V", V);
        }

        transcript.validate_and_append_point(b"A", &self.A)?;
        transcript.validate_and_append_point(b"S", &self.S)?;

        let y = transcript.challenge_scalar(b"y");
        let z = transcript.challenge_scalar(b"z");
        let zz = z * z;
        let minus_z = -z;

        transcript.validate_and_append_point(b"T_1", &self.T_1)?;
        transcript.validate_and_append_point(b"T_2", &self.T_2)?;

        let x = transcript.challenge_scalar(b"x");

        transcript.append_scalar(b"t_x", &self.t_x);
        transcript.append_scalar(b"t_x_blinding", &self.t_x_blinding);
        transcript.append_scalar(b"e_blinding", &self.e_blinding);

        let w = transcript.challenge_scalar(b"w");

        let (x_sq, x_inv_sq, s) = self.ipp_proof.verification_scalars(n * m, transcript)?;
        let s_inv = s.iter().rev();

        let a = self.ipp_proof.a;
        let b = self.ipp_proof.b;

        //weight of the t_x equation in the combined check
        let c = random_scalar_with_rng(rng);

        let powers_of_2: Vec<Scalar> = util::exp_iter(Scalar::from(2u64)).take(n).collect();
        let concat_z_and_2: Vec<Scalar> = util::exp_iter(z)
            .take(m)
            .flat_map(|exp_z| powers_of_2.iter().map(move |exp_2| exp_2 * exp_z))
            .collect();

        let g = s.iter().map(|s_i| minus_z - a * s_i);
        let h = s_inv
            .zip(util::exp_iter(y.invert()))
            .zip(concat_z_and_2.iter())
            .map(|((s_i_inv, exp_y_inv), z_and_2)| z + exp_y_inv * (zz * z_and_2 - b * s_i_inv));

        let value_commitment_scalars = util::exp_iter(z).take(m).map(|z_exp| c * zz * z_exp);
        let basepoint_scalar = w * (self.t_x - a * b) + c * (delta(n, m, &y, &z) - self.t_x);

        let mega_check = RistrettoPoint::vartime_multiscalar_mul(
            iter::once(Scalar::one())
                .chain(iter::once(x))
                .chain(iter::once(c * x))
                .chain(iter::once(c * x * x))
                .chain(x_sq.iter().cloned())
                .chain(x_inv_sq.iter().cloned())
                .chain(iter::once(-self.e_blinding - c * self.t_x_blinding))
                .chain(iter::once(basepoint_scalar))
                .chain(g)
                .chain(h)
                .chain(value_commitment_scalars),
            iter::once(&self.A)
                .chain(iter::once(&self.S))
                .chain(iter::once(&self.T_1))
                .chain(iter::once(&self.T_2))
                .chain(self.ipp_proof.L_vec.iter())
                .chain(self.ipp_proof.R_vec.iter())
                .chain(iter::once(&pc_gens.B_blinding))
                .chain(iter::once(&pc_gens.B))
                .chain(bp_gens.G(n, m))
                .chain(bp_gens.H(n, m))
                .chain(value_commitments.iter()),
        );

        trace!(n, m, "range proof checked");
        return match mega_check.is_identity() {
            true => Ok(()),
            false => Err(RangeProofError::VerificationError)
        }
    }

    ///Size of the serialized proof in bytes.
    pub fn serialized_size(&self) -> usize {
        return 7 * 32 + self.ipp_proof.serialized_size()
    }

    ///Serialize as `A | S | T_1 | T_2 | t_x | t_x_blinding | e_blinding | ipp_proof`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_size());
        buf.extend_from_slice(&encode_point(&self.A));
        buf.extend_from_slice(&encode_point(&self.S));
        buf.extend_from_slice(&encode_point(&self.T_1));
        buf.extend_from_slice(&encode_point(&self.T_2));
        buf.extend_from_slice(self.t_x.as_bytes());
        buf.extend_from_slice(self.t_x_blinding.as_bytes());
        buf.extend_from_slice(self.e_blinding.as_bytes());
        buf.extend(self.ipp_proof.to_bytes());
        return buf
    }

    ///Deserialize the layout written by `to_bytes`.
    pub fn from_bytes(slice: &[u8]) -> Result<RangeProof, RangeProofError> {
        if slice.len() % 32 != 0 || slice.len() < 7 * 32 {
            return Err(RangeProofError::FormatError)
        }

        let point = |i: usize| decode_point(&slice[i * 32..(i + 1) * 32])
            .map_err(|_| RangeProofError::FormatError);
        let scalar = |i: usize| decode_scalar(&slice[i * 32..(i + 1) * 32])
            .map_err(|_| RangeProofError::FormatError);

        return Ok(RangeProof {
            A: point(0)?,
            S: point(1)?,
            T_1: point(2)?,
            T_2: point(3)?,
            t_x: scalar(4)?,
            t_x_blinding: scalar(5)?,
            e_blinding: scalar(6)?,
            ipp_proof: InnerProductProof::from_bytes(&slice[7 * 32..])?
        })
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RangeProof {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(RangeProof::to_bytes(self))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return RangeProof::from_bytes(bytes)
            .map_err(|_| SerializationError::DecodingError)
    }
}

///`delta(y, z) = (z - z^2) * <1, y^(nm)> - z^3 * <1, 2^n> * <1, z^m>`
fn delta(n: usize, m: usize, y: &Scalar, z: &Scalar) -> Scalar {
    let sum_y = util::sum_of_powers(y, n * m);
    let sum_2 = util::sum_of_powers(&Scalar::from(2u64), n);
    let sum_z = util::sum_of_powers(z, m);

    return (z - z * z) * sum_y - z * z * z * sum_2 * sum_z
}

///Run one protocol round for every party, in party order.
#[cfg(not(feature = "parallel"))]
fn each_party<T, U, F>(parties: Vec<T>, step: F) -> Vec<U>
where
    F: Fn(T) -> U
{
    return parties.into_iter().map(step).collect()
}

///Run one protocol round for every party on the rayon pool, keeping party order.
#[cfg(feature = "parallel")]
fn each_party<T, U, F>(parties: Vec<T>, step: F) -> Vec<U>
where
    T: Send,
    U: Send,
    F: Fn(T) -> U + Sync + Send
{
    use rayon::prelude::*;
    return parties.into_par_iter().map(step).collect()
}
