/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The inner-product argument.
//!
//! Proves knowledge of `a`, `b` with
//! `P = <a * G_factors, G> + <b * H_factors, H> + <a, b> * Q`
//! using `log2(n)` rounds, each halving the vectors.

#![allow(non_snake_case)]

use std::iter;

use merlin::Transcript;
use serde::{Serialize, Deserialize};

use crate::curve::{Scalar, RistrettoPoint, VartimeMultiscalarMul, encode_point, decode_point, decode_scalar};
use crate::errors::RangeProofError;
use crate::transcript::TranscriptProtocol;
use super::util::inner_product;

///An inner-product proof: one `(L, R)` pair per halving round and the final scalars `a`, `b`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InnerProductProof {
    pub L_vec: Vec<RistrettoPoint>,
    pub R_vec: Vec<RistrettoPoint>,
    pub a: Scalar,
    pub b: Scalar,

} impl InnerProductProof {
    ///Create an inner-product proof.
    ///
    ///The `G_factors` and `H_factors` scale the generators in the first round only.
    ///All inputs must have the same power-of-two length.
    ///The transcript receives the domain separator and every `(L, R)` pair.
    pub fn create(
        transcript: &mut Transcript,
        Q: &RistrettoPoint,
        G_factors: &[Scalar],
        H_factors: &[Scalar],
        mut G_vec: Vec<RistrettoPoint>,
        mut H_vec: Vec<RistrettoPoint>,
        mut a_vec: Vec<Scalar>,
        mut b_vec: Vec<Scalar>,
    ) -> Result<InnerProductProof, RangeProofError> {
        let mut G = &mut G_vec[..];
        let mut H = &mut H_vec[..];
        let mut a = &mut a_vec[..];
        let mut b = &mut b_vec[..];

        let mut n = G.len();

        if H.len() != n
            || a.len() != n
            || b.len() != n
            || G_factors.len() != n
            || H_factors.len() != n
            || !n.is_power_of_two()
        {
            return Err(RangeProofError::InvalidInnerProductInput(n))
        }

        transcript.innerproduct_domain_sep(n as u64);

        let lg_n = n.next_power_of_two().trailing_zeros() as usize;
        let mut L_vec = Vec::with_capacity(lg_n);
        let mut R_vec = Vec::with_capacity(lg_n);

        //the first round folds in the generator factors
        if n != 1 {
            n = n / 2;
            let (a_L, a_R) = a.split_at_mut(n);
            let (b_L, b_R) = b.split_at_mut(n);
            let (G_L, G_R) = G.split_at_mut(n);
            let (H_L, H_R) = H.split_at_mut(n);

            let c_L = inner_product(&a_L, &b_R);
            let c_R = inner_product(&a_R, &b_L);

            let L = RistrettoPoint::vartime_multiscalar_mul(
                a_L.iter()
                    .zip(G_factors[n..2 * n].iter())
                    .map(|(a_L_i, g)| a_L_i * g)
                    .chain(
                        b_R.iter()
                            .zip(H_factors[0..n].iter())
                            .map(|(b_R_i, h)| b_R_i * h),
                    )
                    .chain(iter::once(c_L)),
                G_R.iter().chain(H_L.iter()).chain(iter::once(Q)),
            );

            let R = RistrettoPoint::vartime_multiscalar_mul(
                a_R.iter()
                    .zip(G_factors[0..n].iter())
                    .map(|(a_R_i, g)| a_R_i * g)
                    .chain(
                        b_L.iter()
                            .zip(H_factors[n..2 * n].iter())
                            .map(|(b_L_i, h)| b_L_i * h),
                    )
                    .chain(iter::once(c_R)),
                G_L.iter().chain(H_R.iter()).chain(iter::once(Q)),
            );

            transcript.append_point(b"L", &L);
            transcript.append_point(b"R", &R);
            L_vec.push(L);
            R_vec.push(R);

            let u = transcript.challenge_scalar(b"u");
            let u_inv = u.invert();

            //vectors fold with (u, u^-1), generators with the exponents swapped
            for i in 0..n {
                a_L[i] = a_L[i] * u + u_inv * a_R[i];
                b_L[i] = b_L[i] * u_inv + u * b_R[i];
                G_L[i] = RistrettoPoint::vartime_multiscalar_mul(
                    &[u_inv * G_factors[i], u * G_factors[n + i]],
                    &[G_L[i], G_R[i]],
                );
                H_L[i] = RistrettoPoint::vartime_multiscalar_mul(
                    &[u * H_factors[i], u_inv * H_factors[n + i]],
                    &[H_L[i], H_R[i]],
                )
            }

            a = a_L;
            b = b_L;
            G = G_L;
            H = H_L;
        }

        while n != 1 {
            n = n / 2;
            let (a_L, a_R) = a.split_at_mut(n);
            let (b_L, b_R) = b.split_at_mut(n);
            let (G_L, G_R) = G.split_at_mut(n);
            let (H_L, H_R) = H.split_at_mut(n);

            let c_L = inner_product(&a_L, &b_R);
            let c_R = inner_product(&a_R, &b_L);

            let L = RistrettoPoint::vartime_multiscalar_mul(
                a_L.iter().chain(b_R.iter()).chain(iter::once(&c_L)),
                G_R.iter().chain(H_L.iter()).chain(iter::once(Q)),
            );

            let R = RistrettoPoint::vartime_multiscalar_mul(
                a_R.iter().chain(b_L.iter()).chain(iter::once(&c_R)),
                G_L.iter().chain(H_R.iter()).chain(iter::once(Q)),
            );

            transcript.append_point(b"L", &L);
            transcript.append_point(b"R", &R);
            L_vec.push(L);
            R_vec.push(R);

            let u = transcript.challenge_scalar(b"u");
            let u_inv = u.invert();

            for i in 0..n {
                a_L[i] = a_L[i] * u + u_inv * a_R[i];
                b_L[i] = b_L[i] * u_inv + u * b_R[i];
                G_L[i] = RistrettoPoint::vartime_multiscalar_mul(&[u_inv, u], &[G_L[i], G_R[i]]);
                H_L[i] = RistrettoPoint::vartime_multiscalar_mul(&[u, u_inv], &[H_L[i], H_R[i]]);
            }

            a = a_L;
            b = b_L;
            G = G_L;
            H = H_L;
        }

        return Ok(InnerProductProof {
            L_vec,
            R_vec,
            a: a[0],
            b: b[0],
        })
    }

    ///Replay the transcript and compute the verification scalars:
    ///`(u_1^2, ..., u_k^2)`, `(u_1^-2, ..., u_k^-2)` and `s`,
    ///the combined folding factor of each of the `n` generators.
    pub(crate) fn verification_scalars(
        &self,
        n: usize,
        transcript: &mut Transcript,
    ) -> Result<(Vec<Scalar>, Vec<Scalar>, Vec<Scalar>), RangeProofError> {
        let lg_n = self.L_vec.len();
        if lg_n >= 32 || self.R_vec.len() != lg_n {
            return Err(RangeProofError::VerificationError)
        }
        if n != (1 << lg_n) {
            return Err(RangeProofError::VerificationError)
        }

        transcript.innerproduct_domain_sep(n as u64);

        let mut challenges = Vec::with_capacity(lg_n);
        for (L, R) in self.L_vec.iter().zip(self.R_vec.iter()) {
            transcript.validate_and_append_point(b"L", L)?;
            transcript.validate_and_append_point(b"R", R)?;
            challenges.push(transcript.challenge_scalar(b"u"));
        }

        let mut challenges_inv = challenges.clone();
        let allinv = Scalar::batch_invert(&mut challenges_inv);

        for i in 0..lg_n {
            challenges[i] = challenges[i] * challenges[i];
            challenges_inv[i] = challenges_inv[i] * challenges_inv[i];
        }
        let challenges_sq = challenges;
        let challenges_inv_sq = challenges_inv;

        //s_i is the product of u_j^(+1 or -1), the sign given by bit j of i
        let mut s = Vec::with_capacity(n);
        s.push(allinv);
        for i in 1..n {
            let lg_i = (32 - 1 - (i as u32).leading_zeros()) as usize;
            let k = 1 << lg_i;
            let u_lg_i_sq = challenges_sq[(lg_n - 1) - lg_i];
            s.push(s[i - k] * u_lg_i_sq);
        }

        return Ok((challenges_sq, challenges_inv_sq, s))
    }

    ///Verify the proof against the commitment `P`.
    ///
    ///The factors and generators must be the ones the prover used, each of length `n`.
    pub fn verify(
        &self,
        n: usize,
        transcript: &mut Transcript,
        G_factors: &[Scalar],
        H_factors: &[Scalar],
        P: &RistrettoPoint,
        Q: &RistrettoPoint,
        G: &[RistrettoPoint],
        H: &[RistrettoPoint],
    ) -> Result<(), RangeProofError> {
        if G_factors.len() != n || H_factors.len() != n || G.len() != n || H.len() != n {
            return Err(RangeProofError::InvalidInnerProductInput(n))
        }
        let (u_sq, u_inv_sq, s) = self.verification_scalars(n, transcript)?;

        let g_times_a_times_s = G_factors.iter()
            .zip(s.iter())
            .map(|(g_i, s_i)| (self.a * s_i) * g_i);

        //1/s[i] is s[!i], and !i runs from n-1 to 0 as i runs from 0 to n-1
        let h_times_b_div_s = H_factors.iter()
            .zip(s.iter().rev())
            .map(|(h_i, s_i_inv)| (self.b * s_i_inv) * h_i);

        let neg_u_sq = u_sq.iter().map(|ui| -ui);
        let neg_u_inv_sq = u_inv_sq.iter().map(|ui| -ui);

        let expect_P = RistrettoPoint::vartime_multiscalar_mul(
            iter::once(self.a * self.b)
                .chain(g_times_a_times_s)
                .chain(h_times_b_div_s)
                .chain(neg_u_sq)
                .chain(neg_u_inv_sq),
            iter::once(Q)
                .chain(G.iter())
                .chain(H.iter())
                .chain(self.L_vec.iter())
                .chain(self.R_vec.iter()),
        );

        return match expect_P == *P {
            true => Ok(()),
            false => Err(RangeProofError::VerificationError)
        }
    }

    ///Size of the serialized proof in bytes.
    pub fn serialized_size(&self) -> usize {
        return (self.L_vec.len() * 2 + 2) * 32
    }

    ///Serialize as `L_0 | R_0 | ... | L_{k-1} | R_{k-1} | a | b`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_size());
        for (L, R) in self.L_vec.iter().zip(self.R_vec.iter()) {
            buf.extend_from_slice(&encode_point(L));
            buf.extend_from_slice(&encode_point(R));
        }
        buf.extend_from_slice(self.a.as_bytes());
        buf.extend_from_slice(self.b.as_bytes());
        return buf
    }

    ///Deserialize the layout written by `to_bytes`.
    pub fn from_bytes(slice: &[u8]) -> Result<InnerProductProof, RangeProofError> {
        let b = slice.len();
        if b % 32 != 0 {
            return Err(RangeProofError::FormatError)
        }
        let num_elements = b / 32;
        if num_elements < 2 || (num_elements - 2) % 2 != 0 {
            return Err(RangeProofError::FormatError)
        }
        let lg_n = (num_elements - 2) / 2;
        if lg_n >= 32 {
            return Err(RangeProofError::FormatError)
        }

        let mut L_vec: Vec<RistrettoPoint> = Vec::with_capacity(lg_n);
        let mut R_vec: Vec<RistrettoPoint> = Vec::with_capacity(lg_n);
        for i in 0..lg_n {
            let pos = 2 * i * 32;
            L_vec.push(decode_point(&slice[pos..pos + 32])
                .map_err(|_| RangeProofError::FormatError)?);
            R_vec.push(decode_point(&slice[pos + 32..pos + 64])
                .map_err(|_| RangeProofError::FormatError)?);
        }

        let pos = 2 * lg_n * 32;
        let a = decode_scalar(&slice[pos..pos + 32])
            .map_err(|_| RangeProofError::FormatError)?;
        let b = decode_scalar(&slice[pos + 32..pos + 64])
            .map_err(|_| RangeProofError::FormatError)?;

        return Ok(InnerProductProof { L_vec, R_vec, a, b })
    }
}
