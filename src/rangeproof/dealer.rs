/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Dealer states of the aggregated range proof protocol.
//!
//! The dealer owns the transcript. It collects each round's messages from all
//! parties, absorbs them, and hands the resulting challenge back to the parties.

#![allow(non_snake_case)]

use std::iter;

use merlin::Transcript;
use rand::{thread_rng, RngCore, CryptoRng};
use tracing::{debug, warn};

use crate::curve::*;
use crate::errors::RangeProofError;
use crate::pedersen::PedersenGens;
use crate::transcript::TranscriptProtocol;
use super::generators::BulletproofGens;
use super::inner_product::InnerProductProof;
use super::messages::*;
use super::proof::RangeProof;
use super::util;

///Entry point for the dealer of the aggregated range proof protocol.
pub struct Dealer {}

impl Dealer {
    ///Create a dealer for `m` parties each proving an `n`-bit range.
    ///
    ///A copy of `transcript` is kept so that `receive_shares` can verify the assembled proof.
    pub fn new<'a>(
        bp_gens: &'a BulletproofGens,
        pc_gens: &'a PedersenGens,
        mut transcript: Transcript,
        n: usize,
        m: usize,
    ) -> Result<DealerAwaitingBitCommitments<'a>, RangeProofError> {
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

        let initial_transcript = transcript.clone();
        transcript.rangeproof_domain_sep(n as u64, m as u64);
        debug!(n, m, "range proof dealer created");

        return Ok(DealerAwaitingBitCommitments {
            bp_gens,
            pc_gens,
            transcript,
            initial_transcript,
            n,
            m
        })
    }
}

///A dealer waiting for every party's `BitCommitment`.
pub struct DealerAwaitingBitCommitments<'a> {
    bp_gens: &'a BulletproofGens,
    pc_gens: &'a PedersenGens,
    transcript: Transcript,
    initial_transcript: Transcript,
    n: usize,
    m: usize

} impl<'a> DealerAwaitingBitCommitments<'a> {
    ///Absorb the parties' bit commitments, in party order, and derive `(y, z)`.
    pub fn receive_bit_commitments(
        mut self,
        bit_commitments: Vec<BitCommitment>
    ) -> Result<(DealerAwaitingPolyCommitments<'a>, BitChallenge), RangeProofError> {
        if self.m != bit_commitments.len() {
            return Err(RangeProofError::WrongNumBitCommitments {
                expected: self.m,
                actual: bit_commitments.len()
            })
        }

        for vc in bit_commitments.iter() {
            self.transcript.append_point(b"V", &vc.V_j);
        }

        let A: RistrettoPoint = bit_commitments.iter().map(|vc| vc.A_j).sum();
        let S: RistrettoPoint = bit_commitments.iter().map(|vc| vc.S_j).sum();

        self.transcript.append_point(b"A", &A);
        self.transcript.append_point(b"S", &S);

        let y = self.transcript.challenge_scalar(b"y");
        let z = self.transcript.challenge_scalar(b"z");
        let bit_challenge = BitChallenge { y, z };
        debug!(parties = self.m, "bit commitments received");

        return Ok((
            DealerAwaitingPolyCommitments {
                n: self.n,
                m: self.m,
                transcript: self.transcript,
                initial_transcript: self.initial_transcript,
                bp_gens: self.bp_gens,
                pc_gens: self.pc_gens,
                bit_challenge,
                bit_commitments,
                A,
                S
            },
            bit_challenge
        ))
    }
}

///A dealer which has sent the `BitChallenge`
///and waits for every party's `PolyCommitment`.
pub struct DealerAwaitingPolyCommitments<'a> {
    n: usize,
    m: usize,
    transcript: Transcript,
    initial_transcript: Transcript,
    bp_gens: &'a BulletproofGens,
    pc_gens: &'a PedersenGens,
    bit_challenge: BitChallenge,
    bit_commitments: Vec<BitCommitment>,
    A: RistrettoPoint,
    S: RistrettoPoint

} impl<'a> DealerAwaitingPolyCommitments<'a> {
    ///Absorb the sums of the parties' `T_1` and `T_2` and derive `x`.
    pub fn receive_poly_commitments(
        mut self,
        poly_commitments: Vec<PolyCommitment>
    ) -> Result<(DealerAwaitingProofShares<'a>, PolyChallenge), RangeProofError> {
        if self.m != poly_commitments.len() {
            return Err(RangeProofError::WrongNumPolyCommitments {
                expected: self.m,
                actual: poly_commitments.len()
            })
        }

        let T_1: RistrettoPoint = poly_commitments.iter().map(|pc| pc.T_1_j).sum();
        let T_2: RistrettoPoint = poly_commitments.iter().map(|pc| pc.T_2_j).sum();

        self.transcript.append_point(b"T_1", &T_1);
        self.transcript.append_point(b"T_2", &T_2);

        let x = self.transcript.challenge_scalar(b"x");
        let poly_challenge = PolyChallenge { x };
        debug!(parties = self.m, "poly commitments received");

        return Ok((
            DealerAwaitingProofShares {
                n: self.n,
                m: self.m,
                transcript: self.transcript,
                initial_transcript: self.initial_transcript,
                bp_gens: self.bp_gens,
                pc_gens: self.pc_gens,
                bit_challenge: self.bit_challenge,
                bit_commitments: self.bit_commitments,
                A: self.A,
                S: self.S,
                poly_challenge,
                poly_commitments,
                T_1,
                T_2
            },
            poly_challenge
        ))
    }
}

///A dealer which has sent the `PolyChallenge` and waits for every party's `ProofShare`.
pub struct DealerAwaitingProofShares<'a> {
    n: usize,
    m: usize,
    transcript: Transcript,
    initial_transcript: Transcript,
    bp_gens: &'a BulletproofGens,
    pc_gens: &'a PedersenGens,
    bit_challenge: BitChallenge,
    bit_commitments: Vec<BitCommitment>,
    poly_challenge: PolyChallenge,
    poly_commitments: Vec<PolyCommitment>,
    A: RistrettoPoint,
    S: RistrettoPoint,
    T_1: RistrettoPoint,
    T_2: RistrettoPoint

} impl<'a> DealerAwaitingProofShares<'a> {
    ///Combine the shares into a proof, without checking it.
    fn assemble_shares(&mut self, proof_shares: &[ProofShare]) -> Result<RangeProof, RangeProofError> {
        if self.m != proof_shares.len() {
            return Err(RangeProofError::WrongNumProofShares {
                expected: self.m,
                actual: proof_shares.len()
            })
        }

        let bad_shares: Vec<usize> = proof_shares.iter()
            .enumerate()
            .filter_map(|(j, share)| share.check_size(self.n, self.bp_gens, j).err().map(|_| j))
            .collect();
        if !bad_shares.is_empty() {
            warn!(?bad_shares, "proof shares with the wrong size");
            return Err(RangeProofError::MalformedProofShares { bad_shares })
        }

        let t_x: Scalar = proof_shares.iter().map(|ps| ps.t_x).sum();
        let t_x_blinding: Scalar = proof_shares.iter().map(|ps| ps.t_x_blinding).sum();
        let e_blinding: Scalar = proof_shares.iter().map(|ps| ps.e_blinding).sum();

        self.transcript.append_scalar(b"t_x", &t_x);
        self.transcript.append_scalar(b"t_x_blinding", &t_x_blinding);
        self.transcript.append_scalar(b"e_blinding", &e_blinding);

        //binds the inner-product argument to the rest of the proof
        let w = self.transcript.challenge_scalar(b"w");
        let Q = w * self.pc_gens.B;

        let nm = self.n * self.m;
        let G_factors: Vec<Scalar> = iter::repeat(Scalar::one()).take(nm).collect();
        let H_factors: Vec<Scalar> = util::exp_iter(self.bit_challenge.y.invert())
            .take(nm)
            .collect();

        let l_vec: Vec<Scalar> = proof_shares.iter()
            .flat_map(|ps| ps.l_vec.iter().copied())
            .collect();
        let r_vec: Vec<Scalar> = proof_shares.iter()
            .flat_map(|ps| ps.r_vec.iter().copied())
            .collect();

        let ipp_proof = InnerProductProof::create(
            &mut self.transcript,
            &Q,
            &G_factors,
            &H_factors,
            self.bp_gens.G(self.n, self.m).copied().collect(),
            self.bp_gens.H(self.n, self.m).copied().collect(),
            l_vec,
            r_vec
        )?;
        debug!(n = self.n, m = self.m, rounds = ipp_proof.L_vec.len(), "range proof assembled");

        return Ok(RangeProof {
            A: self.A,
            S: self.S,
            T_1: self.T_1,
            T_2: self.T_2,
            t_x,
            t_x_blinding,
            e_blinding,
            ipp_proof
        })
    }

    ///Assemble the proof and verify it.
    ///
    ///If it does not verify, each share is audited and the offending
    ///party indices are returned in `MalformedProofShares`.
    pub fn receive_shares(self, proof_shares: &[ProofShare]) -> Result<RangeProof, RangeProofError> {
        return self.receive_shares_with_rng(proof_shares, &mut thread_rng())
    }

    ///`receive_shares`, using `rng` for the verification weights.
    pub fn receive_shares_with_rng<R: RngCore + CryptoRng>(
        mut self,
        proof_shares: &[ProofShare],
        rng: &mut R
    ) -> Result<RangeProof, RangeProofError> {
        let proof = self.assemble_shares(proof_shares)?;

        let Vs: Vec<RistrettoPoint> = self.bit_commitments.iter().map(|vc| vc.V_j).collect();

        let transcript = &mut self.initial_transcript;
        if proof.verify_multiple_with_rng(self.bp_gens, self.pc_gens, transcript, &Vs, self.n, rng).is_ok() {
            return Ok(proof)
        }

        let mut bad_shares = Vec::new();
        for (j, share) in proof_shares.iter().enumerate() {
            let audit = share.audit_share(
                self.bp_gens,
                self.pc_gens,
                j,
                &self.bit_commitments[j],
                &self.bit_challenge,
                &self.poly_commitments[j],
                &self.poly_challenge
            );
            if audit.is_err() {
                bad_shares.push(j);
            }
        }
        warn!(?bad_shares, "assembled range proof failed verification");
        return Err(RangeProofError::MalformedProofShares { bad_shares })
    }

    ///Assemble the proof without verifying it.
    ///
    ///Only for shares from parties the dealer trusts, such as the local parties of `prove_multiple`.
    pub fn receive_trusted_shares(mut self, proof_shares: &[ProofShare]) -> Result<RangeProof, RangeProofError> {
        return self.assemble_shares(proof_shares)
    }
}
