/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Protocol constants: domain separation tags and size limits.
//!
//! The tags are part of the wire protocol.
//! Changing any of them makes proofs and signatures unverifiable by other implementations.

///Protocol label of the Bulletproofs transcript.
pub const BULLETPROOF_DOMAIN_TAG: &[u8] =               b"mc_bulletproof_transcript";
///Hash-to-point domain, used for key images and the ledger value generator.
pub const HASH_TO_POINT_DOMAIN_TAG: &[u8] =             b"mc_onetime_key_hash_to_point";
///Hash-to-scalar domain for one-time keys.
pub const HASH_TO_SCALAR_DOMAIN_TAG: &[u8] =            b"mc_onetime_key_hash_to_scalar";
///Challenge domain of the MLSAG ring signature.
pub const RING_MLSAG_CHALLENGE_DOMAIN_TAG: &[u8] =      b"mc_ring_mlsag_challenge";
///Domain of the value mask derived from a shared secret.
pub const AMOUNT_VALUE_DOMAIN_TAG: &[u8] =              b"mc_amount_value";
///Domain of the commitment blinding derived from a shared secret.
pub const AMOUNT_BLINDING_DOMAIN_TAG: &[u8] =           b"mc_amount_blinding";

///Protocol label of the transaction prefix digest transcript.
pub const TX_PREFIX_DIGEST_DOMAIN_TAG: &[u8] =          b"digestible";

///Commitment values are proven to be in `[0, 2^BIT_RANGE)`.
pub const BIT_RANGE: usize = 64;

///Number of generators derived per party.
pub const GENS_CAPACITY: usize = 64;

///Maximum number of parties (values) in one aggregated proof.
pub const PARTY_CAPACITY: usize = 64;

///Each input ring of a built transaction must contain exactly this many members.
pub const RING_SIZE: usize = 11;

///Maximum number of inputs in one transaction.
pub const MAX_INPUTS: usize = 16;
