// SPDX short identifier: Unlicense

#![allow(dead_code)]

use rand::{rngs::StdRng, SeedableRng};

use rct_bulletproofs::{
    common::*,
    constants::RING_SIZE,
    address::{AccountKey, PublicAddress},
    transaction::{TxOut, InputCredential}
};

pub fn seeded_rng(seed: u64) -> StdRng {
    return StdRng::seed_from_u64(seed)
}

///An output of `value` to `recipient`, under a random transaction key.
pub fn tx_out(value: u64, recipient: &PublicAddress, rng: &mut StdRng) -> TxOut {
    return TxOut::new(value, recipient, &random_scalar_with_rng(rng), Vec::new())
}

///`RING_SIZE - 1` outputs to random accounts.
pub fn decoys(rng: &mut StdRng) -> Vec<TxOut> {
    return (0..RING_SIZE - 1)
        .map(|i| {
            let stranger = AccountKey::generate_with_rng(rng);
            tx_out(1000 + i as u64, &stranger.public_address(), rng)
        })
        .collect()
}

///A credential spending a fresh output of `value` owned by `owner`, hidden among decoys.
pub fn input_credential(owner: &AccountKey, value: u64, rng: &mut StdRng) -> InputCredential {
    let real_output = tx_out(value, &owner.public_address(), rng);
    let mut ring = decoys(rng);
    ring.push(real_output.clone());

    let onetime_private_key = owner.onetime_private_key(&real_output.public_key);
    return InputCredential::new(real_output, ring, onetime_private_key, *owner.view_private_key())
        .unwrap()
}
