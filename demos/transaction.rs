// SPDX short identifier: Unlicense

use rct_bulletproofs::{
    common::*,
    constants::RING_SIZE,
    address::AccountKey,
    transaction::{TxOut, InputCredential, TransactionBuilder, Tx}
};

fn main() {
    //Alice owns one output worth 1000 atomic units
    let alice = AccountKey::generate();
    let bob = AccountKey::generate();
    let owned = TxOut::new(1000, &alice.public_address(), &random_scalar(), Vec::new());

    //Decoys, which on a real ledger would be sampled from existing outputs
    let mut ring: Vec<TxOut> = (1..RING_SIZE)
        .map(|i| TxOut::new(i as u64, &AccountKey::generate().public_address(), &random_scalar(), Vec::new()))
        .collect();
    ring.push(owned.clone());

    //Alice recognizes the output as hers, and derives the key to spend it
    assert!(alice.owns(&owned.target_key, &owned.public_key));
    let onetime_private_key = alice.onetime_private_key(&owned.public_key);
    let input = InputCredential::new(owned, ring, onetime_private_key, *alice.view_private_key())
        .expect("Real software should have proper error handling.");

    //Pay Bob 750, with 240 change back to Alice and a fee of 10
    let mut builder = TransactionBuilder::new(10, 1_000_000);
    builder.add_input(input);
    builder.add_output(750, &bob.public_address(), Vec::new());
    builder.add_output(240, &alice.public_address(), Vec::new());
    let tx = builder.build()
        .expect("Real software should have proper error handling.");

    //Anyone can verify the transaction
    tx.verify().expect("Real software should have proper error handling.");

    //Transactions can be serialized, see the to_bytes feature
    let bytes = tx.to_bytes().expect("Real software should have proper error handling.");
    let tx = Tx::from_bytes(&bytes).expect("Real software should have proper error handling.");
    println!("transaction: {} bytes, key image {}", bytes.len(), point_to_hex(&tx.key_images()[0]));

    //Bob scans the outputs for his own and reads the amount
    for output in tx.prefix.outputs.iter() {
        if bob.owns(&output.target_key, &output.public_key) {
            let (value, _) = output.get_value(bob.view_private_key())
                .expect("Real software should have proper error handling.");
            println!("Bob received {value}");
        }
    }
}
