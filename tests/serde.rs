// zkSync Transfer Library
// Written in 2026 by
//   zkSync Rust Contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//

#![cfg(feature = "serde")]

use std::str::FromStr;

use serde_test::{assert_de_tokens_error, assert_tokens, Token};
use zksync_transfer::blockdata::transaction::{EthereumSignature, TxSignature};
use zksync_transfer::{Address, SignedTransaction, Transfer, TxType};

const REQUEST: &str = r#"{
    "tx": {
      "type": "Transfer",
      "accountId": 1,
      "from": "0x36615cf349d7f6344891b1e7ca7c72883f5dc049",
      "to": "0x1234567812345678123456781234567812345678",
      "token": 0,
      "amount": "0",
      "fee": "37500000000000",
      "nonce": 2,
      "signature": {
        "pubKey": "07f86efb9bf58d5ebf23042406cb43e9363879ff79223be05b7feac1dbc58c86",
        "signature": "042c7356c3970c5ab620e1eaf0a9e39563edc9383072ac33a29398f11678b2a3acdc40ff05acd225b6a71962cfabfa6012fae8492106987bcd48135fefa09c02"
      }
    },
    "ethereumSignature": {
      "type": "EthereumSignature",
      "signature": "0xbe7a011c0b03a2ab8eceb3f51ec3055e5998b025e3e41a320f6b00532a4c49604608fe7b9c36d837c36817bbaf5570197484281dd45d83f2d9ef867b7454b91e1b"
    }
}"#;

#[test]
fn deserialize_signed_request() {
    let signed: SignedTransaction = serde_json::from_str(REQUEST).unwrap();

    assert_eq!(
        signed.tx,
        Transfer {
            tx_type: TxType::Transfer,
            account_id: 1,
            from: "0x36615cf349d7f6344891b1e7ca7c72883f5dc049".to_string(),
            to: "0x1234567812345678123456781234567812345678".to_string(),
            token: 0,
            amount: "0".to_string(),
            fee: "37500000000000".to_string(),
            nonce: 2,
            signature: Some(TxSignature {
                pub_key: "07f86efb9bf58d5ebf23042406cb43e9363879ff79223be05b7feac1dbc58c86"
                    .to_string(),
                signature: "042c7356c3970c5ab620e1eaf0a9e39563edc9383072ac33a29398f11678b2a3acdc40ff05acd225b6a71962cfabfa6012fae8492106987bcd48135fefa09c02".to_string(),
            }),
            valid_from: 0,
            valid_until: 0,
        }
    );
    assert_eq!(
        signed.ethereum_signature,
        Some(EthereumSignature {
            sig_type: "EthereumSignature".to_string(),
            signature: "0xbe7a011c0b03a2ab8eceb3f51ec3055e5998b025e3e41a320f6b00532a4c49604608fe7b9c36d837c36817bbaf5570197484281dd45d83f2d9ef867b7454b91e1b".to_string(),
        })
    );
    assert_eq!(signed.tx.serialize().unwrap().len(), 74);
}

#[test]
fn signatures_do_not_change_the_payload() {
    let signed: SignedTransaction = serde_json::from_str(REQUEST).unwrap();
    let mut unsigned = signed.tx.clone();
    unsigned.signature = None;
    assert_eq!(signed.tx.serialize(), unsigned.serialize());
}

#[test]
fn time_bounds_are_read() {
    let json = r#"{
        "type": "Transfer",
        "accountId": 7,
        "from": "sync:36615cf349d7f6344891b1e7ca7c72883f5dc049",
        "to": "0x1234567812345678123456781234567812345678",
        "token": 3,
        "amount": "1000",
        "fee": "10",
        "nonce": 0,
        "validFrom": 1600000000,
        "validUntil": 1700000000
    }"#;
    let tx: Transfer = serde_json::from_str(json).unwrap();
    assert_eq!(tx.valid_from, 1_600_000_000);
    assert_eq!(tx.valid_until, 1_700_000_000);
    assert_eq!(tx.signature, None);

    let value = serde_json::to_value(&tx).unwrap();
    assert_eq!(value["type"], "Transfer");
    assert_eq!(value["accountId"], 7);
    assert!(value.get("signature").is_none());
}

#[test]
fn serde_address() {
    let address = Address::from_str("sync:36615cf349d7f6344891b1e7ca7c72883f5dc049").unwrap();
    assert_tokens(
        &address,
        &[Token::Str("0x36615cf349d7f6344891b1e7ca7c72883f5dc049")],
    );
    assert_de_tokens_error::<Address>(
        &[Token::Str("0x1234")],
        "Address must be 20 bytes long, got 2",
    );
}
