#![allow(dead_code)]

use pgp::composed::{
    KeyType, Message, SecretKeyParamsBuilder, SignedPublicKey, SignedSecretKey,
    SubkeyParamsBuilder,
};
use pgp::crypto::ecc_curve::ECCCurve;
use pgp::types::Password;
use rand::thread_rng;

/// Generate an unprotected Ed25519 keypair with a Curve25519
/// encryption subkey, suitable as a message recipient.
pub fn generate_keypair(user_id: &str) -> (SignedSecretKey, SignedPublicKey) {
    let mut encryptkey = SubkeyParamsBuilder::default();
    encryptkey
        .key_type(KeyType::ECDH(ECCCurve::Curve25519))
        .can_sign(false)
        .can_encrypt(true)
        .can_authenticate(false);

    let mut key_params = SecretKeyParamsBuilder::default();
    key_params
        .key_type(KeyType::Ed25519Legacy)
        .can_certify(true)
        .can_sign(true)
        .can_encrypt(false)
        .primary_user_id(user_id.into())
        .subkeys(vec![encryptkey.build().unwrap()]);

    let secret_key = key_params.build().unwrap().generate(thread_rng()).unwrap();
    let signed_secret = secret_key
        .sign(&mut thread_rng(), &Password::from(""))
        .unwrap();
    let signed_public = SignedPublicKey::from(signed_secret.clone());

    (signed_secret, signed_public)
}

/// Armor a public key for feeding into the seal pipeline.
pub fn armored_public(key: &SignedPublicKey) -> String {
    key.to_armored_string(Default::default()).unwrap()
}

/// Decrypt an armored PGP MESSAGE with the given private key.
pub fn decrypt(armored: &str, secret: &SignedSecretKey) -> Vec<u8> {
    let (msg, _) = Message::from_armor(armored.as_bytes()).unwrap();
    let mut decrypted = msg.decrypt(&Password::from(""), secret).unwrap();
    decrypted.as_data_vec().unwrap()
}
