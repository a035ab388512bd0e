//! Runs one round of each protocol over P-256 and prints the results.

use chord_curve::arithmetic::{Modular, Scalar};
use chord_curve::curve::{Curve, NistP256};
use chord_curve::keypair::Keypair;
use chord_curve::U256;

use chord_protocols::{dh, pedersen::PedersenGenerator, schnorr};

use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = OsRng;

    println!("------ Diffie-Hellman over {} ------", NistP256::NAME);
    let alice = Keypair::<NistP256>::random(&mut rng)?;
    let bob = Keypair::<NistP256>::random(&mut rng)?;
    let shared_alice = dh::shared_point(&alice, bob.pubkey());
    let shared_bob = dh::shared_point(&bob, alice.pubkey());
    println!("shared point: {}", shared_alice);
    println!("exchange works? {}", shared_alice == shared_bob);

    println!("------ Schnorr signature ------");
    let signer = Keypair::<NistP256>::random(&mut rng)?;
    let digest = Keccak256::digest(b"hello, world");
    let signature = schnorr::sign(&mut rng, &signer, &digest)?;
    println!(
        "signature verifies? {}",
        schnorr::verify(signer.pubkey(), &digest, &signature)
    );

    println!("------ Pedersen commitment ------");
    let generator = PedersenGenerator::<NistP256>::new(&mut rng);
    let secret = Scalar::new(U256::from_u64(20_220_101));
    let commitment = generator.commit(&mut rng, secret);
    println!("commitment: {}", commitment.commitment());
    println!("opens? {}", generator.open(secret, &commitment));

    Ok(())
}
