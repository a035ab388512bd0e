use chord_curve::arithmetic::Point;
use chord_curve::curve::Curve;
use chord_curve::keypair::Keypair;

/// Computes the Diffie-Hellman shared point `priv_local * pub_remote`.
///
/// Both sides arrive at the same point because the public keys are
/// multiples of the base point: `a * (b * G) = b * (a * G)`.
pub fn shared_point<C: Curve>(local: &Keypair<C>, remote_pubkey: &Point<C>) -> Point<C> {
    remote_pubkey.scalar_mul(local.privkey())
}
