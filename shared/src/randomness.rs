use rand::{CryptoRng, RngCore};

use crate::error::WheelError;

/// Picks where the wheel stops: `min_spin_degrees` of guaranteed turns plus a
/// uniform offset in `[0, 360)`. Only cryptographically strong generators are
/// accepted and there is no weaker fallback.
pub fn secure_random_angle<R>(rng: &mut R, min_spin_degrees: f64) -> Result<f64, WheelError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = [0u8; 4];
    rng.try_fill_bytes(&mut buf)
        .map_err(|e| WheelError::Randomness(e.to_string()))?;
    let unit = u32::from_le_bytes(buf) as f64 / 4_294_967_296.0;
    Ok(unit * 360.0 + min_spin_degrees)
}
