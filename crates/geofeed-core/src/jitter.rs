//! Jitter: small random offsets so markers sharing a coordinate stay
//! individually clickable on the map.
//!
//! Offsets are drawn independently per axis from `[0, span)` degrees. The
//! random source is the thread-local RNG and is never seeded, so the same feed
//! renders at slightly different positions in every session.

use crate::types::LatLng;
use rand::Rng;

/// Default divisor: offsets stay below `1/150` degree (roughly 740 m).
pub const DEFAULT_JITTER_DIVISOR: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterAssigner {
    span: f64,
}

impl Default for JitterAssigner {
    fn default() -> Self {
        Self::with_divisor(DEFAULT_JITTER_DIVISOR)
    }
}

impl JitterAssigner {
    /// Offsets in `[0, 1 / divisor)`. A non-positive divisor disables jitter.
    pub fn with_divisor(divisor: f64) -> Self {
        let span = if divisor > 0.0 { 1.0 / divisor } else { 0.0 };
        Self { span }
    }

    /// An assigner that returns coordinates unchanged.
    pub fn disabled() -> Self {
        Self { span: 0.0 }
    }

    /// Upper (exclusive) bound of each offset, in degrees.
    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn apply(&self, coord: LatLng) -> LatLng {
        self.apply_with(coord, &mut rand::thread_rng())
    }

    /// Same as [`apply`](Self::apply) with a caller-supplied RNG.
    pub fn apply_with<R: Rng + ?Sized>(&self, coord: LatLng, rng: &mut R) -> LatLng {
        if self.span == 0.0 {
            return coord;
        }
        LatLng {
            lat: coord.lat + rng.gen::<f64>() * self.span,
            lng: coord.lng + rng.gen::<f64>() * self.span,
        }
    }
}
