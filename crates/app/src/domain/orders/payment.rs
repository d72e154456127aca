//! Payment identifier generation.

use std::iter;

use jiff::Timestamp;
use rand::Rng;

/// Prefix shared by every generated payment identifier.
pub const PAYMENT_ID_PREFIX: &str = "PAY";

/// Number of random base-36 characters appended to each identifier.
pub const PAYMENT_ID_SUFFIX_LEN: usize = 9;

/// Mint a payment identifier of the form `PAY_{unix_millis}_{suffix}`.
///
/// The millisecond component orders identifiers by issue time and the random
/// suffix separates identifiers minted in the same millisecond. Nothing here is
/// meant to be unguessable; no money moves.
#[must_use]
pub fn generate_payment_id() -> String {
    generate_payment_id_at(Timestamp::now())
}

pub(crate) fn generate_payment_id_at(now: Timestamp) -> String {
    let mut rng = rand::thread_rng();

    let suffix: String = iter::repeat_with(|| rng.gen_range(0..36_u32))
        .filter_map(|digit| char::from_digit(digit, 36))
        .take(PAYMENT_ID_SUFFIX_LEN)
        .collect();

    format!("{PAYMENT_ID_PREFIX}_{}_{suffix}", now.as_millisecond())
}
