//! Name-resolution failure detection.
//!
//! `reqwest` does not expose a typed DNS error; the resolver failure is buried
//! somewhere in the source chain (hyper-util's connect error, then an
//! `io::Error` from the resolver). We walk the chain and match on the
//! messages the resolvers produce.
//!
use std::error::Error;

const MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
    "nodename nor servname provided",
    "temporary failure in name resolution",
];

/// True when any error in the chain starting at `error` reports a failed
/// host name lookup.
pub fn is_name_resolution_failure(error: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        let text = err.to_string().to_ascii_lowercase();
        if MARKERS.iter().any(|m| text.contains(m)) {
            return true;
        }
        current = err.source();
    }
    false
}
