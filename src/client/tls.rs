//! TLS setup for `wss://` endpoints.

/// Install the ring crypto provider as the process default for rustls.
/// Safe to call repeatedly; later calls leave the installed provider alone.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
