use rand::Rng;

/// Request counter scoped to one server nonce.
///
/// The client nonce is fixed for the lifetime of the counter, so every
/// response computed under the same server nonce shares it while `nc`
/// advances.
#[derive(Debug)]
pub(crate) struct NonceCounter {
    count: u32,
    client_nonce: String,
}

impl NonceCounter {
    /// Fresh counter with a random client nonce: 16 bytes from the
    /// thread-local CSPRNG, hex encoded.
    pub(crate) fn new() -> Self {
        let mut rng = rand::thread_rng();
        let nonce_bytes: [u8; 16] = rng.gen();
        Self {
            count: 0,
            client_nonce: hex::encode(nonce_bytes),
        }
    }

    /// Next value for the `nc` field. The first call returns 1.
    pub(crate) fn advance(&mut self) -> u32 {
        self.count += 1;
        self.count
    }

    pub(crate) fn client_nonce(&self) -> &str {
        &self.client_nonce
    }
}
