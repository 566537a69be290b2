use blake3::Hash;

/// Synthesised change counter for pasteboards that do not expose one.
///
/// The counter advances whenever the observed content fingerprint differs
/// from the previous observation. Copying identical content twice is
/// therefore invisible, which the history would collapse anyway.
#[derive(Debug, Default)]
pub struct FingerprintGeneration {
    counter: u64,
    last: Option<Hash>,
}

impl FingerprintGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation and return the generation it belongs to.
    pub fn observe(&mut self, fingerprint: Option<Hash>) -> u64 {
        if fingerprint != self.last {
            self.counter += 1;
            self.last = fingerprint;
        }
        self.counter
    }
}

pub fn text_fingerprint(text: &str) -> Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"text\0");
    hasher.update(text.as_bytes());
    hasher.finalize()
}

pub fn image_fingerprint(width: usize, height: usize, rgba: &[u8]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"image\0");
    hasher.update(&(width as u64).to_le_bytes());
    hasher.update(&(height as u64).to_le_bytes());
    hasher.update(rgba);
    hasher.finalize()
}
