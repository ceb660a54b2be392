use sha2::{Digest, Sha256};

const FILENAME_HASH_LENGTH: usize = 20;

pub fn hash_content(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

pub fn hash_parts<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = Sha256::new();

    for part in parts {
        hasher.update(part);
        hasher.update([0]);
    }

    hex::encode(hasher.finalize())
}

pub fn filename_hash(content: &[u8]) -> String {
    let mut hash = hash_content(content);
    hash.truncate(FILENAME_HASH_LENGTH);
    hash
}
