//! Simulated ledger
//!
//! Fabricates transaction identifiers and hashes for demo payments. Nothing
//! produced here has ever been submitted to a chain; real settlement must not
//! reuse these helpers.

use rand::Rng;

const ID_PREFIX: &str = "ARC_TX_";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// `ARC_TX_<unix millis>_<random base36>`
pub fn transaction_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}{}_{}", ID_PREFIX, chrono::Utc::now().timestamp_millis(), suffix)
}

/// `0x` followed by 32 random bytes in lowercase hex
pub fn transaction_hash() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
