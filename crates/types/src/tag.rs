//! Requirement tags.
//!
//! A tag is a 32-byte bit set. The low bits of the last byte select the
//! trusted execution environment a task must run in.

use crate::Bytes32;
use serde::{Deserialize, Serialize};

/// Set when the task must run in an enclave.
pub const TEE_BIT: u8 = 0b0001;
/// Set along with [`TEE_BIT`] for Scone enclaves.
pub const SCONE_BIT: u8 = 0b0010;
/// Set along with [`TEE_BIT`] for Gramine enclaves.
pub const GRAMINE_BIT: u8 = 0b0100;

/// Enclave framework selected by a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeeFramework {
    /// Scone.
    Scone,
    /// Gramine.
    Gramine,
}

/// The tag with no requirement.
pub const NO_TEE_TAG: Bytes32 = Bytes32([0; 32]);

/// The tag of Scone tasks.
pub const TEE_SCONE_TAG: Bytes32 = tag_with_last_byte(TEE_BIT | SCONE_BIT);

/// The tag of Gramine tasks.
pub const TEE_GRAMINE_TAG: Bytes32 = tag_with_last_byte(TEE_BIT | GRAMINE_BIT);

const fn tag_with_last_byte(byte: u8) -> Bytes32 {
    let mut tag = [0; 32];
    tag[31] = byte;
    Bytes32(tag)
}

/// Whether the tag requires an enclave.
pub fn is_tee_tag(tag: &Bytes32) -> bool {
    tag.0[31] & TEE_BIT != 0
}

/// The enclave framework required by the tag, `None` for standard tags or
/// tags selecting zero or several frameworks.
pub fn tee_framework(tag: &Bytes32) -> Option<TeeFramework> {
    if !is_tee_tag(tag) {
        return None;
    }
    let byte = tag.0[31];
    match (byte & SCONE_BIT != 0, byte & GRAMINE_BIT != 0) {
        (true, false) => Some(TeeFramework::Scone),
        (false, true) => Some(TeeFramework::Gramine),
        _ => None,
    }
}

/// Whether every bit required by `required` is offered by `offered`.
pub fn tag_satisfies(offered: &Bytes32, required: &Bytes32) -> bool {
    offered
        .0
        .iter()
        .zip(required.0.iter())
        .all(|(o, r)| o & r == *r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frameworks() {
        assert_eq!(tee_framework(&NO_TEE_TAG), None);
        assert_eq!(tee_framework(&TEE_SCONE_TAG), Some(TeeFramework::Scone));
        assert_eq!(tee_framework(&TEE_GRAMINE_TAG), Some(TeeFramework::Gramine));
        assert_eq!(tee_framework(&tag_with_last_byte(0b0111)), None);
        assert_eq!(tee_framework(&tag_with_last_byte(0b0001)), None);
        assert!(is_tee_tag(&tag_with_last_byte(0b0001)));
        assert_eq!(
            TEE_SCONE_TAG.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000003"
        );
    }

    #[test]
    fn satisfies() {
        assert!(tag_satisfies(&TEE_SCONE_TAG, &NO_TEE_TAG));
        assert!(tag_satisfies(&TEE_SCONE_TAG, &tag_with_last_byte(TEE_BIT)));
        assert!(!tag_satisfies(&NO_TEE_TAG, &TEE_SCONE_TAG));
        assert!(!tag_satisfies(&TEE_GRAMINE_TAG, &TEE_SCONE_TAG));
    }
}
