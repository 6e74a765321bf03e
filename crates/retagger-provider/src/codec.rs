//! Conversion between native tag encodings and the canonical forms.

use crate::tags::{TagItem, TagMap};

/// Converts between a provider's native tag encoding and the canonical
/// representations.
///
/// AWS services disagree on what a tag container looks like: CloudWatch Logs
/// and Lambda use an unordered map, CloudFront, EC2, RDS, and S3 use an
/// ordered list of pairs. Each adapter implements this trait for its own
/// native container so the reconciliation contract stays uniform.
///
/// Both directions are pure and total. `to_map` of an empty container is an
/// empty map. `from_canonical` of an empty sequence is a present, zero-entry
/// container (never an absent one), so downstream writes always carry an
/// explicit tag container.
pub trait TagCodec {
    /// The provider's native tag container.
    type Native;

    /// Normalize a native container into the unordered lookup form.
    ///
    /// Duplicate names in list-shaped containers collapse to the last
    /// occurrence. Tag content passes through verbatim, empty names and
    /// values included; validation is the reconciliation engine's concern.
    fn to_map(&self, native: &Self::Native) -> TagMap;

    /// Encode a canonical sequence into the native container, preserving
    /// order where the native representation is ordered.
    fn from_canonical(&self, items: &[TagItem]) -> Self::Native;
}
