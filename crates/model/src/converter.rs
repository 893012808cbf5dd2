//! The versioned converter contract.
//!
//! Every supported server release gets its own set of converters, one per
//! [`crate::ResourceKind`], each mapping that release's wire payload `D` onto
//! one internal model type `E`. The rest of the lab programs only against `E`.
//!
//! ## Contract
//!
//! - **Pure**: no I/O, no mutation of the payload, no shared mutable state.
//!   Instances may be shared between threads freely.
//! - **Deterministic**: the same payload always yields an equal result.
//! - **Total on conforming input**: a payload matching the release's
//!   documented schema always converts. A payload that does not is a
//!   [`ConversionError::DataIntegrity`] returned to the caller, never patched
//!   up silently.
//! - **Closed-world output**: unknown wire enum values are mapped to the
//!   enumeration's designated fallback (or dropped where no fallback exists),
//!   never left unmapped.
//!
//! Supporting a new server release means adding a new converter set; existing
//! sets are never edited in place.

use crate::ConversionError;

/// Converts one release-specific wire payload into an internal model value.
pub trait Converter<D, E>: Send + Sync {
    fn convert(&self, payload: &D) -> Result<E, ConversionError>;

    /// Converts every payload in order, stopping at the first failure.
    fn convert_all(&self, payloads: &[D]) -> Result<Vec<E>, ConversionError> {
        payloads.iter().map(|payload| self.convert(payload)).collect()
    }
}
