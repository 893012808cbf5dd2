//! Server release resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lab_model::ConversionError;

/// A server release line with its own converter set.
///
/// A server is handled by the newest supported release that is not newer
/// than the server itself; wire formats only change between listed releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServerVersion {
    /// evitaDB 2024.8 up to (excluding) 2025.1.
    #[serde(rename = "2024.8")]
    V2024_8,
    /// evitaDB 2025.1 and newer.
    #[serde(rename = "2025.1")]
    V2025_1,
}

impl ServerVersion {
    /// Supported releases, oldest first.
    pub const SUPPORTED: [ServerVersion; 2] = [ServerVersion::V2024_8, ServerVersion::V2025_1];

    /// `(year, minor)` of the first server release this line covers.
    pub fn release(self) -> (u32, u32) {
        match self {
            ServerVersion::V2024_8 => (2024, 8),
            ServerVersion::V2025_1 => (2025, 1),
        }
    }

    /// Picks the converter set for a server reporting `reported`
    /// (e.g. `2024.8.3`, `2025.1.0-SNAPSHOT`).
    ///
    /// Fails with [`ConversionError::UnsupportedServerVersion`] if the string
    /// cannot be parsed or predates every supported release.
    pub fn resolve(reported: &str) -> Result<Self, ConversionError> {
        let unsupported = || ConversionError::UnsupportedServerVersion {
            version: reported.to_string(),
        };

        let release = parse_release(reported).ok_or_else(unsupported)?;
        let version = Self::SUPPORTED
            .into_iter()
            .rev()
            .find(|candidate| candidate.release() <= release)
            .ok_or_else(unsupported)?;

        debug!(reported, driver = %version, "Resolved server version");
        Ok(version)
    }
}

impl std::fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, minor) = self.release();
        write!(f, "{year}.{minor}")
    }
}

// `YEAR.MINOR[.PATCH][-suffix]` -> (YEAR, MINOR)
fn parse_release(raw: &str) -> Option<(u32, u32)> {
    let core = raw.trim().split(['-', '+']).next()?;
    let mut parts = core.split('.');
    let year = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    if let Some(patch) = parts.next() {
        patch.parse::<u32>().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some((year, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_newest_release_not_newer_than_server() {
        assert_eq!(ServerVersion::resolve("2024.8.3").unwrap(), ServerVersion::V2024_8);
        assert_eq!(ServerVersion::resolve("2024.11").unwrap(), ServerVersion::V2024_8);
        assert_eq!(ServerVersion::resolve("2025.1.0-SNAPSHOT").unwrap(), ServerVersion::V2025_1);
        assert_eq!(ServerVersion::resolve("2026.2.1").unwrap(), ServerVersion::V2025_1);
    }

    #[test]
    fn rejects_old_and_malformed_versions() {
        for raw in ["2024.5.0", "2023.12", "", "latest", "2024", "2024.8.x", "2024.8.1.2"] {
            assert!(
                matches!(
                    ServerVersion::resolve(raw),
                    Err(ConversionError::UnsupportedServerVersion { .. })
                ),
                "version {raw:?}"
            );
        }
    }
}
