//! Content fingerprinting for founder-video requests.
//!
//! A [`VideoBrief`] holds the fields that determine what a generated video
//! looks like. Two briefs with the same [`ContentFingerprint`] describe the
//! same desired video, so a stored video carrying that fingerprint can be
//! served again instead of asking the video agent for a new one.
//!
//! Identifiers (company, creator, user) and the force-regenerate flag are
//! deliberately not part of the brief.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hashing::sha256_hex;

/// The semantic payload of a video generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoBrief {
    pub company_name: String,
    pub use_case: String,
    pub founder_name: String,
    pub founder_role: String,
    pub interesting_context: String,
}

/// SHA-256 hex digest over a [`VideoBrief`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    /// Wrap a digest read back from storage.
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl VideoBrief {
    /// Compute the fingerprint of this brief.
    ///
    /// The digest is taken over a canonical JSON object of the five fields,
    /// so it is stable across processes and releases as long as the field
    /// names do not change.
    pub fn fingerprint(&self) -> ContentFingerprint {
        let fields = [
            ("company_name", &self.company_name),
            ("use_case", &self.use_case),
            ("founder_name", &self.founder_name),
            ("founder_role", &self.founder_role),
            ("interesting_context", &self.interesting_context),
        ];
        let mut canonical = String::from("{");
        for (i, (name, value)) in fields.into_iter().enumerate() {
            if i > 0 {
                canonical.push(',');
            }
            canonical.push_str(&Value::from(name).to_string());
            canonical.push(':');
            canonical.push_str(&Value::from(value.as_str()).to_string());
        }
        canonical.push('}');
        ContentFingerprint(sha256_hex(canonical.as_bytes()))
    }
}
