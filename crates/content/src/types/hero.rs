//! Hero screen identity.

use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroIdentity {
    pub name: String,
    pub tagline: String,
    /// Rotating role strings shown under the name.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub email: String,
}
