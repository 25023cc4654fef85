use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fs;
use std::path::Path;

// ============================================================================
// Purchase Policy - Business rules that may change per venue
// ============================================================================

pub const DEFAULT_MAX_TICKETS: u32 = 20;
pub const DEFAULT_INFANTS_PER_ADULT: u32 = 1;

pub const ENV_POLICY_FILE: &str = "CINEMA_TICKETS_POLICY";
pub const ENV_MAX_TICKETS: &str = "CINEMA_TICKETS_MAX_TICKETS";
pub const ENV_INFANTS_PER_ADULT: &str = "CINEMA_TICKETS_INFANTS_PER_ADULT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    /// Maximum tickets of all types in a single purchase
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,

    /// How many infants one adult may hold on their lap.
    /// `None` turns the infant rule off.
    #[serde(default = "default_infants_per_adult")]
    pub infants_per_adult: Option<u32>,
}

fn default_max_tickets() -> u32 {
    DEFAULT_MAX_TICKETS
}

fn default_infants_per_adult() -> Option<u32> {
    Some(DEFAULT_INFANTS_PER_ADULT)
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets: default_max_tickets(),
            infants_per_adult: default_infants_per_adult(),
        }
    }
}

impl PurchasePolicy {
    /// Policy with the infant rule switched off
    pub fn without_infant_limit() -> Self {
        Self {
            infants_per_adult: None,
            ..Self::default()
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(&path)
            .with_context(|| format!("failed to read policy file '{}'", path.as_ref().display()))?;
        let policy: Self = serde_json::from_str(&s).context("failed to parse policy JSON")?;
        Ok(policy)
    }

    /// Load from `CINEMA_TICKETS_POLICY` if set, then apply per-field
    /// environment overrides.
    pub fn from_env() -> Result<Self> {
        let policy = match env_value(ENV_POLICY_FILE, std::env::var(ENV_POLICY_FILE))? {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        policy.with_overrides(
            env_value(ENV_MAX_TICKETS, std::env::var(ENV_MAX_TICKETS))?.as_deref(),
            env_value(ENV_INFANTS_PER_ADULT, std::env::var(ENV_INFANTS_PER_ADULT))?.as_deref(),
        )
    }

    fn with_overrides(
        mut self,
        max_tickets: Option<&str>,
        infants_per_adult: Option<&str>,
    ) -> Result<Self> {
        if let Some(value) = max_tickets {
            self.max_tickets = value
                .trim()
                .parse()
                .with_context(|| format!("invalid {} value '{}'", ENV_MAX_TICKETS, value))?;
        }

        if let Some(value) = infants_per_adult {
            self.infants_per_adult = match value.trim().to_ascii_lowercase().as_str() {
                "none" | "off" => None,
                other => Some(other.parse().with_context(|| {
                    format!("invalid {} value '{}'", ENV_INFANTS_PER_ADULT, value)
                })?),
            };
        }

        Ok(self)
    }

    /// Most infants allowed for the given number of adults, if limited
    pub fn infant_limit(&self, adults: u64) -> Option<u64> {
        self.infants_per_adult
            .map(|per_adult| adults.saturating_mul(u64::from(per_adult)))
    }
}

/// Unset is `None`; a value that is not valid unicode is an error
fn env_value(name: &str, value: Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            anyhow::bail!("{} is not valid unicode: {:?}", name, raw)
        }
    }
}
