//! Machine configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paytable::PayTable;
use crate::symbols::Alphabet;

/// How a reel picks the next symbol while spinning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinPolicy {
    /// Fixed circular strip: each step takes the cursor's successor on the
    /// band, like a physical reel.
    #[default]
    Mechanical,
    /// Fresh uniform draw on every step, like a modern video slot.
    Electronic,
}

/// Complete machine configuration: alphabet, paytable and stepping policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub alphabet: Alphabet,
    pub paytable: PayTable,
    pub policy: SpinPolicy,
}

impl MachineConfig {
    /// The classic 13-symbol cabinet this simulator models.
    pub fn classic(policy: SpinPolicy) -> Self {
        Self {
            alphabet: Alphabet::classic(),
            paytable: PayTable::classic(),
            policy,
        }
    }

    /// Fail fast on a config the engine cannot run. Called once at engine
    /// construction; never silently defaulted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alphabet.validate()?;
        self.paytable.validate(&self.alphabet)
    }

    /// Export as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import from JSON, validating the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::classic(SpinPolicy::Mechanical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MachineConfig::default().validate().is_ok());
        assert!(MachineConfig::classic(SpinPolicy::Electronic).validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_desynced_paytable() {
        let json = r#"{
            "alphabet": { "names": ["A", "B", "C"] },
            "paytable": { "multipliers": [1.0] },
            "policy": "Mechanical"
        }"#;
        let result = MachineConfig::from_json(json);
        assert!(matches!(
            result,
            Err(ConfigError::PaytableSize {
                expected: 3,
                got: 1
            })
        ));
    }

    #[test]
    fn test_json_export_reimports() {
        let config = MachineConfig::classic(SpinPolicy::Electronic);
        let json = config.to_json().unwrap();
        let reloaded = MachineConfig::from_json(&json).unwrap();
        assert_eq!(reloaded, config);
    }
}
