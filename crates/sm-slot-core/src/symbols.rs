//! Symbol alphabet for the reel strips

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Index of a symbol in the alphabet. Doubles as its payout rank: id 0 is
/// the lowest paying symbol, the last id the highest.
pub type SymbolId = u8;

/// Ordered alphabet of reel symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    names: Vec<String>,
}

impl Alphabet {
    /// Create a validated alphabet from ordered symbol names.
    pub fn new(names: Vec<String>) -> Result<Self, ConfigError> {
        let alphabet = Self { names };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// The classic 13-symbol band, "A" (cherries) up to "M" (top prize).
    pub fn classic() -> Self {
        Self {
            names: ('A'..='M').map(String::from).collect(),
        }
    }

    /// Check alphabet invariants. Deserialized alphabets must pass through
    /// here before an engine is built on them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.names.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.names.len() > SymbolId::MAX as usize + 1 {
            return Err(ConfigError::AlphabetTooLarge(self.names.len()));
        }
        for (i, name) in self.names.iter().enumerate() {
            if self.names[..i].contains(name) {
                return Err(ConfigError::DuplicateSymbol(name.clone()));
            }
        }
        Ok(())
    }

    /// Number of symbols on the band.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name for a symbol id.
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// All symbol ids in rank order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        (0..self.names.len()).map(|id| id as SymbolId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_alphabet() {
        let alphabet = Alphabet::classic();
        assert_eq!(alphabet.len(), 13);
        assert_eq!(alphabet.name(0), Some("A"));
        assert_eq!(alphabet.name(12), Some("M"));
        assert_eq!(alphabet.name(13), None);
        assert!(alphabet.validate().is_ok());
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            Alphabet::new(Vec::new()),
            Err(ConfigError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let result = Alphabet::new(vec!["A".into(), "B".into(), "A".into()]);
        assert!(matches!(result, Err(ConfigError::DuplicateSymbol(name)) if name == "A"));
    }

    #[test]
    fn test_ids_cover_alphabet() {
        let alphabet = Alphabet::classic();
        let ids: Vec<SymbolId> = alphabet.ids().collect();
        assert_eq!(ids.len(), 13);
        assert_eq!(ids.first(), Some(&0));
        assert_eq!(ids.last(), Some(&12));
    }
}
