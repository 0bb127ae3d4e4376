//! Decoder and formatter configuration

use serde::{Deserialize, Serialize};

/// Default limit on nested constructed nodes
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default number of spaces per indentation level
pub const DEFAULT_INDENT: usize = 2;

/// TLV decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum nesting depth of constructed nodes
    pub max_depth: usize,
    /// Maximum declared length accepted for a single node
    pub max_length: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: u64::MAX,
        }
    }
}

impl DecoderConfig {
    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum declared node length
    pub fn with_max_length(mut self, max_length: u64) -> Self {
        self.max_length = max_length;
        self
    }
}

/// TLV formatter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_default() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_length, u64::MAX);
    }

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::default().with_max_depth(4).with_max_length(1024);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.max_length, 1024);
    }

    #[test]
    fn test_formatter_config_default() {
        assert_eq!(FormatterConfig::default().indent, 2);
    }

    #[test]
    fn test_decoder_config_partial_deserialize() {
        let config: DecoderConfig = serde_json::from_str(r#"{"max_depth":4}"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.max_length, u64::MAX);

        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_formatter_config_deserialize() {
        let config: FormatterConfig = serde_json::from_str(r#"{"indent":4}"#).unwrap();
        assert_eq!(config.indent, 4);
        let config: FormatterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.indent, DEFAULT_INDENT);
    }
}
