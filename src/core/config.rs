use crate::core::error::{Result, TextIoError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub min_width: usize,
    pub padding: usize,
    pub pad_char: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_width: 8,
            padding: 2,
            pad_char: ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub json_indent: usize,
    pub xml_indent: usize,
    pub table: TableConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            json_indent: 4,
            xml_indent: 4,
            table: TableConfig::default(),
        }
    }
}

impl TextConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .map_err(|e| TextIoError::Configuration(e.to_string()))?
        } else {
            toml::from_str(&content)?
        };
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| TextIoError::Configuration(e.to_string()))?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
}

pub struct TextConfigBuilder {
    config: TextConfig,
}

impl TextConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: TextConfig::default(),
        }
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.config.table.min_width = width;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.config.table.padding = padding;
        self
    }

    pub fn pad_char(mut self, pad_char: char) -> Self {
        self.config.table.pad_char = pad_char;
        self
    }

    pub fn json_indent(mut self, indent: usize) -> Self {
        self.config.json_indent = indent;
        self
    }

    pub fn xml_indent(mut self, indent: usize) -> Self {
        self.config.xml_indent = indent;
        self
    }

    pub fn build(self) -> TextConfig {
        self.config
    }
}

impl Default for TextConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_tab_flex_layout() {
        let config = TextConfig::default();
        assert_eq!(config.table.min_width, 8);
        assert_eq!(config.table.padding, 2);
        assert_eq!(config.table.pad_char, ' ');
        assert_eq!(config.json_indent, 4);
        assert_eq!(config.xml_indent, 4);
    }

    #[test]
    fn test_builder() {
        let config = TextConfigBuilder::new()
            .min_width(4)
            .padding(1)
            .pad_char('.')
            .json_indent(2)
            .build();

        assert_eq!(config.table.min_width, 4);
        assert_eq!(config.table.padding, 1);
        assert_eq!(config.table.pad_char, '.');
        assert_eq!(config.json_indent, 2);
        assert_eq!(config.xml_indent, 4);
    }

    #[test]
    fn test_toml_and_json_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = TextConfigBuilder::new().padding(3).xml_indent(2).build();

        let toml_path = temp_dir.path().join("textkit.toml");
        config.to_file(&toml_path).unwrap();
        assert_eq!(TextConfig::from_file(&toml_path).unwrap(), config);

        let json_path = temp_dir.path().join("textkit.json");
        config.to_file(&json_path).unwrap();
        assert_eq!(TextConfig::from_file(&json_path).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        std::fs::write(&path, "json_indent = 2\n\n[table]\npadding = 1\n").unwrap();

        let config = TextConfig::from_file(&path).unwrap();
        assert_eq!(config.json_indent, 2);
        assert_eq!(config.table.padding, 1);
        assert_eq!(config.table.min_width, 8);
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "json_indent = \"four\"").unwrap();

        assert!(matches!(
            TextConfig::from_file(&path),
            Err(TextIoError::Configuration(_))
        ));
    }
}
