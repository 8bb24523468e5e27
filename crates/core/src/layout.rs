//! Serializable snapshot of a project layout.
//!
//! [`ProjectLayout`] is an owned copy of every slot of a [`ProjectConfiguration`], for tooling
//! that writes the layout into project files or prints it.

use crate::{ProjectConfiguration, ProjectError, ProjectResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named slot and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub name: String,
    pub value: String,
}

impl LayoutEntry {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Every directory and extension slot of a project, in layout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// The project directory, or `None` for a schema-only layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub directories: Vec<LayoutEntry>,
    pub extensions: Vec<LayoutEntry>,
}

impl ProjectLayout {
    pub fn from_config(config: &ProjectConfiguration) -> Self {
        Self {
            root: config.root().map(str::to_owned),
            directories: config
                .directories()
                .into_iter()
                .map(|(name, path)| LayoutEntry::new(name, path))
                .collect(),
            extensions: config
                .extensions()
                .into_iter()
                .map(|(name, ext)| LayoutEntry::new(name, ext))
                .collect(),
        }
    }

    /// Looks up a directory slot by name, e.g. `"ocr_pages"`.
    pub fn directory(&self, name: &str) -> Option<&str> {
        find(&self.directories, name)
    }

    /// Looks up an extension slot by name, e.g. `"gray_image"`.
    pub fn extension(&self, name: &str) -> Option<&str> {
        find(&self.extensions, name)
    }

    pub fn to_json(&self) -> ProjectResult<String> {
        serde_json::to_string_pretty(self).map_err(ProjectError::Serialization)
    }

    pub fn from_json(json: &str) -> ProjectResult<Self> {
        serde_json::from_str(json).map_err(ProjectError::Deserialization)
    }

    pub fn to_yaml(&self) -> ProjectResult<String> {
        serde_yaml::to_string(self).map_err(ProjectError::YamlSerialization)
    }
}

fn find<'a>(entries: &'a [LayoutEntry], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.value.as_str())
}

/// One `name<TAB>value` line per slot, directories first.
impl fmt::Display for ProjectLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.directories.iter().chain(&self.extensions) {
            writeln!(f, "{}\t{}", entry.name, entry.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_config() {
        let config = ProjectConfiguration::new("/data/proj");
        let layout = config.layout();

        assert_eq!(layout.root.as_deref(), Some("/data/proj"));
        assert_eq!(layout.directories.len(), 10);
        assert_eq!(layout.extensions.len(), 4);
        assert_eq!(layout.directory("gray_images"), Some(config.gray_dir()));
        assert_eq!(layout.directory("ocr_pages"), Some(config.pages_dir()));
        assert_eq!(layout.extension("binary_image"), Some(".bin.png"));
        assert_eq!(layout.extension("config"), Some(".xml"));
        assert_eq!(layout.directory("Cleaned"), None);
    }

    #[test]
    fn test_json_round_trip() {
        let layout = ProjectConfiguration::new("/data/proj").layout();
        let json = layout.to_json().unwrap();
        assert_eq!(ProjectLayout::from_json(&json).unwrap(), layout);
    }

    #[test]
    fn test_schema_only_omits_root() {
        let layout = ProjectConfiguration::schema_only().layout();
        let json = layout.to_json().unwrap();
        assert!(!json.contains("\"root\""));

        let parsed = ProjectLayout::from_json(&json).unwrap();
        assert_eq!(parsed.root, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ProjectLayout::from_json("{not json"),
            Err(ProjectError::Deserialization(_))
        ));
    }

    #[test]
    fn test_yaml_lists_every_slot() {
        let layout = ProjectConfiguration::schema_only().layout();
        let yaml = layout.to_yaml().unwrap();
        for entry in layout.directories.iter().chain(&layout.extensions) {
            assert!(yaml.contains(&entry.name), "missing {}", entry.name);
        }
    }

    #[test]
    fn test_display_one_line_per_slot() {
        let layout = ProjectConfiguration::new("/data/proj").layout();
        let text = layout.to_string();
        assert_eq!(text.lines().count(), 14);
        assert!(text.starts_with("project_dir\t/data/proj"));
        assert!(text.ends_with("config\t.xml\n"));
    }
}
