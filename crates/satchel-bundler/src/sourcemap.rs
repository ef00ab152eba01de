//! Source map emission for development builds.

use crate::collect::Module;
use serde::Serialize;
use std::path::Path;

/// A source-map v3 document.
///
/// Mappings are left empty: the bundle is a plain concatenation, and carrying
/// the original sources inline is what DevTools needs to show them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    version: u32,
    file: String,
    sources: Vec<String>,
    sources_content: Vec<String>,
    names: Vec<String>,
    mappings: String,
}

impl SourceMap {
    pub fn new(file: &str, modules: &[Module], root: &Path) -> Self {
        let sources = modules
            .iter()
            .map(|m| {
                m.path
                    .strip_prefix(root)
                    .unwrap_or(&m.path)
                    .display()
                    .to_string()
            })
            .collect();
        let sources_content = modules.iter().map(|m| m.source.clone()).collect();

        SourceMap {
            version: 3,
            file: file.to_owned(),
            sources,
            sources_content,
            names: Vec::new(),
            mappings: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sources_are_root_relative() {
        let modules = vec![Module {
            path: PathBuf::from("/project/assets/js/index.js"),
            source: String::from("entry();\n"),
        }];
        let map = SourceMap::new("app.js", &modules, Path::new("/project"));
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json["version"], 3);
        assert_eq!(json["file"], "app.js");
        assert_eq!(json["sources"][0], "assets/js/index.js");
        assert_eq!(json["sourcesContent"][0], "entry();\n");
        assert_eq!(json["mappings"], "");
    }
}
