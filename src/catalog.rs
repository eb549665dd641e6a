use crate::config::CatalogConfig;
use crate::domain::constants::DEFAULT_REQUIRED;
use crate::domain::models::{RuleEntry, RuleFile};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("Article", include_str!("../templates/Article.jsonld")),
    (
        "BreadcrumbList",
        include_str!("../templates/BreadcrumbList.jsonld"),
    ),
    ("Event", include_str!("../templates/Event.jsonld")),
    ("FAQPage", include_str!("../templates/FAQPage.jsonld")),
    (
        "LocalBusiness",
        include_str!("../templates/LocalBusiness.jsonld"),
    ),
    ("Organization", include_str!("../templates/Organization.jsonld")),
    ("Person", include_str!("../templates/Person.jsonld")),
    ("Product", include_str!("../templates/Product.jsonld")),
    ("Recipe", include_str!("../templates/Recipe.jsonld")),
    ("WebSite", include_str!("../templates/WebSite.jsonld")),
];

const BUILTIN_RULES: &str = include_str!("../templates/rules.toml");

const TEMPLATE_EXT: &str = "jsonld";

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("unknown structured data type: {0}")]
    UnknownType(String),
    #[error("invalid rule table: {0}")]
    Rules(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    /// Script-wrapped JSON-LD document.
    pub snippet: String,
}

/// Template store and rule table, fixed for the lifetime of the process.
#[derive(Debug)]
pub struct Catalog {
    templates: Vec<Template>,
    rules: BTreeMap<String, RuleEntry>,
    fallback: RuleEntry,
}

fn fallback_rule() -> RuleEntry {
    RuleEntry {
        brief: "No rule entry for this type; only @context and @type are checked.".to_string(),
        rich_result: "No rich result information for this type.".to_string(),
        required: DEFAULT_REQUIRED.iter().map(|s| s.to_string()).collect(),
        recommended: vec![],
    }
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        let rules: RuleFile = toml::from_str(BUILTIN_RULES)?;
        Ok(Self {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|(name, snippet)| Template {
                    name: name.to_string(),
                    snippet: snippet.to_string(),
                })
                .collect(),
            rules: rules.types,
            fallback: fallback_rule(),
        })
    }

    /// Built-in tables plus whatever the config layers on top.
    /// Missing override locations degrade to the built-ins with a warning.
    pub fn load(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin()?;
        if let Some(dir) = &cfg.templates_dir {
            if dir.is_dir() {
                catalog.load_templates_dir(dir)?;
            } else {
                tracing::warn!(dir = %dir.display(), "templates_dir not found, using built-in templates");
            }
        }
        if let Some(file) = &cfg.rules_file {
            if file.exists() {
                catalog.load_rules_file(file)?;
            } else {
                tracing::warn!(file = %file.display(), "rules_file not found, using built-in rules");
            }
        }
        Ok(catalog)
    }

    fn load_templates_dir(&mut self, dir: &Path) -> Result<(), CatalogError> {
        let io_err = |source| CatalogError::Io {
            path: dir.display().to_string(),
            source,
        };
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(io_err)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|x| x == TEMPLATE_EXT).unwrap_or(false))
            .collect();
        paths.sort();

        for path in paths {
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };
            match std::fs::read_to_string(&path) {
                Ok(snippet) => {
                    tracing::debug!(template = %name, "loaded template override");
                    self.upsert_template(Template { name, snippet });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable template");
                }
            }
        }
        Ok(())
    }

    fn load_rules_file(&mut self, file: &Path) -> Result<(), CatalogError> {
        let raw = std::fs::read_to_string(file).map_err(|source| CatalogError::Io {
            path: file.display().to_string(),
            source,
        })?;
        let extra: RuleFile = toml::from_str(&raw)?;
        tracing::debug!(count = extra.types.len(), "merging rule overrides");
        self.rules.extend(extra.types);
        Ok(())
    }

    fn upsert_template(&mut self, entry: Template) {
        if let Some(existing) = self.templates.iter_mut().find(|t| t.name == entry.name) {
            *existing = entry;
        } else {
            self.templates.push(entry);
        }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Result<&Template, CatalogError> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| CatalogError::UnknownType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }

    pub fn rule(&self, type_name: &str) -> Option<&RuleEntry> {
        self.rules.get(type_name)
    }

    pub fn rule_or_default(&self, type_name: &str) -> &RuleEntry {
        self.rule(type_name).unwrap_or(&self.fallback)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&String, &RuleEntry)> {
        self.rules.iter()
    }
}
