//! Named-record catalog: entities defined once and linked into scenarios by name.
//!
//! A catalog file holds light cones, characters, relic builds, enemies and
//! attacks, plus scenario specs that reference them by name. JSON and YAML
//! are both accepted, chosen by file extension. Lookups ignore case and
//! treat runs of whitespace/underscores as one separator.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::attack::Attack;
use crate::data::character::{Character, LightCone};
use crate::data::enemy::Enemy;
use crate::data::relic::RelicBuild;
use crate::data::scenario::Scenario;

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
pub const CATALOG_PATH_ENV: &str = "RELICSIM_CATALOG";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported catalog format for '{0}': expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("scenario '{scenario}' references unknown {kind} '{name}'")]
    UnknownReference {
        scenario: String,
        kind: &'static str,
        name: String,
    },
}

/// Attack name plus its usage count inside a scenario spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRef {
    pub attack: String,
    pub usage: f64,
}

fn enabled_by_default() -> bool {
    true
}

/// Scenario whose entities are given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub character: String,
    #[serde(default)]
    pub light_cone: Option<String>,
    #[serde(default)]
    pub relic_build: Option<String>,
    #[serde(default)]
    pub enemies: Vec<String>,
    #[serde(default)]
    pub focused_enemy: i64,
    #[serde(default)]
    pub attacks: Vec<AttackRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub light_cones: Vec<LightCone>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub relic_builds: Vec<RelicBuild>,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioSpec>,
}

trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(LightCone, Character, RelicBuild, Enemy, Attack);

/// Lowercase, with whitespace/underscore runs collapsed to `_`.
fn normalize_lookup(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '_' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn find_named<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    let wanted = normalize_lookup(name);
    items
        .iter()
        .find(|item| normalize_lookup(item.name()) == wanted)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    file: CatalogFile,
}

impl Catalog {
    pub fn new(file: CatalogFile) -> Self {
        Self { file }
    }

    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(input)?))
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_yaml::from_str(input)?))
    }

    /// `RELICSIM_CATALOG` when set, else [DEFAULT_CATALOG_PATH].
    pub fn default_path() -> PathBuf {
        env::var_os(CATALOG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }

    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(Self::default_path())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(CatalogError::UnsupportedFormat(shown)),
        };
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: shown.clone(),
            source,
        })?;
        let catalog = parse(&raw)?;
        tracing::info!(
            path = %shown,
            characters = catalog.file.characters.len(),
            enemies = catalog.file.enemies.len(),
            attacks = catalog.file.attacks.len(),
            scenarios = catalog.file.scenarios.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn file(&self) -> &CatalogFile {
        &self.file
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        find_named(&self.file.characters, name)
    }

    pub fn light_cone(&self, name: &str) -> Option<&LightCone> {
        find_named(&self.file.light_cones, name)
    }

    pub fn relic_build(&self, name: &str) -> Option<&RelicBuild> {
        find_named(&self.file.relic_builds, name)
    }

    pub fn enemy(&self, name: &str) -> Option<&Enemy> {
        find_named(&self.file.enemies, name)
    }

    pub fn attack(&self, name: &str) -> Option<&Attack> {
        find_named(&self.file.attacks, name)
    }

    /// Links a [ScenarioSpec]'s names to catalog records.
    ///
    /// Missing light cone or relic build names mean "none equipped"; attack
    /// entries with zero usage are dropped.
    pub fn resolve_scenario(&self, spec: &ScenarioSpec) -> Result<Scenario, CatalogError> {
        let unknown = |kind: &'static str, name: &str| CatalogError::UnknownReference {
            scenario: spec.name.clone(),
            kind,
            name: name.to_string(),
        };

        let character = self
            .character(&spec.character)
            .ok_or_else(|| unknown("character", &spec.character))?
            .clone();
        let light_cone = match spec.light_cone.as_deref() {
            Some(name) => self
                .light_cone(name)
                .ok_or_else(|| unknown("light cone", name))?
                .clone(),
            None => LightCone::default(),
        };
        let relic_build = match spec.relic_build.as_deref() {
            Some(name) => self
                .relic_build(name)
                .ok_or_else(|| unknown("relic build", name))?
                .clone(),
            None => RelicBuild::default(),
        };
        let enemies = spec
            .enemies
            .iter()
            .map(|name| self.enemy(name).cloned().ok_or_else(|| unknown("enemy", name)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut scenario = Scenario {
            id: String::new(),
            name: spec.name.clone(),
            notes: spec.notes.clone(),
            character,
            light_cone,
            relic_build,
            enemies,
            focused_enemy: spec.focused_enemy,
            attacks: Vec::new(),
        };
        for entry in spec.attacks.iter().filter(|entry| entry.usage != 0.0) {
            let attack = self
                .attack(&entry.attack)
                .ok_or_else(|| unknown("attack", &entry.attack))?;
            scenario.add_attack(attack.clone(), entry.usage);
        }
        Ok(scenario)
    }

    /// Every enabled scenario, in file order.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, CatalogError> {
        self.file
            .scenarios
            .iter()
            .filter(|spec| {
                if !spec.enabled {
                    tracing::debug!(scenario = %spec.name, "skipping disabled scenario");
                }
                spec.enabled
            })
            .map(|spec| self.resolve_scenario(spec))
            .collect()
    }
}
