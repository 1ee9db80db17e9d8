pub mod attack;
pub mod buff;
pub mod catalog;
pub mod character;
pub mod enemy;
pub mod relic;
pub mod scenario;
pub mod stat;
pub mod tag;
pub mod validate;

pub use attack::{AreaOfEffect, Attack};
pub use buff::{sum_matching, Buff};
pub use catalog::{
    AttackRef, Catalog, CatalogError, CatalogFile, ScenarioSpec, CATALOG_PATH_ENV,
    DEFAULT_CATALOG_PATH,
};
pub use character::{Character, LightCone};
pub use enemy::Enemy;
pub use relic::{main_stat_value, Relic, RelicBuild, RelicSubstat, RollType, RELIC_SLOTS};
pub use scenario::{AttackUsage, Scenario, ScenarioResult};
pub use stat::Stat;
pub use tag::{matches, DamageTag, Element, Wildcard};
pub use validate::{validate_scenario, ValidationDiagnostic, ValidationReport, ValidationSeverity};
