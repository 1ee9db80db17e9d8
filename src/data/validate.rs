use std::fmt;

use crate::data::attack::AreaOfEffect;
use crate::data::scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Checks a scenario for inputs that would make resolution fail or look wrong.
///
/// Errors predict a failed `calc_scenario`; warnings and info flag inputs that
/// resolve but probably do not mean what the author intended.
pub fn validate_scenario(scenario: &Scenario) -> ValidationReport {
    let mut report = ValidationReport::default();
    let context = if scenario.name.is_empty() {
        "scenario".to_string()
    } else {
        format!("scenario '{}'", scenario.name)
    };

    if scenario.enemies.is_empty() {
        report.push(ValidationSeverity::Warning, &context, "no enemies");
    }
    if scenario.attacks.is_empty() {
        report.push(ValidationSeverity::Warning, &context, "no attacks");
    }

    let mut focus_needed = false;
    for entry in &scenario.attacks {
        let attack = &entry.attack;
        let attack_context = format!("{context} attack '{}'", attack.name);

        if !attack.scaling_stat.is_scaling_stat() {
            report.push(
                ValidationSeverity::Error,
                &attack_context,
                format!("{} cannot scale damage", attack.scaling_stat),
            );
        }
        if !entry.usage.is_finite() || entry.usage < 0.0 {
            report.push(
                ValidationSeverity::Error,
                &attack_context,
                format!("usage must be a non-negative number, got {}", entry.usage),
            );
        }
        if attack.area_of_effect == AreaOfEffect::Blast && attack.multiplier_splash == 0.0 {
            report.push(
                ValidationSeverity::Warning,
                &attack_context,
                "blast attack has no splash multiplier",
            );
        }
        focus_needed |= attack.area_of_effect.needs_focus();
    }

    if scenario.focused_index().is_none() && !scenario.enemies.is_empty() {
        let message = format!(
            "focused enemy {} is outside 0..{}",
            scenario.focused_enemy,
            scenario.enemies.len()
        );
        let severity = if focus_needed {
            ValidationSeverity::Error
        } else {
            ValidationSeverity::Info
        };
        report.push(severity, &context, message);
    } else if focus_needed && scenario.enemies.is_empty() {
        report.push(
            ValidationSeverity::Error,
            &context,
            "single-target or blast attack with no enemy to focus",
        );
    }

    report
}
