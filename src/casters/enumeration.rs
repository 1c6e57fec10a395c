//! Enumeration resolution

use crate::config::Context;
use crate::error::{DtoError, DtoResult};
use crate::value::{Backing, DtoEnum, EnumCase, EnumDef, Value};

use super::Caster;

/// Resolves scalars to cases of an enumeration
///
/// Value-backed enumerations try, in order: an exact backing match, a
/// case-insensitive backing match, then the case name. Unit enumerations
/// match by case name, ignoring case.
#[derive(Debug, Clone, Copy)]
pub struct EnumCaster {
    def: &'static EnumDef,
}

impl EnumCaster {
    pub fn new(def: &'static EnumDef) -> Self {
        Self { def }
    }

    pub fn of<T: DtoEnum>() -> Self {
        Self::new(T::definition())
    }

    /// Caster for the enumeration named `name` among `known`
    pub fn resolve(name: &str, known: &[&'static EnumDef]) -> DtoResult<Self> {
        known
            .iter()
            .copied()
            .find(|def| def.name() == name)
            .map(Self::new)
            .ok_or_else(|| DtoError::InvalidAttribute(format!("Invalid enum class: {}", name)))
    }

    pub fn definition(&self) -> &'static EnumDef {
        self.def
    }

    fn by_name(&self, name: &str) -> Option<EnumCase> {
        self.def
            .case(name)
            .or_else(|| self.def.cases().find(|case| case.name().eq_ignore_ascii_case(name)))
    }

    fn resolve_backed(&self, value: &Value) -> Option<EnumCase> {
        if self.def.is_int_backed() {
            let number = match value {
                Value::Int(i) => Some(*i),
                Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            };
            if let Some(case) = number.and_then(|n| self.def.case_by_backing(&Backing::Int(n))) {
                return Some(case);
            }
        } else {
            let text = match value {
                Value::String(s) => Some(s.clone()),
                Value::Int(i) => Some(i.to_string()),
                _ => None,
            };
            if let Some(text) = text {
                let exact = self
                    .def
                    .cases()
                    .find(|case| matches!(case.backing(), Some(Backing::Str(s)) if s == text));
                if exact.is_some() {
                    return exact;
                }

                let relaxed = self.def.cases().find(|case| {
                    matches!(case.backing(), Some(Backing::Str(s)) if s.eq_ignore_ascii_case(&text))
                });
                if relaxed.is_some() {
                    tracing::trace!("{} matched '{}' ignoring case", self.def.name(), text);
                    return relaxed;
                }
            }
        }

        value.as_str().and_then(|name| self.by_name(name))
    }

    fn no_match(&self, value: &Value) -> DtoError {
        let shown = match value {
            Value::String(s) => format!("'{}'", s),
            Value::Int(i) => i.to_string(),
            other => other.type_name().to_string(),
        };
        DtoError::cast(
            self.def.name(),
            format!("no matching case found for {}", shown),
        )
    }
}

impl Caster for EnumCaster {
    fn cast(&self, value: Value, _ctx: &Context<'_>) -> DtoResult<Value> {
        if let Value::Enum(case) = &value {
            if case.is_of(self.def) {
                return Ok(value);
            }
        }

        let resolved = if self.def.is_backed() {
            self.resolve_backed(&value)
        } else {
            value.as_str().and_then(|name| self.by_name(name))
        };

        resolved
            .map(Value::Enum)
            .ok_or_else(|| self.no_match(&value))
    }

    fn target(&self) -> String {
        self.def.name().to_string()
    }
}
