//! Cast-with: run a caster over a field before binding

use std::sync::Arc;

use crate::casters::{Caster, DtoCaster, PrimitiveCaster};
use crate::config::Context;
use crate::contracts::{Attribute, AttributeKind, PropertyPreHydrate};
use crate::data::Data;
use crate::dto::Dto;
use crate::error::{DtoError, DtoResult};
use crate::schema::Field;

/// Replaces the field's input value with the caster's output
///
/// Absent fields are skipped, as are nulls on nullable fields. Failures are
/// reported as [`DtoError::CastField`] naming the field and target type, with
/// the caster's error as source.
#[derive(Debug, Clone)]
pub struct CastWith {
    caster: Arc<dyn Caster>,
}

impl CastWith {
    pub fn new(caster: impl Caster + 'static) -> Self {
        Self {
            caster: Arc::new(caster),
        }
    }

    pub fn shared(caster: Arc<dyn Caster>) -> Self {
        Self { caster }
    }

    /// Cast maps, objects, JSON text or lists of them into `T`
    pub fn dto<T: Dto>() -> Self {
        Self::new(DtoCaster::of::<T>())
    }

    /// Cast to a primitive named `"int"`, `"float"`, `"string"`, `"bool"` or
    /// `"array"`
    pub fn primitive(type_name: &str) -> DtoResult<Self> {
        PrimitiveCaster::named(type_name).map(Self::new)
    }

    pub fn caster(&self) -> &dyn Caster {
        self.caster.as_ref()
    }
}

impl PropertyPreHydrate for CastWith {
    fn property_pre_hydrate(
        &self,
        field: &Field,
        data: &mut Data,
        ctx: &Context<'_>,
    ) -> DtoResult<()> {
        let name = field.name();
        if !data.has(name) {
            return Ok(());
        }

        let value = data.get(name);
        if value.is_null() && field.is_nullable() {
            return Ok(());
        }

        let cast = self
            .caster
            .cast(value, ctx)
            .map_err(|err| DtoError::cast_field(name, self.caster.target(), err))?;
        data.set(name, cast);
        Ok(())
    }
}

impl Attribute for CastWith {
    fn kind(&self) -> AttributeKind {
        AttributeKind::CastWith
    }

    fn as_property_pre_hydrate(&self) -> Option<&dyn PropertyPreHydrate> {
        Some(self)
    }
}
