//! The generic entity record shared by every catalog type.

use rust_decimal::Decimal;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, PrimitiveDateTime, Time};
use tracing::{debug, trace};

use crate::descriptor::{DefaultValue, EntityDescriptor, FieldDescriptor};
use crate::error::{Error, Result};
use crate::phone;
use crate::validate;
use crate::value::Value;

/// Process-unique identity assigned when an entity is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        EntityId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity instance: its static descriptor plus one value slot per field.
///
/// All mutation goes through [`Entity::set`], [`Entity::set_phone`], and
/// [`Entity::clear`], which validate before writing, so a rejected value
/// never replaces the previous one.
///
/// Instances are not synchronized; concurrent readers are fine as long as
/// nobody mutates the same instance at the same time.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    descriptor: &'static EntityDescriptor,
    values: Vec<Option<Value>>,
}

impl Entity {
    /// Creates an entity with every field unset except declared defaults.
    pub fn new(descriptor: &'static EntityDescriptor) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|f| f.default.map(DefaultValue::to_value))
            .collect();
        Entity {
            id: EntityId::next(),
            descriptor,
            values,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.descriptor
    }

    pub fn type_name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        let (index, _) = self.descriptor.field(field)?;
        self.get_at(index)
    }

    /// Value of the field at `index` in the descriptor table.
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index).and_then(Option::as_ref)
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Every field with its current value, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&'static FieldDescriptor, Option<&Value>)> {
        let fields: &'static [FieldDescriptor] = self.descriptor.fields;
        fields.iter().zip(self.values.iter().map(Option::as_ref))
    }

    /// Validates and stores `value` in `field`.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let (index, descriptor) = self.slot(field, &value)?;
        self.check(descriptor, &value)?;
        trace!(entity = self.descriptor.name, field, "field updated");
        self.values[index] = Some(value);
        Ok(())
    }

    /// Checks `value` against `field` without storing it.
    pub fn validate(&self, field: &str, value: &Value) -> Result<()> {
        let (_, descriptor) = self.slot(field, value)?;
        self.check(descriptor, value)
    }

    /// Stores a telephone number, normalizing it to international format
    /// when `region` (a two-letter country code) is given and formatting
    /// support is compiled in. Otherwise `raw` is stored verbatim.
    pub fn set_phone(&mut self, field: &str, raw: &str, region: Option<&str>) -> Result<()> {
        if let Some(region) = region {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::invalid(
                    self.descriptor.name,
                    field,
                    region,
                    "region must be a two-letter country code",
                ));
            }
        }
        let number = phone::normalize(raw, region);
        self.set(field, number)
    }

    /// Unsets `field`, returning the previous value.
    pub fn clear(&mut self, field: &str) -> Result<Option<Value>> {
        let (index, _) = self
            .descriptor
            .field(field)
            .ok_or_else(|| self.unknown_field(field, ""))?;
        Ok(self.values[index].take())
    }

    fn slot(&self, field: &str, value: &Value) -> Result<(usize, &'static FieldDescriptor)> {
        self.descriptor
            .field(field)
            .ok_or_else(|| self.unknown_field(field, &value.to_string()))
    }

    fn unknown_field(&self, field: &str, value: &str) -> Error {
        Error::invalid(
            self.descriptor.name,
            field,
            value,
            format!("{} has no field '{}'", self.descriptor.name, field),
        )
    }

    fn check(&self, descriptor: &FieldDescriptor, value: &Value) -> Result<()> {
        let outcome = value
            .conforms_to(&descriptor.kind)
            .and_then(|()| value.check_wire())
            .and_then(|()| match value {
            Value::TextList(items) => items.iter().try_for_each(|item| {
                validate::check_all(descriptor.rules, &Value::Text(item.clone()))
            }),
            other => validate::check_all(descriptor.rules, other),
        });
        outcome.map_err(|reason| {
            debug!(
                entity = self.descriptor.name,
                field = descriptor.name,
                reason = reason.as_str(),
                "rejected field value"
            );
            Error::invalid(self.descriptor.name, descriptor.name, value.to_string(), reason)
        })
    }

    // ── Typed getters ───────────────────────────────────────────────

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.get(field)? {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        match self.get(field)? {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn boolean(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn date(&self, field: &str) -> Option<Date> {
        match self.get(field)? {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn date_time(&self, field: &str) -> Option<PrimitiveDateTime> {
        match self.get(field)? {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn time(&self, field: &str) -> Option<Time> {
        match self.get(field)? {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn entity(&self, field: &str) -> Option<&Entity> {
        match self.get(field)? {
            Value::Entity(e) => Some(e),
            _ => None,
        }
    }

    pub fn entities(&self, field: &str) -> Option<&[Entity]> {
        match self.get(field)? {
            Value::EntityList(items) => Some(items),
            _ => None,
        }
    }

    pub fn texts(&self, field: &str) -> Option<&[String]> {
        match self.get(field)? {
            Value::TextList(items) => Some(items),
            _ => None,
        }
    }
}

/// A clone is a new entity with the same field values and a fresh id.
impl Clone for Entity {
    fn clone(&self) -> Self {
        Entity {
            id: EntityId::next(),
            descriptor: self.descriptor,
            values: self.values.clone(),
        }
    }
}

/// Entities are equal when they have the same type and field values;
/// identity is not compared.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name == other.descriptor.name && self.values == other.values
    }
}

impl AsRef<Entity> for Entity {
    fn as_ref(&self) -> &Entity {
        self
    }
}

/// A typed wrapper around an [`Entity`] of one fixed descriptor.
pub trait EntityType: Sized {
    const DESCRIPTOR: &'static EntityDescriptor;

    /// Wraps an entity already known to be of this type.
    fn wrap(entity: Entity) -> Self;

    fn as_entity(&self) -> &Entity;

    fn into_entity(self) -> Entity;

    /// Converts a generic entity, rejecting one of another type.
    fn from_entity(entity: Entity) -> Result<Self> {
        if entity.type_name() == Self::DESCRIPTOR.name {
            Ok(Self::wrap(entity))
        } else {
            Err(Error::invalid(
                Self::DESCRIPTOR.name,
                "(type)",
                entity.type_name(),
                format!("expected a {} entity", Self::DESCRIPTOR.name),
            ))
        }
    }
}
