//! Field values held by an entity.

use rust_decimal::Decimal;
use std::fmt;
use time::{Date, PrimitiveDateTime, Time};

use crate::datetime;
use crate::descriptor::FieldKind;
use crate::entity::Entity;

/// The value stored in one entity field slot.
///
/// Numeric amounts use `rust_decimal::Decimal`, never `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    Date(Date),
    DateTime(PrimitiveDateTime),
    Time(Time),
    Entity(Entity),
    EntityList(Vec<Entity>),
    TextList(Vec<String>),
}

impl Value {
    /// Returns a human-readable kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::Boolean(_) => "Boolean",
            Value::Date(_) => "Date",
            Value::DateTime(_) => "DateTime",
            Value::Time(_) => "Time",
            Value::Entity(_) => "Entity",
            Value::EntityList(_) => "EntityList",
            Value::TextList(_) => "TextList",
        }
    }

    /// Checks that the value has the shape `kind` declares, including the
    /// entity type of nested records. Returns the reason on mismatch.
    pub fn conforms_to(&self, kind: &FieldKind) -> Result<(), String> {
        let ok = match (kind, self) {
            (FieldKind::Text, Value::Text(_))
            | (FieldKind::Integer, Value::Integer(_))
            | (FieldKind::Decimal, Value::Decimal(_))
            | (FieldKind::Boolean, Value::Boolean(_))
            | (FieldKind::Date, Value::Date(_))
            | (FieldKind::DateTime, Value::DateTime(_))
            | (FieldKind::Time, Value::Time(_))
            | (FieldKind::TextList { .. }, Value::TextList(_)) => true,
            (FieldKind::Entity(expected), Value::Entity(e)) => {
                return expect_type(expected, e);
            }
            (FieldKind::EntityList { entity, .. }, Value::EntityList(items)) => {
                return items.iter().try_for_each(|e| expect_type(entity, e));
            }
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(format!("expected {}, got {}", kind.name(), self.kind_name()))
        }
    }

    /// Checks that the value survives the wire layouts unchanged.
    pub fn check_wire(&self) -> Result<(), String> {
        match self {
            Value::Date(d) => datetime::check_date(*d),
            Value::DateTime(dt) => {
                datetime::check_date(dt.date())?;
                datetime::check_time(dt.time())
            }
            Value::Time(t) => datetime::check_time(*t),
            _ => Ok(()),
        }
    }
}

fn expect_type(expected: &str, entity: &Entity) -> Result<(), String> {
    if entity.type_name() == expected {
        Ok(())
    } else {
        Err(format!("expected {} entity, got {}", expected, entity.type_name()))
    }
}

/// Renders the value the way it would appear on the wire; nested records
/// render as their type name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Date(d) => match datetime::format_date(*d) {
                Ok(s) => f.write_str(&s),
                Err(_) => write!(f, "{}", d),
            },
            Value::DateTime(dt) => match datetime::format_date_time(*dt) {
                Ok(s) => f.write_str(&s),
                Err(_) => write!(f, "{}", dt),
            },
            Value::Time(t) => match datetime::format_time(*t) {
                Ok(s) => f.write_str(&s),
                Err(_) => write!(f, "{}", t),
            },
            Value::Entity(e) => write!(f, "<{}>", e.type_name()),
            Value::EntityList(items) => write!(f, "[{} entities]", items.len()),
            Value::TextList(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(dt: PrimitiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Time> for Value {
    fn from(t: Time) -> Self {
        Value::Time(t)
    }
}

impl From<Entity> for Value {
    fn from(e: Entity) -> Self {
        Value::Entity(e)
    }
}

impl From<Vec<Entity>> for Value {
    fn from(items: Vec<Entity>) -> Self {
        Value::EntityList(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::TextList(items)
    }
}
