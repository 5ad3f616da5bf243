//! Serialized tree to entity mapping.
//!
//! The entry point is [`Deserializer::deserialize`], which takes a parsed
//! response [`Tree`], the target entity type name and the service that
//! produced it. Inbound keys are normalized through each field's aliases,
//! scalars are coerced to the declared field kind, and nested entities
//! and entity lists are resolved recursively through the [`Registry`].
//! An entity is either fully built or the call fails; no partially
//! populated entity is returned.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::{debug, trace};
use waybill_core::datetime;
use waybill_core::{
    Entity, EntityDescriptor, EntityType, Error, FieldDescriptor, FieldKind, Registry, Result,
    Service, Value, Wrap,
};

use crate::config::InterchangeConfig;
use crate::tree::{Node, Scalar, Tree};

/// Builds entities from serialized trees using a descriptor registry.
#[derive(Debug, Clone)]
pub struct Deserializer<'r> {
    registry: &'r Registry,
    config: InterchangeConfig,
}

impl<'r> Deserializer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Deserializer::with_config(registry, InterchangeConfig::default())
    }

    pub fn with_config(registry: &'r Registry, config: InterchangeConfig) -> Self {
        Deserializer { registry, config }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Builds an `entity_type` entity from `tree` as produced by `service`.
    ///
    /// Fails with [`Error::EntityNotFound`] for an unregistered type, and
    /// with [`Error::Deserialization`] when a field `service` requires is
    /// missing, a value cannot be coerced to its field kind, or a value
    /// breaks one of the field's rules.
    pub fn deserialize(&self, tree: &Tree, entity_type: &str, service: Service) -> Result<Entity> {
        let descriptor = self.registry.get(entity_type)?;
        let present = self.normalize(tree, descriptor)?;

        let mut entity = Entity::new(descriptor);
        for (index, field) in descriptor.fields_for(service) {
            let Some(node) = present.get(&index) else {
                if field.is_required_for(service) {
                    return Err(Error::deserialization(
                        descriptor.name,
                        field.name,
                        format!("required field '{}' is missing", field.wire),
                    ));
                }
                continue;
            };
            let value = self.value(node, descriptor, field, service)?;
            entity.set(field.name, value).map_err(|err| match err {
                Error::InvalidArgument {
                    entity,
                    field,
                    value,
                    reason,
                } => Error::Deserialization {
                    entity,
                    field,
                    message: format!("invalid value '{}': {}", value, reason),
                },
                other => other,
            })?;
        }

        trace!(entity = descriptor.name, %service, "deserialized entity");
        Ok(entity)
    }

    /// [`Deserializer::deserialize`] into a typed catalog wrapper.
    pub fn deserialize_as<T: EntityType>(&self, tree: &Tree, service: Service) -> Result<T> {
        self.deserialize(tree, T::DESCRIPTOR.name, service)
            .and_then(T::from_entity)
    }

    /// Deserializes a parsed REST response body.
    pub fn deserialize_json(
        &self,
        json: &serde_json::Value,
        entity_type: &str,
        service: Service,
    ) -> Result<Entity> {
        let tree = Tree::from_json(json).ok_or_else(|| {
            Error::deserialization(entity_type, "(root)", "expected a JSON object")
        })?;
        self.deserialize(&tree, entity_type, service)
    }

    /// Maps each field slot to the node found under its first present
    /// candidate key. Every candidate key of every field is claimed, so
    /// alias keys never count as unknown.
    fn normalize<'t>(
        &self,
        tree: &'t Tree,
        descriptor: &'static EntityDescriptor,
    ) -> Result<BTreeMap<usize, &'t Node>> {
        let mut present = BTreeMap::new();
        let mut claimed = BTreeSet::new();
        for (index, field) in descriptor.fields.iter().enumerate() {
            for key in field.candidates() {
                claimed.insert(key);
                if present.contains_key(&index) {
                    continue;
                }
                if let Some(node) = tree.get(key) {
                    if key != field.wire {
                        trace!(
                            entity = descriptor.name,
                            field = field.name,
                            alias = key,
                            "alias resolved"
                        );
                    }
                    present.insert(index, node);
                }
            }
        }

        for (name, _) in tree.iter() {
            let key = name.local_name();
            if claimed.contains(key) {
                continue;
            }
            if self.config.deserialize.reject_unknown_fields {
                return Err(Error::deserialization(descriptor.name, key, "unknown field"));
            }
            debug!(entity = descriptor.name, key, "ignoring unknown field");
        }
        Ok(present)
    }

    fn value(
        &self,
        node: &Node,
        descriptor: &EntityDescriptor,
        field: &FieldDescriptor,
        service: Service,
    ) -> Result<Value> {
        let fail = |message: String| Error::deserialization(descriptor.name, field.name, message);

        let value = match field.kind {
            FieldKind::Text => Value::Text(scalar(node).map_err(fail)?.to_string()),
            FieldKind::Integer => Value::Integer(scalar(node).and_then(integer).map_err(fail)?),
            FieldKind::Decimal => Value::Decimal(scalar(node).and_then(decimal).map_err(fail)?),
            FieldKind::Boolean => Value::Boolean(scalar(node).and_then(boolean).map_err(fail)?),
            FieldKind::Date => {
                let text = scalar(node).map_err(fail)?.to_string();
                let date = datetime::parse_date(&text)
                    .map_err(|err| fail(format!("malformed date '{}': {}", text, err)))?;
                Value::Date(date)
            }
            FieldKind::DateTime => {
                let text = scalar(node).map_err(fail)?.to_string();
                let dt = datetime::parse_date_time(&text)
                    .map_err(|err| fail(format!("malformed date and time '{}': {}", text, err)))?;
                Value::DateTime(dt)
            }
            FieldKind::Time => {
                let text = scalar(node).map_err(fail)?.to_string();
                let t = datetime::parse_time(&text)
                    .map_err(|err| fail(format!("malformed time '{}': {}", text, err)))?;
                Value::Time(t)
            }
            FieldKind::Entity(nested) => match node {
                Node::Tree(tree) => Value::Entity(self.deserialize(tree, nested, service)?),
                other => {
                    return Err(fail(format!("expected a record, found a {}", other.shape())))
                }
            },
            FieldKind::EntityList { entity, wrap } => {
                let items = list_items(node, &wrap)
                    .into_iter()
                    .map(|item| match item {
                        Node::Tree(tree) => self.deserialize(tree, entity, service),
                        other => Err(fail(format!(
                            "expected a {} record, found a {}",
                            entity,
                            other.shape()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Value::EntityList(items)
            }
            FieldKind::TextList { wrap } => {
                let items = list_items(node, &wrap)
                    .into_iter()
                    .map(|item| scalar(item).map(Scalar::to_string))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(fail)?;
                Value::TextList(items)
            }
        };
        Ok(value)
    }
}

fn scalar(node: &Node) -> Result<&Scalar, String> {
    node.as_scalar()
        .ok_or_else(|| format!("expected a scalar, found a {}", node.shape()))
}

fn integer(scalar: &Scalar) -> Result<i64, String> {
    match scalar {
        Scalar::Integer(n) => Ok(*n),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("expected an integer, found '{}'", s)),
        Scalar::Decimal(d) if d.fract().is_zero() => {
            i64::try_from(*d).map_err(|_| format!("integer out of range: {}", d))
        }
        other => Err(format!("expected an integer, found '{}'", other)),
    }
}

fn decimal(scalar: &Scalar) -> Result<Decimal, String> {
    match scalar {
        Scalar::Decimal(d) => Ok(*d),
        Scalar::Integer(n) => Ok(Decimal::from(*n)),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("expected a decimal, found '{}'", s)),
        Scalar::Boolean(b) => Err(format!("expected a decimal, found '{}'", b)),
    }
}

fn boolean(scalar: &Scalar) -> Result<bool, String> {
    match scalar {
        Scalar::Boolean(b) => Ok(*b),
        Scalar::Integer(0) => Ok(false),
        Scalar::Integer(1) => Ok(true),
        Scalar::Text(s) => match s.trim() {
            t if t.eq_ignore_ascii_case("true") || t == "1" => Ok(true),
            t if t.eq_ignore_ascii_case("false") || t == "0" => Ok(false),
            _ => Err(format!("expected a boolean, found '{}'", s)),
        },
        other => Err(format!("expected a boolean, found '{}'", other)),
    }
}

/// Items of a list field, whatever shape the producing service used.
///
/// An empty tree or empty text is an empty list. A tree holding one of
/// the wrapper names yields that wrapper's items; a single wrapped item
/// (XML with one repeated element) is a one-element list. Any other tree
/// or scalar is taken as a bare single item.
fn list_items<'t>(node: &'t Node, wrap: &Wrap) -> Vec<&'t Node> {
    match node {
        Node::List(items) => items.iter().collect(),
        Node::Tree(tree) if tree.is_empty() => Vec::new(),
        Node::Tree(tree) => match wrap.names().find_map(|name| tree.get(name)) {
            Some(Node::List(items)) => items.iter().collect(),
            Some(Node::Scalar(Scalar::Text(s))) if s.is_empty() => Vec::new(),
            Some(item) => vec![item],
            None => vec![node],
        },
        Node::Scalar(Scalar::Text(s)) if s.is_empty() => Vec::new(),
        Node::Scalar(_) => vec![node],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeserializeConfig;
    use crate::fixtures::{registry, NOTICE, PARCEL};
    use crate::serialize::Serializer;
    use serde_json::json;
    use time::macros::{date, datetime, time};
    use waybill_core::Format;

    fn tree(value: serde_json::Value) -> Tree {
        Tree::from_json(&value).unwrap()
    }

    fn strict() -> Deserializer<'static> {
        let config = InterchangeConfig {
            deserialize: DeserializeConfig {
                reject_unknown_fields: true,
            },
            ..InterchangeConfig::default()
        };
        Deserializer::with_config(registry(), config)
    }

    #[test]
    fn test_alias_and_collapsed_single_item() {
        let day = Deserializer::new(registry())
            .deserialize(
                &tree(json!({
                    "Date": "31-01-2025",
                    "TimeFrames": {"TimeframeTimeFrame": {
                        "From": "09:00:00",
                        "To": "12:00",
                        "Options": {"string": "Daytime"}
                    }}
                })),
                "Day",
                Service::Timeframe,
            )
            .unwrap();

        assert_eq!(day.date("date"), Some(date!(2025 - 01 - 31)));
        let slots = day.entities("slots").unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].time("from"), Some(time!(9:00)));
        assert_eq!(slots[0].time("to"), Some(time!(12:00)));
        assert_eq!(slots[0].texts("options"), Some(&["Daytime".to_string()][..]));
    }

    #[test]
    fn test_empty_list_is_not_missing() {
        let de = Deserializer::new(registry());

        let empty = de
            .deserialize(
                &tree(json!({"Timeframes": {"TimeframeTimeFrame": []}})),
                "Day",
                Service::Timeframe,
            )
            .unwrap();
        assert_eq!(empty.entities("slots"), Some(&[][..]));

        let empty_element = de
            .deserialize(&tree(json!({"Timeframes": ""})), "Day", Service::Timeframe)
            .unwrap();
        assert_eq!(empty_element.entities("slots"), Some(&[][..]));

        let missing = de
            .deserialize(&tree(json!({})), "Day", Service::Timeframe)
            .unwrap();
        assert_eq!(missing.entities("slots"), None);
    }

    #[test]
    fn test_required_field_depends_on_service() {
        let de = Deserializer::new(registry());
        let input = tree(json!({"From": "09:00:00"}));

        let err = de.deserialize(&input, "Slot", Service::Timeframe).unwrap_err();
        assert_eq!(
            err,
            Error::deserialization("Slot", "to", "required field 'To' is missing")
        );

        let slot = de.deserialize(&input, "Slot", Service::Location).unwrap();
        assert!(!slot.is_set("from"));
    }

    #[test]
    fn test_alias_priority_prefers_canonical_name() {
        let de = Deserializer::new(registry());

        let notice = de
            .deserialize(
                &tree(json!({"code": "lower", "Code": "W01", "ErrorCode": "E"})),
                "Notice",
                Service::Barcode,
            )
            .unwrap();
        assert_eq!(notice.text("code"), Some("W01"));

        let notice = de
            .deserialize(
                &tree(json!({"ErrorCode": "E", "code": "lower", "Message": "Oops"})),
                "Notice",
                Service::Barcode,
            )
            .unwrap();
        assert_eq!(notice.text("code"), Some("lower"));
        assert_eq!(notice.text("description"), Some("Oops"));
    }

    #[test]
    fn test_aliases_are_not_unknown_in_strict_mode() {
        let notice = strict()
            .deserialize(
                &tree(json!({"code": "W01", "ErrorCode": "E"})),
                "Notice",
                Service::Barcode,
            )
            .unwrap();
        assert_eq!(notice.text("code"), Some("W01"));
    }

    #[test]
    fn test_unknown_fields() {
        let input = tree(json!({"Kind": "02", "Colour": "red"}));

        let parcel = Deserializer::new(registry())
            .deserialize(&input, "Parcel", Service::Barcode)
            .unwrap();
        assert_eq!(parcel.text("kind"), Some("02"));

        let err = strict()
            .deserialize(&input, "Parcel", Service::Barcode)
            .unwrap_err();
        assert_eq!(err, Error::deserialization("Parcel", "Colour", "unknown field"));
    }

    #[test]
    fn test_field_of_other_service_is_ignored() {
        let parcel = strict()
            .deserialize(&tree(json!({"Reference": "R1"})), "Parcel", Service::Barcode)
            .unwrap();
        assert!(!parcel.is_set("reference"));
    }

    #[test]
    fn test_malformed_date_names_entity_and_field() {
        let err = Deserializer::new(registry())
            .deserialize(&tree(json!({"Date": "31/31/2025"})), "Day", Service::Timeframe)
            .unwrap_err();
        match err {
            Error::Deserialization {
                entity,
                field,
                message,
            } => {
                assert_eq!(entity, "Day");
                assert_eq!(field, "date");
                assert!(message.starts_with("malformed date '31/31/2025'"), "{}", message);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unregistered_type() {
        let err = Deserializer::new(registry())
            .deserialize(&Tree::new(), "Pallet", Service::Barcode)
            .unwrap_err();
        assert_eq!(err, Error::entity_not_found("Pallet"));
    }

    #[test]
    fn test_scalar_coercion() {
        let de = Deserializer::new(registry());
        let parcel = de
            .deserialize_json(
                &json!({"Weight": " 1500 ", "Value": 3, "Holder": {"Code": 42}}),
                "Parcel",
                Service::Barcode,
            )
            .unwrap();
        assert_eq!(parcel.integer("weight"), Some(1500));
        assert_eq!(parcel.decimal("value"), Some(Decimal::from(3)));
        assert_eq!(parcel.entity("holder").and_then(|n| n.text("code")), Some("42"));

        let parcel = de
            .deserialize_json(&json!({"Weight": 12.0}), "Parcel", Service::Barcode)
            .unwrap();
        assert_eq!(parcel.integer("weight"), Some(12));

        let day = de
            .deserialize_json(&json!({"SundaySorting": "1"}), "Day", Service::Timeframe)
            .unwrap();
        assert_eq!(day.boolean("sunday_sorting"), Some(true));

        let err = de
            .deserialize_json(&json!({"SundaySorting": "maybe"}), "Day", Service::Timeframe)
            .unwrap_err();
        assert_eq!(err.field(), Some("sunday_sorting"));
    }

    #[test]
    fn test_rule_violation_is_deserialization_error() {
        let err = Deserializer::new(registry())
            .deserialize_json(&json!({"Weight": 40000}), "Parcel", Service::Barcode)
            .unwrap_err();
        assert!(matches!(err, Error::Deserialization { ref field, .. } if field == "weight"));
    }

    #[test]
    fn test_missing_field_takes_default() {
        let parcel = Deserializer::new(registry())
            .deserialize_json(&json!({}), "Parcel", Service::Barcode)
            .unwrap();
        assert_eq!(parcel.text("kind"), Some("01"));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        let err = Deserializer::new(registry())
            .deserialize_json(&json!([1, 2]), "Parcel", Service::Barcode)
            .unwrap_err();
        assert_eq!(err.field(), Some("(root)"));
    }

    #[test]
    fn test_xml_round_trip() {
        let mut code = Entity::new(&NOTICE);
        code.set("code", "W01").unwrap();
        code.set("description", "Address incomplete").unwrap();

        let mut parcel = Entity::new(&PARCEL);
        parcel.set("barcode", "3SDEVC1234567").unwrap();
        parcel.set("reference", "ORDER-1").unwrap();
        parcel.set("weight", 950_i64).unwrap();
        parcel.set("value", "19.95".parse::<Decimal>().unwrap()).unwrap();
        parcel
            .set("delivered_at", datetime!(2025-03-07 09:15:00))
            .unwrap();
        parcel.set("notices", vec![code.clone()]).unwrap();
        parcel.set("holder", code).unwrap();

        let tree = Serializer::default()
            .serialize(&parcel, Service::Labelling, Format::Xml)
            .unwrap();
        let back = Deserializer::new(registry())
            .deserialize(&tree, "Parcel", Service::Labelling)
            .unwrap();
        assert_eq!(back, parcel);
        assert_ne!(back.id(), parcel.id());
    }

    #[test]
    fn test_json_round_trip_through_serde_json() {
        let de = Deserializer::new(registry());
        let input = json!({
            "Date": "31-01-2025",
            "SundaySorting": false,
            "Timeframes": {"TimeframeTimeFrame": [
                {"From": "09:00:00", "To": "12:00:00", "Options": {"string": ["Daytime"]}},
                {"From": "18:00:00", "To": "22:00:00", "Options": {"string": ["Evening", "Sunday"]}}
            ]}
        });
        let day = de.deserialize_json(&input, "Day", Service::Timeframe).unwrap();
        let output = Serializer::default()
            .serialize_json(&day, Service::Timeframe)
            .unwrap();
        assert_eq!(output, input);
    }
}
