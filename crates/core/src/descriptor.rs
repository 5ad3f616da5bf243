//! Static field metadata describing how entity fields map to wire fields.
//!
//! Descriptor tables are declared as `static` items with the `const`
//! builder methods below, once per entity type, and shared by every
//! instance of that type. Nothing in this module is mutable after
//! definition.

use crate::service::{Format, Namespace, Service, ServiceSet};
use crate::validate::Rule;
use crate::value::Value;

/// Container naming for list fields.
///
/// Some wire formats nest list items inside a container element whose
/// name differs from the field name, e.g. a `Timeframes` field whose items
/// are each called `TimeframeTimeFrame`. The container is chosen per
/// format; `None` means items sit directly under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub xml: Option<&'static str>,
    pub json: Option<&'static str>,
    /// Namespace role of the items in XML; defaults to the field's.
    pub namespace: Option<Namespace>,
}

impl Wrap {
    pub const NONE: Wrap = Wrap {
        xml: None,
        json: None,
        namespace: None,
    };

    /// Same container name in every format.
    pub const fn both(name: &'static str) -> Wrap {
        Wrap {
            xml: Some(name),
            json: Some(name),
            namespace: None,
        }
    }

    /// Container only in XML; JSON uses a bare array.
    pub const fn xml(name: &'static str) -> Wrap {
        Wrap {
            xml: Some(name),
            json: None,
            namespace: None,
        }
    }

    pub const fn in_namespace(mut self, namespace: Namespace) -> Wrap {
        self.namespace = Some(namespace);
        self
    }

    pub fn item(&self, format: Format) -> Option<&'static str> {
        match format {
            Format::Xml => self.xml,
            Format::Json => self.json,
        }
    }

    /// Every container name this wrap may appear under, XML first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let json = self.json.filter(|j| Some(*j) != self.xml);
        self.xml.into_iter().chain(json)
    }
}

/// Declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    /// A single nested entity of the named type.
    Entity(&'static str),
    /// A list of nested entities of the named type.
    EntityList { entity: &'static str, wrap: Wrap },
    /// A list of plain strings.
    TextList { wrap: Wrap },
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Integer => "Integer",
            FieldKind::Decimal => "Decimal",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::DateTime => "DateTime",
            FieldKind::Time => "Time",
            FieldKind::Entity(_) => "Entity",
            FieldKind::EntityList { .. } => "EntityList",
            FieldKind::TextList { .. } => "TextList",
        }
    }

    /// The nested entity type, for entity and entity-list fields.
    pub fn nested(&self) -> Option<&'static str> {
        match self {
            FieldKind::Entity(entity) | FieldKind::EntityList { entity, .. } => Some(*entity),
            _ => None,
        }
    }

    pub fn wrap(&self) -> Option<&Wrap> {
        match self {
            FieldKind::EntityList { wrap, .. } | FieldKind::TextList { wrap } => Some(wrap),
            _ => None,
        }
    }
}

/// A constant default applied when an entity is constructed and when an
/// inbound tree omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    Boolean(bool),
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Text(s) => Value::Text(s.to_owned()),
            DefaultValue::Integer(n) => Value::Integer(n),
            DefaultValue::Boolean(b) => Value::Boolean(b),
        }
    }
}

/// Metadata for one entity field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// In-memory field name used by accessors and in error messages.
    pub name: &'static str,
    /// Canonical wire name.
    pub wire: &'static str,
    pub kind: FieldKind,
    pub namespace: Namespace,
    /// Services the field is exchanged with.
    pub services: ServiceSet,
    /// Services that reject a payload without this field.
    pub required: ServiceSet,
    /// Alternate inbound wire names, tried in order after `wire`.
    pub aliases: &'static [&'static str],
    pub rules: &'static [Rule],
    pub default: Option<DefaultValue>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, wire: &'static str, kind: FieldKind) -> Self {
        FieldDescriptor {
            name,
            wire,
            kind,
            namespace: Namespace::Domain,
            services: ServiceSet::ALL,
            required: ServiceSet::EMPTY,
            aliases: &[],
            rules: &[],
            default: None,
        }
    }

    pub const fn text(name: &'static str, wire: &'static str) -> Self {
        FieldDescriptor::new(name, wire, FieldKind::Text)
    }

    pub const fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    pub const fn services(mut self, services: ServiceSet) -> Self {
        self.services = services;
        self
    }

    /// Marks the field required for `services`; a required field always
    /// applies to the services that require it.
    pub const fn required(mut self, services: ServiceSet) -> Self {
        self.required = services;
        self.services = self.services.union(services);
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub const fn default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn applies_to(&self, service: Service) -> bool {
        self.services.contains(service)
    }

    pub fn is_required_for(&self, service: Service) -> bool {
        self.required.contains(service)
    }

    /// Inbound key candidates in priority order: the wire name, then aliases.
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.wire).chain(aliases.iter().copied())
    }
}

/// The fixed, ordered field table of one entity type.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EntityDescriptor {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        EntityDescriptor { name, fields }
    }

    /// Looks a field up by its in-memory name, returning its slot index.
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields.iter().enumerate().find(|(_, f)| f.name == name)
    }

    /// Fields exchanged with `service`, in declaration order.
    pub fn fields_for(
        &self,
        service: Service,
    ) -> impl Iterator<Item = (usize, &'static FieldDescriptor)> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.applies_to(service))
    }

    /// Services at least one field applies to.
    pub fn services(&self) -> ServiceSet {
        self.fields
            .iter()
            .fold(ServiceSet::EMPTY, |acc, f| acc.union(f.services))
    }
}
