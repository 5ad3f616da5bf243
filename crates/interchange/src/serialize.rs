//! Entity to serialized-tree shaping.
//!
//! The serializer walks the descriptor fields that apply to the target
//! service, skips unset fields (the wire never carries explicit nulls),
//! qualifies names with the service namespace for XML, and wraps list
//! items in the container the field's descriptor names for the format.

use tracing::trace;
use waybill_core::datetime;
use waybill_core::{
    Entity, Error, FieldDescriptor, Format, Namespace, Result, Service, Value, Wrap,
};

use crate::config::InterchangeConfig;
use crate::tree::{Node, QName, Scalar, Tree};

#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: InterchangeConfig,
}

impl Serializer {
    pub fn new(config: InterchangeConfig) -> Self {
        Serializer { config }
    }

    pub fn config(&self) -> &InterchangeConfig {
        &self.config
    }

    /// Shapes `entity` into a tree for `service` in `format`.
    ///
    /// An entity with no fields applicable to `service` yields an empty
    /// tree. Fails with [`Error::NotSupported`] when the service is not
    /// offered over `format`.
    pub fn serialize<E>(&self, entity: &E, service: Service, format: Format) -> Result<Tree>
    where
        E: AsRef<Entity> + ?Sized,
    {
        let entity = entity.as_ref();
        if !service.supports(format) {
            return Err(Error::NotSupported {
                entity: entity.type_name().to_owned(),
                service,
                format,
            });
        }
        let tree = shape(entity, service, format)?;
        trace!(
            entity = entity.type_name(),
            %service,
            %format,
            fields = tree.len(),
            "serialized entity"
        );
        Ok(tree)
    }

    /// Serializes for a REST call and converts to a JSON object.
    pub fn serialize_json<E>(&self, entity: &E, service: Service) -> Result<serde_json::Value>
    where
        E: AsRef<Entity> + ?Sized,
    {
        Ok(self.serialize(entity, service, Format::Json)?.to_json())
    }

    /// Namespace URIs used by `tree` with the prefixes an XML encoder
    /// should declare for them.
    pub fn namespaces(&self, tree: &Tree) -> Vec<(String, String)> {
        tree.namespaces(&self.config.xml.namespace_prefixes)
    }
}

fn shape(entity: &Entity, service: Service, format: Format) -> Result<Tree> {
    let mut tree = Tree::new();
    for (index, field) in entity.descriptor().fields_for(service) {
        let Some(value) = entity.get_at(index) else {
            continue;
        };
        let name = QName::new(qualify(service, format, field.namespace), field.wire);
        tree.push(name, value_node(entity, value, field, service, format)?);
    }
    Ok(tree)
}

fn qualify(service: Service, format: Format, namespace: Namespace) -> Option<&'static str> {
    match format {
        Format::Xml => Some(service.namespace(namespace)),
        Format::Json => None,
    }
}

fn value_node(
    owner: &Entity,
    value: &Value,
    field: &FieldDescriptor,
    service: Service,
    format: Format,
) -> Result<Node> {
    let unformattable = |err: time::error::Format| {
        Error::invalid(owner.type_name(), field.name, value.to_string(), err.to_string())
    };
    let node = match value {
        Value::Text(s) => Node::text(s.clone()),
        Value::Integer(n) => Node::Scalar(Scalar::Integer(*n)),
        Value::Decimal(d) => Node::Scalar(Scalar::Decimal(*d)),
        Value::Boolean(b) => Node::Scalar(Scalar::Boolean(*b)),
        Value::Date(d) => Node::text(datetime::format_date(*d).map_err(unformattable)?),
        Value::DateTime(dt) => Node::text(datetime::format_date_time(*dt).map_err(unformattable)?),
        Value::Time(t) => Node::text(datetime::format_time(*t).map_err(unformattable)?),
        Value::Entity(e) => Node::Tree(shape(e, service, format)?),
        Value::EntityList(items) => {
            let nodes = items
                .iter()
                .map(|e| shape(e, service, format).map(Node::Tree))
                .collect::<Result<Vec<_>>>()?;
            wrap_items(nodes, field, service, format)
        }
        Value::TextList(items) => {
            let nodes = items.iter().map(|s| Node::text(s.clone())).collect();
            wrap_items(nodes, field, service, format)
        }
    };
    Ok(node)
}

/// Places list items under the field's container for `format`, if any.
/// An empty list still produces the container, so the field stays present.
fn wrap_items(items: Vec<Node>, field: &FieldDescriptor, service: Service, format: Format) -> Node {
    let wrap = field.kind.wrap().copied().unwrap_or(Wrap::NONE);
    match wrap.item(format) {
        Some(item) => {
            let namespace = qualify(
                service,
                format,
                wrap.namespace.unwrap_or(field.namespace),
            );
            let container: Tree = [(QName::new(namespace, item), Node::List(items))]
                .into_iter()
                .collect();
            Node::Tree(container)
        }
        None => Node::List(items),
    }
}
