//! Process-wide lookup from entity type name to its descriptor table.

use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use crate::descriptor::{EntityDescriptor, FieldDescriptor, FieldKind};
use crate::error::{Error, Result};
use crate::service::Service;

/// Read-only map of registered entity types.
///
/// Built once and never mutated afterwards, so shared references may be
/// read from any number of threads.
#[derive(Debug, Default)]
pub struct Registry {
    entities: BTreeMap<&'static str, &'static EntityDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, entity: &str) -> Result<&'static EntityDescriptor> {
        self.entities
            .get(entity)
            .copied()
            .ok_or_else(|| Error::entity_not_found(entity))
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Ordered fields of `entity` that apply to `service`.
    ///
    /// An unknown type or a type with nothing to exchange with `service`
    /// yields an empty list rather than an error.
    pub fn fields(&self, entity: &str, service: Service) -> Vec<&'static FieldDescriptor> {
        match self.entities.get(entity) {
            Some(descriptor) => descriptor.fields_for(service).map(|(_, f)| f).collect(),
            None => Vec::new(),
        }
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Checks the registered tables for consistency: every nested entity
    /// type must be registered, and no inbound key (wire name or alias)
    /// may map to two fields of the same entity.
    ///
    /// A list item type must not claim its list's item name as a field key.
    pub fn validate(&self) -> Result<()> {
        for descriptor in self.entities.values() {
            let mut keys = HashSet::new();
            for field in descriptor.fields {
                if let Some(nested) = field.kind.nested() {
                    let Some(item) = self.entities.get(nested) else {
                        return Err(Error::entity_not_found(nested));
                    };
                    if let FieldKind::EntityList { wrap, .. } = &field.kind {
                        let collision = item
                            .fields
                            .iter()
                            .flat_map(FieldDescriptor::candidates)
                            .find(|key| wrap.names().any(|name| name == *key));
                        if let Some(name) = collision {
                            return Err(Error::invalid(
                                descriptor.name,
                                field.name,
                                name,
                                format!("list item name is also a field key of {}", nested),
                            ));
                        }
                    }
                }
                for key in field.candidates() {
                    if !keys.insert(key) {
                        return Err(Error::invalid(
                            descriptor.name,
                            field.name,
                            key,
                            "inbound key is already claimed by another field",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Collects descriptors before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entities: BTreeMap<&'static str, &'static EntityDescriptor>,
}

impl RegistryBuilder {
    /// Adds a descriptor. Registering a second table under an existing
    /// type name keeps the first one.
    pub fn register(mut self, descriptor: &'static EntityDescriptor) -> Self {
        if self.entities.contains_key(descriptor.name) {
            warn!(entity = descriptor.name, "duplicate entity registration ignored");
        } else {
            self.entities.insert(descriptor.name, descriptor);
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            entities: self.entities,
        }
    }
}
