//! waybill-core: field descriptors, the entity base, and validators.
//!
//! Every carrier entity is a generic [`Entity`] driven by a static
//! [`EntityDescriptor`]: an ordered table of [`FieldDescriptor`]s naming
//! each field's wire name, namespace role, kind, applicable services,
//! aliases, and validation [`Rule`]s. Typed catalog wrappers implement
//! [`EntityType`] on top of it.
//!
//! # Public API
//!
//! - [`Entity`] -- value slots plus the validated mutation surface
//! - [`EntityDescriptor`], [`FieldDescriptor`], [`FieldKind`], [`Wrap`]
//! - [`Registry`] -- type name to descriptor lookup, frozen after build
//! - [`Rule`] -- per-field constraints
//! - [`Service`], [`Format`], [`Namespace`], [`ServiceSet`]
//! - [`Error`] -- the error taxonomy shared by every waybill crate

pub mod datetime;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod phone;
pub mod registry;
pub mod service;
pub mod validate;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use descriptor::{DefaultValue, EntityDescriptor, FieldDescriptor, FieldKind, Wrap};
pub use entity::{Entity, EntityId, EntityType};
pub use error::{Error, Result};
pub use registry::{Registry, RegistryBuilder};
pub use service::{Format, Namespace, Service, ServiceSet, UnknownService};
pub use validate::Rule;
pub use value::Value;
