//! waybill-interchange: serialized tree shaping for carrier payloads.
//!
//! Turns catalog entities into namespace-qualified [`Tree`]s for a target
//! service and format, and builds entities back from parsed response
//! trees. Byte-level XML and JSON encoding belong to the transport; this
//! crate only shapes trees, assigns namespaces and list wrapper names, and
//! bridges trees to `serde_json` values.
//!
//! # Public API
//!
//! - [`Serializer`] -- entity to tree for a service and format
//! - [`Deserializer`] -- tree to entity, with alias normalization
//! - [`Tree`], [`Node`], [`Scalar`], [`QName`] -- the intermediate form
//! - [`InterchangeConfig`] -- TOML-loaded settings

pub mod config;
pub mod deserialize;
pub mod json;
pub mod serialize;
pub mod tree;

#[cfg(test)]
mod fixtures;

pub use config::{ConfigError, DeserializeConfig, InterchangeConfig, XmlConfig};
pub use deserialize::Deserializer;
pub use serialize::Serializer;
pub use tree::{Node, QName, Scalar, Tree};
