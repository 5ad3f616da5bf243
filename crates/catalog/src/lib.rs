//! waybill-catalog: the carrier's entity catalog.
//!
//! Each entity is a static [`EntityDescriptor`] plus a thin typed wrapper
//! (generated by `entity_wrapper!` and `accessors!`) over the generic
//! [`waybill_core::Entity`]. [`registry()`] holds every descriptor for the
//! deserializer.
//!
//! ```ignore
//! let mut address = Address::new();
//! address.set_address_type("01")?.set_city("Hoofddorp")?;
//! ```

use std::sync::OnceLock;

use waybill_core::{EntityDescriptor, Registry, Service, ServiceSet};

#[macro_use]
mod macros;

pub mod address;
pub mod amount;
pub mod barcode;
pub mod contact;
pub mod customer;
pub mod dimension;
pub mod expectation;
pub mod label;
pub mod message;
pub mod reason_no_timeframe;
pub mod response_shipment;
pub mod response_timeframes;
pub mod shipment;
pub mod signature;
pub mod status;
pub mod timeframe;
pub mod timeframe_time_frame;
pub mod warning;

pub use address::Address;
pub use amount::Amount;
pub use barcode::Barcode;
pub use contact::Contact;
pub use customer::Customer;
pub use dimension::Dimension;
pub use expectation::Expectation;
pub use label::Label;
pub use message::Message;
pub use reason_no_timeframe::ReasonNoTimeframe;
pub use response_shipment::ResponseShipment;
pub use response_timeframes::ResponseTimeframes;
pub use shipment::Shipment;
pub use signature::Signature;
pub use status::Status;
pub use timeframe::Timeframe;
pub use timeframe_time_frame::TimeframeTimeFrame;
pub use warning::Warning;

/// Services that label, confirm or announce shipments.
pub(crate) const SHIPMENT_SERVICES: ServiceSet =
    ServiceSet::of(&[Service::Labelling, Service::Confirming, Service::Shipping]);

/// Every catalog descriptor, in registration order.
pub static DESCRIPTORS: &[&EntityDescriptor] = &[
    &address::ADDRESS,
    &amount::AMOUNT,
    &barcode::BARCODE,
    &contact::CONTACT,
    &customer::CUSTOMER,
    &dimension::DIMENSION,
    &expectation::EXPECTATION,
    &label::LABEL,
    &message::MESSAGE,
    &reason_no_timeframe::REASON_NO_TIMEFRAME,
    &response_shipment::RESPONSE_SHIPMENT,
    &response_timeframes::RESPONSE_TIMEFRAMES,
    &shipment::SHIPMENT_DESCRIPTOR,
    &signature::SIGNATURE,
    &status::STATUS,
    &timeframe::TIMEFRAME,
    &timeframe_time_frame::TIMEFRAME_TIME_FRAME,
    &warning::WARNING,
];

/// The process-wide catalog registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        DESCRIPTORS
            .iter()
            .copied()
            .fold(Registry::builder(), |builder, descriptor| {
                builder.register(descriptor)
            })
            .build()
    })
}
