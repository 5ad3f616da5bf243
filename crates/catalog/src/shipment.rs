use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Rule, Service, ServiceSet, Wrap};

use crate::address::Address;
use crate::amount::Amount;
use crate::contact::Contact;
use crate::dimension::Dimension;
use crate::SHIPMENT_SERVICES;

pub static SHIPMENT_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    name: "Shipment",
    fields: &[
        FieldDescriptor::new(
            "addresses",
            "Addresses",
            FieldKind::EntityList {
                entity: "Address",
                wrap: Wrap::xml("Address"),
            },
        )
        .required(SHIPMENT_SERVICES),
        FieldDescriptor::new(
            "amounts",
            "Amounts",
            FieldKind::EntityList {
                entity: "Amount",
                wrap: Wrap::xml("Amount"),
            },
        ),
        FieldDescriptor::text("barcode", "Barcode")
            .required(ServiceSet::of(&[Service::Labelling, Service::Confirming])),
        FieldDescriptor::new(
            "contacts",
            "Contacts",
            FieldKind::EntityList {
                entity: "Contact",
                wrap: Wrap::xml("Contact"),
            },
        ),
        FieldDescriptor::text("content", "Content"),
        FieldDescriptor::text("cost_center", "CostCenter"),
        FieldDescriptor::text("customer_order_number", "CustomerOrderNumber"),
        FieldDescriptor::text("delivery_address", "DeliveryAddress")
            .rules(&[Rule::Digits { min: 2, max: 2 }]),
        FieldDescriptor::new("delivery_date", "DeliveryDate", FieldKind::DateTime),
        FieldDescriptor::new("dimension", "Dimension", FieldKind::Entity("Dimension"))
            .required(SHIPMENT_SERVICES),
        FieldDescriptor::text("product_code_delivery", "ProductCodeDelivery")
            .required(SHIPMENT_SERVICES)
            .rules(&[Rule::Digits { min: 4, max: 5 }]),
        FieldDescriptor::text("reference", "Reference"),
        FieldDescriptor::text("remark", "Remark"),
    ],
};

entity_wrapper! {
    /// A shipment to label, confirm or announce. The barcode is assigned
    /// by the carrier for the REST shipping call, so only labelling and
    /// confirming require it.
    Shipment => SHIPMENT_DESCRIPTOR
}

accessors!(Shipment {
    addresses / set_addresses: entities(Address),
    amounts / set_amounts: entities(Amount),
    barcode / set_barcode: text,
    contacts / set_contacts: entities(Contact),
    content / set_content: text,
    cost_center / set_cost_center: text,
    customer_order_number / set_customer_order_number: text,
    delivery_address / set_delivery_address: text,
    delivery_date / set_delivery_date: date_time,
    dimension / set_dimension: entity(Dimension),
    product_code_delivery / set_product_code_delivery: text,
    reference / set_reference: text,
    remark / set_remark: text,
});
