use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Wrap};

use crate::label::Label;
use crate::warning::Warning;

pub static RESPONSE_SHIPMENT: EntityDescriptor = EntityDescriptor {
    name: "ResponseShipment",
    fields: &[
        FieldDescriptor::text("barcode", "Barcode"),
        FieldDescriptor::text("product_code_delivery", "ProductCodeDelivery"),
        FieldDescriptor::new(
            "labels",
            "Labels",
            FieldKind::EntityList {
                entity: "Label",
                wrap: Wrap::xml("Label"),
            },
        ),
        FieldDescriptor::new(
            "warnings",
            "Warnings",
            FieldKind::EntityList {
                entity: "Warning",
                wrap: Wrap::xml("Warning"),
            },
        ),
    ],
};

entity_wrapper! {
    /// One shipment in a labelling or confirming response.
    ResponseShipment => RESPONSE_SHIPMENT
}

accessors!(ResponseShipment {
    barcode / set_barcode: text,
    product_code_delivery / set_product_code_delivery: text,
    labels / set_labels: entities(Label),
    warnings / set_warnings: entities(Warning),
});
