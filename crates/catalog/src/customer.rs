use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Rule};

use crate::address::Address;

pub static CUSTOMER: EntityDescriptor = EntityDescriptor {
    name: "Customer",
    fields: &[
        FieldDescriptor::new("address", "Address", FieldKind::Entity("Address")),
        FieldDescriptor::text("collection_location", "CollectionLocation")
            .rules(&[Rule::Digits { min: 6, max: 6 }]),
        FieldDescriptor::text("contact_person", "ContactPerson"),
        FieldDescriptor::text("customer_code", "CustomerCode")
            .rules(&[Rule::Alphanumeric { min: 4, max: 4 }]),
        FieldDescriptor::text("customer_number", "CustomerNumber")
            .rules(&[Rule::Digits { min: 8, max: 8 }]),
        FieldDescriptor::text("email", "Email"),
        FieldDescriptor::text("name", "Name"),
    ],
};

entity_wrapper! {
    /// The sending customer's account with the carrier.
    Customer => CUSTOMER
}

accessors!(Customer {
    address / set_address: entity(Address),
    collection_location / set_collection_location: text,
    contact_person / set_contact_person: text,
    customer_code / set_customer_code: text,
    customer_number / set_customer_number: text,
    email / set_email: text,
    name / set_name: text,
});
