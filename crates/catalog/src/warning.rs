use waybill_core::{EntityDescriptor, FieldDescriptor, Namespace};

pub static WARNING: EntityDescriptor = EntityDescriptor {
    name: "Warning",
    fields: &[
        FieldDescriptor::text("code", "Code")
            .aliases(&["code"])
            .namespace(Namespace::Common),
        FieldDescriptor::text("description", "Description")
            .aliases(&["description", "Message"])
            .namespace(Namespace::Common),
    ],
};

entity_wrapper! {
    /// A non-fatal warning attached to a response.
    Warning => WARNING
}

accessors!(Warning {
    code / set_code: text,
    description / set_description: text,
});
