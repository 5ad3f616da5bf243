use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Rule, Service, ServiceSet};

pub static MESSAGE: EntityDescriptor = EntityDescriptor {
    name: "Message",
    fields: &[
        FieldDescriptor::text("message_id", "MessageID")
            .rules(&[Rule::Length { min: 1, max: 12 }]),
        FieldDescriptor::new("message_time_stamp", "MessageTimeStamp", FieldKind::DateTime),
        FieldDescriptor::text("printertype", "Printertype")
            .services(ServiceSet::of(&[Service::Labelling])),
    ],
};

entity_wrapper! {
    /// Request envelope metadata.
    Message => MESSAGE
}

accessors!(Message {
    message_id / set_message_id: text,
    message_time_stamp / set_message_time_stamp: date_time,
    printertype / set_printertype: text,
});
