use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Namespace, Wrap};

pub static REASON_NO_TIMEFRAME: EntityDescriptor = EntityDescriptor {
    name: "ReasonNoTimeframe",
    fields: &[
        FieldDescriptor::text("code", "Code").aliases(&["code"]),
        FieldDescriptor::new("date", "Date", FieldKind::Date),
        FieldDescriptor::text("description", "Description"),
        FieldDescriptor::new(
            "options",
            "Options",
            FieldKind::TextList {
                wrap: Wrap::both("string").in_namespace(Namespace::Arrays),
            },
        ),
        FieldDescriptor::new("from", "From", FieldKind::Time),
        FieldDescriptor::new("to", "To", FieldKind::Time),
    ],
};

entity_wrapper! {
    /// Why no delivery timeframe is offered for a date and option.
    ReasonNoTimeframe => REASON_NO_TIMEFRAME
}

accessors!(ReasonNoTimeframe {
    code / set_code: text,
    date / set_date: date,
    description / set_description: text,
    options / set_options: texts,
    from / set_from: time,
    to / set_to: time,
});
