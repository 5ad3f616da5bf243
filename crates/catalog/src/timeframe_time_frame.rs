use waybill_core::{
    EntityDescriptor, FieldDescriptor, FieldKind, Namespace, Service, ServiceSet, Wrap,
};

pub static TIMEFRAME_TIME_FRAME: EntityDescriptor = EntityDescriptor {
    name: "TimeframeTimeFrame",
    fields: &[
        FieldDescriptor::new("from", "From", FieldKind::Time)
            .required(ServiceSet::of(&[Service::Timeframe])),
        FieldDescriptor::new(
            "options",
            "Options",
            FieldKind::TextList {
                wrap: Wrap::both("string").in_namespace(Namespace::Arrays),
            },
        ),
        FieldDescriptor::new("to", "To", FieldKind::Time)
            .required(ServiceSet::of(&[Service::Timeframe])),
    ],
};

entity_wrapper! {
    /// A time slot within a delivery day, with its delivery options
    /// (`Daytime`, `Evening`, `Sunday`, ...).
    TimeframeTimeFrame => TIMEFRAME_TIME_FRAME
}

accessors!(TimeframeTimeFrame {
    from / set_from: time,
    options / set_options: texts,
    to / set_to: time,
});
