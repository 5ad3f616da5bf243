//! Small descriptor set exercising every field kind and wrapping style.

use std::sync::OnceLock;

use waybill_core::{
    DefaultValue, EntityDescriptor, FieldDescriptor, FieldKind, Namespace, Registry, Rule,
    Service, ServiceSet, Wrap,
};

const TIMEFRAME: ServiceSet = ServiceSet::of(&[Service::Timeframe]);

pub(crate) static SLOT: EntityDescriptor = EntityDescriptor {
    name: "Slot",
    fields: &[
        FieldDescriptor::new("from", "From", FieldKind::Time).required(TIMEFRAME),
        FieldDescriptor::new(
            "options",
            "Options",
            FieldKind::TextList {
                wrap: Wrap::both("string").in_namespace(Namespace::Arrays),
            },
        )
        .services(TIMEFRAME),
        FieldDescriptor::new("to", "To", FieldKind::Time).required(TIMEFRAME),
    ],
};

pub(crate) static DAY: EntityDescriptor = EntityDescriptor {
    name: "Day",
    fields: &[
        FieldDescriptor::new("date", "Date", FieldKind::Date),
        FieldDescriptor::new(
            "slots",
            "Timeframes",
            FieldKind::EntityList {
                entity: "Slot",
                wrap: Wrap::both("TimeframeTimeFrame"),
            },
        )
        .aliases(&["TimeFrames"]),
        FieldDescriptor::new("sunday_sorting", "SundaySorting", FieldKind::Boolean),
    ],
};

pub(crate) static NOTICE: EntityDescriptor = EntityDescriptor {
    name: "Notice",
    fields: &[
        FieldDescriptor::text("code", "Code")
            .aliases(&["code", "ErrorCode"])
            .namespace(Namespace::Common),
        FieldDescriptor::text("description", "Description")
            .aliases(&["description", "Message"])
            .namespace(Namespace::Common),
    ],
};

pub(crate) static PARCEL: EntityDescriptor = EntityDescriptor {
    name: "Parcel",
    fields: &[
        FieldDescriptor::text("barcode", "Barcode")
            .required(ServiceSet::of(&[Service::Labelling])),
        FieldDescriptor::text("reference", "Reference")
            .services(ServiceSet::of(&[Service::Labelling, Service::Shipping])),
        FieldDescriptor::new("weight", "Weight", FieldKind::Integer)
            .rules(&[Rule::Range { min: 1, max: 31_500 }]),
        FieldDescriptor::new("value", "Value", FieldKind::Decimal),
        FieldDescriptor::new("delivered_at", "DeliveredAt", FieldKind::DateTime),
        FieldDescriptor::new(
            "notices",
            "Notices",
            FieldKind::EntityList {
                entity: "Notice",
                wrap: Wrap::xml("Notice"),
            },
        ),
        FieldDescriptor::new("holder", "Holder", FieldKind::Entity("Notice")),
        FieldDescriptor::text("kind", "Kind")
            .rules(&[Rule::Digits { min: 2, max: 2 }])
            .default(DefaultValue::Text("01")),
    ],
};

pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        Registry::builder()
            .register(&SLOT)
            .register(&DAY)
            .register(&NOTICE)
            .register(&PARCEL)
            .build()
    })
}
