use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Wrap};

use crate::timeframe_time_frame::TimeframeTimeFrame;

pub static TIMEFRAME: EntityDescriptor = EntityDescriptor {
    name: "Timeframe",
    fields: &[
        FieldDescriptor::new("date", "Date", FieldKind::Date),
        FieldDescriptor::new(
            "timeframes",
            "Timeframes",
            FieldKind::EntityList {
                entity: "TimeframeTimeFrame",
                wrap: Wrap::both("TimeframeTimeFrame"),
            },
        )
        .aliases(&["TimeFrames"]),
    ],
};

entity_wrapper! {
    /// One delivery day with its available time slots.
    Timeframe => TIMEFRAME
}

accessors!(Timeframe {
    date / set_date: date,
    timeframes / set_timeframes: entities(TimeframeTimeFrame),
});
