use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Wrap};

use crate::reason_no_timeframe::ReasonNoTimeframe;
use crate::timeframe::Timeframe;

pub static RESPONSE_TIMEFRAMES: EntityDescriptor = EntityDescriptor {
    name: "ResponseTimeframes",
    fields: &[
        FieldDescriptor::new(
            "reason_no_timeframes",
            "ReasonNoTimeframes",
            FieldKind::EntityList {
                entity: "ReasonNoTimeframe",
                wrap: Wrap::both("ReasonNoTimeframe"),
            },
        ),
        FieldDescriptor::new(
            "timeframes",
            "Timeframes",
            FieldKind::EntityList {
                entity: "Timeframe",
                wrap: Wrap::both("Timeframe"),
            },
        ),
    ],
};

entity_wrapper! {
    /// Timeframe service response: available days and the reasons other
    /// days are unavailable.
    ResponseTimeframes => RESPONSE_TIMEFRAMES
}

accessors!(ResponseTimeframes {
    reason_no_timeframes / set_reason_no_timeframes: entities(ReasonNoTimeframe),
    timeframes / set_timeframes: entities(Timeframe),
});
