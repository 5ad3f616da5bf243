use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind};

use crate::expectation::Expectation;

pub static STATUS: EntityDescriptor = EntityDescriptor {
    name: "Status",
    fields: &[
        FieldDescriptor::new("expectation", "Expectation", FieldKind::Entity("Expectation")),
        FieldDescriptor::text("phase_code", "PhaseCode"),
        FieldDescriptor::text("phase_description", "PhaseDescription"),
        FieldDescriptor::text("status_code", "StatusCode"),
        FieldDescriptor::text("status_description", "StatusDescription"),
        FieldDescriptor::new("time_stamp", "TimeStamp", FieldKind::DateTime),
    ],
};

entity_wrapper! {
    /// Current shipment status as reported by the status service.
    Status => STATUS
}

accessors!(Status {
    expectation / set_expectation: entity(Expectation),
    phase_code / set_phase_code: text,
    phase_description / set_phase_description: text,
    status_code / set_status_code: text,
    status_description / set_status_description: text,
    time_stamp / set_time_stamp: date_time,
});
