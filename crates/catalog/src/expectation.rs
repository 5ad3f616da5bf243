use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind};

pub static EXPECTATION: EntityDescriptor = EntityDescriptor {
    name: "Expectation",
    fields: &[
        FieldDescriptor::new("eta_from", "ETAFrom", FieldKind::DateTime),
        FieldDescriptor::new("eta_to", "ETATo", FieldKind::DateTime),
    ],
};

entity_wrapper! {
    /// Expected delivery window reported by the status service.
    Expectation => EXPECTATION
}

accessors!(Expectation {
    eta_from / set_eta_from: date_time,
    eta_to / set_eta_to: date_time,
});
