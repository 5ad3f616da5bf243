use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Rule};

pub static DIMENSION: EntityDescriptor = EntityDescriptor {
    name: "Dimension",
    fields: &[
        FieldDescriptor::new("height", "Height", FieldKind::Integer),
        FieldDescriptor::new("length", "Length", FieldKind::Integer),
        FieldDescriptor::new("volume", "Volume", FieldKind::Integer),
        FieldDescriptor::new("weight", "Weight", FieldKind::Integer)
            .rules(&[Rule::Range { min: 1, max: 31_500 }]),
        FieldDescriptor::new("width", "Width", FieldKind::Integer),
    ],
};

entity_wrapper! {
    /// Parcel dimensions in millimetres, weight in grams.
    Dimension => DIMENSION
}

accessors!(Dimension {
    height / set_height: integer,
    length / set_length: integer,
    volume / set_volume: integer,
    weight / set_weight: integer,
    width / set_width: integer,
});
