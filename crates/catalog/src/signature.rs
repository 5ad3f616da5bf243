use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind};

pub static SIGNATURE: EntityDescriptor = EntityDescriptor {
    name: "Signature",
    fields: &[
        FieldDescriptor::text("barcode", "Barcode"),
        FieldDescriptor::new("signature_date", "SignatureDate", FieldKind::DateTime),
        FieldDescriptor::text("signature_image", "SignatureImage"),
    ],
};

entity_wrapper! {
    /// Proof of delivery signature; the image is base64 encoded.
    Signature => SIGNATURE
}

accessors!(Signature {
    barcode / set_barcode: text,
    signature_date / set_signature_date: date_time,
    signature_image / set_signature_image: text,
});
