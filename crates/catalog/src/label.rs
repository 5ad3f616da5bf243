use waybill_core::{EntityDescriptor, FieldDescriptor, Rule};

pub static LABEL: EntityDescriptor = EntityDescriptor {
    name: "Label",
    fields: &[
        FieldDescriptor::text("content", "Content"),
        FieldDescriptor::text("contenttype", "Contenttype").aliases(&["ContentType"]),
        FieldDescriptor::text("labeltype", "Labeltype")
            .aliases(&["LabelType"])
            .rules(&[Rule::OneOf(&[
                "Label",
                "BusinessReplyNumber",
                "CN23",
                "CP71",
                "CommercialInvoice",
            ])]),
    ],
};

entity_wrapper! {
    /// A generated label; `Content` is the base64 encoded document.
    Label => LABEL
}

accessors!(Label {
    content / set_content: text,
    contenttype / set_contenttype: text,
    labeltype / set_labeltype: text,
});
