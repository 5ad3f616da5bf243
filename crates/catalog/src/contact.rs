use waybill_core::{EntityDescriptor, FieldDescriptor, Rule};

pub static CONTACT: EntityDescriptor = EntityDescriptor {
    name: "Contact",
    fields: &[
        FieldDescriptor::text("contact_type", "ContactType")
            .rules(&[Rule::Digits { min: 2, max: 2 }]),
        FieldDescriptor::text("email", "Email").rules(&[Rule::Length { min: 3, max: 50 }]),
        FieldDescriptor::text("sms_nr", "SMSNr"),
        FieldDescriptor::text("tel_nr", "TelNr"),
    ],
};

entity_wrapper! {
    /// Contact details of the receiver, used for delivery notifications.
    Contact => CONTACT
}

accessors!(Contact {
    contact_type / set_contact_type: text,
    email / set_email: text,
    sms_nr / set_sms_nr: phone,
    tel_nr / set_tel_nr: phone,
});
