use waybill_core::{EntityDescriptor, FieldDescriptor, FieldKind, Rule};

pub static AMOUNT: EntityDescriptor = EntityDescriptor {
    name: "Amount",
    fields: &[
        FieldDescriptor::text("account_name", "AccountName"),
        FieldDescriptor::text("amount_type", "AmountType")
            .rules(&[Rule::OneOf(&["01", "02", "04", "12"])]),
        FieldDescriptor::text("bic", "BIC").rules(&[Rule::Alphanumeric { min: 8, max: 11 }]),
        FieldDescriptor::text("currency", "Currency").rules(&[Rule::Length { min: 3, max: 3 }]),
        FieldDescriptor::text("iban", "IBAN").rules(&[Rule::Alphanumeric { min: 15, max: 34 }]),
        FieldDescriptor::text("reference", "Reference"),
        FieldDescriptor::text("transaction_number", "TransactionNumber"),
        FieldDescriptor::new("value", "Value", FieldKind::Decimal),
    ],
};

entity_wrapper! {
    /// A monetary amount attached to a shipment: cash on delivery
    /// (`01`), insured value (`02`), ...
    Amount => AMOUNT
}

accessors!(Amount {
    account_name / set_account_name: text,
    amount_type / set_amount_type: text,
    bic / set_bic: text,
    currency / set_currency: text,
    iban / set_iban: text,
    reference / set_reference: text,
    transaction_number / set_transaction_number: text,
    value / set_value: decimal,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_type_is_enumerated() {
        let mut amount = Amount::new();
        amount.set_amount_type("02").unwrap();
        let err = amount.set_amount_type("03").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value '03' for Amount.amount_type: expected one of [01, 02, 04, 12]"
        );
    }
}
