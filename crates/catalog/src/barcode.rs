use tracing::debug;
use waybill_core::{
    DefaultValue, EntityDescriptor, FieldDescriptor, Result, Rule, Service, ServiceSet,
};

pub static BARCODE: EntityDescriptor = EntityDescriptor {
    name: "Barcode",
    fields: &[
        FieldDescriptor::text("barcode_type", "Type")
            .required(ServiceSet::of(&[Service::Barcode]))
            .rules(&[Rule::Alphanumeric { min: 2, max: 2 }])
            .default(DefaultValue::Text("3S")),
        FieldDescriptor::text("range", "Range")
            .required(ServiceSet::of(&[Service::Barcode]))
            .rules(&[Rule::Alphanumeric { min: 3, max: 4 }]),
        FieldDescriptor::text("serie", "Serie")
            .rules(SERIE_RULES)
            .default(DefaultValue::Text(DEFAULT_SERIE)),
    ],
};

const DEFAULT_SERIE: &str = "000000000-999999999";

const SERIE_RULES: &[Rule] = &[Rule::Custom {
    check: is_serie,
    expected: "a serie of two digit runs joined by '-'",
}];

fn is_serie(value: &waybill_core::Value) -> bool {
    let waybill_core::Value::Text(serie) = value else {
        return true;
    };
    match serie.split_once('-') {
        Some((from, to)) => [from, to]
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())),
        None => false,
    }
}

entity_wrapper! {
    /// A barcode generation request: type, customer range and number serie.
    Barcode => BARCODE
}

accessors!(Barcode {
    barcode_type / set_barcode_type: text,
    range / set_range: text,
    serie / set_serie: text,
});

impl Barcode {
    /// A request for `barcode_type` barcodes in `range`, with the serie the
    /// carrier expects for that combination: 3S barcodes on a four
    /// character range get nine digit numbers, other 3S ranges seven, and
    /// every other type eight.
    pub fn for_type(barcode_type: &str, range: &str) -> Result<Barcode> {
        let serie = match (barcode_type, range.chars().count()) {
            ("3S", 4) => DEFAULT_SERIE,
            ("3S", _) => "0000000-9999999",
            _ => "00000000-99999999",
        };
        debug!(barcode_type, range, serie, "derived barcode serie");

        let mut barcode = Barcode::new();
        barcode
            .set_barcode_type(barcode_type)?
            .set_range(range)?
            .set_serie(serie)?;
        Ok(barcode)
    }
}
