//! Catalog entities through the interchange layer: wrapper names,
//! namespaces, aliases and service-dependent field sets as the carrier's
//! services produce and expect them.

use serde_json::json;
use waybill_catalog::{
    registry, Address, Contact, Dimension, ResponseShipment, ResponseTimeframes, Shipment,
    Timeframe, TimeframeTimeFrame,
};
use waybill_core::{EntityType, Error, Format, Namespace, Service};
use waybill_interchange::{Deserializer, Node, Serializer, Tree};

fn tree(value: serde_json::Value) -> Tree {
    Tree::from_json(&value).unwrap()
}

fn shipment() -> Shipment {
    let mut receiver = Address::new();
    receiver
        .set_address_type("01")
        .unwrap()
        .set_first_name("Peter")
        .unwrap()
        .set_name("de Ruijter")
        .unwrap()
        .set_street("Siriusdreef")
        .unwrap()
        .set_house_nr("42")
        .unwrap()
        .set_zipcode("2132WT")
        .unwrap()
        .set_city("Hoofddorp")
        .unwrap()
        .set_countrycode("NL")
        .unwrap();

    let mut dimension = Dimension::new();
    dimension.set_weight(4_300).unwrap();

    let mut shipment = Shipment::new();
    shipment
        .set_addresses([receiver])
        .unwrap()
        .set_dimension(dimension)
        .unwrap()
        .set_product_code_delivery("3085")
        .unwrap()
        .set_reference("ORDER-1042")
        .unwrap();
    shipment
}

// ──────────────────────────────────────────────
// Outbound
// ──────────────────────────────────────────────

#[test]
fn shipping_json_is_plain_and_unwrapped() {
    let json = Serializer::default()
        .serialize_json(&shipment(), Service::Shipping)
        .unwrap();
    assert_eq!(
        json,
        json!({
            "Addresses": [{
                "AddressType": "01",
                "City": "Hoofddorp",
                "Countrycode": "NL",
                "FirstName": "Peter",
                "HouseNr": "42",
                "Name": "de Ruijter",
                "Street": "Siriusdreef",
                "Zipcode": "2132WT"
            }],
            "Dimension": {"Weight": 4300},
            "ProductCodeDelivery": "3085",
            "Reference": "ORDER-1042"
        })
    );
}

#[test]
fn labelling_xml_wraps_items_and_qualifies_names() {
    let mut shipment = shipment();
    shipment.set_barcode("3SDEVC201611210").unwrap();

    let serializer = Serializer::default();
    let tree = serializer
        .serialize(&shipment, Service::Labelling, Format::Xml)
        .unwrap();
    let domain = Service::Labelling.namespace(Namespace::Domain);

    let (name, addresses) = tree.entry("Addresses").unwrap();
    assert_eq!(name.to_string(), format!("{{{}}}Addresses", domain));
    let items = addresses
        .as_tree()
        .and_then(|t| t.get("Address"))
        .and_then(Node::as_list)
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].as_tree().and_then(|a| a.get("City")),
        Some(&Node::text("Hoofddorp"))
    );

    let namespaces = serializer.namespaces(&tree);
    assert_eq!(namespaces, vec![(domain.to_string(), "ns1".to_string())]);
}

#[test]
fn checkout_never_sends_address_type() {
    let json = Serializer::default()
        .serialize_json(&shipment(), Service::Checkout)
        .unwrap();
    assert!(json["Addresses"][0].get("AddressType").is_none());
    assert_eq!(json["Addresses"][0]["City"], "Hoofddorp");
}

#[test]
fn shipping_has_no_soap_binding() {
    let err = Serializer::default()
        .serialize(&shipment(), Service::Shipping, Format::Xml)
        .unwrap_err();
    assert!(matches!(err, Error::NotSupported { .. }));
}

#[test]
fn empty_timeframe_list_is_sent_as_empty_wrapper() {
    let mut timeframe = Timeframe::new();
    timeframe
        .set_date(time::macros::date!(2025 - 01 - 30))
        .unwrap()
        .set_timeframes(Vec::<TimeframeTimeFrame>::new())
        .unwrap();

    let json = Serializer::default()
        .serialize_json(&timeframe, Service::Timeframe)
        .unwrap();
    assert_eq!(
        json,
        json!({"Date": "30-01-2025", "Timeframes": {"TimeframeTimeFrame": []}})
    );

    let back: Timeframe = Deserializer::new(registry())
        .deserialize_as(&tree(json), Service::Timeframe)
        .unwrap();
    assert_eq!(back.timeframes(), Some(&[][..]));
}

#[cfg(feature = "phonenumber")]
#[test]
fn phone_numbers_go_out_in_international_format() {
    let mut contact = Contact::new();
    contact
        .set_contact_type("01")
        .unwrap()
        .set_tel_nr("0612345678", Some("NL"))
        .unwrap();

    let json = Serializer::default()
        .serialize_json(&contact, Service::Shipping)
        .unwrap();
    assert_eq!(json, json!({"ContactType": "01", "TelNr": "+31612345678"}));
}

#[test]
fn slot_times_and_dates_stay_within_the_wire_layouts() {
    let mut slot = TimeframeTimeFrame::new();
    slot.set_from(time::Time::from_hms(9, 0, 0).unwrap()).unwrap();
    let err = slot
        .set_from(time::Time::from_hms_milli(9, 0, 0, 500).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(slot.from(), Some(time::macros::time!(9:00)));

    let mut timeframe = Timeframe::new();
    let before_era = time::Date::from_calendar_date(-5, time::Month::January, 2).unwrap();
    assert!(matches!(
        timeframe.set_date(before_era),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(timeframe.date(), None);

    slot.set_to(time::macros::time!(10:30)).unwrap();
    timeframe
        .set_date(time::macros::date!(2025 - 01 - 30))
        .unwrap()
        .set_timeframes([slot])
        .unwrap();
    let json = Serializer::default()
        .serialize_json(&timeframe, Service::Timeframe)
        .unwrap();
    assert_eq!(
        json,
        json!({
            "Date": "30-01-2025",
            "Timeframes": {"TimeframeTimeFrame": [
                {"From": "09:00:00", "To": "10:30:00"}
            ]}
        })
    );
}

// ──────────────────────────────────────────────
// Inbound
// ──────────────────────────────────────────────

#[test]
fn timeframe_response_with_collapsed_items() {
    let response: ResponseTimeframes = Deserializer::new(registry())
        .deserialize_as(
            &tree(json!({
                "ReasonNoTimeframes": {"ReasonNoTimeframe": {
                    "code": "01",
                    "Date": "02-02-2025",
                    "Description": "Geen avondlevering mogelijk",
                    "Options": {"string": "Evening"}
                }},
                "Timeframes": {"Timeframe": [{
                    "Date": "2025-01-30",
                    "TimeFrames": {"TimeframeTimeFrame": [
                        {"From": "08:30:00", "To": "10:30:00", "Options": {"string": ["Daytime"]}},
                        {"From": "18:00", "To": "22:00", "Options": {"string": ["Evening"]}}
                    ]}
                }]}
            })),
            Service::Timeframe,
        )
        .unwrap();

    let reasons = response.reason_no_timeframes().unwrap();
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0].text("code"), Some("01"));
    assert_eq!(reasons[0].texts("options"), Some(&["Evening".to_string()][..]));

    let days = response.timeframes().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date("date"), Some(time::macros::date!(2025 - 01 - 30)));
    let slots = days[0].entities("timeframes").unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].time("from"), Some(time::macros::time!(18:00)));
}

#[test]
fn warning_aliases_map_to_canonical_fields() {
    let response: ResponseShipment = Deserializer::new(registry())
        .deserialize_as(
            &tree(json!({
                "Barcode": "3SDEVC201611210",
                "Labels": [{
                    "Content": "JVBERi0=",
                    "ContentType": "application/pdf",
                    "LabelType": "Label"
                }],
                "Warnings": [{"code": "6", "Message": "Het adres kon niet worden geverifieerd"}]
            })),
            Service::Shipping,
        )
        .unwrap();

    let warnings = response.warnings().unwrap();
    assert_eq!(warnings[0].text("code"), Some("6"));
    assert_eq!(
        warnings[0].text("description"),
        Some("Het adres kon niet worden geverifieerd")
    );
    assert_eq!(
        response.labels().unwrap()[0].text("contenttype"),
        Some("application/pdf")
    );

    let json = Serializer::default()
        .serialize_json(&response, Service::Shipping)
        .unwrap();
    assert_eq!(
        json["Warnings"][0],
        json!({"Code": "6", "Description": "Het adres kon niet worden geverifieerd"})
    );
    assert_eq!(json["Labels"][0]["Contenttype"], "application/pdf");
}

#[test]
fn barcode_requirement_follows_service() {
    let de = Deserializer::new(registry());
    let json = Serializer::default()
        .serialize_json(&shipment(), Service::Shipping)
        .unwrap();

    let shipped = de
        .deserialize_json(&json, "Shipment", Service::Shipping)
        .unwrap();
    assert_eq!(shipped, *shipment().as_entity());

    let err = de
        .deserialize_json(&json, "Shipment", Service::Labelling)
        .unwrap_err();
    assert_eq!(
        err,
        Error::deserialization("Shipment", "barcode", "required field 'Barcode' is missing")
    );
}

#[test]
fn nested_required_field_fails_the_whole_entity() {
    let err = Deserializer::new(registry())
        .deserialize_json(
            &json!({
                "Barcode": "3SDEVC201611210",
                "ProductCodeDelivery": "3085",
                "Dimension": {"Weight": 4300},
                "Addresses": [{"City": "Hoofddorp"}]
            }),
            "Shipment",
            Service::Labelling,
        )
        .unwrap_err();
    assert_eq!(err.field(), Some("address_type"));
}

#[test]
fn checkout_addresses_use_alternate_names() {
    let address: Address = Deserializer::new(registry())
        .deserialize_as(
            &tree(json!({"CountryCode": "NL", "PostalCode": "2132WT", "HouseNr": "42"})),
            Service::Checkout,
        )
        .unwrap();
    assert_eq!(address.countrycode(), Some("NL"));
    assert_eq!(address.zipcode(), Some("2132WT"));
    assert_eq!(address.address_type(), None);
}
