use waybill_core::{EntityDescriptor, FieldDescriptor, Rule};

use crate::SHIPMENT_SERVICES;

pub static ADDRESS: EntityDescriptor = EntityDescriptor {
    name: "Address",
    fields: &[
        FieldDescriptor::text("address_type", "AddressType")
            .services(SHIPMENT_SERVICES)
            .required(SHIPMENT_SERVICES)
            .rules(&[Rule::Digits { min: 2, max: 2 }]),
        FieldDescriptor::text("area", "Area"),
        FieldDescriptor::text("buildingname", "Buildingname"),
        FieldDescriptor::text("city", "City"),
        FieldDescriptor::text("company_name", "CompanyName"),
        FieldDescriptor::text("countrycode", "Countrycode")
            .aliases(&["CountryCode"])
            .rules(&[Rule::Alphanumeric { min: 2, max: 2 }]),
        FieldDescriptor::text("department", "Department"),
        FieldDescriptor::text("doorcode", "Doorcode"),
        FieldDescriptor::text("first_name", "FirstName"),
        FieldDescriptor::text("floor", "Floor"),
        FieldDescriptor::text("house_nr", "HouseNr"),
        FieldDescriptor::text("house_nr_ext", "HouseNrExt"),
        FieldDescriptor::text("name", "Name"),
        FieldDescriptor::text("region", "Region"),
        FieldDescriptor::text("remark", "Remark"),
        FieldDescriptor::text("street", "Street"),
        FieldDescriptor::text("street_house_nr_ext", "StreetHouseNrExt"),
        FieldDescriptor::text("zipcode", "Zipcode").aliases(&["ZipCode", "PostalCode"]),
    ],
};

entity_wrapper! {
    /// A postal address. `AddressType` is a two-digit code (`01` receiver,
    /// `02` sender, ...) exchanged with the shipment services only.
    Address => ADDRESS
}

accessors!(Address {
    address_type / set_address_type: text,
    area / set_area: text,
    buildingname / set_buildingname: text,
    city / set_city: text,
    company_name / set_company_name: text,
    countrycode / set_countrycode: text,
    department / set_department: text,
    doorcode / set_doorcode: text,
    first_name / set_first_name: text,
    floor / set_floor: text,
    house_nr / set_house_nr: text,
    house_nr_ext / set_house_nr_ext: text,
    name / set_name: text,
    region / set_region: text,
    remark / set_remark: text,
    street / set_street: text,
    street_house_nr_ext / set_street_house_nr_ext: text,
    zipcode / set_zipcode: text,
});
