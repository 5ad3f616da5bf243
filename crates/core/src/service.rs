//! Remote services, wire formats, and namespace roles.

use std::fmt;
use std::str::FromStr;

/// A remote operation grouping. Decides which fields of an entity are
/// exchanged and which XML namespaces they are qualified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    Barcode,
    Labelling,
    Confirming,
    Shipping,
    ShippingStatus,
    DeliveryDate,
    Location,
    Timeframe,
    Checkout,
}

impl Service {
    pub const ALL: [Service; 9] = [
        Service::Barcode,
        Service::Labelling,
        Service::Confirming,
        Service::Shipping,
        Service::ShippingStatus,
        Service::DeliveryDate,
        Service::Location,
        Service::Timeframe,
        Service::Checkout,
    ];

    /// Wire name of the service, e.g. `BarcodeWebService`.
    pub fn name(self) -> &'static str {
        match self {
            Service::Barcode => "BarcodeWebService",
            Service::Labelling => "LabellingWebService",
            Service::Confirming => "ConfirmingWebService",
            Service::Shipping => "ShippingWebService",
            Service::ShippingStatus => "ShippingStatusWebService",
            Service::DeliveryDate => "DeliveryDateWebService",
            Service::Location => "LocationWebService",
            Service::Timeframe => "TimeframeWebService",
            Service::Checkout => "CheckoutWebService",
        }
    }

    fn short_name(self) -> &'static str {
        let name = self.name();
        &name[..name.len() - "WebService".len()]
    }

    /// Formats the carrier exposes this service over.
    pub fn formats(self) -> &'static [Format] {
        match self {
            Service::Shipping | Service::Checkout => &[Format::Json],
            _ => &[Format::Xml, Format::Json],
        }
    }

    pub fn supports(self, format: Format) -> bool {
        self.formats().contains(&format)
    }

    /// Resolves a namespace role to the URI used by this service.
    pub fn namespace(self, role: Namespace) -> &'static str {
        match role {
            Namespace::Common => "http://postnl.nl/cif/services/common/",
            Namespace::Arrays => "http://schemas.microsoft.com/2003/10/Serialization/Arrays",
            Namespace::Domain => match self {
                Service::Barcode => "http://postnl.nl/cif/domain/BarcodeWebService/",
                Service::Labelling => "http://postnl.nl/cif/domain/LabellingWebService/",
                Service::Confirming => "http://postnl.nl/cif/domain/ConfirmingWebService/",
                Service::Shipping => "http://postnl.nl/cif/domain/ShippingWebService/",
                Service::ShippingStatus => "http://postnl.nl/cif/domain/ShippingStatusWebService/",
                Service::DeliveryDate => "http://postnl.nl/cif/domain/DeliveryDateWebService/",
                Service::Location => "http://postnl.nl/cif/domain/LocationWebService/",
                Service::Timeframe => "http://postnl.nl/cif/domain/TimeframeWebService/",
                Service::Checkout => "http://postnl.nl/cif/domain/CheckoutWebService/",
            },
            Namespace::Services => match self {
                Service::Barcode => "http://postnl.nl/cif/services/BarcodeWebService/",
                Service::Labelling => "http://postnl.nl/cif/services/LabellingWebService/",
                Service::Confirming => "http://postnl.nl/cif/services/ConfirmingWebService/",
                Service::Shipping => "http://postnl.nl/cif/services/ShippingWebService/",
                Service::ShippingStatus => {
                    "http://postnl.nl/cif/services/ShippingStatusWebService/"
                }
                Service::DeliveryDate => "http://postnl.nl/cif/services/DeliveryDateWebService/",
                Service::Location => "http://postnl.nl/cif/services/LocationWebService/",
                Service::Timeframe => "http://postnl.nl/cif/services/TimeframeWebService/",
                Service::Checkout => "http://postnl.nl/cif/services/CheckoutWebService/",
            },
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service '{0}'")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    /// Accepts the wire name (`BarcodeWebService`) or the short name
    /// (`barcode`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| {
                s.eq_ignore_ascii_case(svc.name()) || s.eq_ignore_ascii_case(svc.short_name())
            })
            .ok_or_else(|| UnknownService(s.to_owned()))
    }
}

/// Wire format of a request or response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// SOAP envelopes; element names are namespace-qualified.
    Xml,
    /// REST bodies; names are plain.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xml => f.write_str("XML"),
            Format::Json => f.write_str("JSON"),
        }
    }
}

/// Role of an XML namespace; the concrete URI depends on the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    #[default]
    Domain,
    Services,
    Common,
    Arrays,
}

/// A set of services, constructible in `const` context for static
/// descriptor tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServiceSet(u16);

impl ServiceSet {
    pub const EMPTY: ServiceSet = ServiceSet(0);
    pub const ALL: ServiceSet = ServiceSet((1 << Service::ALL.len()) - 1);

    pub const fn of(services: &[Service]) -> ServiceSet {
        let mut bits = 0;
        let mut i = 0;
        while i < services.len() {
            bits |= services[i].bit();
            i += 1;
        }
        ServiceSet(bits)
    }

    pub const fn contains(self, service: Service) -> bool {
        self.0 & service.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: ServiceSet) -> ServiceSet {
        ServiceSet(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Service> {
        Service::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for ServiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
