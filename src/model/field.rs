use std::fmt;

/// Identifier of a vehicle form field.
///
/// The declaration order is the schema order: controls render in this order
/// and the JSON request body lists keys in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Make,
    Model,
    Year,
    Colour,
    Body,
    Doors,
    Transmission,
    EngineSize,
    Fuel,
}

/// Number of fields in the vehicle form.
pub const FIELD_COUNT: usize = 9;

static ALL_FIELD_IDS: [FieldId; FIELD_COUNT] = [
    FieldId::Make,
    FieldId::Model,
    FieldId::Year,
    FieldId::Colour,
    FieldId::Body,
    FieldId::Doors,
    FieldId::Transmission,
    FieldId::EngineSize,
    FieldId::Fuel,
];

impl FieldId {
    /// Returns the wire key used in the JSON request body.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Make => "make",
            FieldId::Model => "model",
            FieldId::Year => "year",
            FieldId::Colour => "colour",
            FieldId::Body => "body",
            FieldId::Doors => "doors",
            FieldId::Transmission => "transmission",
            FieldId::EngineSize => "engineSize",
            FieldId::Fuel => "fuel",
        }
    }

    /// Position of this field in schema order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns all field identifiers in schema order.
    pub fn all() -> &'static [FieldId] {
        &ALL_FIELD_IDS
    }

    /// Returns the schema entry describing this field.
    pub fn spec(self) -> &'static FieldSpec {
        &VEHICLE_FIELDS[self.index()]
    }
}

#[mutants::skip]
impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a field is entered and constrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Numeric input with inclusive bounds. `integer` refuses fractional values.
    Number { min: f64, max: f64, integer: bool },
    /// Single choice from an ordered option list.
    Select { options: &'static [&'static str] },
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Text shown while the field is empty.
    ///
    /// Selects read `Select <Label>`; inputs show their label.
    pub fn placeholder(&self) -> String {
        match self.kind {
            FieldKind::Select { .. } => format!("Select {}", self.label),
            _ => self.label.to_string(),
        }
    }

    /// Returns the select options, or an empty slice for other kinds.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }
}

/// Body styles offered by the form.
pub const BODY_OPTIONS: &[&str] = &["Sedan", "SUV", "Hatchback", "Coupe", "Convertible"];

/// Transmission types offered by the form.
pub const TRANSMISSION_OPTIONS: &[&str] = &["Manual", "Automatic", "Semi-Auto"];

/// Fuel types offered by the form.
pub const FUEL_OPTIONS: &[&str] = &["Petrol", "Diesel", "Electric", "Hybrid", "CNG"];

/// The vehicle form schema, indexed by [`FieldId::index`].
pub static VEHICLE_FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        id: FieldId::Make,
        label: "Make",
        kind: FieldKind::Text,
    },
    FieldSpec {
        id: FieldId::Model,
        label: "Model",
        kind: FieldKind::Text,
    },
    FieldSpec {
        id: FieldId::Year,
        label: "Year",
        kind: FieldKind::Number {
            min: 1900.0,
            max: 2099.0,
            integer: true,
        },
    },
    FieldSpec {
        id: FieldId::Colour,
        label: "Colour",
        kind: FieldKind::Text,
    },
    FieldSpec {
        id: FieldId::Body,
        label: "Body",
        kind: FieldKind::Select {
            options: BODY_OPTIONS,
        },
    },
    FieldSpec {
        id: FieldId::Doors,
        label: "Doors",
        kind: FieldKind::Number {
            min: 2.0,
            max: 6.0,
            integer: true,
        },
    },
    FieldSpec {
        id: FieldId::Transmission,
        label: "Transmission",
        kind: FieldKind::Select {
            options: TRANSMISSION_OPTIONS,
        },
    },
    FieldSpec {
        id: FieldId::EngineSize,
        label: "Engine Size (L)",
        kind: FieldKind::Number {
            min: 0.8,
            max: 8.0,
            integer: false,
        },
    },
    FieldSpec {
        id: FieldId::Fuel,
        label: "Fuel",
        kind: FieldKind::Select {
            options: FUEL_OPTIONS,
        },
    },
];
