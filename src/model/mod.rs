mod field;
mod form_state;
mod validation;

pub use field::{
    BODY_OPTIONS, FIELD_COUNT, FUEL_OPTIONS, FieldId, FieldKind, FieldSpec, TRANSMISSION_OPTIONS,
    VEHICLE_FIELDS,
};
pub use form_state::FormState;
pub use validation::{ValidationError, validate_field, validate_form};
