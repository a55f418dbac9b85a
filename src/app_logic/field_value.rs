/*
 * Conversion between an adapter's own value type and the `FieldValue` the
 * caller exchanges with the platform. Adapters stay generic over their value;
 * only the field container crosses this boundary, when it reports a change or
 * accepts a value assigned from outside.
 */
use crate::core::ColorValue;
use crate::platform_layer::{FieldValue, PhoneNumber, PickedFile};
use time::{Date, Time};

pub trait FieldValueCodec: Sized {
    fn to_field_value(&self) -> FieldValue;

    // None when `value` holds a different kind of value.
    fn from_field_value(value: &FieldValue) -> Option<Self>;
}

impl FieldValueCodec for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Empty => Some(String::new()),
            _ => None,
        }
    }
}

impl FieldValueCodec for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl FieldValueCodec for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Empty => Some(false),
            _ => None,
        }
    }
}

impl FieldValueCodec for ColorValue {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Color(*self)
    }

    // Hex text is accepted too, since that is how colors are usually stored.
    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Color(color) => Some(*color),
            FieldValue::Text(hex) => crate::core::hex_to_rgb(hex).ok(),
            _ => None,
        }
    }
}

impl FieldValueCodec for Date {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl FieldValueCodec for Time {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Time(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl FieldValueCodec for PhoneNumber {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Phone(self.clone())
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Phone(phone) => Some(phone.clone()),
            FieldValue::Empty => Some(PhoneNumber::default()),
            _ => None,
        }
    }
}

impl FieldValueCodec for Vec<PickedFile> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Files(self.clone())
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Files(files) => Some(files.clone()),
            FieldValue::Empty => Some(Vec::new()),
            _ => None,
        }
    }
}

// An optional value maps `None` to `FieldValue::Empty`.
impl<T: FieldValueCodec> FieldValueCodec for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(inner) => inner.to_field_value(),
            None => FieldValue::Empty,
        }
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Empty => Some(None),
            other => T::from_field_value(other).map(Some),
        }
    }
}
