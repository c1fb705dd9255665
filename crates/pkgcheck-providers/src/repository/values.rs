//! Value factory converting raw default values into typed values

use pkgcheck_domain::{Error, PropertyType, Result, Value, ValueFactory};

/// Converts strings following the repository's textual value formats
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValueFactory;

impl ValueFactory for StandardValueFactory {
    fn create_value(&self, raw: &str, property_type: PropertyType) -> Result<Value> {
        let invalid = |what: &str| {
            Error::value(format!("'{raw}' is not a valid {what} ({property_type})"))
        };
        let value = match property_type {
            PropertyType::String | PropertyType::Undefined => Value::String(raw.to_string()),
            PropertyType::Binary => Value::Binary(raw.as_bytes().to_vec()),
            PropertyType::Long => Value::Long(raw.trim().parse().map_err(|_| invalid("integer"))?),
            PropertyType::Double => {
                Value::Double(raw.trim().parse().map_err(|_| invalid("number"))?)
            }
            PropertyType::Decimal => {
                let trimmed = raw.trim();
                trimmed.parse::<f64>().map_err(|_| invalid("decimal"))?;
                Value::Decimal(trimmed.to_string())
            }
            PropertyType::Date => Value::Date(
                chrono::DateTime::parse_from_rfc3339(raw.trim()).map_err(|_| invalid("date"))?,
            ),
            PropertyType::Boolean => match raw.trim().to_lowercase().as_str() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                _ => return Err(invalid("boolean")),
            },
            PropertyType::Name => Value::Name(non_empty(raw, "name")?),
            PropertyType::Path => Value::Path(non_empty(raw, "path")?),
            PropertyType::Reference => Value::Reference(non_empty(raw, "reference")?),
            PropertyType::WeakReference => Value::WeakReference(non_empty(raw, "reference")?),
            PropertyType::Uri => {
                url::Url::parse(raw.trim()).map_err(|_| invalid("URI"))?;
                Value::Uri(raw.trim().to_string())
            }
        };
        Ok(value)
    }
}

fn non_empty(raw: &str, what: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::value(format!("{what} value must not be empty")));
    }
    Ok(trimmed.to_string())
}
