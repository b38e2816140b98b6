//! Equality filters for row selection.

/// A single `field = value` condition. The remote surface supports nothing
/// richer than equality, so neither does this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: &'static str,
    value: String,
}

impl Filter {
    /// Match rows whose `field` equals `value`.
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        self.field
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render as a `field=eq.value` query pair.
    pub(crate) fn to_query_pair(&self) -> (String, String) {
        (self.field.to_string(), format!("eq.{}", self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_postgrest_equality_syntax() {
        let (field, value) = Filter::eq("cartId", "CART_002").to_query_pair();

        assert_eq!(field, "cartId");
        assert_eq!(value, "eq.CART_002");
    }
}
