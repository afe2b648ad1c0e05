//! DTOs for product endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /products`.
///
/// `price` is in minor currency units; `quantity` seeds the stock row.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub price: i64,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub quantity: i32,
}

/// Request body for `PUT /products/{id}`.
///
/// `description` distinguishes absent (unchanged) from `null` (cleared).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,

    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_negative_values_rejected() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Keyboard","price":-1,"quantity":-3}"#).unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("quantity"));
    }

    #[test]
    fn test_create_product_quantity_defaults_to_zero() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Keyboard","price":4999}"#).unwrap();

        assert_eq!(req.quantity, 0);
        assert!(req.description.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_product_description_tristate() {
        let absent: UpdateProductRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateProductRequest =
            serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateProductRequest =
            serde_json::from_str(r#"{"description":"Mechanical"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Mechanical".to_string())));
    }
}
