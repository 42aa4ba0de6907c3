use poem_openapi::Object;

use business::domain::ingredient_type::model::IngredientType;
use business::domain::shared::listing::Listing;

#[derive(Debug, Clone, PartialEq, Object)]
pub struct IngredientTypeResponse {
    /// Database-assigned identifier
    pub id: i32,
    /// Unique type name
    pub name: String,
}

impl From<IngredientType> for IngredientTypeResponse {
    fn from(ingredient_type: IngredientType) -> Self {
        Self {
            id: ingredient_type.id,
            name: ingredient_type.name,
        }
    }
}

/// `{"ingredientType": {...}}`
#[derive(Debug, Clone, Object)]
pub struct IngredientTypeEnvelope {
    #[oai(rename = "ingredientType")]
    pub ingredient_type: IngredientTypeResponse,
}

/// Bare status code body, e.g. `{"status": 404}`.
#[derive(Debug, Clone, Object)]
pub struct StatusCodeBody {
    pub status: u16,
}

impl StatusCodeBody {
    pub fn not_found() -> Self {
        Self { status: 404 }
    }
}

/// `{"status": "OK"}`
#[derive(Debug, Clone, Object)]
pub struct StatusOkBody {
    pub status: String,
}

impl StatusOkBody {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct IngredientTypeCreatedBody {
    pub status: String,
    /// Identifier of the new type
    pub id: i32,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientTypeRenamedBody {
    pub status: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientTypeListingResponse {
    /// Number of types regardless of filters
    pub total: i64,
    pub items: Vec<IngredientTypeResponse>,
}

impl From<Listing<IngredientType>> for IngredientTypeListingResponse {
    fn from(listing: Listing<IngredientType>) -> Self {
        Self {
            total: listing.total,
            items: listing.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::ToJSON;

    #[test]
    fn should_wrap_type_under_camel_case_key() {
        let envelope = IngredientTypeEnvelope {
            ingredient_type: IngredientType::from_repository(3, "Dairy".to_string()).into(),
        };

        let json = envelope.to_json().unwrap();

        assert_eq!(
            json,
            serde_json::json!({"ingredientType": {"id": 3, "name": "Dairy"}})
        );
    }

    #[test]
    fn should_render_not_found_status_as_number() {
        let json = StatusCodeBody::not_found().to_json().unwrap();
        assert_eq!(json, serde_json::json!({"status": 404}));
    }
}
