use chrono::{DateTime, Utc};
use poem_openapi::{Object, types::MaybeUndefined};

use business::domain::ingredient::model::{Ingredient, IngredientUpdate};
use business::domain::ingredient::stock::StockSummary;
use business::domain::shared::listing::Listing;

use crate::api::ingredient_type::dto::IngredientTypeResponse;

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
    /// Unit amounts are measured in
    pub unit: String,
    #[oai(rename = "type")]
    pub ingredient_type: IngredientTypeResponse,
    pub suggestion_threshold: f64,
    pub rebuy_threshold: f64,
    /// Shelf life in days
    pub durability: Option<i32>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            unit: ingredient.unit,
            ingredient_type: ingredient.ingredient_type.into(),
            suggestion_threshold: ingredient.suggestion_threshold,
            rebuy_threshold: ingredient.rebuy_threshold,
            durability: ingredient.durability,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateIngredientRequest {
    /// Unique ingredient name
    pub name: String,
    /// Required, e.g. "g" or "pcs"
    pub unit: Option<String>,
    /// Identifier of an existing ingredient type (required)
    pub ingredient_type: Option<i32>,
    /// Defaults to 0
    pub suggestion_threshold: Option<f64>,
    /// Defaults to 0
    pub rebuy_threshold: Option<f64>,
    pub durability: Option<i32>,
}

/// Fields to change; absent fields are left alone.
#[derive(Debug, Clone, Object)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub ingredient_type: Option<i32>,
    pub suggestion_threshold: Option<f64>,
    pub rebuy_threshold: Option<f64>,
    /// `null` clears the durability
    pub durability: MaybeUndefined<i32>,
}

impl UpdateIngredientRequest {
    pub fn into_updates(self) -> Vec<IngredientUpdate> {
        let mut updates = Vec::new();
        if let Some(name) = self.name {
            updates.push(IngredientUpdate::Name(name));
        }
        if let Some(unit) = self.unit {
            updates.push(IngredientUpdate::Unit(unit));
        }
        if let Some(type_id) = self.ingredient_type {
            updates.push(IngredientUpdate::Type(type_id));
        }
        if let Some(value) = self.suggestion_threshold {
            updates.push(IngredientUpdate::SuggestionThreshold(value));
        }
        if let Some(value) = self.rebuy_threshold {
            updates.push(IngredientUpdate::RebuyThreshold(value));
        }
        match self.durability {
            MaybeUndefined::Undefined => {}
            MaybeUndefined::Null => updates.push(IngredientUpdate::Durability(None)),
            MaybeUndefined::Value(days) => updates.push(IngredientUpdate::Durability(Some(days))),
        }
        updates
    }
}

#[derive(Debug, Clone, Object)]
pub struct IngredientListingResponse {
    /// Number of ingredients regardless of filters
    pub total: i64,
    pub items: Vec<IngredientResponse>,
}

impl From<Listing<Ingredient>> for IngredientListingResponse {
    fn from(listing: Listing<Ingredient>) -> Self {
        Self {
            total: listing.total,
            items: listing.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StockResponse {
    /// Mean price of the last 30 purchases, null without purchases
    pub average_price: Option<f64>,
    /// Total amount left
    pub in_stock: f64,
    /// Purchases with something left
    pub stock_entries: i64,
}

impl From<StockSummary> for StockResponse {
    fn from(summary: StockSummary) -> Self {
        Self {
            average_price: summary.average_price,
            in_stock: summary.in_stock,
            stock_entries: summary.stock_entries,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddStockRequest {
    /// Amount bought, in the ingredient's unit
    pub amount: f64,
    /// Price paid for the whole amount
    pub price: f64,
    /// Defaults to now
    pub time_bought: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct RemoveStockRequest {
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::ParseFromJSON;

    fn parse(json: serde_json::Value) -> UpdateIngredientRequest {
        UpdateIngredientRequest::parse_from_json(Some(json)).unwrap()
    }

    #[test]
    fn should_only_update_present_fields() {
        let updates = parse(serde_json::json!({"unit": "kg", "rebuy_threshold": 2.5})).into_updates();

        assert_eq!(
            updates,
            vec![
                IngredientUpdate::Unit("kg".to_string()),
                IngredientUpdate::RebuyThreshold(2.5),
            ]
        );
    }

    #[test]
    fn should_clear_durability_on_null() {
        let updates = parse(serde_json::json!({"durability": null})).into_updates();
        assert_eq!(updates, vec![IngredientUpdate::Durability(None)]);

        let updates = parse(serde_json::json!({})).into_updates();
        assert!(updates.is_empty());
    }
}
