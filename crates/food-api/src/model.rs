//! Menu Models
//!
//! Data structures matching the `/foods` resource.

use serde::{Deserialize, Serialize};

/// Server-assigned identity of a food
pub type FoodId = u32;

/// A dish on the menu (matches server)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    /// Decimal-formatted, e.g. `"19.90"`
    pub price: String,
    pub available: bool,
    /// Image URL
    pub image: String,
}

impl Food {
    /// Overlay the present fields of `edit` onto this food.
    ///
    /// The id is never touched.
    pub fn merged(&self, edit: &FoodEdit) -> Food {
        Food {
            id: self.id,
            name: edit.name.clone().unwrap_or_else(|| self.name.clone()),
            description: edit
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: edit.price.clone().unwrap_or_else(|| self.price.clone()),
            available: edit.available.unwrap_or(self.available),
            image: edit.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }

    /// Same food with availability flipped
    pub fn with_availability_toggled(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// A food as collected by the add form: no id, no availability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl FoodDraft {
    /// Body for creating this draft as an available dish
    pub fn into_available(self) -> NewFood {
        NewFood {
            draft: self,
            available: true,
        }
    }
}

/// POST body for `/foods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFood {
    #[serde(flatten)]
    pub draft: FoodDraft,
    pub available: bool,
}

/// Partial update collected by the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FoodEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: FoodId, price: &str) -> Food {
        Food {
            id,
            name: format!("Dish {}", id),
            description: "Slow-cooked".to_string(),
            price: price.to_string(),
            available: true,
            image: format!("https://img.example/{}.png", id),
        }
    }

    #[test]
    fn test_merged_overlays_present_fields() {
        let food = make_food(3, "10.00");
        let edit = FoodEdit {
            price: Some("12.50".to_string()),
            ..Default::default()
        };

        let merged = food.merged(&edit);

        assert_eq!(merged.id, 3);
        assert_eq!(merged.price, "12.50");
        assert_eq!(merged.name, food.name);
        assert_eq!(merged.description, food.description);
        assert_eq!(merged.image, food.image);
        assert!(merged.available);
    }

    #[test]
    fn test_merged_with_empty_edit_is_identity() {
        let food = make_food(4, "8.00");
        assert_eq!(food.merged(&FoodEdit::default()), food);
    }

    #[test]
    fn test_availability_toggle() {
        let food = make_food(1, "5.00");
        let toggled = food.with_availability_toggled();
        assert!(!toggled.available);
        assert_eq!(toggled.with_availability_toggled(), food);
    }

    #[test]
    fn test_new_food_json_is_flat() {
        let draft = FoodDraft {
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: "19.90".to_string(),
            image: "https://img.example/molho.png".to_string(),
        };

        let json = serde_json::to_value(draft.into_available()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ao molho",
                "description": "Macarrão ao molho branco",
                "price": "19.90",
                "image": "https://img.example/molho.png",
                "available": true,
            })
        );
    }

    #[test]
    fn test_food_edit_skips_absent_fields() {
        let edit = FoodEdit {
            price: Some("12.50".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&edit).unwrap();
        assert_eq!(json, r#"{"price":"12.50"}"#);
    }

    #[test]
    fn test_food_parses_server_json() {
        let json = r#"{
            "id": 7,
            "name": "X",
            "description": "d",
            "price": "19.90",
            "available": false,
            "image": "https://img.example/x.png"
        }"#;

        let food: Food = serde_json::from_str(json).unwrap();

        assert_eq!(food.id, 7);
        assert_eq!(food.price, "19.90");
        assert!(!food.available);
    }
}
