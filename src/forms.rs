//! Food Form Values
//!
//! Raw field values of the add/edit forms and their conversions.

use food_api::{Food, FoodDraft, FoodEdit};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodFormValues {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodFormValues {
    /// Pre-filled values for editing `food`
    pub fn from_food(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
        }
    }

    pub fn into_draft(self) -> FoodDraft {
        FoodDraft {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
        }
    }

    /// Every form field is submitted; availability is not on the form
    pub fn into_edit(self) -> FoodEdit {
        FoodEdit {
            name: Some(self.name),
            description: Some(self.description),
            price: Some(self.price),
            available: None,
            image: Some(self.image),
        }
    }
}

/// Modal submit: hand the value off, then close whatever becomes of it
pub fn submit_then_close<T>(value: T, on_submit: impl FnOnce(T), on_close: impl FnOnce()) {
    on_submit(value);
    on_close();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn sample_food() -> Food {
        Food {
            id: 3,
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: "10.00".to_string(),
            available: false,
            image: "https://img.example/molho.png".to_string(),
        }
    }

    #[test]
    fn test_prefilled_edit_changes_only_edited_field() {
        let food = sample_food();
        let mut values = FoodFormValues::from_food(&food);
        values.price = "12.50".to_string();

        let merged = food.merged(&values.into_edit());

        assert_eq!(merged, Food { price: "12.50".to_string(), ..food });
    }

    #[test]
    fn test_edit_keeps_availability() {
        let food = sample_food();
        let edit = FoodFormValues::from_food(&food).into_edit();
        assert_eq!(edit.available, None);
        assert!(!food.merged(&edit).available);
    }

    #[test]
    fn test_empty_form_gives_empty_draft() {
        assert_eq!(FoodFormValues::default().into_draft(), FoodDraft::default());
    }

    #[test]
    fn test_submit_hands_off_before_closing() {
        let events = RefCell::new(Vec::new());

        submit_then_close(
            FoodFormValues { name: "X".to_string(), ..Default::default() }.into_draft(),
            |draft| events.borrow_mut().push(format!("submit {}", draft.name)),
            || events.borrow_mut().push("close".to_string()),
        );

        assert_eq!(events.into_inner(), vec!["submit X".to_string(), "close".to_string()]);
    }
}
