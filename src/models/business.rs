use serde::{Deserialize, Serialize};

/// The single business profile shown on the dashboard card.
/// Fields are free text; nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub category: String,
    pub phone: String,
    pub website: String,
}

/// Editable fields of [`Business`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessField {
    Name,
    Category,
    Phone,
    Website,
}

impl BusinessField {
    pub fn from_str(s: &str) -> Option<BusinessField> {
        match s {
            "name" => Some(BusinessField::Name),
            "category" => Some(BusinessField::Category),
            "phone" => Some(BusinessField::Phone),
            "website" => Some(BusinessField::Website),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessField::Name => "name",
            BusinessField::Category => "category",
            BusinessField::Phone => "phone",
            BusinessField::Website => "website",
        }
    }

    pub fn all() -> &'static [BusinessField] {
        &[
            BusinessField::Name,
            BusinessField::Category,
            BusinessField::Phone,
            BusinessField::Website,
        ]
    }
}

impl Business {
    pub fn get(&self, field: BusinessField) -> &str {
        match field {
            BusinessField::Name => &self.name,
            BusinessField::Category => &self.category,
            BusinessField::Phone => &self.phone,
            BusinessField::Website => &self.website,
        }
    }

    /// Overwrites one field in place. There is no draft copy to roll back to.
    pub fn set(&mut self, field: BusinessField, value: String) {
        match field {
            BusinessField::Name => self.name = value,
            BusinessField::Category => self.category = value,
            BusinessField::Phone => self.phone = value,
            BusinessField::Website => self.website = value,
        }
    }
}
