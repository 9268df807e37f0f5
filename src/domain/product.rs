use serde::Serialize;

use crate::core::entity::{Attachment, LedgerEntity};

use super::JoinKey;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub category: String,
    pub name: String,
    pub specification: String,
    pub unit: String,
    pub price: f64,
    attachment: Option<Attachment>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        specification: impl Into<String>,
        unit: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            specification: specification.into(),
            unit: unit.into(),
            price,
            attachment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub id: String,
    pub category: String,
    pub name: String,
    pub specification: String,
    pub unit: String,
    pub price: f64,
    pub total_revenue: f64,
}

impl LedgerEntity for Product {
    const JOIN: JoinKey = JoinKey::Product;
    type Details = ProductDetails;

    fn id(&self) -> &str {
        &self.id
    }

    fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    fn build_details(&self, total_revenue: f64) -> ProductDetails {
        ProductDetails {
            id: self.id.clone(),
            category: self.category.clone(),
            name: self.name.clone(),
            specification: self.specification.clone(),
            unit: self.unit.clone(),
            price: self.price,
            total_revenue,
        }
    }
}
