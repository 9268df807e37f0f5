use serde::Serialize;

use crate::core::entity::{Attachment, LedgerEntity};

use super::JoinKey;

/// A store buying from the sales area.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub phone: String,
    pub email: String,
    pub province: String,
    attachment: Option<Attachment>,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: String::new(),
            phone: phone.into(),
            email: String::new(),
            province: province.into(),
            attachment: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// Flat summary of a client for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDetails {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub phone: String,
    pub email: String,
    pub province: String,
    pub total_revenue: f64,
}

impl LedgerEntity for Client {
    const JOIN: JoinKey = JoinKey::Client;
    type Details = ClientDetails;

    fn id(&self) -> &str {
        &self.id
    }

    fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    fn build_details(&self, total_revenue: f64) -> ClientDetails {
        ClientDetails {
            id: self.id.clone(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            province: self.province.clone(),
            total_revenue,
        }
    }
}
