use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    Contact,
    Quote,
}

/// Raw form input, as typed.
#[derive(Clone, Debug, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub product: String,
    pub quantity: String,
    pub message: String,
}

/// A validated submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub kind: LeadKind,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Cases requested; quotes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Quantity must be a whole number of cases greater than zero.")]
    InvalidQuantity,
}

impl LeadForm {
    pub fn validate(&self, kind: LeadKind) -> Result<Lead, LeadError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err(LeadError::InvalidEmail);
        }

        let (product, quantity, message) = match kind {
            LeadKind::Contact => (
                optional(&self.product),
                None,
                required(&self.message, "Message")?,
            ),
            LeadKind::Quote => {
                let product = required(&self.product, "Product")?;
                let quantity = required(&self.quantity, "Quantity")?
                    .parse::<u32>()
                    .ok()
                    .filter(|cases| *cases > 0)
                    .ok_or(LeadError::InvalidQuantity)?;
                (
                    Some(product),
                    Some(quantity),
                    self.message.trim().to_string(),
                )
            }
        };

        Ok(Lead {
            kind,
            name,
            email,
            phone: optional(&self.phone),
            company: optional(&self.company),
            product,
            quantity,
            message,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, LeadError> {
    optional(value).ok_or(LeadError::Missing(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
