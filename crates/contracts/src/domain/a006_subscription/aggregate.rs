use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

/// What a subscription delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionKind {
    Report,
    Dashboard,
}

impl SubscriptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionKind::Report => "report",
            SubscriptionKind::Dashboard => "dashboard",
        }
    }
}

/// Scheduled e-mail delivery of a report or dashboard.
///
/// `next_send` and `last_sent` are display strings; nothing here computes
/// a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SubscriptionKind,
    /// Subscribed report or dashboard; also searched.
    pub report_name: String,
    pub status: String,
    pub schedule: String,
    pub format: String,
    pub recipients: u32,
    pub next_send: String,
    pub last_sent: String,
}

impl ListRecord for Subscription {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.report_name)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn attribute(&self, field: &str) -> Option<AttributeValue<'_>> {
        match field {
            "kind" => Some(AttributeValue::Text(self.kind.as_str())),
            "report_name" => Some(AttributeValue::Text(&self.report_name)),
            "schedule" => Some(AttributeValue::Text(&self.schedule)),
            "format" => Some(AttributeValue::Text(&self.format)),
            "recipients" => Some(AttributeValue::Number(u64::from(self.recipients))),
            "next_send" => Some(AttributeValue::Text(&self.next_send)),
            "last_sent" => Some(AttributeValue::Text(&self.last_sent)),
            _ => None,
        }
    }
}

const SEED_JSON: &str = include_str!("seed.json");

pub fn seed() -> Result<Vec<Subscription>, CatalogError> {
    parse_seed(PageKey::Subscriptions, SEED_JSON)
}
