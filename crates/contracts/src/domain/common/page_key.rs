use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys of the list pages managed by the catalog.
///
/// The key string is shared by the configuration file, the sidebar and the
/// `?active=` URL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    DataSources,
    DataSets,
    Reports,
    Questions,
    Dashboards,
    Subscriptions,
}

impl PageKey {
    /// All pages in navigation order.
    pub const ALL: [PageKey; 6] = [
        PageKey::DataSources,
        PageKey::DataSets,
        PageKey::Reports,
        PageKey::Questions,
        PageKey::Dashboards,
        PageKey::Subscriptions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::DataSources => "data-sources",
            PageKey::DataSets => "data-sets",
            PageKey::Reports => "reports",
            PageKey::Questions => "questions",
            PageKey::Dashboards => "dashboards",
            PageKey::Subscriptions => "subscriptions",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == key)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
