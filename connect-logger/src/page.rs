use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::Selector;

/// The five fixed information pages scraped during a session, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageId {
    System,
    Boiler,
    Heating,
    Tank,
    Feed,
}

impl PageId {
    /// Visit order within a session.
    pub const ALL: [PageId; 5] = [
        PageId::System,
        PageId::Boiler,
        PageId::Heating,
        PageId::Tank,
        PageId::Feed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::System => "System",
            PageId::Boiler => "Boiler",
            PageId::Heating => "Heating",
            PageId::Tank => "Tank",
            PageId::Feed => "Feed",
        }
    }

    /// Selector probed while waiting for the page to finish rendering.
    ///
    /// The facility page has no title card; its detail container appearing is
    /// the only rendering-complete signal it offers.
    pub fn readiness_selector(&self) -> Selector {
        match self {
            PageId::System => Selector::Tag("froeling-facility-detail-container".to_string()),
            _ => Selector::Tag("mat-card-title".to_string()),
        }
    }

    /// Prefix the page's title card text must start with once rendered.
    /// `None` for the facility page, which is probed by container instead.
    /// The tank page is titled "DHW tank" on the dashboard.
    pub fn title_prefix(&self) -> Option<&'static str> {
        match self {
            PageId::System => None,
            PageId::Boiler => Some("Boiler"),
            PageId::Heating => Some("Heating"),
            PageId::Tank => Some("DHW"),
            PageId::Feed => Some("Feed"),
        }
    }

    /// Selector for the label elements of the page's value pairs.
    pub fn key_selector(&self) -> Selector {
        Selector::XPath("//div[@class='key']".to_string())
    }

    /// Selector for the value elements of the page's value pairs.
    ///
    /// BEWARE: every page except the facility one ships a misspelled class
    /// attribute (`calss`) in its markup. The misspelling is a property of
    /// the target system and must be queried as-is; "fixing" the spelling
    /// here finds nothing on those pages.
    pub fn value_selector(&self) -> Selector {
        match self {
            PageId::System => Selector::XPath("//div[@class='value']".to_string()),
            _ => Selector::XPath("//div[@calss='value']".to_string()),
        }
    }

    /// Human-readable name used in timeout diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            PageId::System => "facility information page",
            PageId::Boiler => "Boiler information page",
            PageId::Heating => "Heating information page",
            PageId::Tank => "DHW information page",
            PageId::Feed => "Feed information page",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
