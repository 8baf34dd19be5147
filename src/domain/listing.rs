use crate::domain::format::group_thousands;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn label(self) -> &'static str {
        match self {
            ListingType::Rent => "Rent",
            ListingType::Sale => "Sale",
        }
    }
}

/// A listing document as stored in the `listings` collection.
/// Extra fields on the document (owner ref, timestamps, geolocation) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub name: String,
    pub regular_price: u64,
    #[serde(default)]
    pub discounted_price: Option<u64>,
    #[serde(default)]
    pub offer: bool,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img_urls: Vec<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub furnished: bool,
}

impl Listing {
    /// The price a visitor pays: discounted when on offer.
    pub fn effective_price(&self) -> u64 {
        match (self.offer, self.discounted_price) {
            (true, Some(discounted)) => discounted,
            _ => self.regular_price,
        }
    }

    pub fn price_label(&self) -> String {
        let suffix = match self.kind {
            ListingType::Rent => "/months",
            ListingType::Sale => "",
        };
        format!("{}{suffix}", group_thousands(self.effective_price()))
    }

    pub fn title_line(&self) -> String {
        format!("{} - $ {}", self.name, self.price_label())
    }

    /// Only present for listings on offer with a discounted price.
    pub fn discount(&self) -> Option<u64> {
        if !self.offer {
            return None;
        }
        self.discounted_price
            .map(|discounted| self.regular_price.saturating_sub(discounted))
    }

    pub fn discount_label(&self) -> Option<String> {
        self.discount()
            .map(|amount| format!("{} discount", group_thousands(amount)))
    }

    pub fn bedrooms_label(&self) -> String {
        count_label(self.bedrooms, "Bedroom")
    }

    pub fn bathrooms_label(&self) -> String {
        count_label(self.bathrooms, "Bathroom")
    }

    pub fn parking_label(&self) -> &'static str {
        if self.parking {
            "Parking Spot"
        } else {
            "No Parking"
        }
    }

    pub fn furnished_label(&self) -> &'static str {
        if self.furnished {
            "Furnished"
        } else {
            "Not furnished"
        }
    }
}

// A single room is shown without its count.
fn count_label(n: u32, noun: &str) -> String {
    if n > 1 {
        format!("{n} {noun}s")
    } else {
        noun.to_string()
    }
}
