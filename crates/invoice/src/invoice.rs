use serde::{Deserialize, Serialize};

use stagebill_catalog::PlayId;

/// One booked performance: which play, how many seats sold.
///
/// References its play by identifier; the identifier must resolve in the
/// catalog at statement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Serialized as `playID` to match the on-disk invoice format.
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: PlayId, audience: u32) -> Self {
        Self { play_id, audience }
    }
}

/// A customer's invoice. Immutable; constructed once per statement request.
///
/// Performance order is significant: it determines statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performances_keep_insertion_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new(PlayId::new("othello"), 40),
                Performance::new(PlayId::new("hamlet"), 55),
            ],
        );
        assert_eq!(invoice.customer(), "BigCo");
        let ids: Vec<&str> = invoice
            .performances()
            .iter()
            .map(|p| p.play_id.as_str())
            .collect();
        assert_eq!(ids, ["othello", "hamlet"]);
    }

    #[test]
    fn invoice_deserializes_from_the_on_disk_format() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [
                { "playID": "hamlet", "audience": 55 },
                { "playID": "as-like", "audience": 35 }
            ]
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.customer(), "BigCo");
        assert_eq!(invoice.performances().len(), 2);
        assert_eq!(invoice.performances()[0].play_id, PlayId::new("hamlet"));
        assert_eq!(invoice.performances()[1].audience, 35);
    }
}
