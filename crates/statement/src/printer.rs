use stagebill_catalog::Catalog;
use stagebill_core::{money, BillingResult, Cents};
use stagebill_invoice::Invoice;
use stagebill_pricing::PricingConfig;

/// Platform line terminator; every statement line ends with it, including the
/// last one.
const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders the billing statement for one invoice against a play catalog.
///
/// Borrows its inputs for the duration of one statement request; the catalog
/// and invoice stay untouched.
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    catalog: &'a Catalog,
    config: PricingConfig,
}

impl<'a> StatementPrinter<'a> {
    /// Printer with the default pricing table.
    pub fn new(invoice: &'a Invoice, catalog: &'a Catalog) -> Self {
        Self::with_config(invoice, catalog, PricingConfig::DEFAULT)
    }

    pub fn with_config(invoice: &'a Invoice, catalog: &'a Catalog, config: PricingConfig) -> Self {
        Self {
            invoice,
            catalog,
            config,
        }
    }

    /// Assemble the full statement text.
    ///
    /// One line per performance in invoice order, then the amount-owed and
    /// credits summary. All-or-nothing: a missing play or unknown genre
    /// aborts the whole statement and no partial text is returned.
    pub fn statement(&self) -> BillingResult<String> {
        let mut out = format!(
            "Statement for {}{}",
            self.invoice.customer(),
            LINE_SEPARATOR
        );
        let mut total_amount = Cents::ZERO;
        let mut total_credits: u64 = 0;

        for performance in self.invoice.performances() {
            let play = self.catalog.resolve(&performance.play_id)?;
            let amount = self.config.amount(play, performance.audience)?;
            total_credits += self.config.volume_credits(play, performance.audience);
            out.push_str(&format!(
                "  {}: {} ({} seats){}",
                play.name,
                money::usd(amount, self.config.cents_per_dollar),
                performance.audience,
                LINE_SEPARATOR,
            ));
            total_amount += amount;
        }

        out.push_str(&format!(
            "Amount owed is {}{}",
            money::usd(total_amount, self.config.cents_per_dollar),
            LINE_SEPARATOR,
        ));
        out.push_str(&format!(
            "You earned {} credits{}",
            total_credits, LINE_SEPARATOR,
        ));
        Ok(out)
    }
}

/// One-call entry point with the default pricing table.
pub fn statement(invoice: &Invoice, catalog: &Catalog) -> BillingResult<String> {
    StatementPrinter::new(invoice, catalog).statement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stagebill_catalog::{Genre, Play, PlayId};
    use stagebill_core::BillingError;
    use stagebill_invoice::Performance;

    fn sample_catalog() -> Catalog {
        [
            (PlayId::new("hamlet"), Play::new("Hamlet", Genre::Tragedy)),
            (
                PlayId::new("as-like"),
                Play::new("As You Like It", Genre::Comedy),
            ),
            (
                PlayId::new("othello"),
                Play::new("Othello", Genre::Tragedy),
            ),
            (
                PlayId::new("henry-v"),
                Play::new("Henry V", Genre::Other("history".to_string())),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn performance(id: &str, audience: u32) -> Performance {
        Performance::new(PlayId::new(id), audience)
    }

    #[test]
    fn renders_the_full_statement() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                performance("hamlet", 55),
                performance("as-like", 35),
                performance("othello", 40),
            ],
        );
        let text = statement(&invoice, &sample_catalog()).unwrap();
        let expected = [
            "Statement for BigCo",
            "  Hamlet: $650.00 (55 seats)",
            "  As You Like It: $580.00 (35 seats)",
            "  Othello: $500.00 (40 seats)",
            "Amount owed is $1,730.00",
            "You earned 47 credits",
            "",
        ]
        .join(LINE_SEPARATOR);
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_invoice_yields_header_and_zero_totals() {
        let invoice = Invoice::new("BigCo", vec![]);
        let text = statement(&invoice, &sample_catalog()).unwrap();
        let expected = [
            "Statement for BigCo",
            "Amount owed is $0.00",
            "You earned 0 credits",
            "",
        ]
        .join(LINE_SEPARATOR);
        assert_eq!(text, expected);
    }

    #[test]
    fn missing_play_aborts_the_statement() {
        let invoice = Invoice::new(
            "BigCo",
            vec![performance("hamlet", 55), performance("macbeth", 10)],
        );
        let err = statement(&invoice, &sample_catalog()).unwrap_err();
        assert_eq!(err, BillingError::missing_play("macbeth"));
    }

    #[test]
    fn unknown_genre_aborts_the_statement() {
        let invoice = Invoice::new(
            "BigCo",
            vec![performance("henry-v", 20), performance("hamlet", 55)],
        );
        let err = statement(&invoice, &sample_catalog()).unwrap_err();
        assert_eq!(err, BillingError::unknown_play_type("history"));
    }

    #[test]
    fn lines_follow_invoice_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![performance("othello", 40), performance("hamlet", 55)],
        );
        let text = statement(&invoice, &sample_catalog()).unwrap();
        let othello = text.find("Othello").unwrap();
        let hamlet = text.find("Hamlet").unwrap();
        assert!(othello < hamlet);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the rendered totals equal the sum of per-performance
        /// amounts and credits computed independently.
        #[test]
        fn totals_are_sums_of_parts(
            audiences in prop::collection::vec((prop::bool::ANY, 0u32..500), 0..12)
        ) {
            let catalog = sample_catalog();
            let config = PricingConfig::DEFAULT;

            let performances: Vec<Performance> = audiences
                .iter()
                .map(|(is_comedy, audience)| {
                    let id = if *is_comedy { "as-like" } else { "hamlet" };
                    performance(id, *audience)
                })
                .collect();

            let mut expected_amount = Cents::ZERO;
            let mut expected_credits: u64 = 0;
            for p in &performances {
                let play = catalog.resolve(&p.play_id).unwrap();
                expected_amount += config.amount(play, p.audience).unwrap();
                expected_credits += config.volume_credits(play, p.audience);
            }

            let invoice = Invoice::new("BigCo", performances);
            let text = statement(&invoice, &catalog).unwrap();

            let owed = format!(
                "Amount owed is {}{}",
                money::usd(expected_amount, config.cents_per_dollar),
                LINE_SEPARATOR
            );
            let earned = format!(
                "You earned {expected_credits} credits{LINE_SEPARATOR}"
            );
            prop_assert!(text.contains(&owed));
            prop_assert!(text.ends_with(&earned));
        }
    }
}
