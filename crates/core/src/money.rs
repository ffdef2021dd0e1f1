//! Money in integer minor units, plus the single USD rendering rule.

use serde::{Deserialize, Serialize};

/// Monetary amount in minor units (cents).
///
/// Value object: immutable, compared by value, cheap to copy. Amounts are
/// non-negative by construction (`u64`), which matches the pricing rules —
/// every rule only ever adds.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl core::ops::Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl core::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, |acc, c| acc + c)
    }
}

/// Render an amount as a US-dollar string, e.g. `$1,730.00`.
///
/// Dollars are computed with truncating integer division: any remainder below
/// `cents_per_dollar` is dropped before formatting, so rendered amounts always
/// end in `.00`. Do not "fix" this to round or keep cents; downstream text
/// comparisons depend on the truncation.
pub fn usd(amount: Cents, cents_per_dollar: u64) -> String {
    let dollars = amount.0 / cents_per_dollar;
    format!("${}.00", group_thousands(dollars))
}

/// Insert a `,` every three digits from the right: `1730` -> `1,730`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
