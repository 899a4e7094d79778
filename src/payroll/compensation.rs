use rust_decimal::Decimal;

use crate::entity::salary_profile::CompensationItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompensationBreakdown {
    pub items: Vec<CompensationItem>,
    pub total: Decimal,
}

/// Merges one compensation category for the period. A caller-supplied
/// override is taken verbatim; otherwise the profile's recurring items are
/// pro-rated from their monthly denomination by the cycle divisor.
pub fn assemble(
    recurring: &[CompensationItem],
    override_items: Option<&[CompensationItem]>,
    cycle_divisor: Decimal,
) -> CompensationBreakdown {
    let items: Vec<CompensationItem> = match override_items {
        Some(items) => items.to_vec(),
        None => recurring
            .iter()
            .map(|item| CompensationItem {
                name: item.name.clone(),
                pay: (item.pay / cycle_divisor).round_dp(2),
            })
            .collect(),
    };

    let total = items.iter().map(|item| item.pay).sum();

    CompensationBreakdown { items, total }
}
