//! Group imputation: fills absent values from peer groups.
//!
//! Pass order is fixed:
//!
//! 1. unit price from the mean price of the same product name
//! 2. delivery lag from the mean lag of the same product name
//! 3. hard drop of records whose lag is still absent, then truncation to whole days
//! 4. total price recomputed as unit price × quantity where absent
//! 5. customer descriptive fields, directional fill within each `cust_id`
//! 6. product descriptive fields, directional fill within each `product_id`
//!
//! Means are taken over the values present *before* the pass, so an imputed
//! value never feeds another record's estimate. Directional fill assumes the
//! batch is already sorted by order id.

use std::collections::BTreeMap;

use sales_model::{CleaningReport, SalesField};
use tracing::debug;

use crate::typed::TypedRecord;

/// Running mean; stays finite for any finite inputs.
#[derive(Debug, Default, Clone, Copy)]
struct MeanAccumulator {
    mean: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0 && self.mean.is_finite()).then_some(self.mean)
    }
}

/// Per-group means of one numeric field, built once per pass.
///
/// Records without a group key are not part of any group. A group whose
/// members all lack the field has no mean.
#[derive(Debug, Clone, Default)]
pub struct PeerMeans {
    means: BTreeMap<String, f64>,
}

impl PeerMeans {
    pub fn build<K, V>(records: &[TypedRecord], key: K, value: V) -> Self
    where
        K: Fn(&TypedRecord) -> Option<&str>,
        V: Fn(&TypedRecord) -> Option<f64>,
    {
        let mut groups: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();
        for record in records {
            let Some(group) = key(record) else {
                continue;
            };
            let acc = groups.entry(group).or_default();
            if let Some(v) = value(record) {
                acc.push(v);
            }
        }
        let means = groups
            .into_iter()
            .filter_map(|(group, acc)| acc.mean().map(|mean| (group.to_string(), mean)))
            .collect();
        Self { means }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.means.get(key).copied()
    }

    pub fn group_count(&self) -> usize {
        self.means.len()
    }
}

fn product_name_key(record: &TypedRecord) -> Option<&str> {
    record.product_name.as_deref()
}

/// Fill absent unit prices with the product-name mean. Returns the fill count.
pub fn impute_unit_prices(records: &mut [TypedRecord]) -> usize {
    let means = PeerMeans::build(records, product_name_key, |r| r.product_price);
    let mut filled = 0;
    for record in records.iter_mut().filter(|r| r.product_price.is_none()) {
        let Some(mean) = record.product_name.as_deref().and_then(|k| means.get(k)) else {
            continue;
        };
        record.product_price = Some(mean);
        filled += 1;
    }
    debug!(groups = means.group_count(), filled, "unit price imputation");
    filled
}

/// Fill absent delivery lags with the product-name mean. Returns the fill count.
pub fn impute_delivery_periods(records: &mut [TypedRecord]) -> usize {
    let means = PeerMeans::build(records, product_name_key, |r| r.delivery_period);
    let mut filled = 0;
    for record in records.iter_mut().filter(|r| r.delivery_period.is_none()) {
        let Some(mean) = record.product_name.as_deref().and_then(|k| means.get(k)) else {
            continue;
        };
        record.delivery_period = Some(mean);
        filled += 1;
    }
    debug!(groups = means.group_count(), filled, "delivery lag imputation");
    filled
}

/// Discard records whose lag is still absent and truncate the rest to whole days.
///
/// This is a stage-local hard drop: dropped records are listed in
/// `report.dropped_missing_lag` and never reach the rejection set.
pub fn drop_unresolved_lags(
    records: Vec<TypedRecord>,
    report: &mut CleaningReport,
) -> Vec<TypedRecord> {
    let mut kept = Vec::with_capacity(records.len());
    for mut record in records {
        match record.delivery_period {
            Some(days) => {
                record.delivery_period = Some(days.trunc());
                kept.push(record);
            }
            None => report.dropped_missing_lag.push(record.order_id),
        }
    }
    kept
}

/// Recompute absent totals as unit price × quantity. Returns the fill count.
///
/// A product that overflows leaves the total absent.
pub fn recompute_totals(records: &mut [TypedRecord]) -> usize {
    let mut filled = 0;
    for record in records.iter_mut().filter(|r| r.total_price.is_none()) {
        let Some((price, quantity)) = record.product_price.zip(record.quantity_sold) else {
            continue;
        };
        let total = price * quantity as f64;
        if total.is_finite() {
            record.total_price = Some(total);
            filled += 1;
        }
    }
    filled
}

/// Row indices per group key, each list in batch order.
fn group_indices(records: &[TypedRecord], key: SalesField) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(Some(value)) = record.text(key) {
            groups.entry(value.clone()).or_default().push(idx);
        }
    }
    groups
}

/// Forward-fill then backward-fill one text field over the given rows.
///
/// Forward takes priority: a gap gets the nearest earlier value, and only
/// gaps before the first known value look ahead.
fn fill_group(records: &mut [TypedRecord], rows: &[usize], field: SalesField) -> usize {
    let forward = rows.to_vec();
    let backward: Vec<usize> = rows.iter().rev().copied().collect();
    let mut filled = 0;
    for ordered in [forward, backward] {
        let mut carry: Option<String> = None;
        for idx in ordered {
            let Some(slot) = records[idx].text_mut(field) else {
                return filled;
            };
            if let Some(value) = slot.as_ref() {
                carry = Some(value.clone());
            } else if let Some(value) = &carry {
                *slot = Some(value.clone());
                filled += 1;
            }
        }
    }
    filled
}

/// Directional fill of `fields` within groups sharing `key`.
///
/// Records lacking the key are left untouched. Returns fills per field.
pub fn fill_directional(
    records: &mut [TypedRecord],
    key: SalesField,
    fields: &[SalesField],
) -> BTreeMap<SalesField, usize> {
    let groups = group_indices(records, key);
    let mut counts = BTreeMap::new();
    for &field in fields {
        let filled: usize = groups
            .values()
            .map(|rows| fill_group(records, rows, field))
            .sum();
        counts.insert(field, filled);
    }
    counts
}

/// Run every imputation pass in order.
pub fn impute(mut records: Vec<TypedRecord>, report: &mut CleaningReport) -> Vec<TypedRecord> {
    report.imputed_prices += impute_unit_prices(&mut records);
    report.imputed_delivery_periods += impute_delivery_periods(&mut records);
    let mut records = drop_unresolved_lags(records, report);
    report.recomputed_totals += recompute_totals(&mut records);

    let customer = fill_directional(
        &mut records,
        SalesField::CustId,
        &SalesField::CUSTOMER_DESCRIPTIVE,
    );
    let product = fill_directional(
        &mut records,
        SalesField::ProductId,
        &SalesField::PRODUCT_DESCRIPTIVE,
    );
    for (field, count) in customer.into_iter().chain(product) {
        report.record_fill(field, count);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(order_id: i64, product: &str, price: Option<f64>) -> TypedRecord {
        TypedRecord {
            order_id: Some(order_id),
            product_name: Some(product.to_string()),
            product_price: price,
            ..TypedRecord::default()
        }
    }

    #[test]
    fn price_is_mean_of_present_peers() {
        let mut records = vec![
            priced(1, "Lamp", Some(10.0)),
            priced(2, "Lamp", None),
            priced(3, "Lamp", Some(20.0)),
            priced(4, "Desk", None),
        ];
        assert_eq!(impute_unit_prices(&mut records), 1);
        assert_eq!(records[1].product_price, Some(15.0));
        assert_eq!(records[3].product_price, None);
    }

    #[test]
    fn missing_product_name_is_not_a_group() {
        let mut records = vec![
            TypedRecord {
                product_price: Some(99.0),
                ..TypedRecord::default()
            },
            TypedRecord::default(),
        ];
        assert_eq!(impute_unit_prices(&mut records), 0);
        assert_eq!(records[1].product_price, None);
    }

    #[test]
    fn imputed_values_do_not_feed_means() {
        let mut records = vec![
            TypedRecord {
                product_name: Some("Mug".into()),
                delivery_period: Some(2.0),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_name: Some("Mug".into()),
                delivery_period: Some(5.0),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_name: Some("Mug".into()),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_name: Some("Mug".into()),
                ..TypedRecord::default()
            },
        ];
        assert_eq!(impute_delivery_periods(&mut records), 2);
        assert_eq!(records[2].delivery_period, Some(3.5));
        assert_eq!(records[3].delivery_period, Some(3.5));
    }

    #[test]
    fn lag_drop_and_truncation() {
        let records = vec![
            TypedRecord {
                order_id: Some(1),
                delivery_period: Some(3.5),
                ..TypedRecord::default()
            },
            TypedRecord {
                order_id: Some(2),
                ..TypedRecord::default()
            },
        ];
        let mut report = CleaningReport::default();
        let kept = drop_unresolved_lags(records, &mut report);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].delivery_period, Some(3.0));
        assert_eq!(report.dropped_missing_lag, vec![Some(2)]);
    }

    #[test]
    fn total_needs_price_and_quantity() {
        let mut records = vec![
            TypedRecord {
                product_price: Some(2.5),
                quantity_sold: Some(4),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_price: Some(2.5),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_price: Some(2.5),
                quantity_sold: Some(4),
                total_price: Some(9.0),
                ..TypedRecord::default()
            },
        ];
        assert_eq!(recompute_totals(&mut records), 1);
        assert_eq!(records[0].total_price, Some(10.0));
        assert_eq!(records[1].total_price, None);
        assert_eq!(records[2].total_price, Some(9.0));
    }

    #[test]
    fn directional_fill_prefers_forward() {
        let emails = [None, Some("a"), None, Some("b")];
        let mut records: Vec<TypedRecord> = emails
            .iter()
            .enumerate()
            .map(|(idx, email)| TypedRecord {
                order_id: Some(idx as i64 + 1),
                cust_id: Some("C-1".into()),
                email: email.map(str::to_string),
                ..TypedRecord::default()
            })
            .collect();
        let counts = fill_directional(&mut records, SalesField::CustId, &[SalesField::Email]);
        let filled: Vec<Option<&str>> = records.iter().map(|r| r.email.as_deref()).collect();
        // The gap between "a" and "b" takes the earlier value.
        assert_eq!(filled, vec![Some("a"), Some("a"), Some("a"), Some("b")]);
        assert_eq!(counts.get(&SalesField::Email), Some(&2));
    }

    #[test]
    fn directional_fill_stays_inside_group() {
        let mut records = vec![
            TypedRecord {
                product_id: Some("P-1".into()),
                product_category: Some("toys".into()),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_id: Some("P-2".into()),
                ..TypedRecord::default()
            },
            TypedRecord {
                product_category: Some("books".into()),
                ..TypedRecord::default()
            },
        ];
        fill_directional(
            &mut records,
            SalesField::ProductId,
            &SalesField::PRODUCT_DESCRIPTIVE,
        );
        assert_eq!(records[1].product_category, None);
    }

    #[test]
    fn mean_of_huge_prices_stays_finite() {
        let mut records = vec![
            priced(1, "Yacht", Some(1e308)),
            priced(2, "Yacht", Some(1e308)),
            priced(3, "Yacht", None),
        ];
        assert_eq!(impute_unit_prices(&mut records), 1);
        assert_eq!(records[2].product_price, Some(1e308));
    }

    #[test]
    fn overflowing_total_stays_absent() {
        let mut records = vec![TypedRecord {
            product_price: Some(1e308),
            quantity_sold: Some(10),
            ..TypedRecord::default()
        }];
        assert_eq!(recompute_totals(&mut records), 0);
        assert_eq!(records[0].total_price, None);
    }
}
