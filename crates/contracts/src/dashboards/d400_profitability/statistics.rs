use crate::domain::a005_order::aggregate::Order;

/// Margin figures over a set of orders
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitabilityStatistics {
    /// Mean of the per-order profit percentage
    pub mean_percent: f64,
    pub most_profitable: Order,
    pub least_profitable: Order,
    /// Orders that entered the mean
    pub counted: usize,
    /// Orders left out for lacking a positive sale price
    pub skipped: usize,
}

/// `(sale − cost) / sale × 100`, or `None` without a usable sale price
pub fn profit_percent(order: &Order) -> Option<f64> {
    match order.sale_price {
        Some(sale) if sale.is_finite() && sale > 0.0 => {
            Some((sale - order.total_cost) / sale * 100.0)
        }
        _ => None,
    }
}

/// Mean, max and min profit percentage; `None` when no order has a sale price.
/// Ties keep the first order seen.
pub fn aggregate_statistics(orders: &[Order]) -> Option<ProfitabilityStatistics> {
    let scored: Vec<(&Order, f64)> = orders
        .iter()
        .filter_map(|o| profit_percent(o).map(|p| (o, p)))
        .collect();

    let (first, first_pct) = *scored.first()?;
    let mut best = (first, first_pct);
    let mut worst = (first, first_pct);
    let mut sum = 0.0;
    for &(order, pct) in &scored {
        sum += pct;
        if pct > best.1 {
            best = (order, pct);
        }
        if pct < worst.1 {
            worst = (order, pct);
        }
    }

    let skipped = orders.len() - scored.len();
    if skipped > 0 {
        log::debug!("{} orders without sale price left out of statistics", skipped);
    }

    Some(ProfitabilityStatistics {
        mean_percent: sum / scored.len() as f64,
        most_profitable: best.0.clone(),
        least_profitable: worst.0.clone(),
        counted: scored.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_design::aggregate::DesignId;
    use crate::domain::a005_order::aggregate::OrderId;
    use crate::enums::order_state::OrderState;
    use chrono::NaiveDate;

    fn order(id: i64, cost: f64, sale: Option<f64>) -> Order {
        Order {
            id: OrderId(id),
            design_id: DesignId(1),
            width: 100.0,
            height: 200.0,
            split: false,
            multiplier: 1,
            state: OrderState::Pendiente,
            materials_cost: None,
            labor_cost: None,
            total_cost: cost,
            sale_price: sale,
            notes: None,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(10, 0, 0))
                .unwrap(),
            client_name: None,
            client_phone: None,
            client_email: None,
        }
    }

    #[test]
    fn test_two_order_statistics() {
        let orders = vec![order(1, 100.0, Some(150.0)), order(2, 80.0, Some(100.0))];
        let stats = aggregate_statistics(&orders).unwrap();
        assert!((stats.mean_percent - 26.67).abs() < 0.01);
        assert_eq!(stats.most_profitable.id, OrderId(1));
        assert_eq!(stats.least_profitable.id, OrderId(2));
        assert_eq!((stats.counted, stats.skipped), (2, 0));
    }

    #[test]
    fn test_empty_list_has_no_statistics() {
        assert!(aggregate_statistics(&[]).is_none());
        assert!(aggregate_statistics(&[order(1, 10.0, None)]).is_none());
    }

    #[test]
    fn test_orders_without_sale_price_are_skipped() {
        let orders = vec![
            order(1, 100.0, None),
            order(2, 50.0, Some(100.0)),
            order(3, 10.0, Some(0.0)),
        ];
        let stats = aggregate_statistics(&orders).unwrap();
        assert_eq!(stats.mean_percent, 50.0);
        assert_eq!((stats.counted, stats.skipped), (1, 2));
    }

    #[test]
    fn test_ties_keep_first_order() {
        let orders = vec![order(7, 50.0, Some(100.0)), order(8, 50.0, Some(100.0))];
        let stats = aggregate_statistics(&orders).unwrap();
        assert_eq!(stats.most_profitable.id, OrderId(7));
        assert_eq!(stats.least_profitable.id, OrderId(7));
    }
}
