//! # Order Protocol
//!
//! Placement appends to the first pharmacy with a matching name, creating the
//! pharmacy entry on first use. Dispatch marks the first order in list order
//! whose `(name, desc, quantity)` matches and which is not cancelled.

use crate::domain::entities::{Laboratory, Order, Pharmacy, SENT_FLAG};
use shared_types::ContractError;

/// Attributes identifying an order for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderMatch<'a> {
    /// Medicine name.
    pub name: &'a str,
    /// Medicine description.
    pub desc: &'a str,
    /// Units ordered.
    pub quantity: i64,
}

impl OrderMatch<'_> {
    fn matches(&self, order: &Order) -> bool {
        order.name == self.name
            && order.desc == self.desc
            && order.quantity == self.quantity
            && order.date_cancelled.is_empty()
    }
}

/// Parse an order quantity, falling back to 0.
///
/// Returns the quantity and whether the input parsed.
#[must_use]
pub fn parse_quantity(raw: &str) -> (i64, bool) {
    match raw.trim().parse::<i64>() {
        Ok(quantity) => (quantity, true),
        Err(_) => (0, false),
    }
}

/// Append `order` to the pharmacy named `pharmacy`.
///
/// Returns the number of orders the pharmacy holds afterwards.
pub fn place_order(laboratory: &mut Laboratory, pharmacy: &str, order: Order) -> usize {
    if let Some(entry) = laboratory
        .pharmacy
        .iter_mut()
        .find(|p| p.pharmacy == pharmacy)
    {
        entry.order.push(order);
        return entry.order.len();
    }

    laboratory.pharmacy.push(Pharmacy {
        pharmacy: pharmacy.to_string(),
        order: vec![order],
    });
    1
}

/// Mark the first matching order of `pharmacy` as sent on `date_sent`.
///
/// The sent flag is not part of the match, so an already sent order can be
/// sent again.
pub fn send_order(
    laboratory: &mut Laboratory,
    pharmacy: &str,
    target: &OrderMatch<'_>,
    date_sent: &str,
) -> Result<(), ContractError> {
    let entry = laboratory
        .pharmacy
        .iter_mut()
        .find(|p| p.pharmacy == pharmacy)
        .ok_or_else(|| ContractError::NotFound("Failed to get specified Pharmacy".to_string()))?;

    let order = entry
        .order
        .iter_mut()
        .find(|o| target.matches(o))
        .ok_or_else(|| ContractError::NotFound("Failed to get specified Order".to_string()))?;

    order.sent_flag = SENT_FLAG.to_string();
    order.date_sent = date_sent.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderStatus;

    fn order(name: &str, quantity: i64) -> Order {
        Order::new(name, "desc", quantity, "01/07/2018")
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("7"), (7, true));
        assert_eq!(parse_quantity("-3"), (-3, true));
        assert_eq!(parse_quantity("seven"), (0, false));
        assert_eq!(parse_quantity(""), (0, false));
    }

    #[test]
    fn test_place_order_groups_by_pharmacy() {
        let mut lab = Laboratory::default();
        assert_eq!(place_order(&mut lab, "Aluche", order("A", 1)), 1);
        assert_eq!(place_order(&mut lab, "Sol", order("B", 1)), 1);
        assert_eq!(place_order(&mut lab, "Aluche", order("C", 1)), 2);

        assert_eq!(lab.pharmacy.len(), 2);
        let names: Vec<_> = lab.pharmacy[0].order.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_send_marks_first_match_only() {
        let mut lab = Laboratory::default();
        place_order(&mut lab, "Aluche", order("A", 7));
        place_order(&mut lab, "Aluche", order("A", 7));

        let target = OrderMatch {
            name: "A",
            desc: "desc",
            quantity: 7,
        };
        send_order(&mut lab, "Aluche", &target, "02/07/2018").unwrap();

        let orders = &lab.pharmacy[0].order;
        assert_eq!(orders[0].status(), OrderStatus::Sent);
        assert_eq!(orders[0].date_sent, "02/07/2018");
        assert_eq!(orders[1].status(), OrderStatus::Pending);
    }

    #[test]
    fn test_send_skips_cancelled_orders() {
        let mut lab = Laboratory::default();
        place_order(&mut lab, "Aluche", order("A", 7));
        place_order(&mut lab, "Aluche", order("A", 7));
        lab.pharmacy[0].order[0].date_cancelled = "01/07/2018".to_string();

        let target = OrderMatch {
            name: "A",
            desc: "desc",
            quantity: 7,
        };
        send_order(&mut lab, "Aluche", &target, "02/07/2018").unwrap();
        assert!(lab.pharmacy[0].order[0].sent_flag.is_empty());
        assert_eq!(lab.pharmacy[0].order[1].sent_flag, SENT_FLAG);
    }

    #[test]
    fn test_send_reports_missing_pharmacy_then_order() {
        let mut lab = Laboratory::default();
        let target = OrderMatch {
            name: "A",
            desc: "desc",
            quantity: 7,
        };
        let err = send_order(&mut lab, "Aluche", &target, "d").unwrap_err();
        assert_eq!(err.to_string(), "Failed to get specified Pharmacy");

        place_order(&mut lab, "Aluche", order("A", 8));
        let err = send_order(&mut lab, "Aluche", &target, "d").unwrap_err();
        assert_eq!(err.to_string(), "Failed to get specified Order");
    }
}
