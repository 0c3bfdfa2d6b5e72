// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{CategoryTotal, Kind, Totals, Transaction};

pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        match t.kind {
            Kind::Income => totals.total_income += t.amount,
            Kind::Expense => totals.total_expense += t.amount,
        }
    }
    totals.balance = totals.total_income - totals.total_expense;
    totals
}

/// Expense totals per category, in the order each category first appears.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == Kind::Expense) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(entry) => entry.total += t.amount,
            None => out.push(CategoryTotal {
                category: t.category.clone(),
                total: t.amount,
            }),
        }
    }
    out
}

/// Highest total; on ties the earlier entry wins.
pub fn largest_category(breakdown: &[CategoryTotal]) -> Option<&CategoryTotal> {
    let mut best: Option<&CategoryTotal> = None;
    for c in breakdown {
        if best.is_none_or(|b| c.total > b.total) {
            best = Some(c);
        }
    }
    best
}

pub fn expense_sum(breakdown: &[CategoryTotal]) -> Decimal {
    breakdown.iter().map(|c| c.total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: Kind, amount: &str, category: &str) -> Transaction {
        Transaction {
            id: 0,
            kind,
            amount: amount.parse().unwrap(),
            description: "d".into(),
            category: category.into(),
            date_display: String::new(),
            created_at: 0,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(Kind::Expense, "30", "mercado"),
            tx(Kind::Income, "500", "salario"),
            tx(Kind::Expense, "120", "aluguel"),
            tx(Kind::Expense, "20.25", "mercado"),
            tx(Kind::Income, "0.75", "outros"),
        ]
    }

    #[test]
    fn empty_ledger_totals_are_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn totals_balance_is_income_minus_expense() {
        let t = compute_totals(&sample());
        assert_eq!(t.total_income, "500.75".parse().unwrap());
        assert_eq!(t.total_expense, "170.25".parse().unwrap());
        assert_eq!(t.balance, t.total_income - t.total_expense);
    }

    #[test]
    fn totals_ignore_order() {
        let forward = sample();
        let mut backward = sample();
        backward.reverse();
        let mut rotated = sample();
        rotated.rotate_left(2);
        assert_eq!(compute_totals(&forward), compute_totals(&backward));
        assert_eq!(compute_totals(&forward), compute_totals(&rotated));
    }

    #[test]
    fn breakdown_keeps_first_seen_order_and_sums() {
        let ledger = sample();
        let b = category_breakdown(&ledger);
        let names: Vec<&str> = b.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["mercado", "aluguel"]);
        assert_eq!(b[0].total, "50.25".parse().unwrap());
        assert_eq!(expense_sum(&b), compute_totals(&ledger).total_expense);
    }

    #[test]
    fn largest_prefers_first_on_tie() {
        let ledger = vec![
            tx(Kind::Expense, "10", "a"),
            tx(Kind::Expense, "40", "b"),
            tx(Kind::Expense, "40", "c"),
        ];
        let b = category_breakdown(&ledger);
        assert_eq!(largest_category(&b).unwrap().category, "b");
        assert!(largest_category(&[]).is_none());
    }
}
