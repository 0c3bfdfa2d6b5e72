// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword-driven assistant that answers a handful of canned questions.
//!
//! Questions are lower-cased and matched against keyword rules in a fixed
//! order; the first rule that matches picks the template. Anything else gets
//! a general summary.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::analytics::{category_breakdown, compute_totals, largest_category};
use crate::error::LedgerError;
use crate::models::{CategoryTotal, Totals, Transaction};
use crate::utils::{fmt_money, DEFAULT_CURRENCY_SYMBOL};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Savings,
    Balance,
    Investing,
    Categories,
    General,
}

// Order matters: earlier rules win.
static RULES: Lazy<Vec<(Topic, Regex)>> = Lazy::new(|| {
    [
        (Topic::Savings, &["economizar", "gastar menos"][..]),
        (Topic::Balance, &["saldo", "como estou"][..]),
        (Topic::Investing, &["investir", "guardar"][..]),
        (Topic::Categories, &["categoria", "gasto"][..]),
    ]
    .into_iter()
    .map(|(topic, words)| {
        let alt = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        (topic, Regex::new(&alt).expect("keyword pattern"))
    })
    .collect()
});

pub fn classify(question: &str) -> Topic {
    let q = question.to_lowercase();
    RULES
        .iter()
        .find(|(_, re)| re.is_match(&q))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

#[derive(Debug, Clone)]
pub struct Assistant {
    symbol: String,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Assistant {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn answer(
        &self,
        question: &str,
        totals: &Totals,
        breakdown: &[CategoryTotal],
        transaction_count: usize,
    ) -> Result<String, LedgerError> {
        if question.trim().is_empty() {
            return Err(LedgerError::Validation("question must not be empty".into()));
        }
        let money = |d: &Decimal| fmt_money(d, &self.symbol);
        let topic = classify(question);
        debug!(?topic, "assistant rule selected");

        let text = match topic {
            Topic::Savings => format!(
                "💡 Com base nos seus dados:\n\
                 - Seu saldo atual é {}\n\
                 - Você gastou {} este mês\n\
                 - Sugiro criar um orçamento para controlar melhor seus gastos",
                money(&totals.balance),
                money(&totals.total_expense),
            ),
            Topic::Balance => {
                let remark = if totals.balance > Decimal::ZERO {
                    "✅ Seu saldo está positivo!"
                } else {
                    "⚠️ Atenção ao seu saldo negativo!"
                };
                format!(
                    "📊 Seu panorama financeiro:\n\
                     • Saldo atual: {}\n\
                     • Receitas totais: {}\n\
                     • Despesas totais: {}\n\
                     {}",
                    money(&totals.balance),
                    money(&totals.total_income),
                    money(&totals.total_expense),
                    remark,
                )
            }
            Topic::Investing => "💰 Recomendações de investimento:\n\
                 • Reserve 10-20% da sua renda para investimentos\n\
                 • Comece com fundos conservadores se for iniciante\n\
                 • Considere a renda fixa para segurança"
                .to_string(),
            Topic::Categories => match largest_category(breakdown) {
                None => "📈 Nenhuma despesa registrada ainda.\n\
                         Adicione despesas para ver a análise por categorias."
                    .to_string(),
                Some(top) => {
                    let lines = breakdown
                        .iter()
                        .map(|c| format!("• {}: {}", c.category, money(&c.total)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!(
                        "📈 Análise por categorias:\n{}\n\n💡 Maior gasto: {} ({})",
                        lines,
                        top.category,
                        money(&top.total),
                    )
                }
            },
            Topic::General => format!(
                "🤖 Com base nas suas {} transações:\n\
                 • Saldo: {}\n\
                 • Receitas: {}\n\
                 • Despesas: {}\n\n\
                 Dica: Mantenha um registro detalhado para melhor controle!",
                transaction_count,
                money(&totals.balance),
                money(&totals.total_income),
                money(&totals.total_expense),
            ),
        };
        Ok(text)
    }
}

/// Answers with the default `R$` symbol.
pub fn answer(
    question: &str,
    totals: &Totals,
    breakdown: &[CategoryTotal],
    transaction_count: usize,
) -> Result<String, LedgerError> {
    Assistant::default().answer(question, totals, breakdown, transaction_count)
}

/// Snapshot of the figures an answer is built from.
#[derive(Debug, Clone, Default)]
pub struct AssistantContext {
    pub totals: Totals,
    pub breakdown: Vec<CategoryTotal>,
    pub transaction_count: usize,
}

impl AssistantContext {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            totals: compute_totals(transactions),
            breakdown: category_breakdown(transactions),
            transaction_count: transactions.len(),
        }
    }
}

/// An answer that shows up after the slot's delay. Resolves to `None` when a
/// newer question replaced it first.
pub struct PendingAnswer {
    rx: oneshot::Receiver<String>,
}

impl PendingAnswer {
    pub async fn wait(self) -> Option<String> {
        self.rx.await.ok()
    }
}

/// Holds at most one in-flight answer. Asking again aborts the previous one,
/// so a slow answer can never overwrite a newer one.
///
/// Must be used from inside a tokio runtime.
pub struct AnswerSlot {
    assistant: Assistant,
    delay: Duration,
    inflight: Option<JoinHandle<()>>,
}

impl AnswerSlot {
    pub fn new(assistant: Assistant, delay: Duration) -> Self {
        Self {
            assistant,
            delay,
            inflight: None,
        }
    }

    pub fn ask(
        &mut self,
        question: &str,
        ctx: &AssistantContext,
    ) -> Result<PendingAnswer, LedgerError> {
        let text = self.assistant.answer(
            question,
            &ctx.totals,
            &ctx.breakdown,
            ctx.transaction_count,
        )?;
        self.cancel();

        let (tx, rx) = oneshot::channel();
        let delay = self.delay;
        self.inflight = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let _ = tx.send(text);
        }));
        Ok(PendingAnswer { rx })
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.inflight.take() {
            if !handle.is_finished() {
                debug!("superseding pending answer");
            }
            handle.abort();
        }
    }
}

impl Drop for AnswerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn totals(balance: &str, income: &str, expense: &str) -> Totals {
        Totals {
            balance: dec(balance),
            total_income: dec(income),
            total_expense: dec(expense),
        }
    }

    #[test]
    fn empty_question_is_rejected() {
        let err = answer("   ", &Totals::default(), &[], 0).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn earlier_rule_wins() {
        assert_eq!(classify("Como gastar menos do meu saldo?"), Topic::Savings);
        assert_eq!(classify("COMO ESTOU e onde investir"), Topic::Balance);
        assert_eq!(classify("devo guardar ou ver a categoria?"), Topic::Investing);
        assert_eq!(classify("Qual meu maior gasto?"), Topic::Categories);
        assert_eq!(classify("olá"), Topic::General);
    }

    #[test]
    fn balance_overview_lists_all_figures() {
        let text = answer(
            "Como está meu saldo?",
            &totals("150.00", "500.00", "350.00"),
            &[],
            3,
        )
        .unwrap();
        assert!(text.contains("R$ 150.00"));
        assert!(text.contains("R$ 500.00"));
        assert!(text.contains("R$ 350.00"));
        assert!(text.contains("Seu saldo está positivo"));
    }

    #[test]
    fn non_positive_balance_gets_warning() {
        let text = answer("saldo", &totals("-20", "10", "30"), &[], 2).unwrap();
        assert!(text.contains("R$ -20.00"));
        assert!(text.contains("saldo negativo"));
    }

    #[test]
    fn category_answer_highlights_largest() {
        let breakdown = vec![
            CategoryTotal {
                category: "mercado".into(),
                total: dec("80"),
            },
            CategoryTotal {
                category: "aluguel".into(),
                total: dec("900"),
            },
        ];
        let text = answer("gastos por categoria", &Totals::default(), &breakdown, 2).unwrap();
        assert!(text.contains("• mercado: R$ 80.00"));
        assert!(text.contains("• aluguel: R$ 900.00"));
        assert!(text.ends_with("Maior gasto: aluguel (R$ 900.00)"));
    }

    #[test]
    fn category_answer_without_expenses() {
        let text = answer("categoria", &Totals::default(), &[], 0).unwrap();
        assert!(text.contains("Nenhuma despesa registrada"));
    }

    #[test]
    fn fallback_counts_transactions_with_custom_symbol() {
        let text = Assistant::new("US$")
            .answer("oi", &totals("1", "2", "1"), &[], 7)
            .unwrap();
        assert!(text.contains("suas 7 transações"));
        assert!(text.contains("Saldo: US$ 1.00"));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_question_supersedes_pending_one() {
        let ctx = AssistantContext {
            totals: totals("5", "5", "0"),
            ..Default::default()
        };
        let mut slot = AnswerSlot::new(Assistant::default(), DEFAULT_DELAY);
        let start = tokio::time::Instant::now();
        let first = slot.ask("meu saldo", &ctx).unwrap();
        let second = slot.ask("onde investir", &ctx).unwrap();

        assert_eq!(first.wait().await, None);
        let text = second.wait().await.unwrap();
        assert!(text.starts_with("💰 Recomendações de investimento"));
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test]
    async fn invalid_question_keeps_current_answer() {
        let ctx = AssistantContext::default();
        let mut slot = AnswerSlot::new(Assistant::default(), Duration::ZERO);
        let pending = slot.ask("saldo", &ctx).unwrap();
        assert!(slot.ask("", &ctx).is_err());
        assert!(pending.wait().await.unwrap().contains("panorama"));
    }
}
