use budget_tracker::ledger::{EntryKind, Ledger};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_ledger(count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..count {
        let amount = format!("{}.{:02}", 10 + idx % 500, idx % 100);
        ledger
            .add_entry(EntryKind::Income, "Income", &amount)
            .expect("valid amount");
        ledger
            .add_entry(EntryKind::Expense, "Expense", &amount)
            .expect("valid amount");
    }
    ledger
}

fn bench_add_expenses(c: &mut Criterion) {
    c.bench_function("ledger_add_1k_expenses", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new();
            for _ in 0..1_000 {
                ledger
                    .add_entry(EntryKind::Expense, "Bench", black_box("12.34"))
                    .expect("valid amount");
            }
            ledger
        })
    });
}

fn bench_remove_expenses(c: &mut Criterion) {
    c.bench_function("ledger_remove_1k_expenses", |b| {
        b.iter_batched(
            || build_ledger(1_000),
            |mut ledger| {
                for id in 1..=1_000 {
                    ledger
                        .remove_entry(EntryKind::Expense, black_box(id))
                        .expect("entry exists");
                }
                ledger
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_recompute(c: &mut Criterion) {
    let mut ledger = build_ledger(5_000);
    c.bench_function("ledger_recompute_5k", |b| {
        b.iter(|| ledger.recompute_expense_percentages())
    });
}

criterion_group!(
    benches,
    bench_add_expenses,
    bench_remove_expenses,
    bench_recompute
);
criterion_main!(benches);
