use tally_core::model::{FinancialSummary, StandardizedTable};

pub fn format_summary(summary: &FinancialSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Monthly income:      ${}\n",
        summary.monthly_income.round_dp(2)
    ));
    out.push('\n');

    if summary.expenses.is_empty() {
        out.push_str("No expenses found.\n");
    } else {
        out.push_str("Expenses:\n");
        let max_name = summary
            .expenses
            .iter()
            .map(|e| e.category.len())
            .max()
            .unwrap_or(10);
        for expense in &summary.expenses {
            out.push_str(&format!(
                "  {:<width$}  ${}\n",
                expense.category,
                expense.amount.round_dp(2),
                width = max_name
            ));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "Total expenses:      ${}\n",
        summary.total_expenses.round_dp(2)
    ));
    out.push_str(&format!(
        "Savings:             ${} ({}% of income)\n",
        summary.savings.round_dp(2),
        summary.savings_percentage.round_dp(1)
    ));
    out.push_str(&format!(
        "Annual return:       {}%",
        summary.annual_return_percent
    ));

    out
}

pub fn format_standardized(table: &StandardizedTable) -> String {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.len())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_row(&table.headers, &widths));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(&rule, &widths));

    for row in &table.rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }

    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let joined = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    joined.trim_end().to_string()
}
