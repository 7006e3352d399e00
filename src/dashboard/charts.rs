//! The monthly balance chart.
//!
//! The chart combines grouped income/expense bars with a cumulative balance
//! line, and a dashed target line when a savings plan is active. It is built
//! as an ECharts configuration and initialised by an inline script rendered
//! next to its container, so htmx swaps recreate the chart from scratch.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, LineStyle, LineStyleType,
        Tooltip, Trigger,
    },
    series::{Bar, Line},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    Currency, RateTable, SavingsPlan,
    dashboard::aggregation::{
        contiguous_months, cumulative_balance, flows_by_month, savings_projection,
    },
    transaction::Transaction,
};

/// The HTML element ID of the chart container.
pub(super) const BALANCE_CHART_ID: &str = "balance-chart";

/// The per-month series the balance chart plots, converted to the display
/// currency.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartSeries {
    /// The "YYYY-MM" x-axis labels, one per month, gap months included.
    pub labels: Vec<String>,
    /// Income per month.
    pub income: Vec<f64>,
    /// Expenses per month, as positive numbers.
    pub expense: Vec<f64>,
    /// The cumulative balance at the end of each month.
    pub balance: Vec<f64>,
    /// The cumulative savings target, present when a plan is active.
    pub savings_target: Option<Vec<f64>>,
}

/// Build the chart series over the contiguous month range.
///
/// Returns `None` when there are no transactions, in which case no chart is
/// rendered at all.
pub(super) fn chart_series(
    transactions: &[Transaction],
    plan: Option<SavingsPlan>,
    rates: &RateTable,
    currency: Currency,
) -> Option<ChartSeries> {
    if transactions.is_empty() {
        return None;
    }

    let flows = flows_by_month(transactions);
    let months = contiguous_months(&flows);

    let convert = |amounts: Vec<f64>| -> Vec<f64> {
        amounts
            .into_iter()
            .map(|amount| rates.to_display(amount, currency))
            .collect()
    };

    let income = convert(
        months
            .iter()
            .map(|month| flows.get(month).map(|flow| flow.income).unwrap_or(0.0))
            .collect(),
    );
    let expense = convert(
        months
            .iter()
            .map(|month| flows.get(month).map(|flow| flow.expense).unwrap_or(0.0))
            .collect(),
    );
    let balance = convert(cumulative_balance(&months, &flows));
    let savings_target =
        plan.map(|plan| convert(savings_projection(&months, &flows, plan, rates)));

    Some(ChartSeries {
        labels: months.iter().map(|month| month.to_string()).collect(),
        income,
        expense,
        balance,
        savings_target,
    })
}

/// Build the ECharts configuration for the balance chart.
pub(super) fn balance_chart(series: &ChartSeries, currency: Currency) -> Chart {
    let mut chart = Chart::new()
        .tooltip(currency_tooltip(currency))
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(series.labels.clone()))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter(currency))),
        )
        .series(Bar::new().name("Income").data(series.income.clone()))
        .series(Bar::new().name("Expense").data(series.expense.clone()))
        .series(Line::new().name("Balance").data(series.balance.clone()));

    if let Some(savings_target) = &series.savings_target {
        chart = chart.series(
            Line::new()
                .name("Saving Target")
                .line_style(LineStyle::new().type_(LineStyleType::Dashed))
                .data(savings_target.clone()),
        );
    }

    chart
}

/// The container div and inline initialisation script for the chart.
///
/// The script lives in the swapped content rather than the page head so that
/// htmx swaps of the dashboard re-run it, replacing the previous chart
/// instance wholesale.
pub(super) fn chart_view(chart: &Chart) -> Markup {
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{BALANCE_CHART_ID}");
            const chart = echarts.init(chartDom);
            chart.setOption({});

            window.addEventListener('resize', chart.resize);
        }})();"#,
        chart.to_string()
    );

    html!(
        section
            id="chart"
            class="w-full mx-auto mb-4"
        {
            div
                id=(BALANCE_CHART_ID)
                class="min-h-[380px] rounded bg-white dark:bg-gray-100"
            {}

            script { (PreEscaped(script)) }
        }
    )
}

fn currency_formatter(currency: Currency) -> JsFunction {
    JsFunction::new_with_args(
        "number",
        &format!(
            "const currencyFormatter = new Intl.NumberFormat('en-US', {{
              style: 'currency',
              currency: '{}'
            }});
            return (number) ? currencyFormatter.format(number) : \"-\";",
            currency.code()
        ),
    )
}

/// Creates a tooltip configuration for currency values.
fn currency_tooltip(currency: Currency) -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter(currency))
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
