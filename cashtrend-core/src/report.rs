//! Render findings for each scenario.
//!
//! Output lines look like:
//!   [CASH SURPLUS] CASH ON EACH DAY IS HIGHER THAN THE PREVIOUS DAY
//!   [HIGHEST CASH SURPLUS] DAY: 12, AMOUNT: SGD1500
//!   [CASH DEFICIT] DAY: 42, AMOUNT: SGD37000

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use crate::classifier::{classify, Scenario};
use crate::model::{DayDelta, DeltaSeries};

/// Currency label printed in front of every amount
pub const CURRENCY: &str = "SGD";

const SURPLUS_BANNER: &str = "[CASH SURPLUS] CASH ON EACH DAY IS HIGHER THAN THE PREVIOUS DAY";
const DEFICIT_BANNER: &str = "[CASH DEFICIT] CASH ON EACH DAY IS LOWER THAN THE PREVIOUS DAY";
const DEFICIT_TAG: &str = "[CASH DEFICIT]";
const RANK_LABELS: [&str; 3] = [
    "[HIGHEST CASH DEFICIT]",
    "[2ND HIGHEST CASH DEFICIT]",
    "[3RD HIGHEST CASH DEFICIT]",
];

/// Rendered report fragment for one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub scenario: Scenario,
    pub lines: Vec<String>,
}

impl Finding {
    fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with a trailing newline after each one
    pub fn render(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn day_amount(label: &str, d: &DayDelta) -> String {
    format!("{label} DAY: {}, AMOUNT: {CURRENCY}{}", d.day, d.amount())
}

/// Classify the series and render the matching finding
pub fn analyze(series: &DeltaSeries) -> Finding {
    match classify(series) {
        Scenario::Surplus => surplus_finding(series),
        Scenario::Deficit => deficit_finding(series),
        Scenario::Mixed => mixed_finding(series),
    }
}

/// Highest increase. Ties go to the earliest day.
pub fn surplus_finding(series: &DeltaSeries) -> Finding {
    let mut finding = Finding::new(Scenario::Surplus);
    finding.push(SURPLUS_BANNER);

    // max_by_key keeps the last maximum, so only replace on strict improvement
    let best = series.iter().fold(None::<&DayDelta>, |best, d| match best {
        Some(b) if b.delta >= d.delta => Some(b),
        _ => Some(d),
    });

    if let Some(d) = best {
        finding.push(format!(
            "[HIGHEST CASH SURPLUS] DAY: {}, AMOUNT: {CURRENCY}{}",
            d.day, d.delta
        ));
    }
    finding
}

/// Largest decrease. Ties go to the smaller `(day, delta)` pair.
pub fn deficit_finding(series: &DeltaSeries) -> Finding {
    let mut finding = Finding::new(Scenario::Deficit);
    finding.push(DEFICIT_BANNER);

    if let Some(d) = series.iter().min_by_key(|d| (d.delta, d.day)) {
        finding.push(day_amount(RANK_LABELS[0], d));
    }
    finding
}

/// Every deficit day in order, then the three largest deficits.
pub fn mixed_finding(series: &DeltaSeries) -> Finding {
    let mut finding = Finding::new(Scenario::Mixed);

    let mut deficits = series.deficits();
    deficits.sort();

    for d in &deficits {
        finding.push(day_amount(DEFICIT_TAG, d));
    }

    // Stable sort on the day-ordered list: equal amounts stay chronological
    let mut ranked = deficits;
    ranked.sort_by_key(|d| Reverse(d.amount()));

    // Ranked lines spell "Day:" in mixed case, unlike every other line
    for (label, d) in RANK_LABELS.iter().zip(&ranked) {
        finding.push(format!("{label} Day: {}, AMOUNT: {CURRENCY}{}", d.day, d.amount()));
    }
    finding
}
