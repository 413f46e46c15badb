// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SVG chart of daily budget, expense and income against day.

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::models::TransactionRecord;
use crate::utils::fmt_rp;

pub const CAPTION: &str = "Daily budget, expense and income";
const MARKER_SIZE: i32 = 4;
const BAR_HALF_WIDTH: f64 = 0.3;
const MAX_X_LABELS: usize = 31;

/// Budget and expense are point-marked lines. Income is a third line with
/// triangle markers, or bars rising from zero when `income_bars` is set.
pub fn render_svg(
    records: &[TransactionRecord],
    size: (u32, u32),
    income_bars: bool,
) -> Result<String> {
    let budget: Vec<(f64, i64)> = records
        .iter()
        .map(|r| (f64::from(r.day), r.daily_budget))
        .collect();
    let expense: Vec<(f64, i64)> = records
        .iter()
        .map(|r| (f64::from(r.day), saturate(r.expense)))
        .collect();
    let income: Vec<(f64, i64)> = records
        .iter()
        .map(|r| (f64::from(r.day), saturate(r.income)))
        .collect();
    let (lo, hi) = value_range(records);
    let last_day = records.last().map_or(1, |r| r.day);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CAPTION, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(0.5f64..f64::from(last_day) + 0.5, lo..hi)?;

        chart
            .configure_mesh()
            .x_desc("Day")
            .y_desc("Rp")
            .x_labels((last_day as usize + 1).min(MAX_X_LABELS))
            .x_label_formatter(&|x: &f64| {
                if x.fract() == 0.0 {
                    format!("{}", *x as i64)
                } else {
                    String::new()
                }
            })
            .y_label_formatter(&|y: &i64| fmt_rp(*y))
            .draw()?;

        chart
            .draw_series(LineSeries::new(budget.iter().copied(), GREEN.stroke_width(2)))?
            .label("Daily budget")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));
        chart.draw_series(
            budget
                .iter()
                .map(|&p| Circle::new(p, MARKER_SIZE, GREEN.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(expense.iter().copied(), RED.stroke_width(2)))?
            .label("Expense")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
        chart.draw_series(
            expense
                .iter()
                .map(|&p| Cross::new(p, MARKER_SIZE, RED.stroke_width(2))),
        )?;

        if income_bars {
            chart
                .draw_series(income.iter().filter(|p| p.1 > 0).map(|&(x, v)| {
                    Rectangle::new(
                        [(x - BAR_HALF_WIDTH, 0), (x + BAR_HALF_WIDTH, v)],
                        BLUE.mix(0.6).filled(),
                    )
                }))?
                .label("Income")
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2))
                });
        } else {
            chart
                .draw_series(LineSeries::new(income.iter().copied(), BLUE.stroke_width(2)))?
                .label("Income")
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2))
                });
            chart.draw_series(
                income
                    .iter()
                    .map(|&p| TriangleMarker::new(p, MARKER_SIZE, BLUE.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root.present()?;
    }
    Ok(svg)
}

pub fn write_svg(
    records: &[TransactionRecord],
    path: &Path,
    size: (u32, u32),
    income_bars: bool,
) -> Result<()> {
    let svg = render_svg(records, size, income_bars)?;
    std::fs::write(path, svg).with_context(|| format!("Write {}", path.display()))?;
    Ok(())
}

/// Y range covering every series and zero, with a little headroom on top.
fn value_range(records: &[TransactionRecord]) -> (i64, i64) {
    let values = records
        .iter()
        .flat_map(|r| [r.daily_budget, saturate(r.expense), saturate(r.income)]);
    let (lo, hi) = values.fold((0i64, 0i64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((i128::from(hi) - i128::from(lo)) / 20).max(1);
    let hi = i64::try_from(i128::from(hi) + pad).unwrap_or(i64::MAX);
    (lo, hi)
}

fn saturate(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
