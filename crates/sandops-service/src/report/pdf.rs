//! Weekly impact report PDF rendering.
//!
//! A4 pages rendered top-down with a cursor in millimeters from the top
//! edge; printpdf measures from the bottom, so the cursor converts on write.
//! The whole document is buffered and returned as one byte vector.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use sandops_core::error::{AppError, ErrorKind};
use sandops_core::result::AppResult;
use sandops_entity::report::location::LocationStatus;
use sandops_entity::report::weekly::WeeklyReport;

use super::fmt::{format_count, format_percent, format_signed, format_signed_percent};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 18.0;
const BODY_BOTTOM: f32 = PAGE_HEIGHT - 22.0;

/// Column x-offsets (from the left margin) for the metrics grid.
const METRIC_COLUMNS: [f32; 5] = [0.0, 62.0, 95.0, 128.0, 152.0];

fn navy() -> Color {
    Color::Rgb(Rgb::new(0.137, 0.388, 0.514, None))
}

fn orange() -> Color {
    Color::Rgb(Rgb::new(0.984, 0.678, 0.247, None))
}

fn light_blue() -> Color {
    Color::Rgb(Rgb::new(0.278, 0.702, 0.796, None))
}

fn dark_gray() -> Color {
    Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None))
}

fn light_gray() -> Color {
    Color::Rgb(Rgb::new(0.4, 0.4, 0.4, None))
}

fn red() -> Color {
    Color::Rgb(Rgb::new(0.8, 0.0, 0.0, None))
}

/// Render the weekly report as a paginated PDF document.
pub fn render_weekly_pdf(report: &WeeklyReport) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Weekly Impact Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::with_source(ErrorKind::Render, "Failed to load PDF font", e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::with_source(ErrorKind::Render, "Failed to load PDF font", e))?;

    {
        let mut writer = PdfWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            regular: &regular,
            bold: &bold,
            y: MARGIN,
        };
        write_header(&mut writer, report);
        write_summary(&mut writer, report);
        write_metrics_table(&mut writer, report);
        write_locations(&mut writer, report);

        writer.new_page();
        write_trends(&mut writer, report);
        write_next_week(&mut writer, report);
        write_celebration(&mut writer, report);
        write_footer(&mut writer);
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::with_source(ErrorKind::Render, "Failed to serialize PDF", e))
}

/// Top-down page writer over a printpdf layer.
struct PdfWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    /// Cursor position in mm from the top edge.
    y: f32,
}

impl PdfWriter<'_> {
    fn text_at(&self, text: &str, size: f32, indent: f32, color: Color, bold: bool) {
        let font = if bold { self.bold } else { self.regular };
        self.layer.set_fill_color(color);
        self.layer
            .use_text(text, size, Mm(MARGIN + indent), Mm(PAGE_HEIGHT - self.y), font);
    }

    /// Write one line at the cursor and advance by `leading` mm.
    fn line(&mut self, text: &str, size: f32, indent: f32, color: Color, bold: bool, leading: f32) {
        self.text_at(text, size, indent, color, bold);
        self.y += leading;
    }

    /// Vertical gap.
    fn space(&mut self, mm: f32) {
        self.y += mm;
    }

    /// Start a new page when fewer than `needed` mm remain.
    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > BODY_BOTTOM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN;
    }

    /// Thin horizontal rule across the content width.
    fn rule(&mut self, color: Color) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(0.6);
        let baseline = PAGE_HEIGHT - self.y;
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(baseline)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(baseline)), false),
            ],
            is_closed: false,
        });
        self.y += 3.0;
    }

    fn section_heading(&mut self, text: &str, color: Color) {
        self.ensure_space(20.0);
        self.line(text, 14.0, 0.0, color, true, 3.0);
        self.rule(light_gray());
        self.space(3.0);
    }
}

fn write_header(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.line("The Sandwich Network", 22.0, 0.0, navy(), true, 9.0);
    w.line("Weekly Impact Report", 16.0, 0.0, orange(), true, 8.0);
    w.line(
        &format!(
            "Collection Week: {} - {}",
            report.collection_week.start.format("%b %d"),
            report.collection_week.end.format("%b %d, %Y")
        ),
        10.0,
        0.0,
        dark_gray(),
        false,
        5.0,
    );
    w.line(
        &format!("Generated: {}", report.report_date.format("%b %d, %Y")),
        10.0,
        0.0,
        dark_gray(),
        false,
        8.0,
    );
}

fn write_summary(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("EXECUTIVE SUMMARY", navy());

    let summary = &report.summary;
    w.line(
        &format!(
            "Total Collected: {} sandwiches",
            format_count(summary.total_sandwiches)
        ),
        11.0,
        0.0,
        dark_gray(),
        false,
        6.0,
    );
    w.line(
        &format!(
            "Active Locations: {} of {} ({})",
            summary.active_locations,
            summary.total_locations,
            format_percent(summary.participation_rate)
        ),
        11.0,
        0.0,
        dark_gray(),
        false,
        6.0,
    );
    w.line(
        &format!(
            "Week-over-Week: {}",
            format_signed_percent(summary.week_over_week_change)
        ),
        11.0,
        0.0,
        dark_gray(),
        false,
        6.0,
    );
    let progress = &summary.monthly_progress;
    w.line(
        &format!(
            "Monthly Progress: {} of {} ({})",
            format_count(progress.current),
            format_count(progress.goal),
            format_percent(Some(progress.percentage))
        ),
        11.0,
        0.0,
        dark_gray(),
        false,
        9.0,
    );
}

fn write_metrics_table(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("KEY METRICS", navy());

    let table = &report.metrics_table;
    let rows: Vec<[String; 5]> = vec![
        [
            "Metric".to_string(),
            "This Week".to_string(),
            "Last Week".to_string(),
            "Change".to_string(),
            "4-Week Avg".to_string(),
        ],
        [
            "Total Sandwiches".to_string(),
            format_count(table.total_sandwiches.this_week),
            format_count(table.total_sandwiches.last_week),
            format_signed(table.total_sandwiches.change),
            format_count(table.total_sandwiches.four_week_avg),
        ],
        [
            "Locations Participating".to_string(),
            table.locations_participating.this_week.to_string(),
            table.locations_participating.last_week.to_string(),
            format_signed(table.locations_participating.change),
            table.locations_participating.four_week_avg.to_string(),
        ],
        [
            "Avg per Location".to_string(),
            format_count(table.avg_per_location.this_week.round() as i64),
            format_count(table.avg_per_location.last_week.round() as i64),
            format_signed(table.avg_per_location.change.round() as i64),
            format_count(table.avg_per_location.four_week_avg.round() as i64),
        ],
        [
            "Group Collections".to_string(),
            format_count(table.group_collections.this_week),
            format_count(table.group_collections.last_week),
            format_signed(table.group_collections.change),
            format_count(table.group_collections.four_week_avg),
        ],
    ];

    for (row_idx, row) in rows.iter().enumerate() {
        let header = row_idx == 0;
        for (col_idx, cell) in row.iter().enumerate() {
            let color = if header { navy() } else { dark_gray() };
            w.text_at(cell, 9.0, METRIC_COLUMNS[col_idx], color, header);
        }
        w.space(6.0);
        if header {
            w.rule(navy());
        }
    }
    w.space(5.0);
}

fn write_locations(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("LOCATION PERFORMANCE", navy());

    let bucket = |status: LocationStatus| {
        report
            .locations
            .iter()
            .filter(move |l| l.status == status)
            .collect::<Vec<_>>()
    };

    let high = bucket(LocationStatus::HighPerformer);
    if !high.is_empty() {
        w.ensure_space(12.0);
        w.line("HIGH PERFORMERS:", 12.0, 0.0, orange(), true, 6.0);
        for location in high {
            w.ensure_space(6.0);
            w.line(
                &format!(
                    "- {}: {} ({})",
                    location.name,
                    format_count(location.total),
                    location.trend.label()
                ),
                10.0,
                4.0,
                dark_gray(),
                false,
                5.0,
            );
        }
        w.space(3.0);
    }

    let attention = bucket(LocationStatus::NeedsAttention);
    if !attention.is_empty() {
        w.ensure_space(12.0);
        w.line("NEEDS ATTENTION:", 12.0, 0.0, red(), true, 6.0);
        for location in attention {
            w.ensure_space(10.0);
            w.line(
                &format!(
                    "- {}: {} - action required",
                    location.name,
                    format_count(location.total)
                ),
                10.0,
                4.0,
                dark_gray(),
                false,
                5.0,
            );
            if let Some(issues) = &location.issues {
                for issue in issues {
                    w.ensure_space(5.0);
                    w.line(&format!("  {issue}"), 9.0, 8.0, light_gray(), false, 4.5);
                }
            }
        }
        w.space(3.0);
    }

    let steady = bucket(LocationStatus::SteadyContributor);
    if !steady.is_empty() {
        w.ensure_space(12.0);
        w.line("STEADY CONTRIBUTORS:", 12.0, 0.0, light_blue(), true, 6.0);
        for location in steady.iter().take(10) {
            w.ensure_space(6.0);
            w.line(
                &format!("- {}: {}", location.name, format_count(location.total)),
                10.0,
                4.0,
                dark_gray(),
                false,
                5.0,
            );
        }
        if steady.len() > 10 {
            w.line(
                &format!("... and {} more locations", steady.len() - 10),
                9.0,
                4.0,
                light_gray(),
                false,
                5.0,
            );
        }
    }
}

fn write_trends(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("TRENDS & INSIGHTS", navy());

    w.line("Identified Patterns:", 11.0, 0.0, dark_gray(), true, 5.5);
    for pattern in &report.trends_insights.patterns {
        w.ensure_space(5.5);
        w.line(&format!("- {pattern}"), 10.0, 4.0, dark_gray(), false, 5.0);
    }
    w.space(3.0);

    w.line("Seasonal Impacts:", 11.0, 0.0, dark_gray(), true, 5.5);
    for impact in &report.trends_insights.seasonal_impacts {
        w.ensure_space(5.5);
        w.line(&format!("- {impact}"), 10.0, 4.0, dark_gray(), false, 5.0);
    }
    w.space(3.0);

    w.line("Monthly Totals:", 11.0, 0.0, dark_gray(), true, 5.5);
    for month in &report.trends_insights.month_over_month {
        w.ensure_space(5.5);
        w.line(
            &format!("- {}: {}", month.month, format_count(month.total)),
            10.0,
            4.0,
            dark_gray(),
            false,
            5.0,
        );
    }
    w.space(5.0);
}

fn write_next_week(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("NEXT WEEK PREPARATION", navy());

    let prep = &report.next_week_prep;
    w.line(
        &format!(
            "Host Confirmations: {} of {} ({})",
            prep.host_confirmations.confirmed,
            prep.host_confirmations.total,
            format_percent(prep.host_confirmations.percentage)
        ),
        11.0,
        0.0,
        dark_gray(),
        false,
        5.5,
    );
    w.line(
        &format!("Weather Forecast: {}", prep.weather_forecast),
        11.0,
        0.0,
        dark_gray(),
        false,
        5.5,
    );
    w.line(
        &format!("Volunteer Status: {}", prep.volunteer_status),
        11.0,
        0.0,
        dark_gray(),
        false,
        6.0,
    );

    w.line("Pending Actions:", 11.0, 0.0, orange(), true, 5.5);
    for action in &prep.pending_actions {
        w.ensure_space(5.5);
        w.line(&format!("- {action}"), 10.0, 4.0, dark_gray(), false, 5.0);
    }
    w.space(5.0);
}

fn write_celebration(w: &mut PdfWriter<'_>, report: &WeeklyReport) {
    w.section_heading("CELEBRATING SUCCESS", orange());

    let success = &report.success_celebration;
    if !success.milestones.is_empty() {
        w.line("Milestones Reached:", 11.0, 0.0, dark_gray(), true, 5.5);
        for milestone in &success.milestones {
            w.ensure_space(5.5);
            w.line(&format!("* {milestone}"), 10.0, 4.0, dark_gray(), false, 5.0);
        }
        w.space(3.0);
    }

    if let Some(spotlight) = &success.volunteer_spotlight {
        w.ensure_space(12.0);
        w.line("Volunteer Spotlight:", 11.0, 0.0, dark_gray(), true, 5.5);
        w.line(
            &format!("{}: {}", spotlight.name, spotlight.contribution),
            10.0,
            4.0,
            dark_gray(),
            false,
            6.0,
        );
    }

    if let Some(story) = &success.impact_story {
        w.ensure_space(12.0);
        w.line("Impact Story:", 11.0, 0.0, dark_gray(), true, 5.5);
        w.line(
            &format!("\"{}\"", story.quote),
            10.0,
            4.0,
            light_gray(),
            false,
            5.0,
        );
        w.line(
            &format!("- {}", story.attribution),
            9.0,
            4.0,
            light_gray(),
            false,
            6.0,
        );
    }
}

fn write_footer(w: &mut PdfWriter<'_>) {
    w.y = PAGE_HEIGHT - 14.0;
    w.text_at(
        "Distribution: Board Members, Committee Chairs, Volunteer Coordinators",
        8.0,
        0.0,
        light_gray(),
        false,
    );
    w.y += 4.0;
    w.text_at("Next report: next Thursday", 8.0, 0.0, light_gray(), false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sandops_core::config::reporting::ReportingConfig;
    use sandops_entity::host::{Host, HostStatus};
    use sandops_entity::collection::SandwichCollection;
    use uuid::Uuid;

    fn sample_report() -> WeeklyReport {
        let week_end = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let records: Vec<SandwichCollection> = vec![
            SandwichCollection {
                id: 1,
                collection_date: week_end,
                host_name: "Alpharetta".to_string(),
                individual_sandwiches: 900,
                group1_count: 0,
                group2_count: 0,
                submitted_at: chrono::DateTime::UNIX_EPOCH,
            },
            SandwichCollection {
                id: 2,
                collection_date: week_end,
                host_name: "Roswell".to_string(),
                individual_sandwiches: 300,
                group1_count: 100,
                group2_count: 0,
                submitted_at: chrono::DateTime::UNIX_EPOCH,
            },
        ];
        let hosts = vec![Host {
            id: Uuid::new_v4(),
            name: "Alpharetta".to_string(),
            address: None,
            status: HostStatus::Active,
            notes: None,
            created_at: chrono::DateTime::UNIX_EPOCH,
        }];
        crate::report::weekly::build_weekly_report(
            &records,
            &hosts,
            Some(week_end),
            week_end,
            &ReportingConfig::default(),
        )
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_weekly_pdf(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1024);
    }

    #[test]
    fn test_render_is_deterministic_in_size() {
        let report = sample_report();
        let a = render_weekly_pdf(&report).unwrap();
        let b = render_weekly_pdf(&report).unwrap();
        assert_eq!(a.len(), b.len());
    }
}
