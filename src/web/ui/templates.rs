use askama::Template;

use crate::passes::format::PassRow;
use crate::passes::VisualPassReport;

#[derive(Template)]
#[template(path = "satellite-passes.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub count: usize,
    /// Pre-rendered fragments, inserted without escaping
    pub content: String,
    pub status: String,
}

#[derive(Template)]
#[template(path = "summary.html")]
pub struct SummaryTemplate<'a> {
    pub name: &'a str,
    pub id: u32,
    pub transactions_count: u32,
    pub pass_count: usize,
}

impl<'a> SummaryTemplate<'a> {
    pub fn new(report: &'a VisualPassReport) -> Self {
        Self {
            name: &report.info.name,
            id: report.info.id,
            transactions_count: report.info.transactions_count,
            // counted from the list, not the reported passescount
            pass_count: report.passes.len(),
        }
    }
}

#[derive(Template)]
#[template(path = "pass_table.html")]
pub struct PassTableTemplate {
    pub rows: Vec<PassRow>,
}

impl PassTableTemplate {
    pub fn new(report: &VisualPassReport) -> Self {
        Self {
            rows: report.passes.iter().map(PassRow::new).collect(),
        }
    }
}

pub fn format_summary(report: &VisualPassReport) -> askama::Result<String> {
    SummaryTemplate::new(report).render()
}

pub fn format_pass_table(report: &VisualPassReport) -> askama::Result<String> {
    PassTableTemplate::new(report).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::types::{Pass, SatelliteInfo, UNKNOWN_MAGNITUDE};

    fn report(passes: Vec<Pass>) -> VisualPassReport {
        VisualPassReport {
            info: SatelliteInfo {
                id: 25544,
                name: "SPACE STATION".into(),
                transactions_count: 7,
                passes_count: 9,
            },
            passes,
        }
    }

    #[test]
    fn summary_counts_actual_passes() {
        let html = format_summary(&report(vec![Pass::default(), Pass::default()])).unwrap();

        assert!(html.contains("<h2>SPACE STATION (25544)</h2>"));
        assert!(html.contains("<li>Transaction count: 7</li>"));
        assert!(html.contains("<li>Pass count: 2</li>"));
    }

    #[test]
    fn summary_escapes_satellite_name() {
        let mut report = report(Vec::new());
        report.info.name = "<script>alert(1)</script>".into();

        let html = format_summary(&report).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;"));
    }

    #[test]
    fn empty_report_has_header_row_only() {
        let html = format_pass_table(&report(Vec::new())).unwrap();

        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<th>").count(), 12);
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn one_body_row_per_pass() {
        let known = Pass {
            mag: -1.5,
            duration: 125,
            start_az_compass: "NW".into(),
            ..Default::default()
        };
        let unknown = Pass {
            mag: UNKNOWN_MAGNITUDE,
            ..Default::default()
        };
        let html = format_pass_table(&report(vec![known, unknown])).unwrap();

        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 24);
        assert!(html.contains("<td>-1.50</td>"));
        assert!(html.contains("<td>2m  5s</td>"));
        assert!(html.contains("<td>0.00° (NW)</td>"));
        assert!(html.contains("<td>-</td>"));
    }

    #[test]
    fn compass_labels_are_escaped() {
        let pass = Pass {
            max_az_compass: "N&E".into(),
            ..Default::default()
        };
        let html = format_pass_table(&report(vec![pass])).unwrap();
        assert!(!html.contains("N&E"));
        assert!(html.contains("(N&#38;E)"));
    }

    #[test]
    fn page_inserts_content_raw_and_escapes_the_rest() {
        let page = PageTemplate {
            title: "Satellite Watcher",
            heading: "Watch <here>",
            count: 1,
            content: "<h2>raw</h2>".to_string(),
            status: "Error: a < b".to_string(),
        };
        let html = page.render().unwrap();

        assert!(html.contains("<title>Satellite Watcher</title>"));
        assert!(html.contains("<h2>raw</h2>"));
        assert!(!html.contains("<here>"));
        assert!(html.contains("Watch &#60;here&#62;"));
        assert!(html.contains("Error: a &#60; b"));
    }
}
