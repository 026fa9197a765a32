//! The fixed sample data behind the report page.
//!
//! Everything the server renders comes from these literals; there is no
//! other input source.

use crate::models::{ChartKind, ChartSpec, ColorSeq, DatasetSpec, Rgba};

/// Category labels shared by all four charts.
pub const SCORE_LABELS: [&str; 3] = ["Nabila", "Rozi", "Azka"];

fn labels() -> Vec<String> {
    SCORE_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Midterm scores as a pie chart.
pub fn pie_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        title: "Pie Chart - Nilai UTS".to_string(),
        labels: labels(),
        dataset: DatasetSpec {
            label: "Nilai UTS".to_string(),
            values: vec![80.0, 60.0, 50.0],
            fill_colors: ColorSeq::PerValue(vec![
                Rgba::new(255, 99, 132, 0.7),
                Rgba::new(54, 162, 235, 0.7),
                Rgba::new(75, 192, 192, 0.7),
            ]),
            border_colors: ColorSeq::PerValue(vec![
                Rgba::opaque(255, 99, 132),
                Rgba::opaque(54, 162, 235),
                Rgba::opaque(75, 192, 192),
            ]),
            border_width: 2.0,
            ..Default::default()
        },
    }
}

/// Final-exam scores as a bar chart with rounded bar tops.
pub fn bar_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Bar Chart - Nilai UAS".to_string(),
        labels: labels(),
        dataset: DatasetSpec {
            label: "Nilai UAS".to_string(),
            values: vec![90.0, 60.0, 45.0],
            fill_colors: ColorSeq::PerValue(vec![
                Rgba::new(255, 159, 64, 0.7),
                Rgba::new(153, 102, 255, 0.7),
                Rgba::new(75, 192, 255, 0.7),
            ]),
            border_colors: ColorSeq::PerValue(vec![
                Rgba::opaque(255, 159, 64),
                Rgba::opaque(153, 102, 255),
                Rgba::opaque(75, 192, 255),
            ]),
            border_width: 2.0,
            corner_radius: 6.0,
            ..Default::default()
        },
    }
}

/// Daily scores as a smoothed line chart.
pub fn line_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        title: "Line Chart - Nilai Harian".to_string(),
        labels: labels(),
        dataset: DatasetSpec {
            label: "Nilai Harian".to_string(),
            values: vec![70.0, 82.0, 60.0],
            fill_colors: ColorSeq::Single(Rgba::new(54, 162, 235, 0.5)),
            border_colors: ColorSeq::Single(Rgba::opaque(54, 162, 235)),
            border_width: 3.0,
            tension: 0.3,
            point_radius: 6.0,
            ..Default::default()
        },
    }
}

/// Attendance percentages as a doughnut chart.
pub fn doughnut_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        title: "Doughnut Chart - Kehadiran".to_string(),
        labels: labels(),
        dataset: DatasetSpec {
            label: "Kehadiran (%)".to_string(),
            values: vec![95.0, 87.0, 92.0],
            fill_colors: ColorSeq::PerValue(vec![
                Rgba::new(255, 205, 86, 0.7),
                Rgba::new(75, 192, 192, 0.7),
                Rgba::new(255, 99, 132, 0.7),
            ]),
            border_colors: ColorSeq::PerValue(vec![
                Rgba::opaque(255, 205, 86),
                Rgba::opaque(75, 192, 192),
                Rgba::opaque(255, 99, 132),
            ]),
            border_width: 2.0,
            ..Default::default()
        },
    }
}

/// The four charts of the report page, in page order.
pub fn report_charts() -> [ChartSpec; 4] {
    [pie_chart(), bar_chart(), line_chart(), doughnut_chart()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sample_specs_validate() {
        for spec in report_charts() {
            spec.validate()
                .unwrap_or_else(|e| panic!("{} should validate: {e}", spec.title));
            assert_eq!(spec.dataset.values.len(), 3);
            assert_eq!(spec.labels.len(), 3);
        }
    }

    #[test]
    fn test_report_order_is_pie_bar_line_doughnut() {
        let kinds: Vec<ChartKind> = report_charts().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Pie,
                ChartKind::Bar,
                ChartKind::Line,
                ChartKind::Doughnut
            ]
        );
    }
}
