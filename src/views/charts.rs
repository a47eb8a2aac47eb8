use serde::Serialize;

use super::StatusBreakdown;

/// Labels and data for one chart, in the shape the frontend feeds straight
/// into its charting library.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<&'static str>,
    pub data: Vec<f64>,
}

/// All five dashboard charts. Only the status doughnut tracks the results
/// store; the rest are decorative fixtures of the demo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub status: ChartSeries,
    pub weekly_trend: ChartSeries,
    pub document_types: ChartSeries,
    pub performance: ChartSeries,
    pub monthly_volume: ChartSeries,
}

pub fn status_series(breakdown: StatusBreakdown) -> ChartSeries {
    ChartSeries {
        labels: vec!["Completed", "Processing", "Failed"],
        data: vec![
            breakdown.completed as f64,
            breakdown.processing as f64,
            breakdown.failed as f64,
        ],
    }
}

pub fn dashboard_charts(breakdown: StatusBreakdown) -> DashboardCharts {
    DashboardCharts {
        status: status_series(breakdown),
        weekly_trend: ChartSeries {
            labels: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            data: vec![12.0, 19.0, 15.0, 25.0, 22.0, 18.0, 20.0],
        },
        document_types: ChartSeries {
            labels: vec!["PDF", "DOCX", "TXT"],
            data: vec![45.0, 30.0, 25.0],
        },
        performance: ChartSeries {
            labels: vec![
                "Speed",
                "Accuracy",
                "Reliability",
                "Efficiency",
                "Completeness",
            ],
            data: vec![85.0, 92.0, 88.0, 78.0, 95.0],
        },
        monthly_volume: ChartSeries {
            labels: vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            data: vec![
                150.0, 180.0, 165.0, 210.0, 195.0, 240.0, 220.0, 260.0, 275.0, 290.0, 310.0, 340.0,
            ],
        },
    }
}
