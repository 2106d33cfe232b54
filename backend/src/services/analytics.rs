//! Aggregation of the analytics dashboard series.
//!
//! The raw series are demo fixtures; this module rolls them up into the
//! KPI cards and totals the analytics view displays. Chart rendering is left
//! to the client.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAttendance {
    pub month: &'static str,
    pub webinars: u32,
    pub attendees: u32,
    pub avg_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEngagement {
    pub day: &'static str,
    pub chat_messages: u32,
    pub hand_raises: u32,
    pub qa_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopWebinar {
    pub title: &'static str,
    pub attendees: u32,
    pub rating: f32,
    pub engagement: u32,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    /// Change against the previous month, in percent.
    pub change: f64,
    pub trend: Trend,
}

impl KpiCard {
    fn new(title: &'static str, value: String, change: f64) -> Self {
        let trend = if change < 0.0 { Trend::Down } else { Trend::Up };
        Self {
            title,
            value,
            change,
            trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTotals {
    pub chat_messages: u32,
    pub hand_raises: u32,
    pub qa_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: Vec<KpiCard>,
    pub attendance: Vec<MonthlyAttendance>,
    pub engagement: Vec<DailyEngagement>,
    pub engagement_totals: EngagementTotals,
    pub categories: Vec<CategoryShare>,
    pub top_webinars: Vec<TopWebinar>,
}

fn attendance() -> Vec<MonthlyAttendance> {
    [
        ("Jan", 12, 1240, 45),
        ("Feb", 15, 1580, 48),
        ("Mar", 18, 1920, 52),
        ("Apr", 22, 2150, 49),
        ("May", 19, 1850, 51),
        ("Jun", 25, 2400, 55),
    ]
    .into_iter()
    .map(|(month, webinars, attendees, avg_duration)| MonthlyAttendance {
        month,
        webinars,
        attendees,
        avg_duration,
    })
    .collect()
}

fn engagement() -> Vec<DailyEngagement> {
    [
        ("Mon", 156, 23, 12),
        ("Tue", 189, 31, 18),
        ("Wed", 167, 28, 15),
        ("Thu", 203, 35, 22),
        ("Fri", 178, 29, 16),
        ("Sat", 134, 19, 9),
        ("Sun", 98, 14, 7),
    ]
    .into_iter()
    .map(|(day, chat_messages, hand_raises, qa_questions)| DailyEngagement {
        day,
        chat_messages,
        hand_raises,
        qa_questions,
    })
    .collect()
}

fn categories() -> Vec<CategoryShare> {
    vec![
        CategoryShare { name: "Technology", value: 35, color: "#3B82F6" },
        CategoryShare { name: "Business", value: 28, color: "#8B5CF6" },
        CategoryShare { name: "Marketing", value: 20, color: "#10B981" },
        CategoryShare { name: "Design", value: 17, color: "#F59E0B" },
    ]
}

fn top_webinars() -> Vec<TopWebinar> {
    vec![
        TopWebinar { title: "AI in Business Operations", attendees: 234, rating: 4.8, engagement: 92, date: "2024-01-15" },
        TopWebinar { title: "Building Scalable SaaS", attendees: 189, rating: 4.6, engagement: 87, date: "2024-01-18" },
        TopWebinar { title: "DevOps Best Practices", attendees: 178, rating: 4.9, engagement: 94, date: "2024-01-10" },
        TopWebinar { title: "Data Security Workshop", attendees: 142, rating: 4.7, engagement: 89, date: "2024-01-12" },
    ]
}

pub fn engagement_totals(days: &[DailyEngagement]) -> EngagementTotals {
    days.iter().fold(
        EngagementTotals {
            chat_messages: 0,
            hand_raises: 0,
            qa_questions: 0,
        },
        |mut acc, d| {
            acc.chat_messages += d.chat_messages;
            acc.hand_raises += d.hand_raises;
            acc.qa_questions += d.qa_questions;
            acc
        },
    )
}

/// Builds the full analytics dashboard payload.
pub fn report() -> AnalyticsReport {
    let attendance = attendance();
    let engagement = engagement();
    let hosted: u32 = attendance.iter().map(|m| m.webinars).sum();

    AnalyticsReport {
        kpis: vec![
            KpiCard::new("Total Attendees", "12,847".to_string(), 15.3),
            KpiCard::new("Avg Watch Time", "51 min".to_string(), 8.2),
            KpiCard::new("Engagement Rate", "89.4%".to_string(), -2.1),
            KpiCard::new("Webinars Hosted", hosted.to_string(), 23.1),
        ],
        engagement_totals: engagement_totals(&engagement),
        attendance,
        engagement,
        categories: categories(),
        top_webinars: top_webinars(),
    }
}
