//! Starter grid shown on launch

use super::model::{ColumnSpec, GridData, Row};

const STARTER_COLUMNS: &[(&str, &str)] = &[
    ("job", "Job Request"),
    ("submitted", "Submitted"),
    ("status", "Status"),
    ("submitter", "Submitter"),
    ("url", "URL"),
    ("assigned", "Assigned"),
    ("priority", "Priority"),
    ("dueDate", "Due Date"),
    ("value", "Est. Value"),
];

// Values in STARTER_COLUMNS order
const STARTER_ROWS: &[[&str; 9]] = &[
    [
        "Launch social media campaign for product",
        "15-11-2024",
        "In-process",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "Medium",
        "20-11-2024",
        "6,200,000 ₹",
    ],
    [
        "Update press kit for company redesign",
        "",
        "Need to start",
        "Irfan Khan",
        "www.irfankhanportfolio.com",
        "Tejas Pandey",
        "High",
        "30-10-2024",
        "3,500,000 ₹",
    ],
    [
        "Finalize user testing feedback for app",
        "05-12-2024",
        "In-process",
        "Mark Johnson",
        "www.markjohnson.dev",
        "Rachel Lee",
        "Medium",
        "10-12-2024",
        "4,750,000 ₹",
    ],
    [
        "Design new features for the website",
        "10-01-2025",
        "Complete",
        "Emily Green",
        "www.emilygreen.io",
        "Tom Wright",
        "Low",
        "15-01-2025",
        "5,900,000 ₹",
    ],
    [
        "Prepare financial report for Q4",
        "25-01-2025",
        "Blocked",
        "Jessica Brown",
        "www.jessicabrown.org",
        "Kevin Smith",
        "Low",
        "30-01-2025",
        "2,800,000 ₹",
    ],
];

/// The job-request tracker grid (5 rows, 9 columns)
pub fn starter_grid() -> GridData {
    let columns = STARTER_COLUMNS
        .iter()
        .map(|(id, label)| ColumnSpec::new(*id, *label))
        .collect();

    let rows = STARTER_ROWS
        .iter()
        .map(|values| {
            STARTER_COLUMNS
                .iter()
                .zip(values.iter())
                .map(|((id, _), value)| (id.to_string(), value.to_string()))
                .collect::<Row>()
        })
        .collect();

    GridData::from_parts(columns, rows)
}
