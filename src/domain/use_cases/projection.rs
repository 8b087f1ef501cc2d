use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    entities::project::Project,
    utils::linkify::{DescriptionSegment, linkify},
};

/// One record of the public read path: the stored fields plus the
/// description pre-split into prose and link segments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProject {
    #[serde(flatten)]
    pub project: Project,
    pub description_segments: Vec<DescriptionSegment>,
}

/// Derives the display ordering from a defensive copy of the stored
/// collection: parsed date descending, ties keeping storage order,
/// unparsable dates sinking to the bottom. The input is never mutated.
pub fn display_projection(records: &[Project]) -> Vec<DisplayProject> {
    let mut ordered: Vec<Project> = records.to_vec();
    ordered.sort_by(|a, b| parse_display_date(&b.date).cmp(&parse_display_date(&a.date)));

    ordered
        .into_iter()
        .map(|project| DisplayProject {
            description_segments: linkify(&project.description),
            project,
        })
        .collect()
}

/// Parses the human "Month Year" form the admin UI writes ("June 2023");
/// ISO dates are tolerated as a fallback. `None` ranks below every parsed
/// date.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %B %Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
