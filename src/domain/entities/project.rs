use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{media::MediaKind, option_fields::{self, OptionField}},
    errors::AppError,
};

/// One portfolio project record. Field names on the wire (and in the JSON
/// store) are camelCase. `mediaUrl` and `mediaType` are a pair: both set or
/// both null, never one without the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub title_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub date: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaKind>,
}

/// Wire and file shape of the project store: `{"projects": [...]}`.
/// The vector is kept in insertion order; display order is derived
/// separately and never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub projects: Vec<Project>,
}

/// Incoming project payload for create and update.
///
/// Update merges: absent fields keep their stored values, explicit nulls
/// clear the nullable ones. Create additionally requires `title`,
/// `description` and `date` (enforced via [`Validate`], which only the
/// create path invokes).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub id: Option<String>,

    #[validate(required(message = "title is required"), length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,

    #[serde(deserialize_with = "option_fields::nullable")]
    pub title_url: OptionField<String>,

    #[validate(required(message = "description is required"), length(min = 1, message = "description cannot be empty"))]
    pub description: Option<String>,

    pub technologies: Option<Vec<String>>,

    #[validate(required(message = "date is required"), length(min = 1, message = "date cannot be empty"))]
    pub date: Option<String>,

    #[serde(deserialize_with = "option_fields::nullable")]
    pub media_url: OptionField<String>,

    #[serde(deserialize_with = "option_fields::nullable")]
    pub media_type: OptionField<MediaKind>,
}

/// One admin mutation against the project collection. `delete` only needs
/// `project.id`; the other fields are ignored for that action.
#[derive(Debug, Deserialize)]
pub struct ProjectMutation {
    pub action: ProjectAction,
    pub project: ProjectDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectAction {
    Create,
    Update,
    Delete,
}

/// Every mutation answers with the full refreshed collection so the admin
/// client can replace its local state wholesale.
#[derive(Debug, Serialize)]
pub struct MutationOutcome {
    pub message: String,
    pub projects: Vec<Project>,
}

impl ProjectDraft {
    /// The target id for update/delete, rejecting blank ids.
    pub fn require_id(&self) -> Result<String, AppError> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("id", "a project id is required"))
    }

    /// A draft touching only the media pair, for the eager partial-save a
    /// mid-edit upload performs. `None` clears both fields.
    pub fn media_patch(media: Option<(String, MediaKind)>) -> Self {
        let (media_url, media_type) = match media {
            Some((url, kind)) => (OptionField::SetToValue(url), OptionField::SetToValue(kind)),
            None => (OptionField::SetToNull, OptionField::SetToNull),
        };
        ProjectDraft {
            media_url,
            media_type,
            ..ProjectDraft::default()
        }
    }
}

impl From<Project> for ProjectDraft {
    fn from(project: Project) -> Self {
        ProjectDraft {
            id: Some(project.id),
            title: Some(project.title),
            title_url: project.title_url.into(),
            description: Some(project.description),
            technologies: Some(project.technologies),
            date: Some(project.date),
            media_url: project.media_url.into(),
            media_type: project.media_type.into(),
        }
    }
}

impl Project {
    /// Builds a new record from a create draft: validates required fields,
    /// assigns a fresh id when the draft lacks one, sanitizes tags and
    /// checks the media pair invariant.
    pub fn from_draft(draft: ProjectDraft, existing: &[Project]) -> Result<Self, AppError> {
        draft.validate()?;

        let id = match draft.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => {
                if existing.iter().any(|p| p.id == id) {
                    return Err(AppError::validation(
                        "id",
                        &format!("a project with id {id} already exists"),
                    ));
                }
                id.to_string()
            }
            None => fresh_id(existing),
        };

        let project = Project {
            id,
            title: draft.title.unwrap_or_default(),
            title_url: draft.title_url.into_option().flatten(),
            description: draft.description.unwrap_or_default(),
            technologies: sanitize_technologies(draft.technologies.unwrap_or_default()),
            date: draft.date.unwrap_or_default(),
            media_url: draft.media_url.into_option().flatten(),
            media_type: draft.media_type.into_option().flatten(),
        };
        project.ensure_media_pair()?;

        Ok(project)
    }

    /// Merges an update draft into this record. The id is never reassigned;
    /// absent fields keep their values, explicit nulls clear the nullable
    /// ones, and the tag list is re-sanitized.
    pub fn apply_draft(&mut self, draft: ProjectDraft) -> Result<(), AppError> {
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(value) = draft.title_url.into_option() {
            self.title_url = value;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(technologies) = draft.technologies {
            self.technologies = technologies;
        }
        self.technologies = sanitize_technologies(std::mem::take(&mut self.technologies));
        if let Some(date) = draft.date {
            self.date = date;
        }
        if let Some(value) = draft.media_url.into_option() {
            self.media_url = value;
        }
        if let Some(value) = draft.media_type.into_option() {
            self.media_type = value;
        }
        self.ensure_media_pair()
    }

    fn ensure_media_pair(&self) -> Result<(), AppError> {
        if self.media_url.is_some() != self.media_type.is_some() {
            return Err(AppError::validation(
                "media",
                "mediaUrl and mediaType must be set or cleared together",
            ));
        }
        Ok(())
    }
}

/// Millisecond timestamp token, bumped past any collision so two records
/// created within the same millisecond still get distinct ids.
pub fn fresh_id(existing: &[Project]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|p| p.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Strips blank tags and exact (case-sensitive) duplicates, preserving the
/// order of first occurrence.
pub fn sanitize_technologies(technologies: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(technologies.len());
    for tag in technologies {
        let tag = tag.trim().to_string();
        if tag.is_empty() || kept.contains(&tag) {
            continue;
        }
        kept.push(tag);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_project() -> Project {
        Project {
            id: "1747516212117".to_string(),
            title: "AI Fitness Workout Planner".to_string(),
            title_url: Some("https://example.com/fitness".to_string()),
            description: "Built an AI workout plan builder.".to_string(),
            technologies: vec!["Bubble (No Code SaaS)".to_string(), "OpenAI API".to_string()],
            date: "June 2023".to_string(),
            media_url: None,
            media_type: None,
        }
    }

    #[test]
    fn create_rejects_missing_required_fields() {
        let draft = ProjectDraft {
            title: Some("Only a title".to_string()),
            ..ProjectDraft::default()
        };

        let err = Project::from_draft(draft, &[]).unwrap_err();
        match err {
            AppError::ValidationError(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert!(names.contains(&"description"));
                assert!(names.contains(&"date"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_assigns_time_based_id_when_absent() {
        let draft = ProjectDraft {
            title: Some("New".to_string()),
            description: Some("Desc".to_string()),
            date: Some("May 2023".to_string()),
            ..ProjectDraft::default()
        };

        let project = Project::from_draft(draft, &[stored_project()]).unwrap();
        assert!(!project.id.is_empty());
        assert!(project.id.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(project.id, "1747516212117");
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let draft = ProjectDraft {
            id: Some("1747516212117".to_string()),
            title: Some("New".to_string()),
            description: Some("Desc".to_string()),
            date: Some("May 2023".to_string()),
            ..ProjectDraft::default()
        };

        assert!(matches!(
            Project::from_draft(draft, &[stored_project()]),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn fresh_id_skips_collisions() {
        let mut existing = stored_project();
        existing.id = Utc::now().timestamp_millis().to_string();
        let existing = vec![existing];

        let id = fresh_id(&existing);
        assert_ne!(id, existing[0].id);
    }

    #[test]
    fn merge_keeps_absent_fields_and_id() {
        let mut project = stored_project();
        let draft = ProjectDraft {
            id: Some("something-else".to_string()),
            title: Some("Renamed".to_string()),
            ..ProjectDraft::default()
        };

        project.apply_draft(draft).unwrap();
        assert_eq!(project.id, "1747516212117");
        assert_eq!(project.title, "Renamed");
        assert_eq!(project.description, "Built an AI workout plan builder.");
        assert_eq!(project.date, "June 2023");
    }

    #[test]
    fn merge_clears_nullable_fields_on_explicit_null() {
        let mut project = stored_project();
        project.media_url = Some("/uploads/demo.mp4".to_string());
        project.media_type = Some(MediaKind::Video);

        let draft: ProjectDraft =
            serde_json::from_str(r#"{"titleUrl": null, "mediaUrl": null, "mediaType": null}"#)
                .unwrap();
        project.apply_draft(draft).unwrap();

        assert_eq!(project.title_url, None);
        assert_eq!(project.media_url, None);
        assert_eq!(project.media_type, None);
    }

    #[test]
    fn merge_rejects_media_url_without_type() {
        let mut project = stored_project();
        let draft: ProjectDraft =
            serde_json::from_str(r#"{"mediaUrl": "/uploads/demo.png"}"#).unwrap();

        assert!(matches!(
            project.apply_draft(draft),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn technologies_drop_blanks_and_duplicates() {
        let sanitized = sanitize_technologies(vec![
            "AI".to_string(),
            "  ".to_string(),
            "AI".to_string(),
            " Rust ".to_string(),
            "".to_string(),
            "ai".to_string(),
        ]);
        assert_eq!(sanitized, vec!["AI", "Rust", "ai"]);
    }

    #[test]
    fn wire_format_round_trips_camel_case() {
        let json = r#"{
            "id": "1",
            "title": "AI Image Generator",
            "titleUrl": "http://example.com",
            "description": "Demo",
            "technologies": ["Bubble (No Code SaaS)"],
            "date": "May 2023",
            "mediaUrl": null,
            "mediaType": null
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title_url.as_deref(), Some("http://example.com"));

        let out = serde_json::to_value(&project).unwrap();
        assert_eq!(out["titleUrl"], "http://example.com");
        assert_eq!(out["mediaUrl"], serde_json::Value::Null);
    }
}
