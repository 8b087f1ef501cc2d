use crate::{
    entities::project::{Project, ProjectDraft},
    errors::AppError,
    media::MediaStore,
    repositories::project::ProjectRepository,
};

/// Lifecycle of one record under edit. The draft is disposable: cancel
/// throws it away, and only an explicit save replaces the durable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Viewing,
    Editing,
    Saving,
}

/// One admin edit of a project record.
///
/// All field mutations apply to a copy-on-write draft; the durable record
/// stays untouched until [`save`](Self::save). The exception is
/// [`attach_media`](Self::attach_media), which persists the media pair
/// immediately so an uploaded asset survives an abandoned edit.
pub struct EditSession<R>
where
    R: ProjectRepository,
{
    project_repo: R,
    phase: EditPhase,
    record: Project,
    draft: Option<Project>,
    pending_technology: String,
}

impl<R> EditSession<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, record: Project) -> Self {
        EditSession {
            project_repo,
            phase: EditPhase::Viewing,
            record,
            draft: None,
            pending_technology: String::new(),
        }
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Last known durable copy of the record.
    pub fn record(&self) -> &Project {
        &self.record
    }

    pub fn draft(&self) -> Option<&Project> {
        self.draft.as_ref()
    }

    pub fn pending_technology(&self) -> &str {
        &self.pending_technology
    }

    /// Viewing → Editing with a fresh copy-on-write draft.
    pub fn begin_edit(&mut self) -> Result<(), AppError> {
        if self.phase != EditPhase::Viewing {
            return Err(AppError::validation("edit", "an edit is already in progress"));
        }
        self.draft = Some(self.record.clone());
        self.phase = EditPhase::Editing;
        Ok(())
    }

    /// Discards the draft and any pending tag input, back to Viewing.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.pending_technology.clear();
        self.phase = EditPhase::Viewing;
    }

    fn draft_mut(&mut self) -> Result<&mut Project, AppError> {
        if self.phase != EditPhase::Editing {
            return Err(AppError::validation("edit", "no edit in progress"));
        }
        self.draft
            .as_mut()
            .ok_or_else(|| AppError::validation("edit", "no edit in progress"))
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), AppError> {
        self.draft_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_title_url(&mut self, title_url: Option<String>) -> Result<(), AppError> {
        self.draft_mut()?.title_url = title_url;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), AppError> {
        self.draft_mut()?.description = description.into();
        Ok(())
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> Result<(), AppError> {
        self.draft_mut()?.date = date.into();
        Ok(())
    }

    pub fn set_pending_technology(&mut self, text: impl Into<String>) {
        self.pending_technology = text.into();
    }

    /// Commits the pending tag into the draft. Duplicate text is dropped
    /// rather than added twice; the pending input clears either way.
    pub fn commit_pending_technology(&mut self) -> Result<(), AppError> {
        let tag = self.pending_technology.trim().to_string();
        self.pending_technology.clear();
        if tag.is_empty() {
            return Ok(());
        }

        let draft = self.draft_mut()?;
        if !draft.technologies.contains(&tag) {
            draft.technologies.push(tag);
        }
        Ok(())
    }

    pub fn remove_technology(&mut self, tag: &str) -> Result<(), AppError> {
        self.draft_mut()?.technologies.retain(|t| t != tag);
        Ok(())
    }

    /// Clears the media pair together; draft-only until save, like any
    /// other field edit.
    pub fn clear_media(&mut self) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        draft.media_url = None;
        draft.media_type = None;
        Ok(())
    }

    /// Uploads through the media store, merges the returned reference into
    /// the draft, and immediately persists just the media pair. The rest of
    /// the draft stays unsaved; on failure the draft is left untouched.
    pub async fn attach_media<M>(
        &mut self,
        media_store: &M,
        file_name: Option<String>,
        declared_mime: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<(), AppError>
    where
        M: MediaStore + ?Sized,
    {
        let id = self.draft_mut()?.id.clone();

        let stored = media_store
            .store_media(file_name, declared_mime, bytes)
            .await?;

        let projects = self
            .project_repo
            .update_project(
                &id,
                ProjectDraft::media_patch(Some((stored.url.clone(), stored.media_type))),
            )
            .await?;
        if let Some(refreshed) = projects.into_iter().find(|p| p.id == id) {
            self.record = refreshed;
        }

        let draft = self.draft_mut()?;
        draft.media_url = Some(stored.url);
        draft.media_type = Some(stored.media_type);
        Ok(())
    }

    /// Editing → Saving → Viewing on success. On failure the session drops
    /// back to Editing with the draft retained so the user can retry.
    pub async fn save(&mut self) -> Result<(), AppError> {
        let draft = match &self.draft {
            Some(draft) if self.phase == EditPhase::Editing => draft.clone(),
            _ => return Err(AppError::validation("edit", "no edit in progress")),
        };
        self.phase = EditPhase::Saving;

        let id = draft.id.clone();
        match self
            .project_repo
            .update_project(&id, ProjectDraft::from(draft))
            .await
        {
            Ok(projects) => {
                if let Some(refreshed) = projects.into_iter().find(|p| p.id == id) {
                    self.record = refreshed;
                }
                self.draft = None;
                self.pending_technology.clear();
                self.phase = EditPhase::Viewing;
                Ok(())
            }
            Err(e) => {
                self.phase = EditPhase::Editing;
                Err(e)
            }
        }
    }
}
