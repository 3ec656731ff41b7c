//! "Submit your project" form wizard.
//!
//! Purely client-side: the wizard validates and collects a draft, it never
//! sends anything anywhere. Steps run in a fixed order and each must validate
//! before the next opens.

use std::fmt;

use morph_types::{Category, Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const MAX_NAME_LEN: usize = 64;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// How long the "Submitted!" confirmation stays up before the modal closes.
pub const CONFIRMATION_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Basics,
    Links,
    Details,
    Review,
    Submitted,
}

impl WizardStep {
    /// Steps the user fills in or confirms, in order.
    pub const INPUT_STEPS: [WizardStep; 4] = [
        WizardStep::Basics,
        WizardStep::Links,
        WizardStep::Details,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::Basics => 0,
            WizardStep::Links => 1,
            WizardStep::Details => 2,
            WizardStep::Review => 3,
            WizardStep::Submitted => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Basics => "Project",
            WizardStep::Links => "Links",
            WizardStep::Details => "Details",
            WizardStep::Review => "Review",
            WizardStep::Submitted => "Submitted",
        }
    }

    fn next(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::Links,
            WizardStep::Links => WizardStep::Details,
            WizardStep::Details => WizardStep::Review,
            WizardStep::Review | WizardStep::Submitted => WizardStep::Submitted,
        }
    }

    fn prev(self) -> Self {
        match self {
            WizardStep::Basics | WizardStep::Links => WizardStep::Basics,
            WizardStep::Details => WizardStep::Links,
            WizardStep::Review => WizardStep::Details,
            WizardStep::Submitted => WizardStep::Submitted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Category,
    TwitterUrl,
    Website,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Project Name",
            Field::Category => "Category",
            Field::TwitterUrl => "Twitter / X Link",
            Field::Website => "Website",
            Field::Description => "Description",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{field} is not a valid link: {reason}")]
    InvalidUrl { field: Field, reason: String },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::TooLong { field, .. }
            | FieldError::TooShort { field, .. }
            | FieldError::InvalidUrl { field, .. } => *field,
        }
    }
}

/// One change typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Category(Option<Category>),
    TwitterUrl(String),
    Website(String),
    Description(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Name(_) => Field::Name,
            FieldEdit::Category(_) => Field::Category,
            FieldEdit::TwitterUrl(_) => Field::TwitterUrl,
            FieldEdit::Website(_) => Field::Website,
            FieldEdit::Description(_) => Field::Description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub category: Option<Category>,
    pub twitter_url: String,
    /// Optional.
    pub website: String,
    pub description: String,
}

impl SubmissionDraft {
    fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(v) => self.name = v,
            FieldEdit::Category(v) => self.category = v,
            FieldEdit::TwitterUrl(v) => self.twitter_url = v,
            FieldEdit::Website(v) => self.website = v,
            FieldEdit::Description(v) => self.description = v,
        }
    }

    /// Problems with the fields collected on `step`.
    pub fn validate_step(&self, step: WizardStep) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            WizardStep::Basics => {
                let name = self.name.trim();
                if name.is_empty() {
                    errors.push(FieldError::Required(Field::Name));
                } else if name.chars().count() > MAX_NAME_LEN {
                    errors.push(FieldError::TooLong {
                        field: Field::Name,
                        max: MAX_NAME_LEN,
                    });
                }
                if self.category.is_none() {
                    errors.push(FieldError::Required(Field::Category));
                }
            }
            WizardStep::Links => {
                if self.twitter_url.trim().is_empty() {
                    errors.push(FieldError::Required(Field::TwitterUrl));
                } else if let Err(e) = validate_link(Field::TwitterUrl, &self.twitter_url) {
                    errors.push(e);
                }
                if !self.website.trim().is_empty()
                    && let Err(e) = validate_link(Field::Website, &self.website)
                {
                    errors.push(e);
                }
            }
            WizardStep::Details => {
                let len = self.description.trim().chars().count();
                if len == 0 {
                    errors.push(FieldError::Required(Field::Description));
                } else if len < MIN_DESCRIPTION_LEN {
                    errors.push(FieldError::TooShort {
                        field: Field::Description,
                        min: MIN_DESCRIPTION_LEN,
                    });
                } else if len > MAX_DESCRIPTION_LEN {
                    errors.push(FieldError::TooLong {
                        field: Field::Description,
                        max: MAX_DESCRIPTION_LEN,
                    });
                }
            }
            WizardStep::Review => {
                for step in &WizardStep::INPUT_STEPS[..3] {
                    errors.extend(self.validate_step(*step));
                }
            }
            WizardStep::Submitted => {}
        }
        errors
    }

    /// Directory card preview of the draft. `None` until a category is picked.
    pub fn preview(&self) -> Option<Project> {
        let category = self.category?;
        let mut project = Project::new(self.name.trim(), category, self.description.trim())
            .status(ProjectStatus::Incubated);
        project.status_label = Some("Pending Review".to_string());
        Some(project)
    }
}

fn validate_link(field: Field, raw: &str) -> Result<Url, FieldError> {
    let invalid = |reason: String| FieldError::InvalidUrl { field, reason };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Multi-step submission form state.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionWizard {
    step: WizardStep,
    draft: SubmissionDraft,
    errors: Vec<FieldError>,
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Basics,
            draft: SubmissionDraft::default(),
            errors: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    /// Errors from the last failed `next`/`submit`, minus fields edited since.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    /// Fraction of input steps already passed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.step.index() as f64 / WizardStep::INPUT_STEPS.len() as f64
    }

    pub fn is_submitted(&self) -> bool {
        self.step == WizardStep::Submitted
    }

    /// Apply an edit. Ignored once submitted.
    pub fn update(&mut self, edit: FieldEdit) {
        if self.is_submitted() {
            return;
        }
        let field = edit.field();
        self.errors.retain(|e| e.field() != field);
        self.draft.apply(edit);
    }

    /// Validate the current step and move forward. `Review` only advances
    /// through [`submit`](Self::submit).
    pub fn next(&mut self) -> Result<WizardStep, Vec<FieldError>> {
        if matches!(self.step, WizardStep::Review | WizardStep::Submitted) {
            return Ok(self.step);
        }
        self.check(self.step)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.errors.clear();
        self.step = self.step.prev();
        self.step
    }

    /// Final submission from the review step. Revalidates the whole draft.
    ///
    /// From any other step nothing is submitted and the error list holds
    /// whatever that step still lacks, which may be nothing.
    pub fn submit(&mut self) -> Result<Project, Vec<FieldError>> {
        if self.step != WizardStep::Review {
            return Err(self.draft.validate_step(self.step));
        }
        self.check(WizardStep::Review)?;

        let project = self
            .draft
            .preview()
            .ok_or_else(|| vec![FieldError::Required(Field::Category)])?;
        self.step = WizardStep::Submitted;
        tracing::info!(project = %project.name, category = %project.category, "Project submitted for review");
        Ok(project)
    }

    /// Start over with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn check(&mut self, step: WizardStep) -> Result<(), Vec<FieldError>> {
        let errors = self.draft.validate_step(step);
        if errors.is_empty() {
            self.errors.clear();
            Ok(())
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionWizard {
        let mut wizard = SubmissionWizard::new();
        wizard.update(FieldEdit::Name("MorphPay".into()));
        wizard.update(FieldEdit::Category(Some(Category::Payment)));
        wizard.next().unwrap();
        wizard.update(FieldEdit::TwitterUrl("https://x.com/morphpay".into()));
        wizard.next().unwrap();
        wizard.update(FieldEdit::Description("Crypto cards for everyday spending.".into()));
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_progress_follows_steps() {
        let mut wizard = SubmissionWizard::new();
        assert_eq!(wizard.progress(), 0.0);
        wizard = filled();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.step_index(), 3);
        assert_eq!(wizard.progress(), 0.75);
        wizard.submit().unwrap();
        assert_eq!(wizard.progress(), 1.0);
    }

    #[test]
    fn test_basics_requires_name_and_category() {
        let mut wizard = SubmissionWizard::new();
        wizard.update(FieldEdit::Name("   ".into()));
        let errors = wizard.next().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Required(Field::Name),
                FieldError::Required(Field::Category)
            ]
        );
        assert_eq!(wizard.step(), WizardStep::Basics);
        assert_eq!(wizard.errors().len(), 2);
    }

    #[test]
    fn test_editing_clears_that_fields_error() {
        let mut wizard = SubmissionWizard::new();
        let _ = wizard.next();
        wizard.update(FieldEdit::Name("BitStore".into()));
        assert!(wizard.error_for(Field::Name).is_none());
        assert!(wizard.error_for(Field::Category).is_some());
    }

    #[test]
    fn test_links_validation() {
        let mut wizard = SubmissionWizard::new();
        wizard.update(FieldEdit::Name("Zoo".into()));
        wizard.update(FieldEdit::Category(Some(Category::Gaming)));
        wizard.next().unwrap();

        assert_eq!(
            wizard.next().unwrap_err(),
            vec![FieldError::Required(Field::TwitterUrl)]
        );

        wizard.update(FieldEdit::TwitterUrl("x.com/zoo".into()));
        assert!(matches!(
            wizard.next().unwrap_err()[0],
            FieldError::InvalidUrl { field: Field::TwitterUrl, .. }
        ));

        wizard.update(FieldEdit::TwitterUrl("ftp://x.com/zoo".into()));
        assert!(wizard.next().is_err());

        wizard.update(FieldEdit::TwitterUrl("https://x.com/zoo".into()));
        wizard.update(FieldEdit::Website("not a url".into()));
        assert_eq!(wizard.next().unwrap_err()[0].field(), Field::Website);

        wizard.update(FieldEdit::Website(String::new()));
        assert_eq!(wizard.next(), Ok(WizardStep::Details));
    }

    #[test]
    fn test_description_length_bounds() {
        let draft = SubmissionDraft {
            description: "short".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate_step(WizardStep::Details),
            vec![FieldError::TooShort {
                field: Field::Description,
                min: MIN_DESCRIPTION_LEN
            }]
        );

        let draft = SubmissionDraft {
            description: "x".repeat(MAX_DESCRIPTION_LEN + 1),
            ..Default::default()
        };
        assert_eq!(
            draft.validate_step(WizardStep::Details)[0].field(),
            Field::Description
        );
    }

    #[test]
    fn test_back_keeps_draft() {
        let mut wizard = filled();
        assert_eq!(wizard.back(), WizardStep::Details);
        assert_eq!(wizard.back(), WizardStep::Links);
        assert_eq!(wizard.back(), WizardStep::Basics);
        assert_eq!(wizard.back(), WizardStep::Basics);
        assert_eq!(wizard.draft().name, "MorphPay");
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut wizard = SubmissionWizard::new();
        assert!(wizard.submit().is_err());
        assert_eq!(wizard.step(), WizardStep::Basics);

        let mut wizard = filled();
        let project = wizard.submit().unwrap();
        assert_eq!(project.name, "MorphPay");
        assert_eq!(project.category, Category::Payment);
        assert_eq!(project.status_text(), "Pending Review");
        assert!(wizard.is_submitted());

        // Frozen after submission
        wizard.update(FieldEdit::Name("Other".into()));
        assert_eq!(wizard.draft().name, "MorphPay");
        assert_eq!(wizard.next(), Ok(WizardStep::Submitted));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut wizard = filled();
        wizard.submit().unwrap();
        wizard.reset();
        assert_eq!(wizard, SubmissionWizard::new());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required(Field::TwitterUrl).to_string(),
            "Twitter / X Link is required"
        );
    }
}
