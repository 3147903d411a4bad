//! Contact form model
//!
//! The consultation form collects a name, email, phone and project type.
//! Submission never navigates and never touches the network; if no
//! [`InquiryHandler`] is wired the submit is simply absorbed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Project type options, in the order the select lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    BoutiqueOffice,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::BoutiqueOffice,
        ProjectType::Other,
    ];

    /// Option label as displayed in the select
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::BoutiqueOffice => "Boutique Office",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| SiteError::UnknownProjectType(s.to_string()))
    }
}

/// Snapshot of the form handed to an external collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: ProjectType,
}

/// External form-handling collaborator (e.g. a hosted form endpoint).
///
/// Nothing in this crate implements it; the site ships unwired.
pub trait InquiryHandler {
    fn handle(&self, inquiry: Inquiry);
}

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Default submission suppressed, nothing else happened
    Suppressed,
    /// Snapshot handed to the wired handler
    Handed,
}

/// Field values of the consultation form.
///
/// No validation is performed and submitting never clears the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: ProjectType,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_project_type(&mut self, value: ProjectType) {
        self.project_type = value;
    }

    /// Set the project type from a select option label.
    ///
    /// Unknown labels leave the current selection unchanged.
    pub fn select_project_type(&mut self, label: &str) -> Result<(), SiteError> {
        self.project_type = label.parse()?;
        Ok(())
    }

    pub fn inquiry(&self) -> Inquiry {
        Inquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            project_type: self.project_type,
        }
    }

    /// Handle a submit of the form.
    pub fn submit(&self, handler: Option<&dyn InquiryHandler>) -> SubmitOutcome {
        match handler {
            Some(handler) => {
                tracing::debug!(project_type = %self.project_type, "Inquiry handed to handler");
                handler.handle(self.inquiry());
                SubmitOutcome::Handed
            }
            None => {
                tracing::debug!("Contact form submit suppressed, no handler wired");
                SubmitOutcome::Suppressed
            }
        }
    }
}
