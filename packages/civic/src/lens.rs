//! Civic Lens reports. They live for the browser session only and are never
//! written to the backend.

use crate::catalog::{label_of, LENS_CATEGORIES};
use crate::media;
use crate::records::RecordError;

/// Authority value that switches the form to free text.
pub const OTHER_DEPARTMENT: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct LensPhoto {
    pub name: String,
    /// Ready to use as an `img` source.
    pub data_url: String,
}

impl LensPhoto {
    pub fn from_upload(name: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            data_url: media::data_url(name, bytes),
        }
    }
}

/// The report form as currently filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensDraft {
    pub photo: Option<LensPhoto>,
    pub category: String,
    pub location: String,
    pub description: String,
    pub authority: String,
    pub custom_authority: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LensReport {
    pub id: usize,
    pub photo: LensPhoto,
    pub title: &'static str,
    pub description: String,
    pub location: String,
    pub category: String,
    pub authority: String,
}

impl LensDraft {
    /// Checks the photo and every required field, in form order.
    pub fn into_report(self, id: usize) -> Result<LensReport, RecordError> {
        let photo = self.photo.ok_or(RecordError::MissingField("photo"))?;
        let location = required("location", &self.location)?;
        let description = required("description", &self.description)?;
        let authority = if self.authority == OTHER_DEPARTMENT {
            required("authority", &self.custom_authority)?
        } else {
            required("authority", &self.authority)?
        };

        Ok(LensReport {
            id,
            photo,
            title: label_of(LENS_CATEGORIES, &self.category).unwrap_or("Civic Issue"),
            description,
            location,
            category: self.category,
            authority,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, RecordError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RecordError::MissingField(field));
    }
    Ok(value.to_string())
}
