//! # Civic: shared domain logic for Civic Justice
//!
//! Everything in this crate is pure and target-independent: it compiles for the
//! browser (WASM) and for the server alike, and performs no I/O. The `gateway`
//! crate drives the network with these types, the `api` crate moves them across
//! the server/client boundary, and the `ui` crate renders them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`prompt`] | Per-feature system prompt templates and the [`ChatPrompt`] pair they produce |
//! | [`sanitize`] | Removal of markdown decoration from completion text |
//! | [`records`] | Backend row types, the [`Record`] trait, and client-side validation |
//! | [`media`] | `data:` URLs for uploaded photos and documents |
//! | [`lens`] | Session-only Civic Lens reports and their form validation |
//! | [`catalog`] | Fixed option lists shown by the forms (categories, authorities, helplines) |
//! | [`tab`] | The seven navigable views and which of them need external services |
//! | [`status`] | [`ConfigStatus`], the startup configuration check result |
//! | [`reply`] | [`GuidanceReply`] and the text a panel displays for a settled request |

pub mod catalog;
pub mod lens;
pub mod media;
pub mod prompt;
pub mod records;
pub mod reply;
pub mod sanitize;
pub mod status;
pub mod tab;

pub use catalog::Choice;
pub use prompt::ChatPrompt;
pub use records::{
    AwarenessQuery, CivicIssue, ComplaintGuidance, IssueReport, LegalQuery, Official,
    OfficialRegistration, Rating, Record, RecordError, SystemLog, UserFeedback,
};
pub use reply::{panel_text, GuidanceReply, FALLBACK_MESSAGE};
pub use sanitize::strip_markdown;
pub use status::{ConfigStatus, REQUIRED_KEYS};
pub use tab::Tab;
