mod home;
pub use home::HomeView;

mod legal;
pub use legal::LegalGuidanceView;

mod civic_reporting;
pub use civic_reporting::CivicReportingView;

mod complaint;
pub use complaint::ComplaintGuidanceView;

mod awareness;
pub use awareness::AwarenessRightsView;

mod civic_lens;
pub use civic_lens::CivicLensView;

mod official_connect;
pub use official_connect::OfficialConnect;

mod about;
pub use about::AboutView;
