//! Assessment report generation.
//!
//! Formats scored Vanderbilt submissions for the recipients downstream of
//! the intake pipeline:
//!
//! - **Assessment XML**: structured document with scores, interpretation,
//!   and all 18 item ratings
//! - **Text summary**: human-readable results with the scoring criteria
//!   and the screening-tool disclaimer
//! - **Notification**: subject/body/attachments for a delivery
//!   collaborator

mod assessment_xml;
mod common;
mod notification;
mod summary;

pub use assessment_xml::write_assessment_xml;
pub use common::{display_date, file_date, parse_date};
pub use notification::{NotificationMessage, notification_message, report_basename};
pub use summary::render_summary;
