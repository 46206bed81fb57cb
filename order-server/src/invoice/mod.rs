//! Invoice Module
//!
//! - **template**: deterministic HTML invoice rendering (pure)
//! - **mailer**: dispatch via a Resend-compatible email API

pub mod mailer;
pub mod template;

pub use mailer::InvoiceMailer;
pub use template::{invoice_number, invoice_subject, render_html};
