//! Notice workflow: invoice-age gate, combined late-fee / RVG assessment,
//! and the demand figures printed on the reminder.
//!
//! Text extraction, AI field extraction and prose generation happen
//! outside this crate. They hand over an [`InvoiceSnapshot`] and consume
//! an [`Assessment`].
//!
//! [`InvoiceSnapshot`]: crate::core::InvoiceSnapshot

mod assessment;
mod demands;
mod gate;

pub use assessment::{Assessment, assess};
pub use demands::Demands;
pub use gate::check_invoice_age;
