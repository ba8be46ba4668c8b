//! Action handlers
//!
//! One module per entity. Every handler composes the same pipeline:
//! validate the raw field bag, derive final values (cents, hash, server
//! date), issue exactly one persistence statement, invalidate the affected
//! listing view, then redirect or re-render. Validation and persistence
//! failures are always converted to a `FormState`; they never propagate
//! past the handler boundary. The single exception is `authenticate`,
//! which re-raises errors outside the verifier's recognized family.

pub mod charging;
pub mod invoice;
pub mod user;

pub use charging::ChargingActions;
pub use invoice::InvoiceActions;
pub use user::UserActions;
