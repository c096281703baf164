pub mod models;
pub mod draft;
pub mod validator;
pub mod session;
pub mod manager;

pub use models::{BookingConfirmation, PassengerDetails, PaymentDetails};
pub use draft::{AddonToggle, BookingDraft};
pub use validator::{BookingError, BookingValidator};
pub use session::{BookingSession, SessionError, WizardStep};
pub use manager::SessionManager;

#[cfg(test)]
mod test_utils;
