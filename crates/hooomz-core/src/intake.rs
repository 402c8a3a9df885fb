//! Intake wizard sessions
//!
//! The wizard collects customer, address, and room selections across steps;
//! a session only submits once every required step is filled. Validation
//! names the first missing step so the UI can jump straight to it.

use hooomz_catalog::{BuildTier, RoomKind};
use hooomz_estimate::{Estimate, EstimateInput, RoomSelection};
use hooomz_domain::{Contact, Project};
use serde::{Deserialize, Serialize};

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    /// Customer name and contact info
    Customer,
    /// Job site address
    Address,
    /// At least one room selected
    Rooms,
}

/// Customer info collected by the first step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Customer name
    pub name: String,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
}

/// An in-progress intake wizard session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeSession {
    /// Customer step
    pub customer: Option<CustomerInfo>,
    /// Address step
    pub address: Option<String>,
    /// Selected rooms with tiers
    pub rooms: Vec<RoomSelection>,
    /// Free-text notes from the wizard
    pub notes: Option<String>,
}

impl IntakeSession {
    /// Start an empty session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the customer step
    #[must_use]
    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer = Some(CustomerInfo {
            name: name.into(),
            email: None,
            phone: None,
        });
        self
    }

    /// Add an email to the customer step
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        if let Some(customer) = &mut self.customer {
            customer.email = Some(email.into());
        }
        self
    }

    /// Add a phone number to the customer step
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        if let Some(customer) = &mut self.customer {
            customer.phone = Some(phone.into());
        }
        self
    }

    /// Fill the address step
    #[inline]
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Add a room selection
    #[inline]
    #[must_use]
    pub fn with_room(mut self, kind: RoomKind, tier: BuildTier) -> Self {
        self.rooms.push(RoomSelection { kind, tier });
        self
    }

    /// Add wizard notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// First missing required step, if any
    #[must_use]
    pub fn missing_step(&self) -> Option<IntakeStep> {
        if self
            .customer
            .as_ref()
            .map_or(true, |c| c.name.trim().is_empty())
        {
            return Some(IntakeStep::Customer);
        }
        if self.address.as_ref().map_or(true, |a| a.trim().is_empty()) {
            return Some(IntakeStep::Address);
        }
        if self.rooms.is_empty() {
            return Some(IntakeStep::Rooms);
        }
        None
    }

    /// Whether the session is ready to submit
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_step().is_none()
    }

    /// The estimate input for the selected rooms
    #[inline]
    #[must_use]
    pub fn estimate_input(&self) -> EstimateInput {
        EstimateInput {
            rooms: self.rooms.clone(),
        }
    }
}

/// What a submitted intake produces
#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    /// The created project, in Intake status
    pub project: Project,
    /// The created customer contact
    pub contact: Contact,
    /// The computed estimate
    pub estimate: Estimate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_misses_customer_first() {
        assert_eq!(IntakeSession::new().missing_step(), Some(IntakeStep::Customer));
    }

    #[test]
    fn steps_report_in_order() {
        let session = IntakeSession::new().with_customer("Dana Miller");
        assert_eq!(session.missing_step(), Some(IntakeStep::Address));

        let session = session.with_address("12 Oak St");
        assert_eq!(session.missing_step(), Some(IntakeStep::Rooms));

        let session = session.with_room(RoomKind::Kitchen, BuildTier::Better);
        assert!(session.is_complete());
    }

    #[test]
    fn blank_customer_name_does_not_count() {
        let session = IntakeSession::new().with_customer("   ");
        assert_eq!(session.missing_step(), Some(IntakeStep::Customer));
    }

    #[test]
    fn email_requires_customer_step_first() {
        // with_email before with_customer is a no-op, not a panic.
        let session = IntakeSession::new().with_email("dana@example.com");
        assert!(session.customer.is_none());
    }

    #[test]
    fn estimate_input_carries_rooms() {
        let session = IntakeSession::new()
            .with_room(RoomKind::Kitchen, BuildTier::Good)
            .with_room(RoomKind::FullBath, BuildTier::Best);
        assert_eq!(session.estimate_input().rooms.len(), 2);
    }
}
