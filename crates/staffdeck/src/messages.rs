//! Message taxonomy for staffdeck.
//!
//! All application events are typed enums wrapped into `minitea` messages,
//! keeping `Any` downcasts to a handful of well-known types.

use minitea::Message;

use crate::employee::{Employee, EmployeeDraft};

/// Results of roster service calls, posted back by commands.
#[derive(Debug, Clone)]
pub enum RosterMsg {
    /// A fetch completed; records replace the roster wholesale.
    Loaded(Vec<Employee>),
    /// A fetch failed; the view keeps its last-known-good state.
    LoadFailed(String),
    /// The service rejected our token. Terminal for the session.
    NotAuthorized,
    /// A delete completed. `removed` is false when the id was already gone.
    Deleted {
        /// Id that was deleted.
        id: i64,
        /// Whether the service actually removed a record.
        removed: bool,
    },
    /// A delete failed.
    DeleteFailed(String),
    /// A create or update completed.
    Saved {
        /// Name of the employee that was saved.
        name: String,
        /// True for create, false for update.
        created: bool,
    },
    /// A create or update failed.
    SaveFailed(String),
}

impl RosterMsg {
    /// Wrap into a minitea [`Message`].
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

/// Messages emitted by the employee form modal.
#[derive(Debug, Clone)]
pub enum FormMsg {
    /// The form was submitted with a valid draft.
    Submitted {
        /// Target id for an edit; `None` means create.
        id: Option<i64>,
        /// The validated payload.
        draft: EmployeeDraft,
    },
    /// The form was dismissed without saving.
    Cancelled,
}

impl FormMsg {
    /// Wrap into a minitea [`Message`].
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_msg_round_trips_through_message() {
        let msg = RosterMsg::Deleted {
            id: 3,
            removed: true,
        }
        .into_message();
        match msg.downcast::<RosterMsg>() {
            Some(RosterMsg::Deleted { id, removed }) => {
                assert_eq!(id, 3);
                assert!(removed);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn form_msg_round_trips_through_message() {
        let msg = FormMsg::Cancelled.into_message();
        assert!(matches!(
            msg.downcast::<FormMsg>(),
            Some(FormMsg::Cancelled)
        ));
    }
}
