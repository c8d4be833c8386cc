//! Conversion logic from domain entities to DTOs.

use chatboard_shared::time::timestamp_to_rfc3339;

use crate::domain::{BoardSummary, Message};
use crate::infrastructure::dto::http as dto;

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            system: model.is_system(),
            author: model.author,
            text: model.text,
            timestamp: timestamp_to_rfc3339(model.timestamp.value()),
        }
    }
}

impl From<BoardSummary> for dto::BoardSummaryDto {
    fn from(model: BoardSummary) -> Self {
        Self {
            active_users: model.active_users,
            message_count: model.message_count,
        }
    }
}
