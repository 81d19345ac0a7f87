use tracing::{debug, info, instrument};

use dormhub_client::ApiClient;
use dormhub_core::ApiError;
use dormhub_models::{DormId, MessageResponse, Room, RoomId};

pub const FETCH_ROOMS_FAILED: &str = "Failed to fetch rooms";
pub const ASSIGN_FAILED: &str = "Failed to assign room";
pub const ASSIGN_SUCCEEDED: &str = "Successfully assigned to room";
pub const UNASSIGN_FAILED: &str = "Failed to unassign room";
pub const UNASSIGN_SUCCEEDED: &str = "Successfully unassigned from room";

/// Whether the assign control for `room` is enabled.
///
/// Only a UX guard: the count can be stale by the time the request lands,
/// and the server alone decides whether the room still has space.
pub fn can_assign(room: &Room, in_flight: bool) -> bool {
    room.has_capacity() && !in_flight
}

pub struct RoomService;

impl RoomService {
    #[instrument(skip(client), fields(dorm_id = %dorm_id))]
    pub async fn list(client: &ApiClient, dorm_id: &DormId) -> Result<Vec<Room>, ApiError> {
        let rooms = client.list_rooms(dorm_id).await?;
        debug!(count = rooms.len(), "Fetched rooms");
        Ok(rooms)
    }

    #[instrument(skip(client), fields(room_id = %room_id))]
    pub async fn assign(client: &ApiClient, room_id: &RoomId) -> Result<MessageResponse, ApiError> {
        let response = client.assign_room(room_id).await?;
        info!(message = ?response.message, "Room assigned");
        Ok(response)
    }

    #[instrument(skip(client))]
    pub async fn unassign(client: &ApiClient) -> Result<MessageResponse, ApiError> {
        let response = client.unassign_room().await?;
        info!(message = ?response.message, "Room released");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dormhub_models::Occupant;

    fn room(capacity: u32, occupants: usize) -> Room {
        Room {
            id: RoomId::new("r1"),
            dorm_id: None,
            number: "101".into(),
            capacity,
            current_students: (0..occupants)
                .map(|i| Occupant {
                    id: None,
                    name: format!("student{}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_can_assign_iff_free_slot_and_idle() {
        for capacity in 0..4 {
            for occupants in 0..6 {
                for in_flight in [false, true] {
                    let expected = occupants < capacity as usize && !in_flight;
                    assert_eq!(
                        can_assign(&room(capacity, occupants), in_flight),
                        expected,
                        "capacity={capacity} occupants={occupants} in_flight={in_flight}"
                    );
                }
            }
        }
    }
}
