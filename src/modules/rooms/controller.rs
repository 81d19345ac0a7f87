use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use dormhub_client::ApiClient;
use dormhub_core::{ApiError, RequestState};
use dormhub_models::{DormId, Room, RoomId};

use crate::notice::{Notice, Outcome};

use super::service::{
    ASSIGN_FAILED, ASSIGN_SUCCEEDED, FETCH_ROOMS_FAILED, RoomService, UNASSIGN_FAILED,
    UNASSIGN_SUCCEEDED, can_assign,
};

/// Room list for one dorm, with the per-room assign action.
///
/// The displayed rooms are always the last list the server returned; an
/// assignment never edits them locally.
#[derive(Debug)]
pub struct RoomsScreen {
    dorm_id: DormId,
    dorm_name: String,
    rooms: Vec<Room>,
    loaded: bool,
    fetch: RequestState,
    assignment: RequestState,
    scope: CancellationToken,
}

impl RoomsScreen {
    pub fn new(dorm_id: DormId, dorm_name: impl Into<String>, scope: CancellationToken) -> Self {
        Self {
            dorm_id,
            dorm_name: dorm_name.into(),
            rooms: Vec::new(),
            loaded: false,
            fetch: RequestState::new(),
            assignment: RequestState::new(),
            scope,
        }
    }

    pub fn dorm_name(&self) -> &str {
        &self.dorm_name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// True until a room list has been fetched since mount.
    pub fn needs_refresh(&self) -> bool {
        !self.loaded
    }

    pub fn is_assigning(&self) -> bool {
        self.assignment.is_pending()
    }

    /// Handle on the assignment in-flight flag.
    pub fn assignment_state(&self) -> RequestState {
        self.assignment.clone()
    }

    pub fn can_assign(&self, room: &Room) -> bool {
        can_assign(room, self.is_assigning())
    }

    pub async fn refresh(&mut self, client: &ApiClient) -> Outcome {
        let dorm_id = self.dorm_id.clone();
        match self
            .fetch
            .run(&self.scope, RoomService::list(client, &dorm_id))
            .await
        {
            Ok(rooms) => {
                self.apply(rooms);
                Outcome::none()
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(dorm_id = %dorm_id, error = %err, "Failed to fetch rooms");
                Outcome::notice(Notice::error(err.user_message(FETCH_ROOMS_FAILED)))
            }
        }
    }

    /// Assigns the logged-in student to the room at `index`.
    pub async fn assign_at(&mut self, client: &ApiClient, index: usize) -> Outcome {
        match self.rooms.get(index).map(|room| room.id.clone()) {
            Some(room_id) => self.assign(client, &room_id).await,
            None => Outcome::none(),
        }
    }

    /// Assigns the logged-in student to `room_id`, then re-fetches the list.
    ///
    /// Does nothing, and sends nothing, while the control is disabled. The
    /// in-flight flag stays set until the re-fetch has finished.
    pub async fn assign(&mut self, client: &ApiClient, room_id: &RoomId) -> Outcome {
        let Some(room) = self.rooms.iter().find(|room| &room.id == room_id) else {
            warn!(room_id = %room_id, "Assign requested for a room not on screen");
            return Outcome::none();
        };
        if !self.can_assign(room) {
            debug!(
                room = %room.number,
                occupancy = room.occupancy(),
                capacity = room.capacity,
                assigning = self.is_assigning(),
                "Assign control disabled"
            );
            return Outcome::none();
        }

        let dorm_id = self.dorm_id.clone();
        let result = self
            .assignment
            .run(&self.scope, async {
                let response = RoomService::assign(client, room_id).await?;
                let rooms = RoomService::list(client, &dorm_id).await;
                Ok::<_, ApiError>((response, rooms))
            })
            .await;

        match result {
            Ok((response, rooms)) => {
                let mut outcome = self.apply_refetch(&dorm_id, rooms);
                outcome.push(Notice::info(
                    response
                        .message
                        .unwrap_or_else(|| ASSIGN_SUCCEEDED.to_string()),
                ));
                outcome
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(room_id = %room_id, error = %err, "Failed to assign room");
                Outcome::notice(Notice::error(err.user_message(ASSIGN_FAILED)))
            }
        }
    }

    /// Releases the student's current room, then re-fetches the list.
    pub async fn unassign(&mut self, client: &ApiClient) -> Outcome {
        if self.is_assigning() {
            debug!("Unassign ignored: an assignment is in progress");
            return Outcome::none();
        }

        let dorm_id = self.dorm_id.clone();
        let result = self
            .assignment
            .run(&self.scope, async {
                let response = RoomService::unassign(client).await?;
                let rooms = RoomService::list(client, &dorm_id).await;
                Ok::<_, ApiError>((response, rooms))
            })
            .await;

        match result {
            Ok((response, rooms)) => {
                let mut outcome = self.apply_refetch(&dorm_id, rooms);
                outcome.push(Notice::info(
                    response
                        .message
                        .unwrap_or_else(|| UNASSIGN_SUCCEEDED.to_string()),
                ));
                outcome
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to unassign room");
                Outcome::notice(Notice::error(err.user_message(UNASSIGN_FAILED)))
            }
        }
    }

    fn apply_refetch(&mut self, dorm_id: &DormId, rooms: Result<Vec<Room>, ApiError>) -> Outcome {
        match rooms {
            Ok(rooms) => {
                self.apply(rooms);
                Outcome::none()
            }
            Err(err) => {
                error!(dorm_id = %dorm_id, error = %err, "Failed to re-fetch rooms");
                Outcome::notice(Notice::error(err.user_message(FETCH_ROOMS_FAILED)))
            }
        }
    }

    fn apply(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        self.loaded = true;
    }
}
