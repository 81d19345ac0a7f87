//! Typed wrappers for each endpoint the client consumes.
//!
//! | Endpoint | Method |
//! |---|---|
//! | `/login` | POST |
//! | `/admin/login` | POST |
//! | `/user` | GET |
//! | `/dorms` | GET |
//! | `/dorms/{dormId}/rooms` | GET |
//! | `/rooms/{roomId}/assign` | POST |
//! | `/rooms/unassign` | POST |
//! | `/admin/dorms` | POST |
//! | `/admin/rooms` | POST |
//! | `/admin/students` | POST |

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use dormhub_core::ApiError;
use dormhub_models::{
    AdminLoginRequest, AdminLoginResponse, CreateDormDto, CreateRoomDto, CreateStudentDto, Dorm,
    DormId, LoginRequest, MessageResponse, Room, RoomId, Student, User,
};

use crate::client::ApiClient;

pub mod paths {
    use dormhub_models::{DormId, RoomId};

    pub const LOGIN: &str = "/login";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const CURRENT_USER: &str = "/user";
    pub const DORMS: &str = "/dorms";
    pub const UNASSIGN: &str = "/rooms/unassign";
    pub const ADMIN_DORMS: &str = "/admin/dorms";
    pub const ADMIN_ROOMS: &str = "/admin/rooms";
    pub const ADMIN_STUDENTS: &str = "/admin/students";

    pub fn dorm_rooms(dorm_id: &DormId) -> String {
        format!("/dorms/{}/rooms", dorm_id)
    }

    pub fn assign_room(room_id: &RoomId) -> String {
        format!("/rooms/{}/assign", room_id)
    }
}

impl ApiClient {
    /// Student login. The session cookie set by the server is kept by the
    /// client's [`Session`](crate::Session).
    ///
    /// A 2xx status is what makes the login successful. The body is only
    /// descriptive, so one that does not look like a [`User`] yields an
    /// empty user rather than an error.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let body: Value = self.post(paths::LOGIN, request).await?;
        if body.is_null() {
            return Ok(User::default());
        }
        Ok(serde_json::from_value(body).unwrap_or_else(|e| {
            warn!(error = %e, "Unrecognised login body");
            User::default()
        }))
    }

    pub async fn admin_login(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<AdminLoginResponse, ApiError> {
        self.post(paths::ADMIN_LOGIN, request).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(paths::CURRENT_USER).await
    }

    pub async fn list_dorms(&self) -> Result<Vec<Dorm>, ApiError> {
        self.get(paths::DORMS).await
    }

    pub async fn list_rooms(&self, dorm_id: &DormId) -> Result<Vec<Room>, ApiError> {
        if dorm_id.is_blank() {
            return Err(ApiError::precondition("No dorm selected"));
        }
        self.get(&paths::dorm_rooms(dorm_id)).await
    }

    /// Assigns the logged-in student to `room_id`.
    pub async fn assign_room(&self, room_id: &RoomId) -> Result<MessageResponse, ApiError> {
        if room_id.is_blank() {
            return Err(ApiError::precondition("No room selected"));
        }
        self.post_empty::<Option<MessageResponse>>(&paths::assign_room(room_id))
            .await
            .map(Option::unwrap_or_default)
    }

    /// Releases whatever room the logged-in student occupies.
    pub async fn unassign_room(&self) -> Result<MessageResponse, ApiError> {
        self.post_empty::<Option<MessageResponse>>(paths::UNASSIGN)
            .await
            .map(Option::unwrap_or_default)
    }

    pub async fn create_dorm(&self, dto: &CreateDormDto) -> Result<Option<Dorm>, ApiError> {
        self.create(paths::ADMIN_DORMS, dto).await
    }

    pub async fn create_room(&self, dto: &CreateRoomDto) -> Result<Option<Room>, ApiError> {
        self.create(paths::ADMIN_ROOMS, dto).await
    }

    pub async fn create_student(
        &self,
        dto: &CreateStudentDto,
    ) -> Result<Option<Student>, ApiError> {
        self.create(paths::ADMIN_STUDENTS, dto).await
    }

    /// Admin creates only need a success status. The created entity is
    /// returned when the body looks like one.
    async fn create<T, B>(&self, path: &str, dto: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body: Value = self.post(path, dto).await?;
        Ok(serde_json::from_value(body).ok())
    }
}
