use tracing::{debug, info, instrument};

use dormhub_client::ApiClient;
use dormhub_core::ApiError;
use dormhub_models::{CreateDormDto, CreateRoomDto, CreateStudentDto, Dorm};

pub const FETCH_DORMS_FAILED: &str = "Failed to fetch dorms";
pub const CREATE_DORM_FAILED: &str = "Failed to create dorm";
pub const CREATE_ROOM_FAILED: &str = "Failed to create room";
pub const CREATE_STUDENT_FAILED: &str = "Failed to create student";
pub const DORM_CREATED: &str = "Dorm created successfully";
pub const ROOM_CREATED: &str = "Room created successfully";
pub const STUDENT_CREATED: &str = "Student created successfully";

pub struct AdminService;

impl AdminService {
    #[instrument(skip(client))]
    pub async fn list_dorms(client: &ApiClient) -> Result<Vec<Dorm>, ApiError> {
        let dorms = client.list_dorms().await?;
        debug!(count = dorms.len(), "Fetched dorms for dashboard");
        Ok(dorms)
    }

    #[instrument(skip(client, dto), fields(name = %dto.name, school_id = %dto.school_id))]
    pub async fn create_dorm(client: &ApiClient, dto: &CreateDormDto) -> Result<(), ApiError> {
        let created = client.create_dorm(dto).await?;
        info!(dorm_id = ?created.map(|d| d.id), "Dorm created");
        Ok(())
    }

    #[instrument(skip(client, dto), fields(dorm_id = %dto.dorm_id, number = %dto.number))]
    pub async fn create_room(client: &ApiClient, dto: &CreateRoomDto) -> Result<(), ApiError> {
        let created = client.create_room(dto).await?;
        info!(room_id = ?created.map(|r| r.id), capacity = dto.capacity, "Room created");
        Ok(())
    }

    #[instrument(skip(client, dto), fields(email = %dto.email, school_id = %dto.school_id))]
    pub async fn create_student(
        client: &ApiClient,
        dto: &CreateStudentDto,
    ) -> Result<(), ApiError> {
        let created = client.create_student(dto).await?;
        info!(user_id = ?created.and_then(|s| s.id), "Student created");
        Ok(())
    }
}
