use validator::Validate;

use dormhub_core::ApiError;
use dormhub_models::{CreateDormDto, CreateRoomDto, CreateStudentDto, DormId, SchoolId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DormForm {
    pub name: String,
}

impl DormForm {
    pub fn to_request(&self, school_id: &SchoolId) -> Result<CreateDormDto, ApiError> {
        let dto = CreateDormDto {
            name: self.name.trim().to_string(),
            school_id: school_id.clone(),
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn clear(&mut self) {
        self.name.clear();
    }
}

/// Room creation fields. `dorm_id` is picked from the dashboard's dorm list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    pub dorm_id: Option<DormId>,
    pub number: String,
    pub capacity: String,
}

impl RoomForm {
    pub fn to_request(&self) -> Result<CreateRoomDto, ApiError> {
        let dorm_id = self
            .dorm_id
            .clone()
            .filter(|id| !id.is_blank())
            .ok_or_else(|| ApiError::precondition("Please select a dorm first"))?;
        let capacity = self
            .capacity
            .trim()
            .parse::<u32>()
            .map_err(|_| ApiError::precondition("Capacity must be a number"))?;

        let dto = CreateRoomDto {
            dorm_id,
            number: self.number.trim().to_string(),
            capacity,
        };
        dto.validate()?;
        Ok(dto)
    }

    /// Clears number and capacity. The selected dorm stays.
    pub fn clear(&mut self) {
        self.number.clear();
        self.capacity.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub email: String,
    pub password: String,
}

impl StudentForm {
    pub fn to_request(&self, school_id: &SchoolId) -> Result<CreateStudentDto, ApiError> {
        let dto = CreateStudentDto {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            school_id: school_id.clone(),
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}
