use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use dormhub_client::ApiClient;
use dormhub_core::{ApiError, RequestState};
use dormhub_models::{Dorm, SchoolId};

use crate::notice::{Notice, Outcome};

use super::model::{DormForm, RoomForm, StudentForm};
use super::service::{
    AdminService, CREATE_DORM_FAILED, CREATE_ROOM_FAILED, CREATE_STUDENT_FAILED, DORM_CREATED,
    FETCH_DORMS_FAILED, ROOM_CREATED, STUDENT_CREATED,
};

/// Administrator dashboard for one school.
///
/// The three create forms are independent: each has its own fields and its
/// own in-flight flag.
#[derive(Debug)]
pub struct AdminDashboard {
    school_id: SchoolId,
    school_name: String,
    dorms: Vec<Dorm>,
    pub dorm_form: DormForm,
    pub room_form: RoomForm,
    pub student_form: StudentForm,
    fetch: RequestState,
    dorm_request: RequestState,
    room_request: RequestState,
    student_request: RequestState,
    scope: CancellationToken,
}

impl AdminDashboard {
    pub fn new(
        school_id: SchoolId,
        school_name: impl Into<String>,
        scope: CancellationToken,
    ) -> Self {
        Self {
            school_id,
            school_name: school_name.into(),
            dorms: Vec::new(),
            dorm_form: DormForm::default(),
            room_form: RoomForm::default(),
            student_form: StudentForm::default(),
            fetch: RequestState::new(),
            dorm_request: RequestState::new(),
            room_request: RequestState::new(),
            student_request: RequestState::new(),
            scope,
        }
    }

    pub fn school_id(&self) -> &SchoolId {
        &self.school_id
    }

    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    /// Dorms offered by the room form's dorm picker.
    pub fn dorms(&self) -> &[Dorm] {
        &self.dorms
    }

    pub fn dorm_request(&self) -> &RequestState {
        &self.dorm_request
    }

    pub fn room_request(&self) -> &RequestState {
        &self.room_request
    }

    pub fn student_request(&self) -> &RequestState {
        &self.student_request
    }

    pub async fn load(&mut self, client: &ApiClient) -> Outcome {
        match self
            .fetch
            .run(&self.scope, AdminService::list_dorms(client))
            .await
        {
            Ok(dorms) => {
                self.dorms = dorms;
                Outcome::none()
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to fetch dorms");
                Outcome::notice(Notice::error(err.user_message(FETCH_DORMS_FAILED)))
            }
        }
    }

    /// Picks the dorm at `index` for the room form.
    pub fn select_dorm(&mut self, index: usize) -> Option<&Dorm> {
        let dorm = self.dorms.get(index)?;
        self.room_form.dorm_id = Some(dorm.id.clone());
        Some(dorm)
    }

    /// Creates a dorm in this school, then re-fetches the dorm list so the
    /// new dorm can be picked for a room.
    pub async fn create_dorm(&mut self, client: &ApiClient) -> Outcome {
        let dto = match self.dorm_form.to_request(&self.school_id) {
            Ok(dto) => dto,
            Err(err) => return refused(err, CREATE_DORM_FAILED),
        };

        match self
            .dorm_request
            .run(&self.scope, AdminService::create_dorm(client, &dto))
            .await
        {
            Ok(()) => {
                self.dorm_form.clear();
                let mut outcome = Outcome::notice(Notice::info(DORM_CREATED));
                outcome.extend(self.load(client).await);
                outcome
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to create dorm");
                Outcome::notice(Notice::error(err.user_message(CREATE_DORM_FAILED)))
            }
        }
    }

    pub async fn create_room(&mut self, client: &ApiClient) -> Outcome {
        let dto = match self.room_form.to_request() {
            Ok(dto) => dto,
            Err(err) => return refused(err, CREATE_ROOM_FAILED),
        };

        match self
            .room_request
            .run(&self.scope, AdminService::create_room(client, &dto))
            .await
        {
            Ok(()) => {
                self.room_form.clear();
                Outcome::notice(Notice::info(ROOM_CREATED))
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to create room");
                Outcome::notice(Notice::error(err.user_message(CREATE_ROOM_FAILED)))
            }
        }
    }

    pub async fn create_student(&mut self, client: &ApiClient) -> Outcome {
        let dto = match self.student_form.to_request(&self.school_id) {
            Ok(dto) => dto,
            Err(err) => return refused(err, CREATE_STUDENT_FAILED),
        };

        match self
            .student_request
            .run(&self.scope, AdminService::create_student(client, &dto))
            .await
        {
            Ok(()) => {
                self.student_form.clear();
                Outcome::notice(Notice::info(STUDENT_CREATED))
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to create student");
                Outcome::notice(Notice::error(err.user_message(CREATE_STUDENT_FAILED)))
            }
        }
    }
}

fn refused(err: ApiError, fallback: &str) -> Outcome {
    warn!(error = %err, "Create refused before sending");
    Outcome::notice(Notice::error(err.user_message(fallback)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> AdminDashboard {
        AdminDashboard::new(SchoolId::new("s1"), "State University", CancellationToken::new())
    }

    #[test]
    fn test_select_dorm_sets_room_form_dorm() {
        let mut dash = dashboard();
        dash.dorms = serde_json::from_value(serde_json::json!([
            { "_id": "d1", "name": "North Hall" },
            { "_id": { "$oid": "d2" }, "name": "South Hall" }
        ]))
        .unwrap();

        assert_eq!(dash.select_dorm(1).map(|d| d.name.clone()).as_deref(), Some("South Hall"));
        assert_eq!(dash.room_form.dorm_id.as_ref().map(|id| id.as_str()), Some("d2"));
        assert!(dash.select_dorm(5).is_none());
    }

    #[tokio::test]
    async fn test_preconditions_block_every_form() {
        let client = ApiClient::new(
            &dormhub_config::ApiConfig::default().with_base_url("http://127.0.0.1:9"),
            dormhub_client::Session::new(),
        )
        .unwrap();
        let mut dash = dashboard();

        let outcome = dash.create_dorm(&client).await;
        assert_eq!(outcome.error(), Some("Dorm name is required"));

        dash.room_form.number = "101".into();
        dash.room_form.capacity = "2".into();
        let outcome = dash.create_room(&client).await;
        assert_eq!(outcome.error(), Some("Please select a dorm first"));

        dash.student_form.email = "bob@example.edu".into();
        let outcome = dash.create_student(&client).await;
        assert_eq!(outcome.error(), Some("Password is required"));
        assert_eq!(dash.student_form.email, "bob@example.edu");
    }
}
