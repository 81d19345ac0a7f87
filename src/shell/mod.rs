//! Interactive terminal front end.
//!
//! Drives the screens through `dialoguer` prompts. The screens themselves
//! know nothing about the terminal: each action returns an [`Outcome`] that
//! the shell prints and follows.

pub mod prompts;
pub mod render;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use dormhub_client::ApiClient;

use crate::modules::admin::AdminDashboard;
use crate::modules::auth::{AdminLoginForm, AdminLoginScreen, LoginForm, LoginScreen};
use crate::modules::dorms::DormsScreen;
use crate::modules::rooms::RoomsScreen;
use crate::navigation::{Navigator, Route};
use crate::notice::Outcome;
use crate::state::AppState;

/// Credentials supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub email: Option<String>,
    pub password: Option<String>,
    pub school_id: Option<String>,
}

impl Prefill {
    fn has_credentials(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Student,
    Admin,
}

impl Portal {
    fn root(self) -> Route {
        match self {
            Self::Student => Route::StudentLogin,
            Self::Admin => Route::AdminLogin,
        }
    }
}

enum Screen {
    Login(LoginScreen),
    AdminLogin(AdminLoginScreen),
    Dorms(DormsScreen),
    Rooms(RoomsScreen),
    Admin(AdminDashboard),
}

impl Screen {
    fn mount(route: &Route, scope: CancellationToken) -> Self {
        match route {
            Route::StudentLogin => Self::Login(LoginScreen::new(scope)),
            Route::AdminLogin => Self::AdminLogin(AdminLoginScreen::new(scope)),
            Route::Dorms => Self::Dorms(DormsScreen::new(scope)),
            Route::Rooms { dorm_id, dorm_name } => {
                Self::Rooms(RoomsScreen::new(dorm_id.clone(), dorm_name.clone(), scope))
            }
            Route::AdminDashboard {
                school_id,
                school_name,
            } => Self::Admin(AdminDashboard::new(
                school_id.clone(),
                school_name.clone(),
                scope,
            )),
        }
    }
}

struct Frame {
    screen: Screen,
    entered: bool,
}

enum Step {
    Stay(Outcome),
    Back,
    Quit,
}

pub struct Shell {
    state: AppState,
    nav: Navigator,
    frames: Vec<Frame>,
    auto_submit: bool,
}

impl Shell {
    pub fn new(state: AppState, portal: Portal, prefill: Prefill) -> Self {
        let nav = Navigator::new(portal.root());
        let scope = nav.scope();
        let screen = match portal {
            Portal::Student => Screen::Login(LoginScreen::with_form(
                LoginForm::new(
                    prefill.email.clone().unwrap_or_default(),
                    prefill.password.clone().unwrap_or_default(),
                ),
                scope,
            )),
            Portal::Admin => Screen::AdminLogin(AdminLoginScreen::with_form(
                AdminLoginForm {
                    email: prefill.email.clone().unwrap_or_default(),
                    password: prefill.password.clone().unwrap_or_default(),
                    school_id: prefill.school_id.clone().unwrap_or_default(),
                },
                scope,
            )),
        };
        let auto_submit = match portal {
            Portal::Student => prefill.has_credentials(),
            Portal::Admin => prefill.has_credentials() && prefill.school_id.is_some(),
        };

        Self {
            state,
            nav,
            frames: vec![Frame {
                screen,
                entered: false,
            }],
            auto_submit,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        info!(api_url = %self.state.config.base_url, "Shell started");
        loop {
            println!("{}", render::title_line(&self.nav.current().title()));
            let auto_submit = std::mem::take(&mut self.auto_submit);
            let Some(frame) = self.frames.last_mut() else {
                break;
            };
            let entering = !std::mem::replace(&mut frame.entered, true);

            match step(&mut frame.screen, &self.state.client, entering, auto_submit).await? {
                Step::Stay(outcome) => self.follow(outcome),
                Step::Back => {
                    if !self.back()? {
                        break;
                    }
                }
                Step::Quit => break,
            }
        }
        info!("Shell finished");
        Ok(())
    }

    fn follow(&mut self, outcome: Outcome) {
        show(&outcome);
        if let Some(route) = outcome.navigate {
            let scope = self.nav.push(route.clone());
            self.frames.push(Frame {
                screen: Screen::mount(&route, scope),
                entered: false,
            });
        }
    }

    /// Pops the current screen. Returns `false` at the root.
    fn back(&mut self) -> Result<bool> {
        if self.nav.pop().is_none() {
            return Ok(false);
        }
        self.frames.pop();
        if self.nav.current().is_login() {
            debug!("Back at login, starting a new session");
            self.state = self.state.new_session()?;
        }
        Ok(true)
    }
}

fn show(outcome: &Outcome) {
    prompts::print_lines(outcome.notices.iter().map(render::notice_line));
}

fn menu(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

async fn step(
    screen: &mut Screen,
    client: &ApiClient,
    entering: bool,
    auto_submit: bool,
) -> Result<Step> {
    match screen {
        Screen::Login(screen) => {
            if !auto_submit {
                if prompts::choose("Student", &menu(&["Log in", "Quit"]))? != Some(0) {
                    return Ok(Step::Quit);
                }
                screen.form.email = prompts::text("Email", &screen.form.email)?;
                screen.form.password = prompts::secret("Password", &screen.form.password)?;
            }
            Ok(Step::Stay(screen.submit(client).await))
        }
        Screen::AdminLogin(screen) => {
            if !auto_submit {
                if prompts::choose("Admin", &menu(&["Log in", "Quit"]))? != Some(0) {
                    return Ok(Step::Quit);
                }
                screen.form.email = prompts::text("Email", &screen.form.email)?;
                screen.form.password = prompts::secret("Password", &screen.form.password)?;
                screen.form.school_id = prompts::text("School ID", &screen.form.school_id)?;
            }
            Ok(Step::Stay(screen.submit(client).await))
        }
        Screen::Dorms(screen) => {
            if entering {
                show(&screen.load(client).await);
                screen.load_profile(client).await;
            }
            if let Some(user) = screen.user() {
                println!("{}", render::user_banner(user));
            }

            let mut items = render::dorm_rows(screen.dorms());
            let dorm_count = items.len();
            items.extend(menu(&["Refresh", "Log out"]));

            match prompts::choose("Pick a dorm", &items)? {
                Some(i) if i < dorm_count => Ok(Step::Stay(
                    screen.select(i).map(Outcome::navigate).unwrap_or_default(),
                )),
                Some(i) if i == dorm_count => Ok(Step::Stay(screen.load(client).await)),
                _ => Ok(Step::Back),
            }
        }
        Screen::Rooms(screen) => {
            if entering || screen.needs_refresh() {
                show(&screen.refresh(client).await);
            }
            for room in screen.rooms() {
                println!();
                prompts::print_lines(render::room_block(room));
            }

            let mut items: Vec<String> = screen
                .rooms()
                .iter()
                .map(|room| {
                    render::assign_label(room, screen.can_assign(room), screen.is_assigning())
                })
                .collect();
            let room_count = items.len();
            items.extend(menu(&["Release my room", "Refresh", "Back"]));

            match prompts::choose("Rooms", &items)? {
                Some(i) if i < room_count => Ok(Step::Stay(screen.assign_at(client, i).await)),
                Some(i) if i == room_count => Ok(Step::Stay(screen.unassign(client).await)),
                Some(i) if i == room_count + 1 => Ok(Step::Stay(screen.refresh(client).await)),
                _ => Ok(Step::Back),
            }
        }
        Screen::Admin(dashboard) => {
            if entering {
                show(&dashboard.load(client).await);
            }
            let items = menu(&[
                "Create dorm",
                "Create room",
                "Create student",
                "Refresh dorms",
                "Log out",
            ]);
            match prompts::choose("Dashboard", &items)? {
                Some(0) => {
                    dashboard.dorm_form.name = prompts::text("Dorm name", &dashboard.dorm_form.name)?;
                    Ok(Step::Stay(dashboard.create_dorm(client).await))
                }
                Some(1) => {
                    let dorms = render::dorm_rows(dashboard.dorms());
                    if !dorms.is_empty() {
                        if let Some(i) = prompts::choose("Dorm", &dorms)? {
                            dashboard.select_dorm(i);
                        }
                    }
                    dashboard.room_form.number =
                        prompts::text("Room number", &dashboard.room_form.number)?;
                    dashboard.room_form.capacity =
                        prompts::text("Capacity", &dashboard.room_form.capacity)?;
                    Ok(Step::Stay(dashboard.create_room(client).await))
                }
                Some(2) => {
                    dashboard.student_form.email =
                        prompts::text("Student email", &dashboard.student_form.email)?;
                    dashboard.student_form.password =
                        prompts::secret("Student password", &dashboard.student_form.password)?;
                    Ok(Step::Stay(dashboard.create_student(client).await))
                }
                Some(3) => Ok(Step::Stay(dashboard.load(client).await)),
                _ => Ok(Step::Back),
            }
        }
    }
}

/// Runs the shell until the user quits from the login screen.
pub async fn run(state: AppState, portal: Portal, prefill: Prefill) -> Result<()> {
    Shell::new(state, portal, prefill).run().await
}
