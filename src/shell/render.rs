//! Text rendering for the terminal shell. Everything here is pure so the
//! exact output can be tested without a terminal.

use dormhub_models::{Dorm, Room, User};

use crate::notice::{Notice, NoticeKind};

pub fn notice_line(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Info => format!("✅ {}", notice.message),
        NoticeKind::Error => format!("❌ {}", notice.message),
    }
}

pub fn title_line(title: &str) -> String {
    format!("\n== {} ==", title)
}

pub fn dorm_rows(dorms: &[Dorm]) -> Vec<String> {
    dorms.iter().map(|dorm| dorm.name.clone()).collect()
}

/// Card for one room. The occupant list is only shown when non-empty.
pub fn room_block(room: &Room) -> Vec<String> {
    let mut lines = vec![
        format!("Room {}", room.number),
        format!("Capacity: {}/{}", room.occupancy(), room.capacity),
    ];
    if room.occupancy() > 0 {
        lines.push("Current Occupants:".to_string());
        lines.extend(room.occupant_names().map(|name| format!("  • {}", name)));
    }
    lines
}

/// Menu entry for a room's assign control.
pub fn assign_label(room: &Room, enabled: bool, assigning: bool) -> String {
    if assigning {
        format!("Room {}: Assigning...", room.number)
    } else if enabled {
        format!("Room {}: Assign Me", room.number)
    } else {
        format!("Room {}: Full", room.number)
    }
}

pub fn user_banner(user: &User) -> String {
    match &user.assigned_room {
        Some(room) => format!("Logged in as {} (Room {})", user.email, room),
        None => format!("Logged in as {} (no room assigned)", user.email),
    }
}
