//! Roster fixtures shared by the integration tests.

use activities_core::domains::activities::{Activity, Roster};

/// The two-activity roster every API test starts from.
pub fn test_roster() -> Roster {
    let mut roster = Roster::new();
    roster.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    roster.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    roster
}

/// An activity whose name needs percent-encoding in a path.
pub fn art_and_crafts() -> (String, Activity) {
    (
        "Art & Crafts Club".to_string(),
        Activity::new("Creative arts and crafts", "Wednesdays, 3:00 PM - 4:00 PM", 15),
    )
}
