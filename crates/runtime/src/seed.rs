//! Stock demo data for a fresh session.
//!
//! All state is session-scoped; the seeds below are rebuilt on every
//! launch and nothing survives a restart.

use knot_messaging::{Conversation, Message};
use knot_registry::{Post, PostStatus, Registry, User};

/// The seeded user the session signs in as
pub const CURRENT_USER: &str = "u1";

/// Users known at session start
pub fn registry() -> Registry {
    let mut ana = User::new("u1", "Ana Silva", "https://picsum.photos/seed/ana/100", "Eastwood High");
    ana.transaction_count = 12;
    ana.offers = vec!["Class Notes".to_string(), "Textbooks".to_string()];
    ana.onboarded = true;

    let mut ben = User::new(
        "u2",
        "Ben Carter",
        "https://picsum.photos/seed/ben/100",
        "Northwood Academy",
    );
    ben.transaction_count = 5;
    ben.offers = vec!["Sample Papers".to_string()];
    ben.onboarded = true;

    let mut chloe = User::new(
        "u3",
        "Chloe Garcia",
        "https://picsum.photos/seed/chloe/100",
        "Eastwood High",
    );
    chloe.transaction_count = 21;
    chloe.offers = vec![
        "Tutoring Session".to_string(),
        "Previous Year Papers".to_string(),
    ];
    chloe.onboarded = true;

    Registry::new(vec![ana, ben, chloe], posts())
}

fn posts() -> Vec<Post> {
    let mut physics = Post::new(
        "u2",
        "Mechanics textbook, barely opened",
        "First-year mechanics text in mint condition. No highlights or notes inside.",
        "Textbooks",
    );
    physics.id = "p1".to_string();
    physics.image_url = Some("https://picsum.photos/seed/physics/600/400".to_string());
    physics.interested_user_ids = vec!["u3".to_string()];
    physics.timestamp = "2 hours ago".to_string();

    let mut calculus = Post::new(
        "u3",
        "Complete multivariable calculus notes",
        "Handwritten notes for the whole semester, with worked examples and diagrams.",
        "Class Notes",
    );
    calculus.id = "p2".to_string();
    calculus.timestamp = "1 day ago".to_string();

    let mut exam_bundle = Post::new(
        "u1",
        "Entrance exam sample bundle (last year)",
        "Five official sample papers from last year's cycle.",
        "Sample Papers",
    );
    exam_bundle.id = "p3".to_string();
    exam_bundle.image_url = Some("https://picsum.photos/seed/exams/600/400".to_string());
    exam_bundle.status = PostStatus::Completed;
    exam_bundle.interested_user_ids = vec!["u2".to_string()];
    exam_bundle.timestamp = "3 days ago".to_string();

    let mut lab_kit = Post::new(
        "u3",
        "Chemistry lab coat and goggles",
        "Standard issue coat (size M) with safety goggles.",
        "Lab Equipment",
    );
    lab_kit.id = "p4".to_string();
    lab_kit.status = PostStatus::Unavailable;
    lab_kit.interested_user_ids = vec!["u1".to_string()];
    lab_kit.timestamp = "5 days ago".to_string();

    vec![physics, calculus, exam_bundle, lab_kit]
}

/// Conversations present at session start, in creation order
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation::with_history(
            "c1",
            ["u1".to_string(), "u3".to_string()],
            vec![
                seeded_message(
                    "m1",
                    "u3",
                    "Hey! I saw your post with the sample papers. Are they still available?",
                    "3 days ago",
                ),
                seeded_message(
                    "m2",
                    "u1",
                    "Hi Chloe! Yes, they are. We can meet at the library tomorrow.",
                    "3 days ago",
                ),
                seeded_message("m3", "u3", "Perfect, see you then!", "3 days ago"),
            ],
        ),
        Conversation::with_history(
            "c2",
            ["u1".to_string(), "u2".to_string()],
            vec![seeded_message(
                "m4",
                "u2",
                "Hey Ana, is the lab coat still up for grabs?",
                "6 days ago",
            )],
        ),
    ]
}

fn seeded_message(id: &str, sender_id: &str, text: &str, timestamp: &str) -> Message {
    let mut message = Message::new(sender_id, text);
    message.id = id.to_string();
    message.timestamp = timestamp.to_string();
    message
}
