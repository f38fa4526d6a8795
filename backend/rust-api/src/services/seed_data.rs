use crate::models::NewEvent;
use crate::services::repository::EventRepository;
use chrono::{Duration, Utc};

pub async fn seed_demo_events(repo: &EventRepository) -> anyhow::Result<()> {
    if repo.event_count().await > 0 {
        tracing::info!("Repository already has events, skipping seed");
        return Ok(());
    }

    let now = Utc::now();
    let demo = [
        ("Community Meetup", "Monthly get-together.", now - Duration::days(14)),
        ("Spring Hackathon", "48 hours of building.", now - Duration::days(2)),
        ("Rust Conference", "Talks and workshops.", now + Duration::days(3)),
        ("Launch Party", "Celebrating the release.", now + Duration::days(10)),
        ("Conference Afterparty", "Informal drinks.", now + Duration::days(30)),
    ];
    for (title, description, date) in demo {
        repo.insert_event(NewEvent::new(title, date).with_description(description))
            .await;
    }

    tracing::info!("Seeded {} demo events", repo.event_count().await);
    Ok(())
}
