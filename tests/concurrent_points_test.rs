use carpool_rewards::models::{ActionKind, UserSummary};
use carpool_rewards::services::SummaryStore;

const NUM_CONCURRENT_ACTIONS: u64 = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_point_awards_are_not_lost() {
    // Many tasks award points to the same user at once. If the store read
    // the total outside the entry lock, some increments would be lost.
    let store = SummaryStore::new();
    store.upsert(UserSummary::new("racer")).unwrap();
    store.upsert(UserSummary::new("bystander")).unwrap();

    let mut handles = vec![];

    for i in 0..NUM_CONCURRENT_ACTIONS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let action = if i % 2 == 0 {
                ActionKind::RideOffered
            } else {
                ActionKind::RideJoinRequested
            };
            store.apply_action("racer", action)
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("Task join failed")
            .expect("Applying action failed");
    }

    let user = store.get("racer").expect("User should exist");
    let half = NUM_CONCURRENT_ACTIONS / 2;

    assert_eq!(
        user.points,
        half * ActionKind::RideOffered.points() as u64
            + half * ActionKind::RideJoinRequested.points() as u64,
        "Points mismatch due to race condition"
    );
    assert_eq!(user.rides_offered as u64, half);
    assert_eq!(user.rides_taken as u64, half);
    assert_eq!(store.get("bystander").unwrap().points, 0);
}

#[test]
fn test_concurrent_badge_awards_grant_points_once() {
    let store = SummaryStore::new();
    store.upsert(UserSummary::new("collector")).unwrap();

    let awarded: usize = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| store.award_badge("collector", "Early Bird").unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|award| award.awarded)
            .count()
    });

    assert_eq!(awarded, 1);
    let user = store.get("collector").unwrap();
    assert_eq!(user.points, 100);
    assert_eq!(user.badges(), &["Early Bird"]);
}
