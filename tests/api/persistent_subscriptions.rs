use crate::common::{fresh_group_name, fresh_stream_id, generate_events};
use esdb::{
    Client, DeletePersistentSubscriptionOptions, NakAction, PersistentSubscriptionOptions,
    StreamPosition, SubscribeToPersistentSubscriptionOptions,
};
use std::collections::HashSet;
use std::time::Duration;

async fn test_create_persistent_subscription(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("create_persistent_sub");

    let options = PersistentSubscriptionOptions::default().deadline(Duration::from_secs(2));
    client
        .create_persistent_subscription(stream_id, "a_group_name", &options)
        .await?;

    Ok(())
}

// We test we can successfully update a persistent subscription.
async fn test_update_persistent_subscription(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("update_persistent_sub");

    let mut options = PersistentSubscriptionOptions::default().deadline(Duration::from_secs(2));

    client
        .create_persistent_subscription(stream_id.as_str(), "a_group_name", &options)
        .await?;

    options.settings_mut().max_retry_count = 1_000;

    client
        .update_persistent_subscription(stream_id, "a_group_name", &options)
        .await?;

    Ok(())
}

// We test we can successfully delete a persistent subscription.
async fn test_delete_persistent_subscription(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("delete_persistent_sub");
    let options = PersistentSubscriptionOptions::default().deadline(Duration::from_secs(2));

    client
        .create_persistent_subscription(stream_id.as_str(), "a_group_name", &options)
        .await?;

    let options =
        DeletePersistentSubscriptionOptions::default().deadline(Duration::from_secs(2));

    client
        .delete_persistent_subscription(stream_id, "a_group_name", &options)
        .await?;

    Ok(())
}

async fn test_persistent_subscription(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("persistent_subscription");
    let events = generate_events("persistent-subscription-test", 5);

    let options =
        PersistentSubscriptionOptions::default().start_from(StreamPosition::Start);
    client
        .create_persistent_subscription(stream_id.as_str(), "a_group_name", &options)
        .await?;

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let mut sub = client
        .subscribe_to_persistent_subscription(
            stream_id.as_str(),
            "a_group_name",
            &Default::default(),
        )
        .await?;

    let max_duration = Duration::from_secs(30);

    let outcome = tokio::time::timeout(max_duration, async move {
        let mut count = 0usize;

        while count < 5 {
            let event = sub.next().await?;
            sub.ack(event).await?;
            count += 1;
        }

        Ok::<usize, esdb::Error>(count)
    })
    .await;

    match outcome {
        Ok(count) => assert_eq!(count?, 5),
        Err(_) => panic!("persistent subscription timed out after {:?}", max_duration),
    }

    Ok(())
}

async fn test_persistent_subscription_nack(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("persistent_subscription_nack");
    let events = generate_events("persistent-subscription-nack-test", 3);

    let options =
        PersistentSubscriptionOptions::default().start_from(StreamPosition::Start);
    client
        .create_persistent_subscription(stream_id.as_str(), "a_group_name", &options)
        .await?;

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let mut sub = client
        .subscribe_to_persistent_subscription(
            stream_id.as_str(),
            "a_group_name",
            &Default::default(),
        )
        .await?;

    let max_duration = Duration::from_secs(30);

    let outcome = tokio::time::timeout(max_duration, async move {
        let event = sub.next().await?;
        sub.nack(event, NakAction::Park, "because reasons").await?;

        let mut count = 1usize;
        while count < 3 {
            let event = sub.next().await?;
            sub.ack(event).await?;
            count += 1;
        }

        Ok::<(), esdb::Error>(())
    })
    .await;

    match outcome {
        Ok(result) => result,
        Err(_) => panic!("persistent subscription timed out after {:?}", max_duration),
    }
}

// Two consumers compete over the same group: every event is delivered to
// exactly one of them.
async fn test_competing_consumers(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("competing_consumers");
    let group_name = fresh_group_name("competing");
    let event_count = 25usize;
    let events = generate_events("competing-consumers-test", event_count);

    let options =
        PersistentSubscriptionOptions::default().start_from(StreamPosition::Start);
    client
        .create_persistent_subscription(stream_id.as_str(), group_name.as_str(), &options)
        .await?;

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let sub_options = SubscribeToPersistentSubscriptionOptions::default().buffer_size(10);

    let mut consumer_1 = client
        .subscribe_to_persistent_subscription(
            stream_id.as_str(),
            group_name.as_str(),
            &sub_options,
        )
        .await?;

    let mut consumer_2 = client
        .subscribe_to_persistent_subscription(
            stream_id.as_str(),
            group_name.as_str(),
            &sub_options,
        )
        .await?;

    let (sender_1, mut recv) = tokio::sync::mpsc::unbounded_channel::<(usize, uuid::Uuid)>();
    let sender_2 = sender_1.clone();

    tokio::spawn(async move {
        loop {
            let event = consumer_1.next().await?;
            let id = event.get_original_event().id;
            consumer_1.ack(event).await?;

            if sender_1.send((1, id)).is_err() {
                break;
            }
        }

        Ok::<(), esdb::Error>(())
    });

    tokio::spawn(async move {
        loop {
            let event = consumer_2.next().await?;
            let id = event.get_original_event().id;
            consumer_2.ack(event).await?;

            if sender_2.send((2, id)).is_err() {
                break;
            }
        }

        Ok::<(), esdb::Error>(())
    });

    let max_duration = Duration::from_secs(60);
    let mut seen_1 = HashSet::new();
    let mut seen_2 = HashSet::new();

    let outcome = tokio::time::timeout(max_duration, async {
        while seen_1.len() + seen_2.len() < event_count {
            match recv.recv().await {
                Some((1, id)) => {
                    seen_1.insert(id);
                }
                Some((_, id)) => {
                    seen_2.insert(id);
                }
                None => break,
            }
        }
    })
    .await;

    if outcome.is_err() {
        panic!("competing consumers timed out after {:?}", max_duration);
    }

    assert_eq!(seen_1.len() + seen_2.len(), event_count);
    assert!(seen_1.is_disjoint(&seen_2));

    Ok(())
}

async fn test_list_persistent_subscriptions(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("list_persistent_subs");
    let group_name = fresh_group_name("list");

    let options = PersistentSubscriptionOptions::default();
    client
        .create_persistent_subscription(stream_id.as_str(), group_name.as_str(), &options)
        .await?;

    let subs = client
        .list_persistent_subscriptions_for_stream(stream_id.as_str(), &Default::default())
        .await?;

    assert!(subs
        .iter()
        .any(|info| info.event_source == stream_id && info.group_name == group_name));

    let all_subs = client
        .list_all_persistent_subscriptions(&Default::default())
        .await;

    // Some servers require elevated rights for the global listing.
    if let Ok(all_subs) = all_subs {
        assert!(all_subs
            .iter()
            .any(|info| info.event_source == stream_id && info.group_name == group_name));
    }

    Ok(())
}

async fn test_get_persistent_subscription_info(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("get_persistent_sub_info");
    let group_name = fresh_group_name("info");

    let options = PersistentSubscriptionOptions::default().max_retry_count(12);
    client
        .create_persistent_subscription(stream_id.as_str(), group_name.as_str(), &options)
        .await?;

    let info = client
        .get_persistent_subscription_info(
            stream_id.as_str(),
            group_name.as_str(),
            &Default::default(),
        )
        .await?;

    assert_eq!(info.event_source, stream_id);
    assert_eq!(info.group_name, group_name);

    if let Some(settings) = info.settings {
        assert_eq!(settings.max_retry_count, 12);
    }

    Ok(())
}

async fn test_replay_parked_messages(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("replay_parked");
    let group_name = fresh_group_name("replay");
    let events = generate_events("replay-parked-test", 2);

    let options =
        PersistentSubscriptionOptions::default().start_from(StreamPosition::Start);
    client
        .create_persistent_subscription(stream_id.as_str(), group_name.as_str(), &options)
        .await?;

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let mut sub = client
        .subscribe_to_persistent_subscription(
            stream_id.as_str(),
            group_name.as_str(),
            &Default::default(),
        )
        .await?;

    let max_duration = Duration::from_secs(30);

    let outcome = tokio::time::timeout(max_duration, async {
        // Park everything, replay, then events come back around.
        for _ in 0..2 {
            let event = sub.next().await?;
            sub.nack(event, NakAction::Park, "testing replay").await?;
        }

        client
            .replay_parked_messages(stream_id.as_str(), group_name.as_str(), &Default::default())
            .await?;

        for _ in 0..2 {
            let event = sub.next().await?;
            sub.ack(event).await?;
        }

        Ok::<(), esdb::Error>(())
    })
    .await;

    match outcome {
        Ok(result) => result,
        Err(_) => panic!("replaying parked messages timed out after {:?}", max_duration),
    }
}

pub async fn tests(client: Client) -> eyre::Result<()> {
    debug!("Before test_create_persistent_subscription…");
    test_create_persistent_subscription(&client).await?;
    debug!("Complete");
    debug!("Before test_update_persistent_subscription…");
    test_update_persistent_subscription(&client).await?;
    debug!("Complete");
    debug!("Before test_delete_persistent_subscription…");
    test_delete_persistent_subscription(&client).await?;
    debug!("Complete");
    debug!("Before test_persistent_subscription…");
    test_persistent_subscription(&client).await?;
    debug!("Complete");
    debug!("Before test_persistent_subscription_nack…");
    test_persistent_subscription_nack(&client).await?;
    debug!("Complete");
    debug!("Before test_competing_consumers…");
    test_competing_consumers(&client).await?;
    debug!("Complete");
    debug!("Before test_list_persistent_subscriptions…");
    test_list_persistent_subscriptions(&client).await?;
    debug!("Complete");
    debug!("Before test_get_persistent_subscription_info…");
    test_get_persistent_subscription_info(&client).await?;
    debug!("Complete");
    debug!("Before test_replay_parked_messages…");
    test_replay_parked_messages(&client).await?;
    debug!("Complete");

    Ok(())
}
