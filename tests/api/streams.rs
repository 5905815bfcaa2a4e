use crate::common::{fresh_stream_id, generate_events};
use esdb::{
    Acl, Client, CurrentRevision, EventData, ExpectedRevision, ReadEvent, ReadStreamOptions,
    StreamAclBuilder, StreamMetadataBuilder, StreamMetadataResult, StreamPosition,
    SubscribeToStreamOptions,
};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

async fn test_write_events(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("write_events");
    let events = generate_events("write-events-test", 3);

    let result = client
        .append_to_stream(stream_id, &Default::default(), events)
        .await?;

    debug!("Write response: {:?}", result);
    assert_eq!(result.next_expected_version, 2);

    Ok(())
}

// We read stream events by batch. We also test if we can properly read a
// stream thoroughly.
async fn test_read_stream_events(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("read_stream_events");
    let events = generate_events("read-stream-events-test", 10);

    let _ = client
        .append_to_stream(stream_id.clone(), &Default::default(), events)
        .await?;

    let mut pos = 0usize;
    let mut idx = 0i64;

    let mut stream = client.read_stream(stream_id, &Default::default()).await?;

    while let Some(event) = stream.next().await? {
        let event = event.get_original_event();
        let obj: HashMap<String, i64> = event.as_json().unwrap();
        let value = obj.get("event_index").unwrap();

        idx = *value;
        pos += 1;
    }

    assert_eq!(pos, 10);
    assert_eq!(idx, 10);

    Ok(())
}

async fn test_read_all_stream_events(client: &Client) -> esdb::Result<()> {
    // The server always has "some" events in $all, since the server itself
    // uses streams, ouroboros style.
    let result = client.read_all(&Default::default()).await?.next().await?;

    assert!(result.is_some());

    Ok(())
}

async fn test_read_stream_events_with_position(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("read_position");
    let events = generate_events("read_position", 10);

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let options = ReadStreamOptions::default()
        .forwards()
        .position(StreamPosition::Start);

    let mut stream = client.read_stream(stream_id, &options).await?;

    let mut last_stream_position = 0u64;
    while let Some(event) = stream.next_read_event().await? {
        if let ReadEvent::LastStreamPosition(pos) = event {
            last_stream_position = pos;
        }
    }

    assert_eq!(9, last_stream_position);

    Ok(())
}

// Spells out the expected-revision contract: appending with a stale revision
// leaves the stream untouched and reports both sides of the conflict.
async fn test_wrong_expected_version(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("wrong_expected_version");
    let events = generate_events("wrong-expected-version-test", 3);

    let options = esdb::AppendToStreamOptions::default()
        .expected_revision(ExpectedRevision::NoStream);

    let result = client
        .append_to_stream(stream_id.as_str(), &options, events)
        .await?;

    assert_eq!(result.next_expected_version, 2);

    let options =
        esdb::AppendToStreamOptions::default().expected_revision(ExpectedRevision::Exact(0));
    let event = generate_events("wrong-expected-version-test", 1);

    match client
        .append_to_stream(stream_id.as_str(), &options, event)
        .await
    {
        Err(esdb::Error::WrongExpectedVersion { expected, current }) => {
            assert_eq!(expected, ExpectedRevision::Exact(0));
            assert_eq!(current, CurrentRevision::Current(2));
        }

        other => panic!("unexpected append outcome: {:?}", other),
    }

    // The stream is unchanged.
    let mut stream = client
        .read_stream(stream_id.as_str(), &Default::default())
        .await?;

    let mut count = 0usize;
    while stream.next().await?.is_some() {
        count += 1;
    }

    assert_eq!(count, 3);

    Ok(())
}

// The server deduplicates an append re-sent with the same event id.
async fn test_idempotent_append(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("idempotent_append");
    let id = uuid::Uuid::new_v4();

    let event = EventData::json("idempotent-test", json!({ "payload": 1 }))
        .unwrap()
        .id(id);

    let first = client
        .append_to_stream(stream_id.as_str(), &Default::default(), event.clone())
        .await?;

    let second = client
        .append_to_stream(stream_id.as_str(), &Default::default(), event)
        .await?;

    assert_eq!(first.next_expected_version, second.next_expected_version);

    let mut stream = client
        .read_stream(stream_id.as_str(), &Default::default())
        .await?;

    let mut count = 0usize;
    while stream.next().await?.is_some() {
        count += 1;
    }

    assert_eq!(count, 1);

    Ok(())
}

async fn test_metadata(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("metadata");
    let events = generate_events("metadata-test", 5);

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let expected = StreamMetadataBuilder::new()
        .max_age(Duration::from_secs(2))
        .acl(Acl::Stream(
            StreamAclBuilder::new().add_read_roles("admin").build(),
        ))
        .build();

    let _ = client
        .set_stream_metadata(stream_id.as_str(), &Default::default(), expected.clone())
        .await?;

    let actual = client
        .get_stream_metadata(stream_id.as_str(), &Default::default())
        .await?;

    match actual {
        StreamMetadataResult::Success(actual) => assert_eq!(&expected, actual.metadata()),
        other => panic!("unexpected metadata result: {:?}", other),
    }

    Ok(())
}

// Soft-deleting truncates, writing again continues from where the stream left off.
async fn test_delete_stream(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("delete");
    let events = generate_events("delete-test", 3);

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let result = client
        .delete_stream(stream_id.as_str(), &Default::default())
        .await?;

    debug!("Delete stream [{}] result: {:?}", stream_id, result);

    let events = generate_events("delete-test-resurrection", 1);
    let result = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    assert_eq!(result.next_expected_version, 3);

    let options = ReadStreamOptions::default().position(StreamPosition::Start);
    let mut stream = client.read_stream(stream_id.as_str(), &options).await?;

    let mut revisions = Vec::new();
    while let Some(event) = stream.next().await? {
        revisions.push(event.get_original_event().revision);
    }

    // Earlier events are hidden by truncate-before.
    assert_eq!(revisions, vec![3]);

    Ok(())
}

async fn test_tombstone_stream(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("tombstone");
    let events = generate_events("tombstone-test", 3);

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let result = client
        .tombstone_stream(stream_id.as_str(), &Default::default())
        .await?;

    debug!("Tombstone stream [{}] result: {:?}", stream_id, result);

    let events = generate_events("tombstone-test-after", 1);
    match client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await
    {
        Err(esdb::Error::StreamDeleted) => Ok(()),
        other => panic!("unexpected append outcome on a tombstoned stream: {:?}", other),
    }
}

// We write events into a stream. Then, we subscribe to that stream from the
// beginning and expect to read those events back in order.
async fn test_subscription(client: &Client) -> esdb::Result<()> {
    let stream_id = fresh_stream_id("catchup_subscription");
    let events = generate_events("catchup-subscription-test", 3);

    let _ = client
        .append_to_stream(stream_id.as_str(), &Default::default(), events)
        .await?;

    let options = SubscribeToStreamOptions::default().start_from(StreamPosition::Start);
    let mut sub = client.subscribe_to_stream(stream_id.as_str(), &options).await;

    let max_duration = Duration::from_secs(30);

    let outcome = tokio::time::timeout(max_duration, async move {
        let mut count = 0usize;
        let mut last_revision = None;

        while count < 3 {
            let event = sub.next().await?;
            let revision = event.get_original_event().revision;

            if let Some(previous) = last_revision {
                assert_eq!(revision, previous + 1);
            }

            last_revision = Some(revision);
            count += 1;
        }

        Ok::<(), esdb::Error>(())
    })
    .await;

    match outcome {
        Ok(result) => result,
        Err(_) => panic!("subscription timed out after {:?}", max_duration),
    }
}

pub async fn tests(client: Client) -> eyre::Result<()> {
    debug!("Before test_write_events…");
    test_write_events(&client).await?;
    debug!("Complete");
    debug!("Before test_read_stream_events…");
    test_read_stream_events(&client).await?;
    debug!("Complete");
    debug!("Before test_read_all_stream_events…");
    test_read_all_stream_events(&client).await?;
    debug!("Complete");
    debug!("Before test_read_stream_events_with_position…");
    test_read_stream_events_with_position(&client).await?;
    debug!("Complete");
    debug!("Before test_wrong_expected_version…");
    test_wrong_expected_version(&client).await?;
    debug!("Complete");
    debug!("Before test_idempotent_append…");
    test_idempotent_append(&client).await?;
    debug!("Complete");
    debug!("Before test_metadata…");
    test_metadata(&client).await?;
    debug!("Complete");
    debug!("Before test_delete_stream…");
    test_delete_stream(&client).await?;
    debug!("Complete");
    debug!("Before test_tombstone_stream…");
    test_tombstone_stream(&client).await?;
    debug!("Complete");
    debug!("Before test_subscription…");
    test_subscription(&client).await?;
    debug!("Complete");

    Ok(())
}
