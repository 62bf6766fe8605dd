use super::*;

/// Tests appending a reading with a source tag.
///
/// Verifies that the raw count is stored unclamped even above capacity.
///
/// Expected: Ok with the reading stored as given
#[tokio::test]
async fn stores_raw_count_and_source() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;

    let repo = OccupancyRepository::new(db);
    let reading = repo
        .insert_reading(space.id, 500, Some("door-sensor-1".to_string()), Utc::now())
        .await?;

    assert_eq!(reading.space_id, space.id);
    assert_eq!(reading.count, 500);
    assert_eq!(reading.source.as_deref(), Some("door-sensor-1"));
    assert_eq!(repo.count_readings(space.id).await?, 1);

    Ok(())
}
