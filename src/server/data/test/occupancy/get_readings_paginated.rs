use super::*;

/// Tests that history is returned newest first and scoped to the space.
///
/// Expected: Ok with readings in descending recorded_at order
#[tokio::test]
async fn returns_newest_first_for_space() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let (_, other) = factory::helpers::create_space_with_owner(db).await?;

    let now = Utc::now();
    factory::occupancy::create_reading_at(db, space.id, 1, now - Duration::minutes(10)).await?;
    factory::occupancy::create_reading_at(db, space.id, 2, now - Duration::minutes(5)).await?;
    factory::occupancy::create_reading_at(db, space.id, 3, now).await?;
    factory::create_reading(db, other.id, 99).await?;

    let repo = OccupancyRepository::new(db);
    let (readings, total) = repo.get_readings_paginated(space.id, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        readings.iter().map(|r| r.count).collect::<Vec<_>>(),
        vec![3, 2]
    );

    let (older, _) = repo.get_readings_paginated(space.id, 1, 2).await?;
    assert_eq!(older.len(), 1);
    assert_eq!(older[0].count, 1);

    Ok(())
}
