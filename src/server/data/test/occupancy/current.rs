use super::*;

/// Tests inserting the first current row of a space.
///
/// Expected: Ok with the row at the initial version
#[tokio::test]
async fn inserts_first_row_at_initial_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;

    let repo = OccupancyRepository::new(db);
    let row = repo
        .insert_current(space.id, &snapshot(20, 20.0, CrowdLevel::Low))
        .await?;

    assert_eq!(row.version, INITIAL_VERSION);
    assert_eq!(row.crowd_level, "LOW");
    assert_eq!(repo.find_current(space.id).await?, Some(row));

    Ok(())
}

/// Tests that a second insert for the same space fails.
///
/// The racing-writer path of the service relies on this being reported as a
/// unique constraint violation.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn second_insert_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;

    let repo = OccupancyRepository::new(db);
    repo.insert_current(space.id, &snapshot(1, 1.0, CrowdLevel::Low))
        .await?;
    let err = repo
        .insert_current(space.id, &snapshot(2, 2.0, CrowdLevel::Low))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests a versioned update with the matching version.
///
/// Expected: Ok(true), all derived fields replaced and version incremented
#[tokio::test]
async fn replaces_row_when_version_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    factory::create_current_occupancy(db, space.id, 10, 10.0, "LOW").await?;

    let repo = OccupancyRepository::new(db);
    let applied = repo
        .update_current(space.id, 1, &snapshot(90, 90.0, CrowdLevel::High))
        .await?;

    assert!(applied);
    let row = repo.find_current(space.id).await?.unwrap();
    assert_eq!(row.count, 90);
    assert_eq!(row.percentage, 90.0);
    assert_eq!(row.crowd_level, "HIGH");
    assert_eq!(row.version, 2);

    Ok(())
}

/// Tests a versioned update with a stale version.
///
/// Expected: Ok(false) and the row left untouched
#[tokio::test]
async fn skips_update_when_version_is_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_occupancy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let original = factory::create_current_occupancy(db, space.id, 10, 10.0, "LOW").await?;

    let repo = OccupancyRepository::new(db);
    let applied = repo
        .update_current(space.id, 7, &snapshot(90, 90.0, CrowdLevel::High))
        .await?;

    assert!(!applied);
    assert_eq!(repo.find_current(space.id).await?, Some(original));

    Ok(())
}
