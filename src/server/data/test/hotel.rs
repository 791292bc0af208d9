use super::*;

fn hotel_param(name: &str) -> CreateHotelParam {
    CreateHotelParam {
        name: name.to_string(),
        location: "Dubai".to_string(),
        description: "Sea view".to_string(),
        picture_list: "a.jpg,b.jpg".to_string(),
    }
}

/// Tests creating a hotel assigns an id and stores every field.
///
/// Expected: Ok with the created hotel, readable back by id
#[tokio::test]
async fn creates_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let hotel = repo.create(hotel_param("Burj Al Arab")).await?;

    assert!(hotel.id > 0);
    assert_eq!(hotel.name, "Burj Al Arab");
    assert_eq!(hotel.picture_list, "a.jpg,b.jpg");

    let found = repo.find_by_id(hotel.id).await?;
    assert_eq!(found, Some(hotel));

    Ok(())
}

/// Tests the unique name constraint on the hotel table.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    repo.create(hotel_param("Atlantis")).await?;

    let result = repo.create(hotel_param("Atlantis")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests lookups by name match exactly.
///
/// Expected: Some for the stored name, None for any other
#[tokio::test]
async fn finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Grand Plaza")
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    let found = repo.find_by_name("Grand Plaza").await?;
    assert_eq!(found.map(|h| h.id), Some(hotel.id));

    assert!(repo.find_by_name("Grand").await?.is_none());

    Ok(())
}

/// Tests listing returns every hotel in insertion order.
///
/// Expected: Ok with both hotels, lowest id first
#[tokio::test]
async fn gets_all_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_hotel(db).await?;
    let second = factory::create_hotel(db).await?;

    let hotels = HotelRepository::new(db).get_all().await?;

    let ids: Vec<i32> = hotels.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a partial update only changes the supplied fields.
///
/// Expected: Ok(Some) with the new location and an unchanged name
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let updated = HotelRepository::new(db)
        .update(
            hotel.id,
            UpdateHotelParam {
                location: Some("Abu Dhabi".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.location, "Abu Dhabi");
    assert_eq!(updated.name, hotel.name);

    let stored = entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.location, "Abu Dhabi");

    Ok(())
}

/// Tests an update with no fields leaves the row alone.
///
/// Expected: Ok(Some) equal to the stored hotel
#[tokio::test]
async fn empty_update_returns_hotel_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let updated = HotelRepository::new(db)
        .update(hotel.id, UpdateHotelParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, hotel.name);
    assert_eq!(updated.location, hotel.location);

    Ok(())
}

/// Tests updating a missing hotel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_hotel_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db)
        .update(
            999,
            UpdateHotelParam {
                name: Some("Nowhere".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting returns the removed row.
///
/// Expected: Ok(Some) with the hotel, then Ok(None) on a second delete
#[tokio::test]
async fn deletes_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let repo = HotelRepository::new(db);

    let deleted = repo.delete(hotel.id).await?;
    assert_eq!(deleted.map(|h| h.name), Some(hotel.name));

    assert!(repo.find_by_id(hotel.id).await?.is_none());
    assert!(repo.delete(hotel.id).await?.is_none());

    Ok(())
}
