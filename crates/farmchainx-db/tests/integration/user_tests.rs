use chrono::NaiveDate;

use farmchainx_core::error::AppError;
use farmchainx_core::models::{NewFarmerCrop, NewUser, UserRole};

use crate::integration::common::{create_user, setup_test_db};

#[tokio::test]
async fn create_and_find_user() {
    let (db, _container) = setup_test_db().await;
    let users = db.users();

    let created = create_user(&db, "ana@example.com", UserRole::Farmer).await;
    assert_eq!(created.role, UserRole::Farmer);
    assert!(created.farmer_code.is_some());
    assert!(created.distributor_code.is_none());

    let by_id = users.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "ana@example.com");

    let by_email = users.find_by_email("ana@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().id, created.id);

    assert!(users.find_by_id(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_a_validation_error() {
    let (db, _container) = setup_test_db().await;

    create_user(&db, "dup@example.com", UserRole::Consumer).await;

    let err = db
        .users()
        .create(&NewUser {
            email: "dup@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            role: UserRole::Retailer,
            name: "Other".to_string(),
            location: None,
            farmer_code: None,
            distributor_code: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn duplicate_actor_code_is_a_conflict() {
    let (db, _container) = setup_test_db().await;

    let first = create_user(&db, "first@example.com", UserRole::Farmer).await;

    // Same farmer code, different email: the race two registrations can
    // hit after both pass the exists check.
    let err = db
        .users()
        .create(&NewUser {
            email: "second@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            role: UserRole::Farmer,
            name: "Second".to_string(),
            location: None,
            farmer_code: first.farmer_code.clone(),
            distributor_code: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn code_existence_checks() {
    let (db, _container) = setup_test_db().await;
    let users = db.users();

    let farmer = create_user(&db, "farmer@example.com", UserRole::Farmer).await;
    let distributor = create_user(&db, "dist@example.com", UserRole::Distributor).await;

    assert!(
        users
            .farmer_code_exists(farmer.farmer_code.as_deref().unwrap())
            .await
            .unwrap()
    );
    assert!(
        users
            .distributor_code_exists(distributor.distributor_code.as_deref().unwrap())
            .await
            .unwrap()
    );
    assert!(!users.farmer_code_exists("999").await.unwrap());
    assert!(users.email_exists("farmer@example.com").await.unwrap());
    assert!(!users.email_exists("nobody@example.com").await.unwrap());
}

#[tokio::test]
async fn delete_cascade_removes_user_and_crops() {
    let (db, _container) = setup_test_db().await;

    let farmer = create_user(&db, "gone@example.com", UserRole::Farmer).await;
    let crop = db
        .farmer_crops()
        .create(
            farmer.id,
            &NewFarmerCrop {
                name: "Tomatoes".to_string(),
                crop_type: "Vegetable".to_string(),
                harvest_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                expiry_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                soil_type: "Loam".to_string(),
                pesticides_used: None,
                image_url: None,
                farmer_code: farmer.farmer_code.clone(),
                farmer_name: Some(farmer.name.clone()),
                farmer_location: farmer.location.clone(),
                quantity: Some(120.0),
                quantity_unit: Some("kg".to_string()),
                price_per_unit: Some(2.5),
                status: "IN_STOCK".to_string(),
            },
        )
        .await
        .unwrap();

    db.users().delete_cascade(farmer.id).await.unwrap();

    assert!(db.users().find_by_id(farmer.id).await.unwrap().is_none());
    assert!(db.farmer_crops().find(crop.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_cascade_missing_user_is_not_found() {
    let (db, _container) = setup_test_db().await;

    let err = db.users().delete_cascade(424_242).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_and_count_users() {
    let (db, _container) = setup_test_db().await;

    create_user(&db, "one@example.com", UserRole::Farmer).await;
    create_user(&db, "two@example.com", UserRole::Admin).await;

    assert_eq!(db.users().count().await.unwrap(), 2);
    assert_eq!(db.users().list_all().await.unwrap().len(), 2);
}
