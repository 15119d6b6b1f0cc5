//! User Service Sample Entry Point
//!
//! Replays a short request trace against the in-memory store, handling every
//! branch with fluent container chains instead of `match` statements.

use user_service::{User, UserService};

fn main() {
    let mut service = UserService::new();

    // Request 1: get the user, creating it when missing
    service
        .get_user("user@domain.com")
        .or_maybe(|| {
            service
                .create_user("user@domain.com", "Foo")
                .if_failed(|fault| println!("create failed: {fault}"))
                .to_optional()
        })
        .if_some(|user| println!("Found user {} <{}>", user.name, user.email));

    // Request 2: create a duplicate, which must fail
    service
        .create_user("user@domain.com", "Bar")
        .if_success(|user| println!("Successfully created user {}", user.email))
        .if_failed(|fault| println!("create failed: {fault}"));

    // Request 3: rename the user
    service.get_user("user@domain.com").if_some(|user| {
        service
            .update_user(&user.email, |found| User {
                name: "Bar".to_string(),
                ..found
            })
            .if_success(|renamed| println!("Updated user {} to {}", user.name, renamed.name))
            .if_failed(|fault| println!("update failed: {fault}"));
    });

    // Request 4: delete the user
    service.get_user("user@domain.com").if_some(|user| {
        service
            .delete_user(&user.email)
            .if_success(|_| println!("User {} is successfully deleted!", user.email))
            .if_failed(|fault| println!("delete failed: {fault}"));
    });
}
