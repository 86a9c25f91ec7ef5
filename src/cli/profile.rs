use crate::info;

use super::open_session;

pub fn me() {
    let session = open_session();
    let user = session.user();

    info!("{} ({})", user.name(), user.id);
    if let Some(email) = &user.email {
        info!("Email: {}", email);
    }
    if let Some(country) = &user.country {
        info!("Country: {}", country);
    }
    if let Some(product) = &user.product {
        info!("Plan: {}", product);
    }
    if let Some(followers) = &user.followers {
        info!("Followers: {}", followers.total);
    }
}
