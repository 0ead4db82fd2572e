pub mod home;
pub mod services;

use axum::http::{HeaderName, header::CACHE_CONTROL};

use crate::usecases::catalog::REVALIDATE_SECONDS;

/// Advisory freshness metadata for CDNs and other shared caches.
pub(crate) fn revalidate_header() -> [(HeaderName, String); 1] {
    [(
        CACHE_CONTROL,
        format!("public, s-maxage={REVALIDATE_SECONDS}, stale-while-revalidate"),
    )]
}
