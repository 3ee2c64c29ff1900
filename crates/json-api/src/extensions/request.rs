//! Request helper extensions.

use salvo::prelude::Request;
use serde::de::DeserializeOwned;

use vibe_app::domain::carts::data::Owner;

use crate::envelope::ApiError;

/// Query parameter naming the cart owner.
const OWNER_PARAM: &str = "userId";

pub(crate) trait RequestExt {
    /// Every `(key, value)` pair of the query string, repeated keys included.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// The cart owner named by `userId`, or the guest owner.
    fn owner(&self) -> Owner;
}

impl RequestExt for Request {
    fn query_pairs(&self) -> Vec<(String, String)> {
        self.queries()
            .iter_all()
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .map(move |value| (key.clone(), value.clone()))
            })
            .collect()
    }

    fn owner(&self) -> Owner {
        let raw = self.query::<String>(OWNER_PARAM);

        Owner::from_param(raw.as_deref())
    }
}

/// Decode a JSON request body, `None` when the body is empty.
///
/// Unreadable or malformed bodies, including fields of the wrong type, are
/// rejected with a 400 envelope.
pub(crate) async fn json_body<T: DeserializeOwned>(
    req: &mut Request,
) -> Result<Option<T>, ApiError> {
    let payload = req
        .payload()
        .await
        .map_err(|_ignored| ApiError::bad_request("Invalid request body"))?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(payload)
        .map(Some)
        .map_err(|_ignored| ApiError::bad_request("Invalid request body"))
}
