//! Catcher for requests no route matched

use salvo::{Scribe, prelude::*};

use crate::envelope::ApiError;

/// Render bare 404s as the JSON error envelope.
///
/// Responses that already carry a body, such as a handler's own 404, pass
/// through untouched.
#[handler]
pub(crate) async fn handler(res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code == Some(StatusCode::NOT_FOUND) && res.body.is_none() {
        ApiError::route_not_found().render(res);

        ctrl.skip_rest();
    }
}
