// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

/// Every path is served by the same catch-all handlers; routing happens
/// against the scripted responses in `ServerContext`.
#[derive(Deserialize, JsonSchema)]
pub struct AnyPath {
    #[allow(dead_code)]
    path: Vec<String>,
}

fn respond(
    rqctx: &RequestContext<Arc<ServerContext>>,
    body: Vec<u8>,
) -> Result<Response<Body>, HttpError> {
    let apictx = rqctx.context();
    let uri = rqctx.request.uri();

    let recorded = RecordedRequest {
        method: rqctx.request.method().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: rqctx.request.headers().clone(),
        body,
    };

    apictx.handle(recorded).to_http_response().map_err(HttpError::from)
}

#[endpoint {
    method = GET,
    path = "/{path:.*}",
    unpublished = true,
}]
pub async fn get_any(
    rqctx: RequestContext<Arc<ServerContext>>,
    _path: Path<AnyPath>,
) -> Result<Response<Body>, HttpError> {
    respond(&rqctx, Vec::new())
}

#[endpoint {
    method = DELETE,
    path = "/{path:.*}",
    unpublished = true,
}]
pub async fn delete_any(
    rqctx: RequestContext<Arc<ServerContext>>,
    _path: Path<AnyPath>,
) -> Result<Response<Body>, HttpError> {
    respond(&rqctx, Vec::new())
}

#[endpoint {
    method = POST,
    path = "/{path:.*}",
    unpublished = true,
}]
pub async fn post_any(
    rqctx: RequestContext<Arc<ServerContext>>,
    _path: Path<AnyPath>,
    body: UntypedBody,
) -> Result<Response<Body>, HttpError> {
    respond(&rqctx, body.as_bytes().to_vec())
}

#[endpoint {
    method = PUT,
    path = "/{path:.*}",
    unpublished = true,
}]
pub async fn put_any(
    rqctx: RequestContext<Arc<ServerContext>>,
    _path: Path<AnyPath>,
    body: UntypedBody,
) -> Result<Response<Body>, HttpError> {
    respond(&rqctx, body.as_bytes().to_vec())
}
