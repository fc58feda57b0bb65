// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

use std::path::PathBuf;

use http::HeaderName;
use http::header::ACCEPT;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use reqwest::Url;

pub const CLIENT_ID_HEADER: &str = "x-vaultapi-clientid";

#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text { name: String, value: String },

    /// Read from disk when the request is sent
    File { name: String, path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    Empty,
    Form(Vec<(String, String)>),
    Multipart(Vec<MultipartField>),
    Json(Value),
    Text(String),
}

/// Everything needed to send one call, computed without any I/O.
///
/// The session id header is marked sensitive, so `Debug` output is safe to
/// log.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: PreparedBody,
}

/// Validate `args` against `endpoint` and build the request they describe.
pub fn prepare(
    endpoint: &Endpoint,
    connection: &Connection,
    args: &Arguments,
) -> Result<PreparedRequest, Error> {
    let connection = connection.resolve(args)?;

    let path = fill_path(endpoint, &connection, args)?;
    let mut url = Url::parse(&format!("{}{path}", connection.origin()))
        .map_err(|e| Error::invalid(VAULT_DNS_ARG, e.to_string()))?;

    let mut query = Vec::new();
    for param in endpoint.params_at(Location::Query) {
        match args.render(param)? {
            // A zero page size or offset means "not set"
            Some(value)
                if param.kind == ParamKind::Integer
                    && !param.required
                    && value == "0" => {}

            Some(value) => query.push((param.name, value)),

            None => {}
        }
    }

    // `query_pairs_mut` leaves a bare `?` behind when nothing is appended
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    let body = prepare_body(endpoint, args)?;
    let headers = prepare_headers(endpoint, &connection, &body)?;

    Ok(PreparedRequest { method: endpoint.method.clone(), url, headers, body })
}

fn fill_path(
    endpoint: &Endpoint,
    connection: &Connection,
    args: &Arguments,
) -> Result<String, Error> {
    let mut segments = endpoint.path.split('{');
    let mut path = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        let Some((name, tail)) = segment.split_once('}') else {
            path.push('{');
            path.push_str(segment);
            continue;
        };

        let value = if name == VERSION_ARG {
            connection.api_version.clone()
        } else {
            let param = endpoint.param(name).ok_or_else(|| {
                Error::invalid(name, "no parameter fills this placeholder")
            })?;

            args.render(param)?
                .ok_or_else(|| Error::MissingArgument(name.to_string()))?
        };

        if !is_path_segment(&value) {
            return Err(Error::invalid(
                name,
                format!("{value:?} cannot be used as a path segment"),
            ));
        }

        path.push_str(&value);
        path.push_str(tail);
    }

    Ok(path)
}

/// Whether `value` stays a single segment once the URL is parsed. URL
/// parsing treats `\` as a separator, drops tabs and newlines, and resolves
/// `.` and `..` (percent-encoded or not).
fn is_path_segment(value: &str) -> bool {
    if value.contains(['/', '\\', '?', '#']) || value.contains(char::is_control)
    {
        return false;
    }

    let decoded = value.to_ascii_lowercase().replace("%2e", ".");
    decoded != "." && decoded != ".."
}

fn prepare_headers(
    endpoint: &Endpoint,
    connection: &Connection,
    body: &PreparedBody,
) -> Result<HeaderMap, Error> {
    let header_value = |name: &str, value: &str| {
        HeaderValue::from_str(value)
            .map_err(|_| Error::invalid(name, "not a valid header value"))
    };

    let mut headers = HeaderMap::new();

    let mut authorization =
        header_value(SESSION_ID_ARG, &connection.session_id)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    headers
        .insert(ACCEPT, HeaderValue::from_static(endpoint.accept.as_str()));

    headers.insert(
        HeaderName::from_static(CLIENT_ID_HEADER),
        header_value(CLIENT_ID_ARG, &connection.client_id)?,
    );

    match endpoint.content_type() {
        Some(content_type) if *body != PreparedBody::Empty => {
            headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        _ => {}
    }

    Ok(headers)
}

fn prepare_body(
    endpoint: &Endpoint,
    args: &Arguments,
) -> Result<PreparedBody, Error> {
    match endpoint.body {
        BodyEncoding::None => Ok(PreparedBody::Empty),

        BodyEncoding::Form => {
            let mut pairs = Vec::new();

            for param in endpoint.params_at(Location::Body) {
                match param.kind {
                    ParamKind::StringList => {
                        let name = format!("{}[]", param.name);
                        for value in args.string_list(param)? {
                            pairs.push((name.clone(), value));
                        }
                    }

                    ParamKind::Object => {
                        if let Some(object) = args.object(param)? {
                            pairs.extend(flatten_object(object));
                        }
                    }

                    _ => {
                        if let Some(value) = args.render(param)? {
                            pairs.push((param.name.to_string(), value));
                        }
                    }
                }
            }

            Ok(PreparedBody::Form(pairs))
        }

        BodyEncoding::Multipart => {
            let mut fields = Vec::new();

            for param in endpoint.params_at(Location::Body) {
                let Some(value) = args.render(param)? else {
                    continue;
                };

                let name = param.name.to_string();
                fields.push(match param.kind {
                    ParamKind::File => {
                        MultipartField::File { name, path: PathBuf::from(value) }
                    }

                    _ => MultipartField::Text { name, value },
                });
            }

            Ok(PreparedBody::Multipart(fields))
        }

        BodyEncoding::Json(json_body) => {
            let param = body_param(endpoint)?;

            let Some(object) = args.object(param)? else {
                return Ok(PreparedBody::Empty);
            };
            let object = Value::Object(object.clone());

            let document = match json_body {
                JsonBody::Verbatim => object,

                JsonBody::ScimCreateUser => {
                    let user: NewUser = serde_json::from_value(object)
                        .map_err(|e| Error::invalid(param.name, e.to_string()))?;
                    to_document(param, CreateUserRequest::from(user))?
                }

                JsonBody::ScimUpdateName => {
                    let name: Name = serde_json::from_value(object)
                        .map_err(|e| Error::invalid(param.name, e.to_string()))?;
                    to_document(param, UpdateNameRequest::from(name))?
                }
            };

            Ok(PreparedBody::Json(document))
        }

        BodyEncoding::Text => {
            let param = body_param(endpoint)?;

            Ok(match args.render(param)? {
                Some(text) => PreparedBody::Text(text),
                None => PreparedBody::Empty,
            })
        }
    }
}

fn body_param(endpoint: &Endpoint) -> Result<&Param, Error> {
    endpoint
        .params_at(Location::Body)
        .next()
        .ok_or_else(|| Error::invalid(endpoint.id, "endpoint takes no body"))
}

fn to_document<T: Serialize>(param: &Param, value: T) -> Result<Value, Error> {
    serde_json::to_value(value)
        .map_err(|e| Error::invalid(param.name, e.to_string()))
}

/// Object arguments become one form pair per key. Nested values are sent as
/// their JSON text.
fn flatten_object(
    object: &serde_json::Map<String, Value>,
) -> impl Iterator<Item = (String, String)> + '_ {
    object.iter().filter_map(|(key, value)| {
        let value = match value {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Some((key.clone(), value))
    })
}
