// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use vault_api_rs::LISTRESPONSE_URN;
use vault_api_rs::RESOURCETYPE_URN;
use vault_api_rs::SERVICEPROVIDERCONFIG_URN;
use vault_api_rs::USER_URN;
use vault_api_rs::VAULT_USER_URN;

use super::*;

/// The first bytes of an empty zip archive, served for log downloads
pub const LOG_ARCHIVE: &[u8] =
    &[0x50, 0x4b, 0x05, 0x06, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// The Vault error document for a failed request
pub fn vault_failure(error_type: &str, message: &str) -> Value {
    json!({
        "responseStatus": "FAILURE",
        "errors": [
            {
                "type": error_type,
                "message": message,
            }
        ],
    })
}

pub fn invalid_session() -> MockResponse {
    MockResponse::json(
        401,
        vault_failure("INVALID_SESSION_ID", "Invalid or expired session ID."),
    )
}

pub fn not_found() -> MockResponse {
    MockResponse::json(
        404,
        vault_failure(
            "MALFORMED_URL",
            "The specified resource cannot be found.",
        ),
    )
}

fn success(rest: Value) -> MockResponse {
    let mut body = json!({ "responseStatus": "SUCCESS" });
    if let (Some(body), Value::Object(rest)) = (body.as_object_mut(), rest) {
        body.extend(rest);
    }
    MockResponse::json(200, body)
}

fn user_resource_type() -> Value {
    json!({
        "schemas": [RESOURCETYPE_URN],
        "id": "User",
        "name": "User",
        "description": "User Account",
        "endpoint": "/Users",
        "schema": USER_URN,
        "schemaExtensions": [
            {
                "schema": VAULT_USER_URN,
                "required": true
            }
        ]
    })
}

fn user_schema() -> Value {
    json!({
        "id": USER_URN,
        "name": "User",
        "attributes": [
            {
                "name": "userName",
                "type": "string",
                "multiValued": false
            },
            {
                "name": "name",
                "type": "complex",
                "multiValued": false
            },
            {
                "name": "emails",
                "type": "complex",
                "multiValued": true
            },
            {
                "name": "active",
                "type": "boolean",
                "multiValued": false
            }
        ]
    })
}

fn current_user() -> Value {
    json!({
        "schemas": [USER_URN, VAULT_USER_URN],
        "id": "61579",
        "userName": "jdoe@veepharm.com",
        "name": {
            "familyName": "Doe",
            "givenName": "Jane"
        },
        "active": true,
        VAULT_USER_URN: {
            "securityProfile": { "value": "system_admin__v" }
        }
    })
}

/// Canned responses for the read-only parts of the API, as
/// `(method, path, response)`.
pub fn vault_fixtures(api_version: &str) -> Vec<(&'static str, String, MockResponse)> {
    let api = format!("/api/{api_version}");

    vec![
        (
            "GET",
            format!("{api}/objects/picklists"),
            success(json!({
                "picklists": [
                    {
                        "name": "color__c",
                        "label": "Color",
                        "kind": "user",
                        "usedIn": [
                            { "objectName": "product__v", "propertyName": "color__c" }
                        ]
                    },
                    {
                        "name": "region__c",
                        "label": "Region",
                        "kind": "user",
                        "usedIn": []
                    }
                ]
            })),
        ),
        (
            "GET",
            format!("{api}/objects/picklists/color__c"),
            success(json!({
                "picklistValues": [
                    { "name": "red__c", "label": "Red" },
                    { "name": "green__c", "label": "Green" }
                ]
            })),
        ),
        (
            "GET",
            format!("{api}/services/queues"),
            success(json!({
                "data": [
                    {
                        "name": "vault_to_vault__c",
                        "status": "active",
                        "type": "outbound",
                        "url": format!("{api}/services/queues/vault_to_vault__c")
                    }
                ]
            })),
        ),
        (
            "GET",
            format!("{api}/services/queues/vault_to_vault__c"),
            success(json!({
                "data": {
                    "name": "vault_to_vault__c",
                    "delivery": "enabled",
                    "messages_in_queue": 0
                }
            })),
        ),
        (
            "GET",
            format!("{api}/logs/code/debug"),
            success(json!({ "data": [] })),
        ),
        (
            "GET",
            format!("{api}/logs/code/debug/0LD000000000101/files"),
            MockResponse::binary("application/zip", LOG_ARCHIVE.to_vec()),
        ),
        (
            "DELETE",
            format!("{api}/objects/sandbox/snapshot/snapshot__c"),
            success(json!({})),
        ),
        (
            "GET",
            format!("{api}/scim/v2/ServiceProviderConfig"),
            MockResponse::scim(
                200,
                json!({
                    "schemas": [SERVICEPROVIDERCONFIG_URN],
                    "patch": { "supported": true },
                    "bulk": { "supported": false },
                    "filter": { "supported": true, "maxResults": 1000 },
                    "changePassword": { "supported": false },
                    "sort": { "supported": true },
                    "etag": { "supported": false },
                    "authenticationSchemes": [
                        {
                            "type": "oauthbearertoken",
                            "name": "OAuth Bearer Token",
                            "description": "Authentication scheme using a Vault session ID"
                        }
                    ]
                }),
            ),
        ),
        (
            "GET",
            format!("{api}/scim/v2/ResourceTypes"),
            MockResponse::scim(
                200,
                json!({
                    "schemas": [LISTRESPONSE_URN],
                    "totalResults": 1,
                    "startIndex": 1,
                    "itemsPerPage": 1,
                    "Resources": [user_resource_type()]
                }),
            ),
        ),
        (
            "GET",
            format!("{api}/scim/v2/ResourceTypes/User"),
            MockResponse::scim(200, user_resource_type()),
        ),
        (
            "GET",
            format!("{api}/scim/v2/Schemas"),
            MockResponse::scim(
                200,
                json!({
                    "schemas": [LISTRESPONSE_URN],
                    "totalResults": 1,
                    "startIndex": 1,
                    "itemsPerPage": 1,
                    "Resources": [user_schema()]
                }),
            ),
        ),
        (
            "GET",
            format!("{api}/scim/v2/Schemas/{USER_URN}"),
            MockResponse::scim(200, user_schema()),
        ),
        (
            "GET",
            format!("{api}/scim/v2/Me"),
            MockResponse::scim(200, current_user()),
        ),
    ]
}
