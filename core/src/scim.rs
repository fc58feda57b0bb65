// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Email {
    /// The email address
    pub value: String,

    /// The type of email, e.g. `work`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Name {
    #[serde(rename = "familyName")]
    pub family_name: String,

    #[serde(rename = "givenName")]
    pub given_name: String,
}

/// The user details a caller supplies to create a Vault user with SCIM.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct NewUser {
    /// The user name, usually an email address within a Vault domain
    #[serde(rename = "userName")]
    pub user_name: String,

    pub emails: Vec<Email>,

    pub name: Name,

    #[serde(rename = "preferredLanguage")]
    pub preferred_language: String,

    pub locale: String,

    pub timezone: String,

    /// Name of the Vault security profile, e.g. `system_admin__v`
    #[serde(rename = "securityProfile")]
    pub security_profile: String,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Reference {
    pub value: String,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct VaultUserExtension {
    #[serde(rename = "securityProfile")]
    pub security_profile: Reference,
}

/// The SCIM document posted to `/scim/v2/Users`
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct CreateUserRequest {
    pub schemas: Vec<String>,

    #[serde(rename = "userName")]
    pub user_name: String,

    pub emails: Vec<Email>,

    pub name: Name,

    #[serde(rename = "preferredLanguage")]
    pub preferred_language: String,

    pub locale: String,

    pub timezone: String,

    #[serde(rename = "urn:ietf:params:scim:schemas:extension:veevavault:2.0:User")]
    pub vault: VaultUserExtension,
}

impl From<NewUser> for CreateUserRequest {
    fn from(user: NewUser) -> Self {
        CreateUserRequest {
            schemas: vec![VAULT_USER_URN.to_string(), USER_URN.to_string()],
            user_name: user.user_name,
            emails: user.emails,
            name: user.name,
            preferred_language: user.preferred_language,
            locale: user.locale,
            timezone: user.timezone,
            vault: VaultUserExtension {
                security_profile: Reference { value: user.security_profile },
            },
        }
    }
}

/// The SCIM document that renames the current user
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct UpdateNameRequest {
    pub schemas: Vec<String>,

    pub name: Name,
}

impl From<Name> for UpdateNameRequest {
    fn from(name: Name) -> Self {
        UpdateNameRequest {
            schemas: vec![VAULT_USER_URN.to_string(), USER_URN.to_string()],
            name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    fn new_user() -> NewUser {
        serde_json::from_value(json!({
            "userName": "jdoe@veepharm.com",
            "emails": [{ "value": "jdoe@example.com", "type": "work" }],
            "name": { "familyName": "Doe", "givenName": "Jane" },
            "preferredLanguage": "en",
            "locale": "en_US",
            "timezone": "America/Los_Angeles",
            "securityProfile": "business_admin__v",
        }))
        .unwrap()
    }

    #[test]
    fn test_create_user_request_wire_form() {
        let request = CreateUserRequest::from(new_user());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "schemas": [VAULT_USER_URN, USER_URN],
                "userName": "jdoe@veepharm.com",
                "emails": [{ "value": "jdoe@example.com", "type": "work" }],
                "name": { "familyName": "Doe", "givenName": "Jane" },
                "preferredLanguage": "en",
                "locale": "en_US",
                "timezone": "America/Los_Angeles",
                VAULT_USER_URN: {
                    "securityProfile": { "value": "business_admin__v" },
                },
            }),
        );
    }

    #[test]
    fn test_new_user_requires_security_profile() {
        let result: Result<NewUser, _> = serde_json::from_value(json!({
            "userName": "jdoe@veepharm.com",
            "emails": [],
            "name": { "familyName": "Doe", "givenName": "Jane" },
            "preferredLanguage": "en",
            "locale": "en_US",
            "timezone": "America/Los_Angeles",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_name_request_wire_form() {
        let request = UpdateNameRequest::from(Name {
            family_name: "Doe".to_string(),
            given_name: "John".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "schemas": [VAULT_USER_URN, USER_URN],
                "name": { "familyName": "Doe", "givenName": "John" },
            }),
        );
    }
}
