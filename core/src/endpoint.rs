// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const SCIM_MEDIA_TYPE: &str = "application/scim+json";
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// The media type an endpoint negotiates with `Accept`. JSON documents sent
/// to the endpoint use the same type for `Content-Type`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Scim,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => JSON_MEDIA_TYPE,
            MediaType::Scim => SCIM_MEDIA_TYPE,
        }
    }
}

/// How the single body argument of a JSON endpoint becomes the document.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JsonBody {
    /// The argument is sent as is.
    Verbatim,

    /// The argument is a [`NewUser`], wrapped into a [`CreateUserRequest`].
    ScimCreateUser,

    /// The argument is a [`Name`], wrapped into an [`UpdateNameRequest`].
    ScimUpdateName,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyEncoding {
    None,

    /// `application/x-www-form-urlencoded` pairs built from every body param
    Form,

    /// `multipart/form-data` parts built from every body param
    Multipart,

    Json(JsonBody),

    /// The single body param as `text/plain`
    Text,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Json,

    /// Raw bytes, never parsed
    Binary,

    /// The endpoint answers with nothing worth keeping; report this literal.
    Confirmation(&'static str),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    StringList,
    Object,

    /// A local file path whose contents are uploaded
    File,
}

impl ParamKind {
    /// The JSON schema type name advertised in tool definitions.
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String | ParamKind::File => "string",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
            ParamKind::StringList => "array",
            ParamKind::Object => "object",
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Param {
    pub name: &'static str,
    pub location: Location,
    pub kind: ParamKind,
    pub required: bool,

    /// Sent in place of the argument when the caller leaves it out
    pub default: Option<&'static str>,

    /// When non-empty, the only accepted values
    pub allowed: &'static [&'static str],

    pub description: &'static str,

    /// Schema for structured object arguments
    pub schema: Option<fn() -> Value>,
}

impl Param {
    const fn new(
        name: &'static str,
        location: Location,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            location,
            kind: ParamKind::String,
            required: true,
            default: None,
            allowed: &[],
            description,
            schema: None,
        }
    }

    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Path, description)
    }

    /// Query params are optional unless marked otherwise.
    pub const fn query(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Query, description).optional()
    }

    pub const fn body(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Body, description)
    }

    pub const fn optional(self) -> Self {
        Self { required: false, ..self }
    }

    pub const fn of_kind(self, kind: ParamKind) -> Self {
        Self { kind, ..self }
    }

    pub const fn default_value(self, default: &'static str) -> Self {
        Self { default: Some(default), required: false, ..self }
    }

    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self { allowed, ..self }
    }

    pub const fn with_schema(self, schema: fn() -> Value) -> Self {
        Self { schema: Some(schema), ..self }
    }
}

/// One REST endpoint of the Vault API: everything needed to turn a set of
/// arguments into a request and to interpret the answer.
#[derive(Debug)]
pub struct Endpoint {
    /// Kebab-case identifier, e.g. `retrieve-picklist-values`
    pub id: &'static str,

    /// Snake-case function-calling name, e.g. `retrieve_picklist_values`
    pub tool_name: &'static str,

    pub description: &'static str,

    /// Gerund phrase naming the operation in failure messages
    pub action: &'static str,

    pub method: Method,

    /// Path template. `{version}` is the API version, every other
    /// placeholder names a path param.
    pub path: &'static str,

    pub accept: MediaType,
    pub body: BodyEncoding,
    pub response: ResponseKind,
    pub params: &'static [Param],
}

impl Endpoint {
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn params_at(
        &self,
        location: Location,
    ) -> impl Iterator<Item = &Param> + '_ {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Placeholder names in the path template, `version` included.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let path: &'static str = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
    }

    pub fn is_versioned(&self) -> bool {
        self.placeholders().any(|name| name == "version")
    }

    /// The `Content-Type` this endpoint declares itself. Multipart bodies
    /// get theirs (with the boundary) from the transport.
    pub fn content_type(&self) -> Option<&'static str> {
        match self.body {
            BodyEncoding::None | BodyEncoding::Multipart => None,
            BodyEncoding::Form => Some(FORM_MEDIA_TYPE),
            BodyEncoding::Json(_) => Some(self.accept.as_str()),
            BodyEncoding::Text => Some(TEXT_MEDIA_TYPE),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_placeholders() {
        let endpoint = find_endpoint("initiate-object-action-on-a-single-record")
            .unwrap();

        let placeholders: Vec<_> = endpoint.placeholders().collect();
        assert_eq!(
            placeholders,
            vec!["version", "object_name", "object_record_id", "action_name"]
        );
        assert!(endpoint.is_versioned());

        let endpoint = find_endpoint("upload-content-file").unwrap();
        assert_eq!(endpoint.placeholders().count(), 0);
        assert!(!endpoint.is_versioned());
    }

    #[test]
    fn test_param_builders() {
        const PARAM: Param = Param::query("count", "Page size.")
            .of_kind(ParamKind::Integer);
        assert!(!PARAM.required);
        assert_eq!(PARAM.location, Location::Query);
        assert_eq!(PARAM.kind.json_type(), "integer");

        const DEFAULTED: Param =
            Param::body("log_level", "Level.").default_value("all__sys");
        assert!(!DEFAULTED.required);
        assert_eq!(DEFAULTED.default, Some("all__sys"));
    }

    #[test]
    fn test_content_type() {
        let scim = find_endpoint("create-user-with-scim").unwrap();
        assert_eq!(scim.content_type(), Some(SCIM_MEDIA_TYPE));

        let form = find_endpoint("create-picklist-values").unwrap();
        assert_eq!(form.content_type(), Some(FORM_MEDIA_TYPE));

        let multipart = find_endpoint("create-debug-log").unwrap();
        assert_eq!(multipart.content_type(), None);

        let bodiless = find_endpoint("reset-debug-log").unwrap();
        assert_eq!(bodiless.content_type(), None);
    }
}
